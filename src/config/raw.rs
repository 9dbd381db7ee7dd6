use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = include_str!("brewly.default.toml");

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub storage: Option<Storage>,
    pub user: Option<User>,
}

impl Config {
    pub fn try_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }

    /// Fill in all sections that are missing with those of `defaults`.
    pub fn or(self, defaults: Self) -> Self {
        let Self { db, storage, user } = self;
        Self {
            db: db.or(defaults.db),
            storage: storage.or(defaults.storage),
            user: user.or(defaults.user),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Storage {
    pub dir: PathBuf,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct User {
    pub id: Option<String>,
}
