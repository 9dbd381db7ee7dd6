use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "brewly.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_USER: &str = "BREWLY_USER";

pub struct Config {
    pub db: Db,
    pub storage: Storage,
    pub user: User,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. Load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::default()
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config.or(raw::Config::try_default()?))?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        if let Ok(user_id) = env::var(ENV_NAME_USER) {
            cfg.user.id = Some(user_id);
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct Storage {
    /// File system directory of the local storage.
    pub dir: PathBuf,
}

pub struct User {
    pub id: Option<String>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, storage, user } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.ok_or_else(|| anyhow!("Missing database configuration"))?;
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::Storage { dir } = storage.ok_or_else(|| anyhow!("Missing storage configuration"))?;
        let storage = Storage { dir };

        let raw::User { id } = user.unwrap_or_default();
        let user = User {
            id: id.map(|id| id.trim().to_owned()).filter(|id| !id.is_empty()),
        };

        Ok(Self { db, storage, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file = Some(Path::new("does-not-exist.toml"));
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn ignore_blank_user_id() {
        let raw_config: raw::Config = toml::from_str(
            r#"
[db]
connection-sqlite = ":memory:"
connection-pool-size = 1

[storage]
dir = "/tmp/brewly"

[user]
id = "  "
"#,
        )
        .unwrap();
        let cfg = Config::try_from(raw_config).unwrap();
        assert!(cfg.user.id.is_none());
        assert_eq!(":memory:", cfg.db.conn_sqlite);
        assert_eq!(Path::new("/tmp/brewly"), cfg.storage.dir);
    }

    #[test]
    fn reject_empty_connection_pool() {
        let raw_config: raw::Config = toml::from_str(
            r#"
[db]
connection-sqlite = ":memory:"
connection-pool-size = 0

[storage]
dir = "/tmp/brewly"
"#,
        )
        .unwrap();
        assert!(Config::try_from(raw_config).is_err());
    }
}
