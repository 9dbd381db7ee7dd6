use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use brewly_core::{
    boundary::*,
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod cafe;
mod review;
mod saved;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn read_only_access() -> repo::Error {
    repo::Error::Other(anyhow!("Write access through a read-only connection"))
}
