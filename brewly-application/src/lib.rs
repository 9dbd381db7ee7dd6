#[macro_use]
extern crate log;

mod fetch_reviews;
mod open_database;
mod saved_cafes;
mod submit_review;
mod update_review;

pub mod prelude {
    pub use super::{
        fetch_reviews::*, open_database::*, saved_cafes::*, submit_review::*, update_review::*,
    };
}

pub mod error;

pub use error::Operation;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use brewly_core::{entities::*, usecases, util::validate::Validate};
pub(crate) use error::OperationContext;

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use brewly_db_sqlite::Connections;
}
