mod error;
mod fetch_reviews;
mod saved_cafes;
mod submit_review;
mod update_review;

#[cfg(test)]
pub mod tests;

pub use self::{
    error::Error, fetch_reviews::*, saved_cafes::*, submit_review::*, update_review::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        boundary::*,
        entities::*,
        repositories::{Error as RepoError, *},
    };
}

/// Writes need an authenticated owner.
fn require_owner(owner: Option<&str>) -> Result<&str, Error> {
    owner
        .map(str::trim)
        .filter(|owner| !owner.is_empty())
        .ok_or(Error::Unauthorized)
}
