// Low-level access to the remote tables.
// Reviews are returned as raw rows joined with their café
// and only mapped into entities by the usecases.

use crate::{boundary::*, entities::*};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CafeRepo {
    fn create_cafe(&self, cafe: Cafe) -> Result<()>;
    fn get_cafe(&self, id: &str) -> Result<Cafe>;
    // Exact, case-sensitive match
    fn find_cafe_by_name(&self, name: &str) -> Result<Option<Cafe>>;
}

pub trait ReviewRepo {
    fn create_review(&self, review: NewReviewRow) -> Result<()>;
    fn load_review(&self, id: &str) -> Result<ReviewRow>;

    // Newest first. All reviews if no owner is given.
    fn load_reviews(&self, owner: Option<&str>) -> Result<Vec<ReviewRow>>;
    fn load_reviews_of_cafe(&self, cafe_id: &str) -> Result<Vec<ReviewRow>>;

    // Fails with `NotFound` if the review does not exist
    // or is not owned by the given user.
    fn update_review(&self, owner: &str, id: &str, patch: &ReviewPatch) -> Result<()>;
}

pub trait SavedCafeRepo {
    // Fails with `AlreadyExists` if the café has already been saved.
    fn create_saved_cafe(&self, owner: &str, cafe_id: &str, saved_at: Timestamp) -> Result<()>;
    // Returns `false` if nothing has been deleted.
    fn delete_saved_cafe(&self, owner: &str, cafe_id: &str) -> Result<bool>;
    // Most recently saved first
    fn load_saved_cafes(&self, owner: &str) -> Result<Vec<Cafe>>;
}
