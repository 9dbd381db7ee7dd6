use crate::{repositories, util::validate::Invalidations};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Validation(Invalidations),
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("The café does not exist")]
    CafeNotFound,
    #[error("The review does not exist")]
    ReviewNotFound,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<Invalidations> for Error {
    fn from(from: Invalidations) -> Self {
        Self::Validation(from)
    }
}
