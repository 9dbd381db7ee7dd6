use std::fmt;

use brewly_core::{repositories::Error as RepoError, usecases, util::validate::Invalidations};
use thiserror::Error;

/// Operations that talk to the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    OpenDatabase,
    FetchReviews,
    FetchMyReviews,
    GetReview,
    SubmitReview,
    UpdateReview,
    FetchSavedCafes,
    ToggleSavedCafe,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenDatabase => "open_database",
            Self::FetchReviews => "fetch_reviews",
            Self::FetchMyReviews => "fetch_my_reviews",
            Self::GetReview => "get_review",
            Self::SubmitReview => "submit_review",
            Self::UpdateReview => "update_review",
            Self::FetchSavedCafes => "fetch_saved_cafes",
            Self::ToggleSavedCafe => "toggle_saved_cafe",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Field checks failed before anything was sent.
    #[error("Invalid input: {0}")]
    ValidationFailed(Invalidations),
    #[error("Operation {operation} failed")]
    RemoteOperationFailed {
        operation: Operation,
        #[source]
        cause: usecases::Error,
    },
}

impl AppError {
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::ValidationFailed(_) => None,
            Self::RemoteOperationFailed { operation, .. } => Some(*operation),
        }
    }

    fn remote(operation: Operation, cause: usecases::Error) -> Self {
        log::error!("Operation {operation} failed: {cause}");
        Self::RemoteOperationFailed { operation, cause }
    }
}

impl From<Invalidations> for AppError {
    fn from(from: Invalidations) -> Self {
        Self::ValidationFailed(from)
    }
}

/// Attach the attempted operation to errors of lower layers.
pub(crate) trait OperationContext<T> {
    fn during(self, operation: Operation) -> Result<T, AppError>;
}

impl<T> OperationContext<T> for Result<T, usecases::Error> {
    fn during(self, operation: Operation) -> Result<T, AppError> {
        self.map_err(|err| match err {
            usecases::Error::Validation(inv) => AppError::ValidationFailed(inv),
            err => AppError::remote(operation, err),
        })
    }
}

// Failures to acquire a database connection
impl<T> OperationContext<T> for anyhow::Result<T> {
    fn during(self, operation: Operation) -> Result<T, AppError> {
        self.map_err(|err| AppError::remote(operation, RepoError::Other(err).into()))
    }
}
