//! Business rules of Brewly: repositories, validation,
//! usecases and the client-side state of review feeds.

pub mod feed;
pub mod gateways;
pub mod repositories;
pub mod saved;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use brewly_entities::{cafe::*, id::*, rating::*, review::*, saved::*, time::*};
}

pub mod boundary {
    pub use brewly_boundary::*;
}
