#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # brewly-entities
//!
//! Reusable, agnostic domain entities for Brewly.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod cafe;
pub mod id;
pub mod rating;
pub mod review;
pub mod saved;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
