//! Implementations of the gateways that `brewly-core` depends on.

pub mod json_file_storage;
pub mod maps;
