use crate::{id::*, time::*};

pub const ADDRESS_NOT_PROVIDED: &str = "Address not provided";

/// The physical venue that reviews refer to.
///
/// Cafés are identified by their exact name. The address is
/// optional and only used for display and map links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cafe {
    pub id: Id,
    pub name: String,
    pub address: Option<String>,
    pub created_at: Timestamp,
}

impl Cafe {
    pub fn display_address(&self) -> &str {
        self.address
            .as_deref()
            .map(str::trim)
            .filter(|addr| !addr.is_empty())
            .unwrap_or(ADDRESS_NOT_PROVIDED)
    }
}
