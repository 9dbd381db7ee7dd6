use std::fmt;

use crate::{id::*, rating::*, review::*};

/// Lightweight bookmark of a café the user wants to revisit.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct SavedCafe {
    pub id        : Id,
    pub cafe_name : String,
    pub address   : String,
    pub overall   : AvgRatingValue,
    pub notes     : String,
}

impl From<&Review> for SavedCafe {
    fn from(from: &Review) -> Self {
        let Review {
            id,
            cafe_name,
            address,
            overall,
            notes,
            ..
        } = from;
        Self {
            id: id.clone(),
            cafe_name: cafe_name.clone(),
            address: address.clone(),
            overall: (*overall).into(),
            notes: notes.clone(),
        }
    }
}

/// Outcome of toggling a bookmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

impl Toggled {
    pub const fn is_saved(self) -> bool {
        matches!(self, Self::Added)
    }
}

impl fmt::Display for Toggled {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Added => f.write_str("Saved"),
            Self::Removed => f.write_str("Removed from saved"),
        }
    }
}
