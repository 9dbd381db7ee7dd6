//! # brewly-boundary
//!
//! Raw rows as they are stored in the remote tables and records
//! as they are kept in local storage. All fields that the store
//! does not guarantee are optional; the conversions into entities
//! substitute defaults instead of failing.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::outlets_text;

/// Textual representation of outlet availability in review rows.
pub const OUTLETS_YES: &str = "yes";
pub const OUTLETS_NO: &str = "no";

/// The related café of a review row, if the join succeeded.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CafeRef {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// A review row joined with its café.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ReviewRow {
    pub id              : String,
    pub cafe_id         : Option<String>,
    pub user_id         : Option<String>,
    pub noise_level     : Option<String>,
    pub wifi            : Option<bool>,
    pub outlets         : Option<String>,
    pub laptop_friendly : Option<bool>,
    pub rush_hours      : Option<String>,
    pub ambience        : Option<String>,
    pub overall_rating  : i64,
    pub notes           : Option<String>,
    pub image_url       : Option<String>,
    pub created_at      : i64,
    #[serde(default, alias = "Cafes Table")]
    pub cafe            : Option<CafeRef>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewReviewRow {
    pub id              : String,
    pub cafe_id         : String,
    pub user_id         : String,
    pub reviewer_name   : String,
    pub reviewer_email  : String,
    pub noise_level     : String,
    pub wifi            : bool,
    pub outlets         : String,
    pub laptop_friendly : bool,
    pub rush_hours      : String,
    pub ambience        : String,
    pub overall_rating  : i64,
    pub notes           : String,
    pub image_url       : Option<String>,
    pub created_at      : i64,
}

/// Partial update of the mutable columns of a review row.
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ReviewPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlets: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rush_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_rating: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ReviewPatch {
    pub fn is_empty(&self) -> bool {
        let Self {
            noise_level,
            wifi,
            outlets,
            rush_hours,
            ambience,
            overall_rating,
            notes,
        } = self;
        noise_level.is_none()
            && wifi.is_none()
            && outlets.is_none()
            && rush_hours.is_none()
            && ambience.is_none()
            && overall_rating.is_none()
            && notes.is_none()
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CafeRow {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub created_at: i64,
}

/// A saved café as kept in local storage.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SavedCafeRecord {
    pub id: String,
    pub cafe_name: String,
    #[serde(default)]
    pub address: String,
    pub overall: f64,
    #[serde(default)]
    pub notes: String,
}
