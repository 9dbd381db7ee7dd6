use std::fmt;

use strum::{AsRefStr, EnumIter, EnumString};

use crate::{id::*, rating::*, time::*};

pub const UNKNOWN_CAFE_NAME: &str = "Unknown Café";

pub const NOTES_PREVIEW_LEN: usize = 120;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NoiseLevel {
    Quiet,
    #[default]
    Medium,
    Loud,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Ambience {
    #[default]
    Cozy,
    Bright,
    Minimal,
    Busy,
}

impl fmt::Display for NoiseLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl fmt::Display for Ambience {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// When a café is usually crowded.
///
/// Either one of the well-known presets or a free text label.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum RushHours {
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
    Night,
    #[default]
    Random,
    Custom(String),
}

impl RushHours {
    pub const PRESETS: [RushHours; 6] = [
        Self::EarlyMorning,
        Self::Morning,
        Self::Afternoon,
        Self::Evening,
        Self::Night,
        Self::Random,
    ];

    /// Never fails: blank labels fall back to [`RushHours::Random`]
    /// and unknown labels are kept verbatim.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() {
            return Self::Random;
        }
        Self::PRESETS
            .into_iter()
            .find(|preset| preset.label().eq_ignore_ascii_case(label))
            .unwrap_or_else(|| Self::Custom(label.to_owned()))
    }

    pub fn label(&self) -> &str {
        match self {
            Self::EarlyMorning => "Early morning",
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
            Self::Random => "Random",
            Self::Custom(label) => label,
        }
    }

    pub fn is_preset(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for RushHours {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single user's assessment of one café.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id              : Id,
    pub cafe_id         : Option<Id>,
    pub cafe_name       : String,
    pub address         : String,
    pub noise           : NoiseLevel,
    pub wifi            : bool,
    pub outlets         : bool,
    pub laptop_friendly : bool,
    pub rush_hours      : RushHours,
    pub ambience        : Ambience,
    pub overall         : RatingValue,
    pub notes           : String,
    pub image_url       : Option<String>,
    pub created_at      : Timestamp,
}

impl Review {
    /// The notes cut off after [`NOTES_PREVIEW_LEN`] characters.
    pub fn notes_preview(&self) -> Option<String> {
        if self.notes.chars().count() <= NOTES_PREVIEW_LEN {
            return None;
        }
        let mut preview: String = self.notes.chars().take(NOTES_PREVIEW_LEN).collect();
        preview.push_str("...");
        Some(preview)
    }
}
