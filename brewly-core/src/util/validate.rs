use std::fmt;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub const MAX_REVIEWER_NAME_LEN: usize = 100;
pub const MAX_CAFE_NAME_LEN: usize = 100;
pub const MAX_ADDRESS_LEN: usize = 200;
pub const MAX_RUSH_HOURS_LEN: usize = 50;
pub const MAX_NOTES_LEN: usize = 1_000;

/// Input fields of the review form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ReviewerName,
    ReviewerEmail,
    CafeName,
    Address,
    Noise,
    Wifi,
    Outlets,
    RushHours,
    Ambience,
    Overall,
    Notes,
}

impl Field {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReviewerName => "reviewer_name",
            Self::ReviewerEmail => "reviewer_email",
            Self::CafeName => "cafe_name",
            Self::Address => "address",
            Self::Noise => "noise",
            Self::Wifi => "wifi",
            Self::Outlets => "outlets",
            Self::RushHours => "rush_hours",
            Self::Ambience => "ambience",
            Self::Overall => "overall",
            Self::Notes => "notes",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invalidation {
    pub field: Field,
    pub message: String,
}

/// All invalid fields of a single input, each with its own message.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Invalidations(Vec<Invalidation>);

impl Invalidations {
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        debug_assert!(!self.contains(field));
        self.0.push(Invalidation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.iter().any(|i| i.field == field)
    }

    pub fn message(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|i| i.field == field)
            .map(|i| i.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Invalidation> {
        self.0.iter()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Require a non-blank value that does not exceed `max_len` characters.
    pub fn check_required(&mut self, field: Field, value: &str, max_len: usize, missing: &str) {
        if value.trim().is_empty() {
            self.add(field, missing);
        } else {
            self.check_len(field, value, max_len);
        }
    }

    pub fn check_len(&mut self, field: Field, value: &str, max_len: usize) {
        if value.trim().chars().count() > max_len {
            self.add(field, format!("Must be at most {max_len} characters"));
        }
    }
}

impl fmt::Display for Invalidations {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, Invalidation { field, message }) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Invalidations {}
