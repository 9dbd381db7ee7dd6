use std::fmt;

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// Point in time with millisecond precision.
///
/// Stored and transported as unix milliseconds, which keeps
/// ordering cheap and makes the value trivially serializable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs * 1_000)
    }

    pub const fn as_secs(self) -> i64 {
        self.0.div_euclid(1_000)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        let nanos = from.unix_timestamp_nanos();
        Self((nanos / 1_000_000) as i64)
    }
}

impl TryFrom<Timestamp> for OffsetDateTime {
    type Error = time::error::ComponentRange;

    fn try_from(from: Timestamp) -> Result<Self, Self::Error> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match OffsetDateTime::try_from(*self)
            .ok()
            .and_then(|dt| dt.format(&Rfc3339).ok())
        {
            Some(formatted) => f.write_str(&formatted),
            None => write!(f, "{}ms", self.0),
        }
    }
}
