use std::fmt;

/// Overall rating of a single review, from one to five stars.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

impl RatingValue {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    /// Accepts only values within [`RatingValue::min`] and [`RatingValue::max`].
    pub fn try_new(val: i64) -> Option<Self> {
        u8::try_from(val)
            .ok()
            .map(Self)
            .filter(|val| val.is_valid())
    }

    /// Forces arbitrary values into the valid range.
    pub fn clamped(val: i64) -> Self {
        let min = i64::from(Self::min().0);
        let max = i64::from(Self::max().0);
        Self(val.clamp(min, max) as u8)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl Default for RatingValue {
    fn default() -> Self {
        Self::min()
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl AvgRatingValue {
    pub const fn min() -> Self {
        Self(1.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    /// Rounded to the nearest whole star.
    pub fn rounded(self) -> RatingValue {
        RatingValue::clamped(self.0.round() as i64)
    }
}

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for AvgRatingValue {
    fn from(from: RatingValue) -> Self {
        f64::from(from).into()
    }
}

impl fmt::Display for AvgRatingValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingValueBuilder {
    acc: u64,
    cnt: usize,
}

impl AvgRatingValueBuilder {
    pub fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += u64::from(val.0);
        self.cnt += 1;
    }

    /// `None` if no rating has been added.
    pub fn build(self) -> Option<AvgRatingValue> {
        if self.cnt == 0 {
            return None;
        }
        Some(AvgRatingValue(self.acc as f64 / self.cnt as f64).clamp())
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingValueBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

impl FromIterator<RatingValue> for AvgRatingValueBuilder {
    fn from_iter<I: IntoIterator<Item = RatingValue>>(iter: I) -> Self {
        let mut builder = Self::default();
        for val in iter {
            builder += val;
        }
        builder
    }
}
