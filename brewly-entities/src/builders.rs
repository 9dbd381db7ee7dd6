pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::review_builder::*;

pub mod review_builder {

    use super::*;
    use crate::{cafe::*, id::*, rating::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn cafe_id(mut self, cafe_id: Option<&str>) -> Self {
            self.review.cafe_id = cafe_id.map(Into::into);
            self
        }
        pub fn cafe_name(mut self, name: &str) -> Self {
            self.review.cafe_name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.review.address = address.into();
            self
        }
        pub fn noise(mut self, noise: NoiseLevel) -> Self {
            self.review.noise = noise;
            self
        }
        pub fn ambience(mut self, ambience: Ambience) -> Self {
            self.review.ambience = ambience;
            self
        }
        pub fn overall(mut self, stars: i64) -> Self {
            self.review.overall = RatingValue::clamped(stars);
            self
        }
        pub fn notes(mut self, notes: &str) -> Self {
            self.review.notes = notes.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.review.created_at = created_at;
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> ReviewBuild {
            ReviewBuild {
                review: Review {
                    id: Id::new(),
                    cafe_id: None,
                    cafe_name: UNKNOWN_CAFE_NAME.into(),
                    address: ADDRESS_NOT_PROVIDED.into(),
                    noise: NoiseLevel::default(),
                    wifi: false,
                    outlets: false,
                    laptop_friendly: true,
                    rush_hours: RushHours::default(),
                    ambience: Ambience::default(),
                    overall: RatingValue::default(),
                    notes: String::new(),
                    image_url: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
