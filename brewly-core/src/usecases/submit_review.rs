use super::{prelude::*, require_owner};
use crate::util::validate::*;

/// Raw input of the review form.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewReview {
    pub reviewer_name   : String,
    pub reviewer_email  : String,
    pub cafe_name       : String,
    pub address         : Option<String>,
    pub noise           : Option<String>,
    pub wifi            : Option<bool>,
    pub outlets         : Option<bool>,
    pub laptop_friendly : Option<bool>,
    pub rush_hours      : Option<String>,
    pub ambience        : Option<String>,
    pub overall         : Option<i64>,
    pub notes           : String,
    pub image_url       : Option<String>,
}

pub(super) fn parse_noise(inv: &mut Invalidations, noise: Option<&str>) -> Option<NoiseLevel> {
    let noise = noise.map(str::trim).filter(|n| !n.is_empty());
    let Some(noise) = noise else {
        inv.add(Field::Noise, "Please select noise level");
        return None;
    };
    let parsed = noise.parse().ok();
    if parsed.is_none() {
        inv.add(Field::Noise, "Noise level must be quiet, medium or loud");
    }
    parsed
}

pub(super) fn parse_ambience(inv: &mut Invalidations, ambience: Option<&str>) -> Option<Ambience> {
    let ambience = ambience.map(str::trim).filter(|a| !a.is_empty());
    let Some(ambience) = ambience else {
        inv.add(Field::Ambience, "Please select ambience");
        return None;
    };
    let parsed = ambience.parse().ok();
    if parsed.is_none() {
        inv.add(
            Field::Ambience,
            "Ambience must be cozy, bright, minimal or busy",
        );
    }
    parsed
}

pub(super) fn parse_overall(inv: &mut Invalidations, overall: Option<i64>) -> Option<RatingValue> {
    let Some(overall) = overall else {
        inv.add(Field::Overall, "Please provide a rating");
        return None;
    };
    let parsed = RatingValue::try_new(overall);
    if parsed.is_none() {
        inv.add(Field::Overall, "Rating must be between 1 and 5");
    }
    parsed
}

pub(super) fn parse_rush_hours(inv: &mut Invalidations, rush_hours: Option<&str>) -> RushHours {
    let rush_hours = rush_hours.unwrap_or_default();
    inv.check_len(Field::RushHours, rush_hours, MAX_RUSH_HOURS_LEN);
    RushHours::from_label(rush_hours)
}

#[derive(Debug)]
struct ValidNewReview {
    noise: NoiseLevel,
    wifi: bool,
    outlets: bool,
    rush_hours: RushHours,
    ambience: Ambience,
    overall: RatingValue,
}

impl NewReview {
    fn parse(&self) -> std::result::Result<ValidNewReview, Invalidations> {
        let mut inv = Invalidations::default();
        inv.check_required(
            Field::ReviewerName,
            &self.reviewer_name,
            MAX_REVIEWER_NAME_LEN,
            "Name is required",
        );
        let email = self.reviewer_email.trim();
        if email.is_empty() {
            inv.add(Field::ReviewerEmail, "Email is required");
        } else if !is_valid_email(email) {
            inv.add(Field::ReviewerEmail, "Please enter a valid email address");
        }
        inv.check_required(
            Field::CafeName,
            &self.cafe_name,
            MAX_CAFE_NAME_LEN,
            "Café name is required",
        );
        if let Some(address) = &self.address {
            inv.check_len(Field::Address, address, MAX_ADDRESS_LEN);
        }
        let noise = parse_noise(&mut inv, self.noise.as_deref());
        if self.wifi.is_none() {
            inv.add(Field::Wifi, "Please indicate Wi-Fi availability");
        }
        if self.outlets.is_none() {
            inv.add(Field::Outlets, "Please indicate outlet availability");
        }
        let rush_hours = parse_rush_hours(&mut inv, self.rush_hours.as_deref());
        let ambience = parse_ambience(&mut inv, self.ambience.as_deref());
        let overall = parse_overall(&mut inv, self.overall);
        inv.check_required(Field::Notes, &self.notes, MAX_NOTES_LEN, "Notes are required");
        match (noise, self.wifi, self.outlets, ambience, overall) {
            (Some(noise), Some(wifi), Some(outlets), Some(ambience), Some(overall))
                if inv.is_empty() =>
            {
                Ok(ValidNewReview {
                    noise,
                    wifi,
                    outlets,
                    rush_hours,
                    ambience,
                    overall,
                })
            }
            _ => Err(inv),
        }
    }
}

impl Validate for NewReview {
    type Error = Invalidations;
    fn validate(&self) -> std::result::Result<(), Self::Error> {
        self.parse().map(|_| ())
    }
}

#[derive(Debug)]
enum CafeSelection {
    Existing(Cafe),
    New(Cafe),
}

/// A validated review that is ready to be stored.
#[derive(Debug)]
pub struct Storable {
    cafe: CafeSelection,
    review: NewReviewRow,
}

impl Storable {
    pub fn review_id(&self) -> &str {
        &self.review.id
    }

    pub fn cafe_id(&self) -> &Id {
        match &self.cafe {
            CafeSelection::Existing(cafe) | CafeSelection::New(cafe) => &cafe.id,
        }
    }

    pub fn creates_cafe(&self) -> bool {
        matches!(self.cafe, CafeSelection::New(_))
    }
}

pub fn prepare_new_review<R>(
    repo: &R,
    owner: Option<&str>,
    new_review: NewReview,
) -> Result<Storable>
where
    R: CafeRepo,
{
    let owner = require_owner(owner)?;
    let ValidNewReview {
        noise,
        wifi,
        outlets,
        rush_hours,
        ambience,
        overall,
    } = new_review.parse()?;
    let NewReview {
        reviewer_name,
        reviewer_email,
        cafe_name,
        address,
        laptop_friendly,
        notes,
        image_url,
        ..
    } = new_review;

    let cafe_name = cafe_name.trim();
    let now = Timestamp::now();
    let cafe = match repo.find_cafe_by_name(cafe_name)? {
        Some(cafe) => CafeSelection::Existing(cafe),
        None => CafeSelection::New(Cafe {
            id: Id::new(),
            name: cafe_name.to_owned(),
            address: address
                .map(|a| a.trim().to_owned())
                .filter(|a| !a.is_empty()),
            created_at: now,
        }),
    };
    let cafe_id = match &cafe {
        CafeSelection::Existing(cafe) | CafeSelection::New(cafe) => cafe.id.to_string(),
    };
    let review = NewReviewRow {
        id: Id::new().into(),
        cafe_id,
        user_id: owner.to_owned(),
        reviewer_name: reviewer_name.trim().to_owned(),
        reviewer_email: reviewer_email.trim().to_owned(),
        noise_level: noise.to_string(),
        wifi,
        outlets: outlets_text(outlets).to_owned(),
        laptop_friendly: laptop_friendly.unwrap_or(true),
        rush_hours: rush_hours.label().to_owned(),
        ambience: ambience.to_string(),
        overall_rating: overall.stars().into(),
        notes: notes.trim().to_owned(),
        image_url: image_url
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty()),
        created_at: now.as_millis(),
    };
    Ok(Storable { cafe, review })
}

pub fn store_new_review<R>(repo: &R, storable: Storable) -> Result<Review>
where
    R: CafeRepo + ReviewRepo,
{
    let Storable { cafe, review } = storable;
    if let CafeSelection::New(cafe) = cafe {
        log::info!("Creating new café '{}' ({})", cafe.name, cafe.id);
        repo.create_cafe(cafe)?;
    }
    let id = review.id.clone();
    repo.create_review(review)?;
    let row = repo.load_review(&id)?;
    Ok(Review::from(row))
}

pub fn submit_review<R>(repo: &R, owner: Option<&str>, new_review: NewReview) -> Result<Review>
where
    R: CafeRepo + ReviewRepo,
{
    let storable = prepare_new_review(repo, owner, new_review)?;
    store_new_review(repo, storable)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    fn new_review(cafe_name: &str, address: &str) -> NewReview {
        NewReview {
            reviewer_name: "Jo".into(),
            reviewer_email: "jo@example.com".into(),
            cafe_name: cafe_name.into(),
            address: Some(address.into()),
            noise: Some("quiet".into()),
            wifi: Some(true),
            outlets: Some(true),
            laptop_friendly: None,
            rush_hours: Some("Morning".into()),
            ambience: Some("cozy".into()),
            overall: Some(5),
            notes: "Flat white on point".into(),
            image_url: None,
        }
    }

    fn invalid_fields(new_review: NewReview) -> Invalidations {
        match new_review.validate() {
            Err(inv) => inv,
            Ok(()) => panic!("expected invalid input"),
        }
    }

    #[test]
    fn reject_ratings_out_of_range() {
        for overall in [0, 6, -1, 100] {
            let inv = invalid_fields(NewReview {
                overall: Some(overall),
                ..new_review("Kaffeine Fitzrovia", "Foley St")
            });
            assert_eq!(
                Some("Rating must be between 1 and 5"),
                inv.message(Field::Overall)
            );
            assert_eq!(1, inv.iter().count());
        }
        for overall in 1..=5 {
            let input = NewReview {
                overall: Some(overall),
                ..new_review("Kaffeine Fitzrovia", "Foley St")
            };
            assert!(input.validate().is_ok());
        }
    }

    #[test]
    fn reject_out_of_range_rating_before_touching_the_repo() {
        let db = MockDb::default();
        let input = NewReview {
            overall: Some(0),
            ..new_review("Kaffeine Fitzrovia", "Foley St")
        };
        let err = submit_review(&db, Some(OWNER), input).unwrap_err();
        match err {
            Error::Validation(inv) => assert!(inv.contains(Field::Overall)),
            err => panic!("unexpected error: {err}"),
        }
        assert!(db.cafes.borrow().is_empty());
        assert!(db.reviews.borrow().is_empty());
    }

    #[test]
    fn report_all_missing_fields() {
        let inv = invalid_fields(NewReview::default());
        assert_eq!(Some("Name is required"), inv.message(Field::ReviewerName));
        assert_eq!(Some("Email is required"), inv.message(Field::ReviewerEmail));
        assert_eq!(Some("Café name is required"), inv.message(Field::CafeName));
        assert_eq!(Some("Please select noise level"), inv.message(Field::Noise));
        assert_eq!(
            Some("Please indicate Wi-Fi availability"),
            inv.message(Field::Wifi)
        );
        assert_eq!(
            Some("Please indicate outlet availability"),
            inv.message(Field::Outlets)
        );
        assert_eq!(Some("Please select ambience"), inv.message(Field::Ambience));
        assert_eq!(Some("Please provide a rating"), inv.message(Field::Overall));
        assert_eq!(Some("Notes are required"), inv.message(Field::Notes));
        assert!(!inv.contains(Field::Address));
        assert!(!inv.contains(Field::RushHours));
    }

    #[test]
    fn reject_invalid_values() {
        let inv = invalid_fields(NewReview {
            reviewer_email: "jo@".into(),
            noise: Some("deafening".into()),
            ambience: Some("gloomy".into()),
            notes: "   ".into(),
            cafe_name: "x".repeat(MAX_CAFE_NAME_LEN + 1),
            ..new_review("", "")
        });
        assert_eq!(
            Some("Please enter a valid email address"),
            inv.message(Field::ReviewerEmail)
        );
        assert!(inv.contains(Field::Noise));
        assert!(inv.contains(Field::Ambience));
        assert!(inv.contains(Field::Notes));
        assert!(inv.contains(Field::CafeName));
    }

    #[test]
    fn require_owner_for_submission() {
        let db = MockDb::default();
        let input = new_review("Kaffeine Fitzrovia", "Foley St");
        assert!(matches!(
            submit_review(&db, None, input.clone()),
            Err(Error::Unauthorized)
        ));
        assert!(matches!(
            submit_review(&db, Some(" "), input),
            Err(Error::Unauthorized)
        ));
    }

    #[test]
    fn submit_review_for_unseen_cafe() {
        let db = MockDb::default();
        let review = submit_review(
            &db,
            Some(OWNER),
            new_review("Kaffeine Fitzrovia", "Foley St"),
        )
        .unwrap();
        assert_eq!(1, db.cafes.borrow().len());
        assert_eq!(1, db.reviews.borrow().len());
        let cafe = db.cafes.borrow()[0].clone();
        assert_eq!("Kaffeine Fitzrovia", cafe.name);
        assert_eq!(Some("Foley St".to_owned()), cafe.address);
        assert_eq!(Some(&cafe.id), review.cafe_id.as_ref());
        assert_eq!(cafe.id.as_str(), db.reviews.borrow()[0].cafe_id);
        assert_eq!(OWNER, db.reviews.borrow()[0].user_id);

        assert_eq!("Kaffeine Fitzrovia", review.cafe_name);
        assert_eq!("Foley St", review.address);
        assert_eq!(NoiseLevel::Quiet, review.noise);
        assert_eq!(RushHours::Morning, review.rush_hours);
        assert!(review.outlets);
        assert!(review.laptop_friendly);
        assert_eq!(5, review.overall.stars());
    }

    #[test]
    fn reuse_cafe_with_the_same_name() {
        let db = MockDb::default();
        let first = submit_review(
            &db,
            Some(OWNER),
            new_review("Kaffeine Fitzrovia", "Foley St"),
        )
        .unwrap();
        let second = submit_review(
            &db,
            Some("someone-else"),
            new_review(" Kaffeine Fitzrovia ", "15 Eastcastle St"),
        )
        .unwrap();
        assert_eq!(1, db.cafes.borrow().len());
        assert_eq!(2, db.reviews.borrow().len());
        assert_eq!(first.cafe_id, second.cafe_id);
        // The existing café is not modified
        assert_eq!("Foley St", second.address);
    }

    #[test]
    fn cafe_names_are_matched_exactly() {
        let db = MockDb::default();
        submit_review(&db, Some(OWNER), new_review("Blue Bottle", "")).unwrap();
        submit_review(&db, Some(OWNER), new_review("blue bottle", "")).unwrap();
        assert_eq!(2, db.cafes.borrow().len());
        assert_eq!(None, db.cafes.borrow()[0].address);
    }

    #[test]
    fn prepare_without_writing() {
        let db = MockDb::default();
        let storable = prepare_new_review(
            &db,
            Some(OWNER),
            new_review("Kaffeine Fitzrovia", "Foley St"),
        )
        .unwrap();
        assert!(storable.creates_cafe());
        assert!(!storable.review_id().is_empty());
        assert!(db.cafes.borrow().is_empty());
        assert!(db.reviews.borrow().is_empty());
    }
}
