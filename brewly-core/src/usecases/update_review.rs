use super::{
    prelude::*,
    require_owner,
    submit_review::{parse_ambience, parse_noise, parse_overall, parse_rush_hours},
};
use crate::util::validate::*;

/// Changes of the mutable review fields. `None` means unchanged.
#[derive(Debug, Clone, Default)]
pub struct ReviewUpdate {
    pub noise: Option<String>,
    pub wifi: Option<bool>,
    pub outlets: Option<bool>,
    pub rush_hours: Option<String>,
    pub ambience: Option<String>,
    pub overall: Option<i64>,
    pub notes: Option<String>,
}

impl ReviewUpdate {
    fn parse(&self) -> std::result::Result<ReviewPatch, Invalidations> {
        let mut inv = Invalidations::default();
        let noise_level = self
            .noise
            .as_deref()
            .and_then(|noise| parse_noise(&mut inv, Some(noise)))
            .map(|noise| noise.to_string());
        let ambience = self
            .ambience
            .as_deref()
            .and_then(|ambience| parse_ambience(&mut inv, Some(ambience)))
            .map(|ambience| ambience.to_string());
        let overall_rating = self
            .overall
            .and_then(|overall| parse_overall(&mut inv, Some(overall)))
            .map(|overall| overall.stars().into());
        let rush_hours = self
            .rush_hours
            .as_deref()
            .map(|rush_hours| parse_rush_hours(&mut inv, Some(rush_hours)))
            .map(|rush_hours| rush_hours.label().to_owned());
        let notes = self.notes.as_deref().map(|notes| {
            inv.check_len(Field::Notes, notes, MAX_NOTES_LEN);
            notes.trim().to_owned()
        });
        inv.into_result()?;
        Ok(ReviewPatch {
            noise_level,
            wifi: self.wifi,
            outlets: self.outlets.map(|o| outlets_text(o).to_owned()),
            rush_hours,
            ambience,
            overall_rating,
            notes,
        })
    }
}

impl Validate for ReviewUpdate {
    type Error = Invalidations;
    fn validate(&self) -> std::result::Result<(), Self::Error> {
        self.parse().map(|_| ())
    }
}

/// Only the owner of a review is allowed to update it.
pub fn update_review<R>(repo: &R, owner: Option<&str>, id: &str, update: ReviewUpdate) -> Result<()>
where
    R: ReviewRepo,
{
    let owner = require_owner(owner)?;
    let patch = update.parse()?;
    if patch.is_empty() {
        log::debug!("Nothing to update for review {id}");
        return Ok(());
    }
    repo.update_review(owner, id, &patch).map_err(|err| match err {
        RepoError::NotFound => Error::ReviewNotFound,
        err => err.into(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn update_own_review() {
        let db = MockDb::default();
        let review = db.insert_review(OWNER, "Blue Bottle", 3, 1_000);
        let update = ReviewUpdate {
            noise: Some("loud".into()),
            outlets: Some(false),
            overall: Some(2),
            notes: Some(" Too busy now ".into()),
            ..Default::default()
        };
        update_review(&db, Some(OWNER), review.as_str(), update).unwrap();
        let row = &db.reviews.borrow()[0];
        assert_eq!("loud", row.noise_level);
        assert_eq!("no", row.outlets);
        assert_eq!(2, row.overall_rating);
        assert_eq!("Too busy now", row.notes);
        // Unchanged
        assert!(row.wifi);
        assert_eq!("cozy", row.ambience);
    }

    #[test]
    fn reject_updates_of_foreign_reviews() {
        let db = MockDb::default();
        let review = db.insert_review(OWNER, "Blue Bottle", 3, 1_000);
        let update = ReviewUpdate {
            overall: Some(1),
            ..Default::default()
        };
        let err = update_review(&db, Some("intruder"), review.as_str(), update).unwrap_err();
        assert!(matches!(err, Error::ReviewNotFound));
        assert_eq!(3, db.reviews.borrow()[0].overall_rating);
    }

    #[test]
    fn reject_invalid_update() {
        let db = MockDb::default();
        let review = db.insert_review(OWNER, "Blue Bottle", 3, 1_000);
        let update = ReviewUpdate {
            overall: Some(6),
            ambience: Some("gloomy".into()),
            ..Default::default()
        };
        match update_review(&db, Some(OWNER), review.as_str(), update).unwrap_err() {
            Error::Validation(inv) => {
                assert!(inv.contains(Field::Overall));
                assert!(inv.contains(Field::Ambience));
                assert!(!inv.contains(Field::Noise));
            }
            err => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let db = MockDb::default();
        assert!(update_review(&db, Some(OWNER), "missing", ReviewUpdate::default()).is_ok());
        assert!(matches!(
            update_review(&db, None, "missing", ReviewUpdate::default()),
            Err(Error::Unauthorized)
        ));
    }

    #[test]
    fn blank_rush_hours_become_random() {
        let patch = ReviewUpdate {
            rush_hours: Some(String::new()),
            ..Default::default()
        }
        .parse()
        .unwrap();
        assert_eq!(Some("Random".to_owned()), patch.rush_hours);
    }
}
