use super::{prelude::*, require_owner};
use crate::util::sort;

fn into_reviews(rows: Vec<ReviewRow>) -> Vec<Review> {
    let mut reviews: Vec<_> = rows.into_iter().map(Review::from).collect();
    sort::newest_first(&mut reviews);
    reviews
}

/// All reviews, newest first.
pub fn fetch_reviews<R>(repo: &R) -> Result<Vec<Review>>
where
    R: ReviewRepo,
{
    let rows = repo.load_reviews(None)?;
    Ok(into_reviews(rows))
}

/// Reviews written by the given owner, newest first.
pub fn fetch_my_reviews<R>(repo: &R, owner: Option<&str>) -> Result<Vec<Review>>
where
    R: ReviewRepo,
{
    let owner = require_owner(owner)?;
    let rows = repo.load_reviews(Some(owner))?;
    Ok(into_reviews(rows))
}

pub fn get_review<R>(repo: &R, id: &str) -> Result<Review>
where
    R: ReviewRepo,
{
    let row = repo.load_review(id).map_err(|err| match err {
        RepoError::NotFound => Error::ReviewNotFound,
        err => err.into(),
    })?;
    Ok(Review::from(row))
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn fetch_newest_first() {
        let db = MockDb::default();
        db.insert_review(OWNER, "Blue Bottle", 4, 2_000);
        db.insert_review(OWNER, "Kaffeine Fitzrovia", 5, 3_000);
        db.insert_review("other", "Monmouth", 3, 1_000);
        db.insert_review("other", "Prufrock", 3, 3_000);
        let reviews = fetch_reviews(&db).unwrap();
        assert_eq!(4, reviews.len());
        for pair in reviews.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
        let names: Vec<_> = reviews.iter().map(|r| r.cafe_name.as_str()).collect();
        assert_eq!(
            vec!["Kaffeine Fitzrovia", "Prufrock", "Blue Bottle", "Monmouth"],
            names
        );
    }

    #[test]
    fn fetch_own_reviews() {
        let db = MockDb::default();
        db.insert_review(OWNER, "Blue Bottle", 4, 1_000);
        db.insert_review("other", "Monmouth", 3, 2_000);
        db.insert_review(OWNER, "Kaffeine Fitzrovia", 5, 3_000);
        let reviews = fetch_my_reviews(&db, Some(OWNER)).unwrap();
        let names: Vec<_> = reviews.iter().map(|r| r.cafe_name.as_str()).collect();
        assert_eq!(vec!["Kaffeine Fitzrovia", "Blue Bottle"], names);
        assert!(matches!(
            fetch_my_reviews(&db, None),
            Err(Error::Unauthorized)
        ));
    }

    #[test]
    fn map_reviews_of_deleted_cafes() {
        let db = MockDb::default();
        let id = db.insert_review(OWNER, "Blue Bottle", 4, 1_000);
        db.cafes.borrow_mut().clear();
        let reviews = fetch_reviews(&db).unwrap();
        assert_eq!(1, reviews.len());
        assert_eq!(UNKNOWN_CAFE_NAME, reviews[0].cafe_name);
        assert_eq!(ADDRESS_NOT_PROVIDED, reviews[0].address);
        assert_eq!(id, reviews[0].id);
    }

    #[test]
    fn get_single_review() {
        let db = MockDb::default();
        let id = db.insert_review(OWNER, "Blue Bottle", 4, 1_000);
        assert_eq!("Blue Bottle", get_review(&db, id.as_str()).unwrap().cafe_name);
        assert!(matches!(
            get_review(&db, "missing"),
            Err(Error::ReviewNotFound)
        ));
    }
}
