use super::prelude::*;
use std::cell::RefCell;

type RepoResult<T> = std::result::Result<T, RepoError>;

pub const OWNER: &str = "owner-1";

#[derive(Default)]
pub struct MockDb {
    pub cafes: RefCell<Vec<Cafe>>,
    pub reviews: RefCell<Vec<NewReviewRow>>,
    // (owner, café id, saved at)
    pub saved: RefCell<Vec<(String, String, Timestamp)>>,
}

impl MockDb {
    pub fn insert_cafe(&self, id: &str, name: &str, address: Option<&str>) {
        self.cafes.borrow_mut().push(Cafe {
            id: id.into(),
            name: name.into(),
            address: address.map(Into::into),
            created_at: Timestamp::now(),
        });
    }

    pub fn insert_review(&self, owner: &str, cafe_name: &str, overall: i64, created_at: i64) -> Id {
        let existing = self.find_cafe_by_name(cafe_name).unwrap();
        let cafe_id = match existing {
            Some(cafe) => cafe.id,
            None => {
                let id = Id::new();
                self.insert_cafe(id.as_str(), cafe_name, None);
                id
            }
        };
        let id = Id::new();
        self.reviews.borrow_mut().push(NewReviewRow {
            id: id.to_string(),
            cafe_id: cafe_id.into(),
            user_id: owner.into(),
            reviewer_name: owner.into(),
            reviewer_email: format!("{owner}@example.com"),
            noise_level: "quiet".into(),
            wifi: true,
            outlets: "yes".into(),
            laptop_friendly: true,
            rush_hours: "Random".into(),
            ambience: "cozy".into(),
            overall_rating: overall,
            notes: format!("Notes by {owner}"),
            image_url: None,
            created_at,
        });
        id
    }

    fn joined(&self, row: &NewReviewRow) -> ReviewRow {
        let cafe = self
            .cafes
            .borrow()
            .iter()
            .find(|c| c.id.as_str() == row.cafe_id)
            .map(|c| CafeRef {
                name: Some(c.name.clone()),
                address: c.address.clone(),
            });
        ReviewRow {
            id: row.id.clone(),
            cafe_id: Some(row.cafe_id.clone()),
            user_id: Some(row.user_id.clone()),
            noise_level: Some(row.noise_level.clone()),
            wifi: Some(row.wifi),
            outlets: Some(row.outlets.clone()),
            laptop_friendly: Some(row.laptop_friendly),
            rush_hours: Some(row.rush_hours.clone()),
            ambience: Some(row.ambience.clone()),
            overall_rating: row.overall_rating,
            notes: Some(row.notes.clone()),
            image_url: row.image_url.clone(),
            created_at: row.created_at,
            cafe,
        }
    }

    fn newest_first(mut rows: Vec<ReviewRow>) -> Vec<ReviewRow> {
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }
}

impl CafeRepo for MockDb {
    fn create_cafe(&self, cafe: Cafe) -> RepoResult<()> {
        if self.cafes.borrow().iter().any(|c| c.id == cafe.id || c.name == cafe.name) {
            return Err(RepoError::AlreadyExists);
        }
        self.cafes.borrow_mut().push(cafe);
        Ok(())
    }

    fn get_cafe(&self, id: &str) -> RepoResult<Cafe> {
        self.cafes
            .borrow()
            .iter()
            .find(|c| c.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn find_cafe_by_name(&self, name: &str) -> RepoResult<Option<Cafe>> {
        Ok(self.cafes.borrow().iter().find(|c| c.name == name).cloned())
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, review: NewReviewRow) -> RepoResult<()> {
        if self.reviews.borrow().iter().any(|r| r.id == review.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.reviews.borrow_mut().push(review);
        Ok(())
    }

    fn load_review(&self, id: &str) -> RepoResult<ReviewRow> {
        self.reviews
            .borrow()
            .iter()
            .find(|r| r.id == id)
            .map(|r| self.joined(r))
            .ok_or(RepoError::NotFound)
    }

    fn load_reviews(&self, owner: Option<&str>) -> RepoResult<Vec<ReviewRow>> {
        let rows = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| owner.map(|o| r.user_id == o).unwrap_or(true))
            .map(|r| self.joined(r))
            .collect();
        Ok(Self::newest_first(rows))
    }

    fn load_reviews_of_cafe(&self, cafe_id: &str) -> RepoResult<Vec<ReviewRow>> {
        let rows = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.cafe_id == cafe_id)
            .map(|r| self.joined(r))
            .collect();
        Ok(Self::newest_first(rows))
    }

    fn update_review(&self, owner: &str, id: &str, patch: &ReviewPatch) -> RepoResult<()> {
        let mut reviews = self.reviews.borrow_mut();
        let row = reviews
            .iter_mut()
            .find(|r| r.id == id && r.user_id == owner)
            .ok_or(RepoError::NotFound)?;
        let ReviewPatch {
            noise_level,
            wifi,
            outlets,
            rush_hours,
            ambience,
            overall_rating,
            notes,
        } = patch;
        if let Some(noise_level) = noise_level {
            row.noise_level = noise_level.clone();
        }
        if let Some(wifi) = wifi {
            row.wifi = *wifi;
        }
        if let Some(outlets) = outlets {
            row.outlets = outlets.clone();
        }
        if let Some(rush_hours) = rush_hours {
            row.rush_hours = rush_hours.clone();
        }
        if let Some(ambience) = ambience {
            row.ambience = ambience.clone();
        }
        if let Some(overall_rating) = overall_rating {
            row.overall_rating = *overall_rating;
        }
        if let Some(notes) = notes {
            row.notes = notes.clone();
        }
        Ok(())
    }
}

impl SavedCafeRepo for MockDb {
    fn create_saved_cafe(&self, owner: &str, cafe_id: &str, saved_at: Timestamp) -> RepoResult<()> {
        let mut saved = self.saved.borrow_mut();
        if saved.iter().any(|(o, c, _)| o == owner && c == cafe_id) {
            return Err(RepoError::AlreadyExists);
        }
        saved.push((owner.into(), cafe_id.into(), saved_at));
        Ok(())
    }

    fn delete_saved_cafe(&self, owner: &str, cafe_id: &str) -> RepoResult<bool> {
        let mut saved = self.saved.borrow_mut();
        let len = saved.len();
        saved.retain(|(o, c, _)| !(o == owner && c == cafe_id));
        Ok(saved.len() < len)
    }

    fn load_saved_cafes(&self, owner: &str) -> RepoResult<Vec<Cafe>> {
        let mut saved: Vec<_> = self
            .saved
            .borrow()
            .iter()
            .filter(|(o, _, _)| o == owner)
            .cloned()
            .collect();
        saved.sort_by(|(_, _, a), (_, _, b)| b.cmp(a));
        saved
            .into_iter()
            .map(|(_, cafe_id, _)| self.get_cafe(&cafe_id))
            .collect()
    }
}
