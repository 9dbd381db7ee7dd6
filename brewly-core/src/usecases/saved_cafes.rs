use super::{prelude::*, require_owner};

/// The owner's saved cafés with the average rating of all
/// their reviews and the most recent note.
pub fn fetch_saved_cafes<R>(repo: &R, owner: Option<&str>) -> Result<Vec<SavedCafe>>
where
    R: SavedCafeRepo + ReviewRepo,
{
    let owner = require_owner(owner)?;
    let cafes = repo.load_saved_cafes(owner)?;
    let mut saved = Vec::with_capacity(cafes.len());
    for cafe in cafes {
        let mut reviews: Vec<_> = repo
            .load_reviews_of_cafe(cafe.id.as_str())?
            .into_iter()
            .map(Review::from)
            .collect();
        crate::util::sort::newest_first(&mut reviews);
        let overall = reviews
            .iter()
            .map(|r| r.overall)
            .collect::<AvgRatingValueBuilder>()
            .build()
            // Unrated
            .unwrap_or_default();
        let notes = reviews
            .iter()
            .map(|r| r.notes.trim())
            .find(|notes| !notes.is_empty())
            .unwrap_or_default()
            .to_owned();
        let address = cafe.display_address().to_owned();
        let Cafe { id, name, .. } = cafe;
        saved.push(SavedCafe {
            id,
            cafe_name: name,
            address,
            overall,
            notes,
        });
    }
    Ok(saved)
}

/// Save the café or remove it from the saved cafés.
///
/// The outcome is decided by the delete: only if nothing has
/// been deleted the café is saved.
pub fn toggle_saved_cafe<R>(repo: &R, owner: Option<&str>, cafe_id: &str) -> Result<Toggled>
where
    R: CafeRepo + SavedCafeRepo,
{
    let owner = require_owner(owner)?;
    if repo.delete_saved_cafe(owner, cafe_id)? {
        return Ok(Toggled::Removed);
    }
    repo.get_cafe(cafe_id).map_err(|err| match err {
        RepoError::NotFound => Error::CafeNotFound,
        err => err.into(),
    })?;
    repo.create_saved_cafe(owner, cafe_id, Timestamp::now())?;
    Ok(Toggled::Added)
}
