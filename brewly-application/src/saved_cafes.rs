use super::*;

pub fn fetch_saved_cafes(
    connections: &sqlite::Connections,
    owner: Option<&str>,
) -> Result<Vec<SavedCafe>> {
    let db = connections.shared().during(Operation::FetchSavedCafes)?;
    usecases::fetch_saved_cafes(&db, owner).during(Operation::FetchSavedCafes)
}

pub fn toggle_saved_cafe(
    connections: &sqlite::Connections,
    owner: Option<&str>,
    cafe_id: &str,
) -> Result<Toggled> {
    let toggled = connections
        .exclusive()
        .during(Operation::ToggleSavedCafe)?
        .transaction(|conn| usecases::toggle_saved_cafe(conn, owner, cafe_id))
        .during(Operation::ToggleSavedCafe)?;
    debug!("Toggled saved café {cafe_id}: {toggled}");
    Ok(toggled)
}
