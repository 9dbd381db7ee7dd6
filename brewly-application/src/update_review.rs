use super::*;

pub fn update_review(
    connections: &sqlite::Connections,
    owner: Option<&str>,
    id: &str,
    update: usecases::ReviewUpdate,
) -> Result<Review> {
    update.validate()?;
    let review = connections
        .exclusive()
        .during(Operation::UpdateReview)?
        .transaction(|conn| {
            usecases::update_review(conn, owner, id, update)?;
            usecases::get_review(conn, id)
        })
        .during(Operation::UpdateReview)?;
    Ok(review)
}
