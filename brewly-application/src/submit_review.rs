use super::*;

/// Validate the input and store the review together with
/// its café if the café is new.
///
/// Nothing is stored if any step fails.
pub fn submit_review(
    connections: &sqlite::Connections,
    owner: Option<&str>,
    new_review: usecases::NewReview,
) -> Result<Review> {
    new_review.validate()?;
    let review = connections
        .exclusive()
        .during(Operation::SubmitReview)?
        .transaction(|conn| {
            let storable = usecases::prepare_new_review(conn, owner, new_review)?;
            if storable.creates_cafe() {
                debug!("Review {} introduces a new café", storable.review_id());
            }
            usecases::store_new_review(conn, storable)
        })
        .during(Operation::SubmitReview)?;
    info!("Submitted review {} of café '{}'", review.id, review.cafe_name);
    Ok(review)
}
