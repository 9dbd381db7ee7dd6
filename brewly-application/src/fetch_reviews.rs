use super::*;

pub fn fetch_reviews(connections: &sqlite::Connections) -> Result<Vec<Review>> {
    let db = connections.shared().during(Operation::FetchReviews)?;
    usecases::fetch_reviews(&db).during(Operation::FetchReviews)
}

pub fn fetch_my_reviews(
    connections: &sqlite::Connections,
    owner: Option<&str>,
) -> Result<Vec<Review>> {
    let db = connections.shared().during(Operation::FetchMyReviews)?;
    usecases::fetch_my_reviews(&db, owner).during(Operation::FetchMyReviews)
}

pub fn get_review(connections: &sqlite::Connections, id: &str) -> Result<Review> {
    let db = connections.shared().during(Operation::GetReview)?;
    usecases::get_review(&db, id).during(Operation::GetReview)
}
