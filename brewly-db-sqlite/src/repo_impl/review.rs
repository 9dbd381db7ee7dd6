use super::*;

impl<'a> ReviewRepo for DbReadWrite<'a> {
    fn create_review(&self, review: NewReviewRow) -> Result<()> {
        create_review(&mut self.conn.borrow_mut(), review)
    }
    fn load_review(&self, id: &str) -> Result<ReviewRow> {
        load_review(&mut self.conn.borrow_mut(), id)
    }
    fn load_reviews(&self, owner: Option<&str>) -> Result<Vec<ReviewRow>> {
        load_reviews(&mut self.conn.borrow_mut(), owner)
    }
    fn load_reviews_of_cafe(&self, cafe_id: &str) -> Result<Vec<ReviewRow>> {
        load_reviews_of_cafe(&mut self.conn.borrow_mut(), cafe_id)
    }
    fn update_review(&self, owner: &str, id: &str, patch: &ReviewPatch) -> Result<()> {
        update_review(&mut self.conn.borrow_mut(), owner, id, patch)
    }
}

impl<'a> ReviewRepo for DbConnection<'a> {
    fn create_review(&self, review: NewReviewRow) -> Result<()> {
        create_review(&mut self.conn.borrow_mut(), review)
    }
    fn load_review(&self, id: &str) -> Result<ReviewRow> {
        load_review(&mut self.conn.borrow_mut(), id)
    }
    fn load_reviews(&self, owner: Option<&str>) -> Result<Vec<ReviewRow>> {
        load_reviews(&mut self.conn.borrow_mut(), owner)
    }
    fn load_reviews_of_cafe(&self, cafe_id: &str) -> Result<Vec<ReviewRow>> {
        load_reviews_of_cafe(&mut self.conn.borrow_mut(), cafe_id)
    }
    fn update_review(&self, owner: &str, id: &str, patch: &ReviewPatch) -> Result<()> {
        update_review(&mut self.conn.borrow_mut(), owner, id, patch)
    }
}

impl<'a> ReviewRepo for DbReadOnly<'a> {
    fn create_review(&self, _review: NewReviewRow) -> Result<()> {
        Err(read_only_access())
    }
    fn load_review(&self, id: &str) -> Result<ReviewRow> {
        load_review(&mut self.conn.borrow_mut(), id)
    }
    fn load_reviews(&self, owner: Option<&str>) -> Result<Vec<ReviewRow>> {
        load_reviews(&mut self.conn.borrow_mut(), owner)
    }
    fn load_reviews_of_cafe(&self, cafe_id: &str) -> Result<Vec<ReviewRow>> {
        load_reviews_of_cafe(&mut self.conn.borrow_mut(), cafe_id)
    }
    fn update_review(&self, _owner: &str, _id: &str, _patch: &ReviewPatch) -> Result<()> {
        Err(read_only_access())
    }
}

type JoinedReview = (models::Review, Option<models::Cafe>);

fn review_row((review, cafe): JoinedReview) -> ReviewRow {
    let models::Review {
        id,
        cafe_id,
        user_id,
        reviewer_name: _,
        reviewer_email: _,
        noise_level,
        wifi,
        outlets,
        laptop_friendly,
        rush_hours,
        ambience,
        overall_rating,
        notes,
        image_url,
        created_at,
    } = review;
    let cafe = cafe.map(|models::Cafe { name, address, .. }| CafeRef {
        name: Some(name),
        address,
    });
    if cafe.is_none() && cafe_id.is_some() {
        // This should never happen
        log::warn!("Referential integrity violation: Café of review {id} not found");
    }
    ReviewRow {
        id,
        cafe_id,
        user_id: Some(user_id),
        noise_level,
        wifi,
        outlets,
        laptop_friendly,
        rush_hours,
        ambience,
        overall_rating,
        notes,
        image_url,
        created_at,
        cafe,
    }
}

fn create_review(conn: &mut SqliteConnection, review: NewReviewRow) -> Result<()> {
    let NewReviewRow {
        id,
        cafe_id,
        user_id,
        reviewer_name,
        reviewer_email,
        noise_level,
        wifi,
        outlets,
        laptop_friendly,
        rush_hours,
        ambience,
        overall_rating,
        notes,
        image_url,
        created_at,
    } = &review;
    let new_review = models::NewReview {
        id,
        cafe_id,
        user_id,
        reviewer_name,
        reviewer_email,
        noise_level,
        wifi: *wifi,
        outlets,
        laptop_friendly: *laptop_friendly,
        rush_hours,
        ambience,
        overall_rating: *overall_rating,
        notes,
        image_url: image_url.as_deref(),
        created_at: *created_at,
    };
    let _count = diesel::insert_into(schema::reviews::table)
        .values(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_review(conn: &mut SqliteConnection, id: &str) -> Result<ReviewRow> {
    use schema::reviews::dsl;
    let joined = schema::reviews::table
        .left_join(schema::cafes::table)
        .filter(dsl::id.eq(id))
        .first::<JoinedReview>(conn)
        .map_err(from_diesel_err)?;
    Ok(review_row(joined))
}

fn load_reviews(conn: &mut SqliteConnection, owner: Option<&str>) -> Result<Vec<ReviewRow>> {
    use schema::reviews::dsl;
    let mut query = schema::reviews::table
        .left_join(schema::cafes::table)
        .order_by(dsl::created_at.desc())
        .into_boxed();
    if let Some(owner) = owner {
        query = query.filter(dsl::user_id.eq(owner));
    }
    let rows = query
        .load::<JoinedReview>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(review_row)
        .collect();
    Ok(rows)
}

fn load_reviews_of_cafe(conn: &mut SqliteConnection, cafe_id: &str) -> Result<Vec<ReviewRow>> {
    use schema::reviews::dsl;
    let rows = schema::reviews::table
        .left_join(schema::cafes::table)
        .filter(dsl::cafe_id.eq(cafe_id))
        .order_by(dsl::created_at.desc())
        .load::<JoinedReview>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(review_row)
        .collect();
    Ok(rows)
}

fn update_review(
    conn: &mut SqliteConnection,
    owner: &str,
    id: &str,
    patch: &ReviewPatch,
) -> Result<()> {
    use schema::reviews::dsl;
    let ReviewPatch {
        noise_level,
        wifi,
        outlets,
        rush_hours,
        ambience,
        overall_rating,
        notes,
    } = patch;
    let changeset = models::ReviewChangeset {
        noise_level: noise_level.as_deref(),
        wifi: *wifi,
        outlets: outlets.as_deref(),
        rush_hours: rush_hours.as_deref(),
        ambience: ambience.as_deref(),
        overall_rating: *overall_rating,
        notes: notes.as_deref(),
    };
    let count = diesel::update(
        schema::reviews::table
            .filter(dsl::id.eq(id))
            .filter(dsl::user_id.eq(owner)),
    )
    .set(&changeset)
    .execute(conn)
    .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count < 1 {
        log::info!("No review {id} of user {owner} found for updating");
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
