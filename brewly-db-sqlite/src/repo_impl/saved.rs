use super::*;

impl<'a> SavedCafeRepo for DbReadWrite<'a> {
    fn create_saved_cafe(&self, owner: &str, cafe_id: &str, saved_at: Timestamp) -> Result<()> {
        create_saved_cafe(&mut self.conn.borrow_mut(), owner, cafe_id, saved_at)
    }
    fn delete_saved_cafe(&self, owner: &str, cafe_id: &str) -> Result<bool> {
        delete_saved_cafe(&mut self.conn.borrow_mut(), owner, cafe_id)
    }
    fn load_saved_cafes(&self, owner: &str) -> Result<Vec<Cafe>> {
        load_saved_cafes(&mut self.conn.borrow_mut(), owner)
    }
}

impl<'a> SavedCafeRepo for DbConnection<'a> {
    fn create_saved_cafe(&self, owner: &str, cafe_id: &str, saved_at: Timestamp) -> Result<()> {
        create_saved_cafe(&mut self.conn.borrow_mut(), owner, cafe_id, saved_at)
    }
    fn delete_saved_cafe(&self, owner: &str, cafe_id: &str) -> Result<bool> {
        delete_saved_cafe(&mut self.conn.borrow_mut(), owner, cafe_id)
    }
    fn load_saved_cafes(&self, owner: &str) -> Result<Vec<Cafe>> {
        load_saved_cafes(&mut self.conn.borrow_mut(), owner)
    }
}

impl<'a> SavedCafeRepo for DbReadOnly<'a> {
    fn create_saved_cafe(&self, _owner: &str, _cafe_id: &str, _saved_at: Timestamp) -> Result<()> {
        Err(read_only_access())
    }
    fn delete_saved_cafe(&self, _owner: &str, _cafe_id: &str) -> Result<bool> {
        Err(read_only_access())
    }
    fn load_saved_cafes(&self, owner: &str) -> Result<Vec<Cafe>> {
        load_saved_cafes(&mut self.conn.borrow_mut(), owner)
    }
}

fn create_saved_cafe(
    conn: &mut SqliteConnection,
    owner: &str,
    cafe_id: &str,
    saved_at: Timestamp,
) -> Result<()> {
    let new_saved_cafe = models::NewSavedCafe {
        user_id: owner,
        cafe_id,
        created_at: saved_at.as_millis(),
    };
    let _count = diesel::insert_into(schema::saved_cafes::table)
        .values(&new_saved_cafe)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn delete_saved_cafe(conn: &mut SqliteConnection, owner: &str, cafe_id: &str) -> Result<bool> {
    use schema::saved_cafes::dsl;
    let count = diesel::delete(
        schema::saved_cafes::table
            .filter(dsl::user_id.eq(owner))
            .filter(dsl::cafe_id.eq(cafe_id)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    Ok(count > 0)
}

fn load_saved_cafes(conn: &mut SqliteConnection, owner: &str) -> Result<Vec<Cafe>> {
    use schema::{cafes::dsl as cafe_dsl, saved_cafes::dsl};
    let cafes = schema::saved_cafes::table
        .inner_join(schema::cafes::table)
        .select((
            cafe_dsl::id,
            cafe_dsl::name,
            cafe_dsl::address,
            cafe_dsl::created_at,
        ))
        .filter(dsl::user_id.eq(owner))
        .order_by(dsl::created_at.desc())
        .load::<models::Cafe>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(super::cafe::load_cafe)
        .collect();
    Ok(cafes)
}
