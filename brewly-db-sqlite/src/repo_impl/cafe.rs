use super::*;

impl<'a> CafeRepo for DbReadWrite<'a> {
    fn create_cafe(&self, cafe: Cafe) -> Result<()> {
        create_cafe(&mut self.conn.borrow_mut(), cafe)
    }
    fn get_cafe(&self, id: &str) -> Result<Cafe> {
        get_cafe(&mut self.conn.borrow_mut(), id)
    }
    fn find_cafe_by_name(&self, name: &str) -> Result<Option<Cafe>> {
        find_cafe_by_name(&mut self.conn.borrow_mut(), name)
    }
}

impl<'a> CafeRepo for DbConnection<'a> {
    fn create_cafe(&self, cafe: Cafe) -> Result<()> {
        create_cafe(&mut self.conn.borrow_mut(), cafe)
    }
    fn get_cafe(&self, id: &str) -> Result<Cafe> {
        get_cafe(&mut self.conn.borrow_mut(), id)
    }
    fn find_cafe_by_name(&self, name: &str) -> Result<Option<Cafe>> {
        find_cafe_by_name(&mut self.conn.borrow_mut(), name)
    }
}

impl<'a> CafeRepo for DbReadOnly<'a> {
    fn create_cafe(&self, _cafe: Cafe) -> Result<()> {
        Err(read_only_access())
    }
    fn get_cafe(&self, id: &str) -> Result<Cafe> {
        get_cafe(&mut self.conn.borrow_mut(), id)
    }
    fn find_cafe_by_name(&self, name: &str) -> Result<Option<Cafe>> {
        find_cafe_by_name(&mut self.conn.borrow_mut(), name)
    }
}

pub(super) fn load_cafe(model: models::Cafe) -> Cafe {
    let models::Cafe {
        id,
        name,
        address,
        created_at,
    } = model;
    CafeRow {
        id,
        name,
        address,
        created_at,
    }
    .into()
}

fn create_cafe(conn: &mut SqliteConnection, cafe: Cafe) -> Result<()> {
    let Cafe {
        id,
        name,
        address,
        created_at,
    } = cafe;
    let new_cafe = models::NewCafe {
        id: id.as_str(),
        name: &name,
        address: address.as_deref(),
        created_at: created_at.as_millis(),
    };
    let _count = diesel::insert_into(schema::cafes::table)
        .values(&new_cafe)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn get_cafe(conn: &mut SqliteConnection, id: &str) -> Result<Cafe> {
    use schema::cafes::dsl;
    let model = schema::cafes::table
        .filter(dsl::id.eq(id))
        .first::<models::Cafe>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_cafe(model))
}

fn find_cafe_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Option<Cafe>> {
    use schema::cafes::dsl;
    let model = schema::cafes::table
        .filter(dsl::name.eq(name))
        .first::<models::Cafe>(conn)
        .optional()
        .map_err(from_diesel_err)?;
    Ok(model.map(load_cafe))
}
