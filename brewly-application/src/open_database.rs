use super::*;

/// Open the database and bring its schema up to date.
pub fn open_database(url: &str, pool_size: u32) -> Result<sqlite::Connections> {
    let connections =
        sqlite::Connections::init(url, pool_size).during(Operation::OpenDatabase)?;
    let db = connections.exclusive().during(Operation::OpenDatabase)?;
    brewly_db_sqlite::run_embedded_database_migrations(db).during(Operation::OpenDatabase)?;
    Ok(connections)
}
