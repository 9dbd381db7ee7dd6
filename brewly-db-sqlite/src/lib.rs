//! SQLite storage of cafés, reviews and saved cafés.

#[macro_use]
extern crate diesel;

use anyhow::Result as Fallible;
use brewly_core::usecases as uc;
use diesel::{connection::SimpleConnection as _, r2d2, sqlite::SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{cell::RefCell, sync::Arc};

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

// Applied to every connection handed out by the pool
const CONNECTION_PRAGMAS: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;
PRAGMA foreign_keys = ON;
PRAGMA defer_foreign_keys = ON;
PRAGMA busy_timeout = 5000;
PRAGMA encoding = 'UTF-8';
"#;

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

type LockedPool = Arc<RwLock<ConnectionPool>>;

fn pooled_connection(pool: &ConnectionPool, access: &str) -> Fallible<PooledConnection> {
    pool.get()
        .inspect_err(|err| log::error!("No database connection for {access} access: {err}"))
        .map_err(Into::into)
}

/// Read access that may be shared with other readers.
pub struct DbReadOnly<'a> {
    conn: RefCell<PooledConnection>,
    _guard: RwLockReadGuard<'a, ConnectionPool>,
}

/// The only connection with write access while it is alive.
pub struct DbReadWrite<'a> {
    conn: RefCell<PooledConnection>,
    _guard: RwLockWriteGuard<'a, ConnectionPool>,
}

/// A connection inside of a running transaction.
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

impl<'a> DbReadWrite<'a> {
    /// Run `f` in a transaction that is rolled back if `f` fails.
    ///
    /// Errors of `f` are returned unchanged, failures to begin or
    /// commit the transaction as repository errors.
    pub fn transaction<T, F, E>(&self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        use diesel::Connection as _;
        let mut failed = None;
        let res = self.conn.borrow_mut().transaction(|conn| {
            f(&DbConnection {
                conn: RefCell::new(conn),
            })
            .map_err(|err| {
                failed = Some(err.into());
                diesel::result::Error::RollbackTransaction
            })
        });
        res.map_err(|err| match failed {
            Some(err) => err,
            None => uc::Error::Repo(repo_impl::from_diesel_err(err)),
        })
    }
}

#[derive(Debug)]
struct ConnectionCustomizer;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(CONNECTION_PRAGMAS)
            .map_err(r2d2::Error::QueryError)
    }
}

/// Pooled connections behind a read/write lock.
///
/// Readers share the pool, a writer gets it exclusively. SQLite
/// would otherwise fail concurrent writes with "database is locked".
#[derive(Clone, Debug)]
pub struct Connections {
    pool: LockedPool,
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // r2d2 keeps retrying inaccessible databases, so fail early
        use diesel::Connection as _;
        SqliteConnection::establish(url)?;
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(ConnectionCustomizer))
            .build(ConnectionManager::new(url))?;
        log::debug!("Opened {url} with up to {pool_size} connection(s)");
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        let guard = self.pool.read();
        let conn = pooled_connection(&guard, "read-only")?;
        Ok(DbReadOnly {
            conn: RefCell::new(conn),
            _guard: guard,
        })
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        let guard = self.pool.write();
        let conn = pooled_connection(&guard, "read/write")?;
        Ok(DbReadWrite {
            conn: RefCell::new(conn),
            _guard: guard,
        })
    }
}

pub fn run_embedded_database_migrations(db: DbReadWrite<'_>) -> Fallible<()> {
    log::info!("Running embedded database migrations");
    let mut conn = db.conn.borrow_mut();
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow::anyhow!("Failed to run database migrations: {err}"))?
        .len();
    log::debug!("Applied {applied} database migration(s)");
    Ok(())
}
