use rusqlite::Connection;
use time::OffsetDateTime;
use tracing::info;

use crate::auth::password::hash_password;
use crate::db::{houses, users};
use crate::errors::ServerError;

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

#[derive(Clone)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Open a fresh connection. Callers own it and drop it when done.
    pub fn open(&self) -> Result<Connection, ServerError> {
        let conn = Connection::open(&self.path)
            .map_err(|e| ServerError::DbError(format!("Open DB failed: {e}")))?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| ServerError::DbError(format!("Enable foreign keys failed: {e}")))?;
        Ok(conn)
    }

    /// Opens a connection for the duration of `f` only.
    pub fn with_conn<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Connection) -> Result<T, E>,
        E: From<ServerError>,
    {
        let mut conn = self.open()?;
        f(&mut conn)
    }
}

/// The admin account created on first startup.
#[derive(Debug, Clone, Copy)]
pub struct AdminSeed<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

pub fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// Apply the embedded schema, then seed houses and the admin account if missing.
pub fn init_db(db: &Database, admin: &AdminSeed<'_>) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| ServerError::DbError(format!("Failed to apply schema: {e}")))?;

        let seeded = houses::seed_if_empty(conn)?;
        if seeded > 0 {
            info!(houses = seeded, "seeded house listings");
        }

        if users::find_by_username(conn, admin.username)?.is_none() {
            let hash = hash_password(admin.password)?;
            users::insert_admin(conn, admin.username, admin.email, &hash, now_unix())?;
            info!(username = admin.username, "seeded admin account");
        }

        Ok::<_, ServerError>(())
    })?;

    info!(path = db.path(), "database initialized");
    Ok(())
}
