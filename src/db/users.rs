// src/db/users.rs
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use crate::errors::{ServerError, SignupError};

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Insert a regular (non-admin) user. Duplicate username or email is a `Conflict`.
pub fn insert_user(
    conn: &Connection,
    username: &str,
    email: &str,
    password_hash: &str,
    now: i64,
) -> Result<i64, SignupError> {
    let res = conn.execute(
        "insert into users (username, email, password, is_admin, created_at) values (?, ?, ?, 0, ?)",
        params![username, email, password_hash, now],
    );

    match res {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            Err(SignupError::Conflict)
        }
        Err(e) => Err(ServerError::DbError(format!("insert user failed: {e}")).into()),
    }
}

pub fn insert_admin(
    conn: &Connection,
    username: &str,
    email: &str,
    password_hash: &str,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        "insert into users (username, email, password, is_admin, created_at) values (?, ?, ?, 1, ?)",
        params![username, email, password_hash, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert admin failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_username(conn: &Connection, username: &str) -> Result<Option<UserRow>, ServerError> {
    conn.query_row(
        "select id, username, password, is_admin from users where username = ?",
        params![username],
        |r| {
            Ok(UserRow {
                id: r.get(0)?,
                username: r.get(1)?,
                password_hash: r.get(2)?,
                is_admin: r.get(3)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select user failed: {e}")))
}

#[cfg(test)]
pub fn count_users(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("select count(*) from users", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count users failed: {e}")))
}
