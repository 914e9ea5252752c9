// src/auth/sessions.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::auth::gate::Identity;
use crate::auth::token::SessionToken;
use crate::errors::ServerError;

pub const SESSION_COOKIE: &str = "session";

/// Persist a session capturing the identity as of login. Returns the raw token.
pub fn create_session(
    conn: &Connection,
    who: &Identity,
    now: i64,
) -> Result<SessionToken, ServerError> {
    let token = SessionToken::generate();

    conn.execute(
        r#"
        insert into sessions (user_id, username, is_admin, token_hash, created_at)
        values (?, ?, ?, ?, ?)
        "#,
        params![
            who.user_id,
            who.username,
            who.is_admin,
            token.hash().as_slice(),
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(token)
}

pub fn load_identity(
    conn: &Connection,
    token: &SessionToken,
) -> Result<Option<Identity>, ServerError> {
    conn.query_row(
        "select user_id, username, is_admin from sessions where token_hash = ?",
        params![token.hash().as_slice()],
        |row| {
            Ok(Identity {
                user_id: row.get(0)?,
                username: row.get(1)?,
                is_admin: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
}

pub fn delete_session(conn: &Connection, token: &SessionToken) -> Result<(), ServerError> {
    conn.execute(
        "delete from sessions where token_hash = ?",
        params![token.hash().as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("delete session failed: {e}")))?;
    Ok(())
}

pub fn session_cookie(token: &SessionToken) -> String {
    format!(
        "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
        token.as_str()
    )
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
