// src/context.rs
use std::cell::RefCell;
use std::collections::HashMap;

use astra::Request;
use rusqlite::Connection;

use crate::auth::sessions::{self, SESSION_COOKIE};
use crate::auth::token::SessionToken;
use crate::auth::{Gate, Identity};
use crate::db::Database;
use crate::errors::ServerError;
use crate::flash::{Flash, FLASH_COOKIE};
use crate::forms::parse_cookies;

/// Per-request state: the store handle, a connection opened on first use, the
/// cookie jar and the caller's identity. Everything is dropped when the request
/// ends, whichever way the handler returns.
pub struct RequestCtx<'a> {
    db: &'a Database,
    conn: RefCell<Option<Connection>>,
    cookies: HashMap<String, String>,
    identity: Option<Identity>,
}

impl<'a> RequestCtx<'a> {
    pub fn new(db: &'a Database, req: &Request) -> Result<Self, ServerError> {
        let mut ctx = Self {
            db,
            conn: RefCell::new(None),
            cookies: parse_cookies(req),
            identity: None,
        };

        if let Some(token) = ctx.session_token() {
            ctx.identity = ctx.with_conn(|conn| sessions::load_identity(conn, &token))?;
        }

        Ok(ctx)
    }

    /// Run `f` on this request's connection, opening it if needed.
    pub fn with_conn<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Connection) -> Result<T, E>,
        E: From<ServerError>,
    {
        let mut slot = self.conn.borrow_mut();
        if slot.is_none() {
            *slot = Some(self.db.open()?);
        }
        let conn = slot.as_mut().ok_or(ServerError::InternalError)?;
        f(conn)
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// The caller's identity, if it passes `gate`.
    pub fn admit(&self, gate: Gate) -> Option<&Identity> {
        self.identity().filter(|who| gate.allows(Some(who)))
    }

    pub fn session_token(&self) -> Option<SessionToken> {
        self.cookies
            .get(SESSION_COOKIE)
            .and_then(|v| SessionToken::from_cookie(v))
    }

    pub fn has_flash_cookie(&self) -> bool {
        self.cookies.contains_key(FLASH_COOKIE)
    }

    pub fn flash(&self) -> Option<Flash> {
        self.cookies
            .get(FLASH_COOKIE)
            .and_then(|v| Flash::from_cookie(v))
    }

    /// Whether a connection was ever opened for this request.
    #[cfg(test)]
    pub fn conn_opened(&self) -> bool {
        self.conn.borrow().is_some()
    }
}
