// src/forms.rs
use std::collections::HashMap;
use std::io::Read;

use astra::Request;

use crate::errors::ServerError;

// Every form on the site is a handful of short text fields.
pub const MAX_FORM_BYTES: u64 = 16 * 1024;

/// Decoded `application/x-www-form-urlencoded` fields (body or query string).
#[derive(Debug, Default, Clone)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    pub fn parse(raw: &[u8]) -> Self {
        let fields = url::form_urlencoded::parse(raw)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { fields }
    }

    pub fn from_query(req: &Request) -> Self {
        req.uri()
            .query()
            .map(|q| Self::parse(q.as_bytes()))
            .unwrap_or_default()
    }

    /// Read and decode the request body, refusing anything over `MAX_FORM_BYTES`.
    pub fn from_body(req: &mut Request) -> Result<Self, ServerError> {
        let mut raw = Vec::new();
        req.body_mut()
            .reader()
            .take(MAX_FORM_BYTES + 1)
            .read_to_end(&mut raw)
            .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

        if raw.len() as u64 > MAX_FORM_BYTES {
            return Err(ServerError::BadRequest("form body too large".into()));
        }
        Ok(Self::parse(&raw))
    }

    /// Trimmed value, treating blank fields as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Raw value, untrimmed. Used for passwords.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Parse the `Cookie` header into name/value pairs.
pub fn parse_cookies(req: &Request) -> HashMap<String, String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            Some((name.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Build a `Location` for `path` with one query parameter.
pub fn with_query(path: &str, key: &str, value: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();
    format!("{path}?{query}")
}
