// src/auth/password.rs
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::errors::ServerError;

/// Argon2id with a fresh salt, encoded as a PHC string for the `users.password` column.
pub fn hash_password(password: &str) -> Result<String, ServerError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| ServerError::PasswordError(format!("hash failed: {e}")))
}

/// `Ok(false)` on mismatch; `Err` only if the stored hash is unreadable.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, ServerError> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| ServerError::PasswordError(format!("stored hash unreadable: {e}")))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(ServerError::PasswordError(format!("verify failed: {e}"))),
    }
}
