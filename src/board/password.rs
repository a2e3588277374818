//! Delete-password hashing for threads and replies.
//!
//! Passwords are stored as Argon2id PHC strings and never echoed back.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};
use rand_core::OsRng;

use crate::{BoardError, Result};

/// Create the Argon2 hasher.
///
/// Parameters:
/// - Memory cost: 19 MiB (19456 KiB)
/// - Time cost: 2 iterations
/// - Parallelism: 1 thread
fn create_argon2() -> Result<Argon2<'static>> {
    let params =
        Params::new(19456, 2, 1, None).map_err(|e| BoardError::Password(e.to_string()))?;
    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

/// Hash a delete password.
pub fn hash_delete_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = create_argon2()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| BoardError::Password(e.to_string()))?;
    Ok(hash.to_string())
}

/// Check a supplied password against a stored hash.
///
/// A wrong password is `Ok(false)`; only an unreadable hash is an error.
pub fn verify_delete_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| BoardError::Password("invalid hash".to_string()))?;

    // Parameters come from the parsed hash.
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(BoardError::Password(e.to_string())),
    }
}
