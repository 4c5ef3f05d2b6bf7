//! Argon2id password hashing and verification. PHC-formatted strings embed
//! the algorithm parameters and salt, so nothing beyond the hash column is
//! stored. The strength policy itself lives in `validation`.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::errors::AppError;

/// Hashes a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC hash.
/// `Ok(false)` means a well-formed hash that simply does not match.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("stored password hash is invalid: {e}")))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::Internal(anyhow::anyhow!(
            "password verification failed: {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("Abc1d!").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("Abc1d!", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_is_false_not_error() {
        let hash = hash_password("Abc1d!").unwrap();
        assert!(!verify_password("Xyz9f?", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("Abc1d!", "not-a-phc-string").is_err());
    }
}
