use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;
use super::hashing::PasswordHashing;

/// Argon2id password hasher.
///
/// Uses the crate's recommended default cost parameters and a fresh random
/// salt for every hash. Output is a PHC string, so the parameters and salt
/// travel with the hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHashing for PasswordHasher {
    fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    fn check_password(&self, hash: &str, password: &str) -> Result<(), PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::Mismatch)?;

        // Argon2 compares digests in constant time.
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| PasswordError::Mismatch)
    }
}
