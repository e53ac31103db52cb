use thiserror::Error;

/// Error type for password operations.
///
/// `Mismatch` is deliberately opaque: it is returned for a wrong password and
/// for a stored hash that cannot be parsed alike.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password does not match")]
    Mismatch,
}
