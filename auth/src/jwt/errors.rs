use thiserror::Error;

/// Error type for token operations.
///
/// Validation never reports which check failed through the variant: parse,
/// algorithm, signature and expiry failures are all `InvalidToken`, with the
/// detail kept for diagnostics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}
