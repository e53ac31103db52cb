use super::claims::Claims;
use super::errors::TokenError;

/// Signs and verifies claims-bearing tokens.
///
/// Implementations own their key material; callers never pass secrets per call.
pub trait TokenCodec: Send + Sync + 'static {
    /// Sign claims into a compact token.
    ///
    /// # Errors
    /// * `SigningFailed` - Key or serialization failure
    fn generate_token(&self, claims: &Claims) -> Result<String, TokenError>;

    /// Verify a compact token and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, wrong algorithm, bad signature or expired
    fn validate_token(&self, token: &str) -> Result<Claims, TokenError>;
}
