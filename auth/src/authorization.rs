use thiserror::Error;

use crate::jwt::Claims;
use crate::jwt::TokenCodec;

/// Scheme expected in the `Authorization` header.
pub const BEARER_SCHEME: &str = "Bearer";

/// Reasons a protected request is rejected.
///
/// The variants exist for logging. Callers are expected to answer all of them
/// with the same unauthorized response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthorizationError {
    #[error("missing credential")]
    MissingCredential,

    #[error("malformed credential")]
    MalformedCredential,

    #[error("invalid credential: {0}")]
    InvalidCredential(String),
}

/// Extract the token from an `Authorization` header value.
///
/// The value must be exactly `<scheme> <token>` with a single space, where the
/// scheme matches `Bearer` case-insensitively.
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AuthorizationError> {
    let value = header.ok_or(AuthorizationError::MissingCredential)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None)
            if scheme.eq_ignore_ascii_case(BEARER_SCHEME) && !token.is_empty() =>
        {
            Ok(token)
        }
        _ => Err(AuthorizationError::MalformedCredential),
    }
}

/// Verify the bearer credential of a request and return its claims.
pub fn authorize<C>(codec: &C, header: Option<&str>) -> Result<Claims, AuthorizationError>
where
    C: TokenCodec + ?Sized,
{
    let token = extract_bearer_token(header)?;

    codec
        .validate_token(token)
        .map_err(|e| AuthorizationError::InvalidCredential(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::JwtHandler;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token(Some("Bearer abc123")), Ok("abc123"));
        assert_eq!(extract_bearer_token(Some("bearer abc123")), Ok("abc123"));
        assert_eq!(extract_bearer_token(Some("BEARER abc123")), Ok("abc123"));
    }

    #[test]
    fn test_extract_missing() {
        assert_eq!(
            extract_bearer_token(None),
            Err(AuthorizationError::MissingCredential)
        );
    }

    #[test]
    fn test_extract_malformed() {
        for value in [
            "",
            "Bearer",
            "Bearer ",
            "abc123",
            "Basic abc123",
            "Bearer abc 123",
            "Bearer  abc123",
            "Token abc123",
        ] {
            assert_eq!(
                extract_bearer_token(Some(value)),
                Err(AuthorizationError::MalformedCredential),
                "{value:?}"
            );
        }
    }

    #[test]
    fn test_authorize_valid_token() {
        let codec = JwtHandler::new(SECRET);
        let claims = Claims::for_user("user123", "alice@example.com", "user", 1);
        let token = codec.generate_token(&claims).unwrap();
        let header = format!("Bearer {}", token);

        let authorized = authorize(&codec, Some(&header)).expect("Authorization failed");
        assert_eq!(authorized, claims);
    }

    #[test]
    fn test_authorize_garbage_token() {
        let codec = JwtHandler::new(SECRET);

        let result = authorize(&codec, Some("Bearer garbage"));
        assert!(matches!(
            result,
            Err(AuthorizationError::InvalidCredential(_))
        ));
    }

    #[test]
    fn test_authorize_through_trait_object() {
        let codec: Box<dyn TokenCodec> = Box::new(JwtHandler::new(SECRET));

        let result = authorize(codec.as_ref(), None);
        assert_eq!(result, Err(AuthorizationError::MissingCredential));
    }

    #[test]
    fn test_reason_strings() {
        assert_eq!(
            AuthorizationError::MissingCredential.to_string(),
            "missing credential"
        );
        assert_eq!(
            AuthorizationError::MalformedCredential.to_string(),
            "malformed credential"
        );
        assert!(AuthorizationError::InvalidCredential("expired".to_string())
            .to_string()
            .starts_with("invalid credential"));
    }
}
