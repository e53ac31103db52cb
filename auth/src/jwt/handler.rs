use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::codec::TokenCodec;
use super::errors::TokenError;

/// Algorithms accepted when verifying. Anything outside the HMAC family is
/// rejected before the signature is checked.
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// JWT codec backed by a symmetric secret.
///
/// Signs with HS256 (HMAC with SHA-256).
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        validation.set_required_spec_claims(&["exp"]);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation
    }
}

impl TokenCodec for JwtHandler {
    fn generate_token(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation())
            .map(|token_data| token_data.claims)
            .map_err(|e| TokenError::InvalidToken(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    // {"alg":"RS256","typ":"JWT"}
    const RS256_HEADER: &str = "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9";

    // {"alg":"none","typ":"JWT"}
    const NONE_HEADER: &str = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0";

    fn claims() -> Claims {
        Claims::for_user("user123", "alice@example.com", "admin", 24)
    }

    fn replace_header(token: &str, header: &str) -> String {
        let (_, rest) = token.split_once('.').expect("token has segments");
        format!("{}.{}", header, rest)
    }

    #[test]
    fn test_generate_and_validate() {
        let handler = JwtHandler::new(SECRET);
        let claims = claims();

        let token = handler
            .generate_token(&claims)
            .expect("Failed to generate token");
        assert_eq!(token.split('.').count(), 3);

        let decoded = handler
            .validate_token(&token)
            .expect("Failed to validate token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_validate_garbage() {
        let handler = JwtHandler::new(SECRET);

        for token in ["", "invalid", "invalid.token.here", "a.b", "a.b.c.d"] {
            let result = handler.validate_token(token);
            assert!(matches!(result, Err(TokenError::InvalidToken(_))), "{token}");
        }
    }

    #[test]
    fn test_validate_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = handler1
            .generate_token(&claims())
            .expect("Failed to generate token");

        let result = handler2.validate_token(&token);
        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_validate_expired() {
        let handler = JwtHandler::new(SECRET);
        let expired = claims().with_expiration(Utc::now().timestamp() - 60);

        let token = handler
            .generate_token(&expired)
            .expect("Failed to generate token");

        let result = handler.validate_token(&token);
        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_validate_rejects_non_hmac_algorithm() {
        let handler = JwtHandler::new(SECRET);
        let token = handler
            .generate_token(&claims())
            .expect("Failed to generate token");

        for header in [RS256_HEADER, NONE_HEADER] {
            let forged = replace_header(&token, header);
            let result = handler.validate_token(&forged);
            assert!(matches!(result, Err(TokenError::InvalidToken(_))));
        }
    }

    #[test]
    fn test_validate_accepts_other_hmac_variants() {
        let handler = JwtHandler::new(SECRET);
        let claims = claims();

        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .expect("Failed to encode token");

        let decoded = handler
            .validate_token(&token)
            .expect("Failed to validate token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_validate_rejects_tampered_payload() {
        let handler = JwtHandler::new(SECRET);
        let token = handler
            .generate_token(&claims())
            .expect("Failed to generate token");
        let other = handler
            .generate_token(&Claims::for_user("other", "bob@example.com", "admin", 24))
            .expect("Failed to generate token");

        let segments: Vec<&str> = token.split('.').collect();
        let other_segments: Vec<&str> = other.split('.').collect();
        let spliced = format!("{}.{}.{}", segments[0], other_segments[1], segments[2]);

        let result = handler.validate_token(&spliced);
        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }
}
