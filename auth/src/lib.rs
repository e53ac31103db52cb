//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for the services:
//! - Password hashing (Argon2id)
//! - JWT token generation and validation (HMAC)
//! - Bearer credential authorization for protected requests
//!
//! Capabilities are exposed as traits (`PasswordHashing`, `TokenCodec`) so
//! services can inject stubs in tests.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{PasswordHasher, PasswordHashing};
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash_password("my_password").unwrap();
//! assert!(hasher.check_password(&hash, "my_password").is_ok());
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler, TokenCodec};
//!
//! let codec = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_user("user123", "alice@example.com", "user", 24);
//! let token = codec.generate_token(&claims).unwrap();
//! let decoded = codec.validate_token(&token).unwrap();
//! assert_eq!(decoded, claims);
//! ```
//!
//! ## Protected Requests
//! ```
//! use auth::{authorize, AuthorizationError, JwtHandler};
//!
//! let codec = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let result = authorize(&codec, Some("Bearer not-a-token"));
//! assert!(matches!(result, Err(AuthorizationError::InvalidCredential(_))));
//! ```

pub mod authorization;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authorization::authorize;
pub use authorization::extract_bearer_token;
pub use authorization::AuthorizationError;
pub use jwt::Claims;
pub use jwt::JwtHandler;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordHashing;
