use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// All four keys are required; a token missing any of them does not decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Identifier of the authenticated user
    pub user_id: String,

    /// Email the user logged in with
    pub email: String,

    /// Flat role string (e.g. "user", "admin")
    pub role: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user expiring `expiration_hours` from now.
    pub fn for_user(
        user_id: impl ToString,
        email: impl Into<String>,
        role: impl Into<String>,
        expiration_hours: i64,
    ) -> Self {
        let expiration = Utc::now() + Duration::hours(expiration_hours);

        Self {
            user_id: user_id.to_string(),
            email: email.into(),
            role: role.into(),
            exp: expiration.timestamp(),
        }
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }
}
