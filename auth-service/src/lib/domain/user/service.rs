use std::sync::Arc;

use async_trait::async_trait;
use auth::Claims;
use auth::PasswordError;
use auth::PasswordHashing;
use auth::TokenCodec;
use chrono::Utc;
use tokio::sync::OnceCell;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;

/// Lifetime of issued access tokens.
///
/// Fixed for every deployment. There is no refresh or revocation, so a token
/// stays valid for this whole window once issued.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Verified against when the email is unknown, so that path costs one hash
/// verification like a wrong password does.
const TIMING_DUMMY_PASSWORD: &str = "timing-dummy-password";

/// Domain service implementation for registration and login.
///
/// Sole owner of the decision to mint a token.
pub struct AuthService<UR, PH, TC>
where
    UR: UserRepository,
    PH: PasswordHashing,
    TC: TokenCodec,
{
    repository: Arc<UR>,
    password_hasher: Arc<PH>,
    token_codec: Arc<TC>,
    dummy_hash: OnceCell<Option<String>>,
}

impl<UR, PH, TC> AuthService<UR, PH, TC>
where
    UR: UserRepository,
    PH: PasswordHashing,
    TC: TokenCodec,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `password_hasher` - Password hashing implementation
    /// * `token_codec` - Token signing implementation, holding the secret
    pub fn new(repository: Arc<UR>, password_hasher: Arc<PH>, token_codec: Arc<TC>) -> Self {
        Self {
            repository,
            password_hasher,
            token_codec,
            dummy_hash: OnceCell::new(),
        }
    }

    /// Hashing is CPU bound; keep it off the async workers.
    async fn hash_password(&self, password: String) -> Result<String, PasswordError> {
        let hasher = Arc::clone(&self.password_hasher);
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
    }

    async fn check_password(&self, hash: String, password: String) -> Result<(), PasswordError> {
        let hasher = Arc::clone(&self.password_hasher);
        tokio::task::spawn_blocking(move || hasher.check_password(&hash, &password))
            .await
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
    }

    async fn dummy_hash(&self) -> Option<&str> {
        self.dummy_hash
            .get_or_init(|| async {
                self.hash_password(TIMING_DUMMY_PASSWORD.to_string())
                    .await
                    .map_err(|e| tracing::error!(error = %e, "Dummy hash unavailable"))
                    .ok()
            })
            .await
            .as_deref()
    }

    async fn find_user(&self, email: &EmailAddress) -> Option<User> {
        match self.repository.find_by_email(email).await {
            Ok(Some(user)) => Some(user),
            Ok(None) => {
                tracing::debug!("Login rejected: unknown email");
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "Login rejected: user lookup failed");
                None
            }
        }
    }
}

#[async_trait]
impl<UR, PH, TC> AuthServicePort for AuthService<UR, PH, TC>
where
    UR: UserRepository,
    PH: PasswordHashing,
    TC: TokenCodec,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError> {
        let password_hash = self
            .hash_password(command.password.expose().to_string())
            .await
            .map_err(AuthError::Hashing)?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            role: command.role,
            created_at: now,
            updated_at: now,
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            role = %created_user.role,
            "User registered"
        );

        Ok(created_user)
    }

    async fn login(&self, email: &EmailAddress, password: &str) -> Result<String, AuthError> {
        let Some(user) = self.find_user(email).await else {
            if let Some(hash) = self.dummy_hash().await {
                let _ = self
                    .check_password(hash.to_string(), password.to_string())
                    .await;
            }
            return Err(AuthError::InvalidCredentials);
        };

        self.check_password(user.password_hash.clone(), password.to_string())
            .await
            .map_err(|_| {
                tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
                AuthError::InvalidCredentials
            })?;

        let claims = Claims::for_user(
            user.id,
            user.email.as_str(),
            user.role.as_str(),
            TOKEN_TTL_HOURS,
        );

        let token = self
            .token_codec
            .generate_token(&claims)
            .map_err(AuthError::Signing)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(token)
    }
}
