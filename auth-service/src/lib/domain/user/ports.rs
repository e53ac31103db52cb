use async_trait::async_trait;

use crate::domain::user::errors::AuthError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// Hashes the plaintext password before anything is persisted.
    ///
    /// # Errors
    /// * `Hashing` - Password hashing failed, nothing was written
    /// * `User` - Persistence failed (duplicate email, database error)
    async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, storage failure or wrong password
    /// * `Signing` - Token could not be signed
    async fn login(&self, email: &EmailAddress, password: &str) -> Result<String, AuthError>;
}

/// Persistence operations for users.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Some(User) if found, None otherwise
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
}
