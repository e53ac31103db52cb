use super::errors::PasswordError;

/// One-way password hashing capability.
///
/// Services depend on this trait rather than on a concrete algorithm so the
/// credential flow can be exercised with stubs.
pub trait PasswordHashing: Send + Sync + 'static {
    /// Hash a plaintext password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - The underlying algorithm rejected its parameters
    fn hash_password(&self, password: &str) -> Result<String, PasswordError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// # Errors
    /// * `Mismatch` - Password does not match or the hash is unusable
    fn check_password(&self, hash: &str, password: &str) -> Result<(), PasswordError>;
}
