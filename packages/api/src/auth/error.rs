use thiserror::Error;

/// Errors from the password authentication path.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to hash password: {0}")]
    Hash(String),
    #[error("Invalid password hash: {0}")]
    InvalidStoredHash(String),
}
