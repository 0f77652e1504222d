//! Password hashing port.

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password with a fresh salt.
    fn hash(&self, password: &str) -> Result<String, HashError>;

    /// Verify a password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}

/// Password hashing errors.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("hashing error: {0}")]
    Hashing(String),

    #[error("malformed password hash: {0}")]
    MalformedHash(String),
}
