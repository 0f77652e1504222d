//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

use crate::ports::{HashError, StorageError};

/// Domain errors - business rule failures surfaced by the stores.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("an account with this email is already registered")]
    DuplicateEmail,

    /// Deliberately undifferentiated: unknown email and wrong password
    /// produce the same variant.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("the signed-in account cannot delete itself")]
    SelfDeletionForbidden,

    #[error("account not found: {0}")]
    AccountNotFound(Uuid),

    #[error("post not found: {0}")]
    PostNotFound(Uuid),

    #[error("requester is not the owner of this post")]
    NotOwner,

    #[error("administrator privileges required")]
    AdminRequired,

    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),

    #[error("password hashing failed: {0}")]
    Hash(String),
}

impl From<HashError> for DomainError {
    fn from(err: HashError) -> Self {
        DomainError::Hash(err.to_string())
    }
}
