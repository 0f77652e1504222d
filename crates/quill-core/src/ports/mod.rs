//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod storage;

pub use auth::{HashError, PasswordService};
pub use storage::{StorageBackend, StorageError};
