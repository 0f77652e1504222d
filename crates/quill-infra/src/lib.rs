//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! storage backends and password hashing.

pub mod auth;
pub mod storage;

pub use auth::Argon2PasswordService;
pub use storage::{JsonFileStorage, MemoryStorage};
