//! Password hashing adapters.

mod password;

pub use password::Argon2PasswordService;
