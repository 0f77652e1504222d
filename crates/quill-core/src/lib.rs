//! # Quill Core
//!
//! The domain layer of the Quill blog engine.
//! This crate contains the two state containers (identity and content),
//! the derived feed views, and the ports infrastructure must implement.
//! It has zero infrastructure dependencies.

pub mod admin;
pub mod blog;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;
pub mod ports;
pub mod seed;
pub mod store;

pub use blog::Blog;
pub use config::BlogConfig;
pub use error::DomainError;
