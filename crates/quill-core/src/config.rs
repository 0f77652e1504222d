//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Blog configuration.
#[derive(Debug, Clone)]
pub struct BlogConfig {
    /// Directory for file-backed storage. `None` means in-memory only.
    pub data_dir: Option<PathBuf>,
    /// Whether the post collection is written to storage. Off by
    /// default; accounts and the session are always persisted.
    pub persist_posts: bool,
    /// Seed demo accounts and posts into an empty store on open.
    pub seed_demo_content: bool,
    /// Administrator credential pair, independent of the account list.
    pub admin_email: String,
    pub admin_password: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            persist_posts: false,
            seed_demo_content: true,
            admin_email: "admin@example.com".to_string(),
            admin_password: "change-me".to_string(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from `QUILL_*` environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_dir: env::var("QUILL_DATA_DIR").ok().map(PathBuf::from),
            persist_posts: env::var("QUILL_PERSIST_POSTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.persist_posts),
            seed_demo_content: env::var("QUILL_SEED_DEMO")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.seed_demo_content),
            admin_email: env::var("QUILL_ADMIN_EMAIL").unwrap_or(defaults.admin_email),
            admin_password: env::var("QUILL_ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
        }
    }
}
