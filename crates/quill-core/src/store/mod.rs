//! State containers - the two stateful components of the system.
//!
//! Everything else (feed views, admin gate) is a pure function over the
//! state these containers own.

mod content;
mod identity;

pub use content::ContentStore;
pub use identity::IdentityStore;

/// Storage key for the full account list.
pub const ACCOUNTS_KEY: &str = "allUsers";

/// Storage key for the current session.
pub const SESSION_KEY: &str = "currentUser";

/// Storage key for the post collection (used only when post persistence
/// is enabled).
pub const POSTS_KEY: &str = "posts";
