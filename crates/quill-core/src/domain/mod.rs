//! Domain entities - the core business objects.

mod account;

mod post;

mod requester;

pub use account::Account;
pub use post::{EXCERPT_WORDS, Post, PostDraft, PostUpdate, WORDS_PER_MINUTE, excerpt, read_time};
pub use requester::{Requester, Role};
