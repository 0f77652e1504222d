//! Derived views over the post collection.
//!
//! These are pure read projections computed at render time. None of them
//! is ever persisted; the stores only hand out collection-order
//! snapshots.

use crate::domain::Post;

/// Maximum number of posts shown by the "recent" view.
pub const RECENT_LIMIT: usize = 10;

/// The landing-page projection: one featured post and the rest of the
/// feed below it.
#[derive(Debug, Clone, Default)]
pub struct FrontPage {
    pub featured: Option<Post>,
    pub secondary: Vec<Post>,
}

/// Posts ordered newest first. Stable: publication-time ties keep their
/// collection order.
pub fn latest_first(posts: &[Post]) -> Vec<Post> {
    let mut ordered = posts.to_vec();
    ordered.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    ordered
}

/// Posts ordered oldest first.
pub fn history(posts: &[Post]) -> Vec<Post> {
    let mut ordered = posts.to_vec();
    ordered.sort_by(|a, b| a.published_at.cmp(&b.published_at));
    ordered
}

/// The newest posts, at most [`RECENT_LIMIT`] of them.
pub fn recent(posts: &[Post]) -> Vec<Post> {
    let mut ordered = latest_first(posts);
    ordered.truncate(RECENT_LIMIT);
    ordered
}

/// Split the latest-first ordering into a featured head and a secondary
/// tail.
pub fn front_page(posts: &[Post]) -> FrontPage {
    let mut ordered = latest_first(posts);
    if ordered.is_empty() {
        return FrontPage::default();
    }
    let featured = ordered.remove(0);
    FrontPage {
        featured: Some(featured),
        secondary: ordered,
    }
}
