use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of leading words kept in a post excerpt.
pub const EXCERPT_WORDS: usize = 20;

/// Reading speed assumed by the read-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Post entity - a published article owned by exactly one account.
///
/// `excerpt` and `read_time` are derived from `content` and recomputed
/// whenever the content changes. `author` is a denormalized copy of the
/// author's display name taken at publication time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub author_id: Uuid,
    pub published_at: DateTime<Utc>,
    pub read_time: u32,
    pub image_url: Option<String>,
}

/// Fields supplied by the author when publishing a new post.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_id: Uuid,
    pub image_url: Option<String>,
}

/// Partial update to an existing post. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

impl Post {
    /// Publish a draft: assigns a fresh id, stamps `published_at`, and
    /// derives excerpt and read time from the content.
    pub fn publish(draft: PostDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            excerpt: excerpt(&draft.content),
            read_time: read_time(&draft.content),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            author_id: draft.author_id,
            published_at: Utc::now(),
            image_url: draft.image_url,
        }
    }

    /// Merge the supplied fields into this post. A content change also
    /// recomputes the derived excerpt and read time.
    pub fn apply(&mut self, changes: PostUpdate) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.excerpt = excerpt(&content);
            self.read_time = read_time(&content);
            self.content = content;
        }
        if let Some(image_url) = changes.image_url {
            self.image_url = Some(image_url);
        }
    }
}

/// First `EXCERPT_WORDS` whitespace-delimited words of `content`, joined
/// by single spaces, with a trailing ellipsis only when the content is
/// longer than that.
pub fn excerpt(content: &str) -> String {
    let words: Vec<&str> = content.split_whitespace().collect();
    if words.len() > EXCERPT_WORDS {
        let mut out = words[..EXCERPT_WORDS].join(" ");
        out.push_str("...");
        out
    } else {
        words.join(" ")
    }
}

/// Estimated reading time in whole minutes, never below one.
pub fn read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}
