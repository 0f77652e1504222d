//! Built-in demo content.
//!
//! An empty store is seeded with two accounts and two posts so a fresh
//! install has something to show. Ids and publication dates are fixed so
//! the seed posts stay linked to the seed accounts across reloads.

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::domain::{Account, Post, excerpt, read_time};
use crate::ports::PasswordService;

const DEMO_AUTHOR_JOHN: Uuid = Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0001);
const DEMO_AUTHOR_JANE: Uuid = Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0002);

const DEMO_PASSWORD: &str = "password123";

/// The two demo accounts. Hashing happens here so the hasher in use
/// decides the stored form.
pub fn demo_accounts(
    hasher: &dyn PasswordService,
) -> Result<Vec<Account>, crate::error::DomainError> {
    let hash = hasher.hash(DEMO_PASSWORD)?;
    Ok(vec![
        Account {
            id: DEMO_AUTHOR_JOHN,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password_hash: hash.clone(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        },
        Account {
            id: DEMO_AUTHOR_JANE,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: hash,
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap(),
        },
    ])
}

/// The two demo posts, newest first.
pub fn demo_posts() -> Vec<Post> {
    let first_body = "The web platform keeps absorbing ideas that used to need a \
        framework. Islands, streaming markup, and edge rendering are quietly \
        becoming table stakes, and the interesting question is no longer which \
        bundler to pick but how little client code you can ship while keeping \
        the experience rich.";
    let second_body = "Most of what feels new in modern JavaScript is old \
        discipline wearing new syntax. Modules gave us boundaries, async and \
        await gave us honest control flow, and iterators gave us laziness. \
        Learn those three well and the rest of the language starts reading \
        like footnotes.";

    vec![
        Post {
            id: Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0101),
            title: "The Future of Web Development".to_string(),
            content: first_body.to_string(),
            excerpt: excerpt(first_body),
            author: "John Doe".to_string(),
            author_id: DEMO_AUTHOR_JOHN,
            published_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            read_time: read_time(first_body),
            image_url: Some(
                "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800".to_string(),
            ),
        },
        Post {
            id: Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0102),
            title: "Understanding Modern JavaScript".to_string(),
            content: second_body.to_string(),
            excerpt: excerpt(second_body),
            author: "Jane Smith".to_string(),
            author_id: DEMO_AUTHOR_JANE,
            published_at: Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap(),
            read_time: read_time(second_body),
            image_url: Some(
                "https://images.unsplash.com/photo-1627398242454-45a1465c2479?w=800".to_string(),
            ),
        },
    ]
}
