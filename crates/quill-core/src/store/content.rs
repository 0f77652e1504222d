//! Content store - owns the post collection.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Post, PostDraft, PostUpdate, Requester};
use crate::error::DomainError;
use crate::ports::{StorageBackend, StorageError};

use super::POSTS_KEY;

/// The post collection, newest-first by insertion.
///
/// Mutations are gated by the requester's permission: members may only
/// touch posts whose `author_id` matches their own id, admins may touch
/// any post. Insertion order is a convenience; read orderings are the
/// concern of [`crate::feed`].
///
/// Persistence is optional (`persist_posts`). When disabled the
/// collection is purely in-memory and reverts to seed content on reload.
pub struct ContentStore {
    storage: Arc<dyn StorageBackend>,
    persist_posts: bool,
    posts: RwLock<Vec<Post>>,
}

impl ContentStore {
    pub fn new(storage: Arc<dyn StorageBackend>, persist_posts: bool) -> Self {
        Self {
            storage,
            persist_posts,
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Restore the collection from storage. A no-op when persistence is
    /// disabled or the key is absent.
    pub async fn load(&self) -> Result<(), DomainError> {
        if !self.persist_posts {
            return Ok(());
        }
        if let Some(blob) = self.storage.get(POSTS_KEY).await? {
            let mut posts = self.posts.write().await;
            *posts = serde_json::from_str(&blob).map_err(StorageError::from)?;
            tracing::debug!(count = posts.len(), "content store loaded");
        }
        Ok(())
    }

    /// Publish a draft and prepend it to the collection.
    pub async fn create_post(&self, draft: PostDraft) -> Result<Post, DomainError> {
        let post = Post::publish(draft);
        let mut posts = self.posts.write().await;
        posts.insert(0, post.clone());
        self.persist(&posts).await?;
        tracing::info!(id = %post.id, author = %post.author_id, "post published");
        Ok(post)
    }

    /// Remove a post, subject to the requester's permission.
    pub async fn delete_post(&self, id: Uuid, requester: Requester) -> Result<(), DomainError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(DomainError::PostNotFound(id))?;
        if !requester.may_modify(posts[index].author_id) {
            tracing::warn!(post = %id, requester = %requester.id, "delete rejected: not owner");
            return Err(DomainError::NotOwner);
        }
        posts.remove(index);
        self.persist(&posts).await?;
        tracing::info!(id = %id, "post deleted");
        Ok(())
    }

    /// Merge a partial update into a post, subject to the requester's
    /// permission. Returns the updated post.
    pub async fn update_post(
        &self,
        id: Uuid,
        changes: PostUpdate,
        requester: Requester,
    ) -> Result<Post, DomainError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::PostNotFound(id))?;
        if !requester.may_modify(post.author_id) {
            tracing::warn!(post = %id, requester = %requester.id, "update rejected: not owner");
            return Err(DomainError::NotOwner);
        }
        post.apply(changes);
        let updated = post.clone();
        self.persist(&posts).await?;
        tracing::info!(id = %id, "post updated");
        Ok(updated)
    }

    /// Remove every post by the given author. No per-post ownership
    /// check; invoked by the account-deletion cascade only.
    pub(crate) async fn delete_posts_by_author(
        &self,
        author_id: Uuid,
    ) -> Result<usize, DomainError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.author_id != author_id);
        let removed = before - posts.len();
        if removed > 0 {
            self.persist(&posts).await?;
            tracing::info!(author = %author_id, removed, "cascaded post deletion");
        }
        Ok(removed)
    }

    /// Look a post up by id.
    pub async fn post(&self, id: Uuid) -> Option<Post> {
        self.posts.read().await.iter().find(|p| p.id == id).cloned()
    }

    /// All posts by one author, in collection order.
    pub async fn posts_by_author(&self, author_id: Uuid) -> Vec<Post> {
        self.posts
            .read()
            .await
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect()
    }

    /// Snapshot of the whole collection, in collection order.
    pub async fn posts(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    /// Seed the collection when it is empty. A non-empty store is left
    /// alone.
    pub(crate) async fn seed_if_empty(&self, seed: Vec<Post>) -> Result<(), DomainError> {
        let mut posts = self.posts.write().await;
        if !posts.is_empty() {
            return Ok(());
        }
        tracing::info!(count = seed.len(), "seeding demo posts");
        *posts = seed;
        self.persist(&posts).await?;
        Ok(())
    }

    async fn persist(&self, posts: &[Post]) -> Result<(), StorageError> {
        if !self.persist_posts {
            return Ok(());
        }
        let blob = serde_json::to_string(posts)?;
        self.storage.put(POSTS_KEY, &blob).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::testutil::MapStorage;
    use super::*;

    fn store() -> ContentStore {
        ContentStore::new(Arc::new(MapStorage::new()), false)
    }

    fn draft(author_id: Uuid, content: &str) -> PostDraft {
        PostDraft {
            title: "A title".into(),
            content: content.into(),
            author: "Ada".into(),
            author_id,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn create_prepends_newest_post() {
        let store = store();
        let author = Uuid::new_v4();
        let first = store.create_post(draft(author, "first")).await.unwrap();
        let second = store.create_post(draft(author, "second")).await.unwrap();

        let posts = store.posts().await;
        assert_eq!(posts[0].id, second.id);
        assert_eq!(posts[1].id, first.id);
    }

    #[tokio::test]
    async fn delete_by_non_owner_is_rejected_and_post_survives() {
        let store = store();
        let author = Uuid::new_v4();
        let post = store.create_post(draft(author, "body")).await.unwrap();

        let stranger = Requester::member(Uuid::new_v4());
        let err = store.delete_post(post.id, stranger).await.unwrap_err();
        assert!(matches!(err, DomainError::NotOwner));
        assert!(store.post(post.id).await.is_some());
    }

    #[tokio::test]
    async fn owner_can_delete_their_post() {
        let store = store();
        let author = Uuid::new_v4();
        let post = store.create_post(draft(author, "body")).await.unwrap();

        store
            .delete_post(post.id, Requester::member(author))
            .await
            .unwrap();
        assert!(store.post(post.id).await.is_none());
    }

    #[tokio::test]
    async fn admin_can_modify_a_foreign_post() {
        let store = store();
        let author = Uuid::new_v4();
        let post = store.create_post(draft(author, "body")).await.unwrap();

        let admin = Requester::admin(Uuid::new_v4());
        let updated = store
            .update_post(
                post.id,
                PostUpdate {
                    title: Some("moderated".into()),
                    ..Default::default()
                },
                admin,
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "moderated");

        store.delete_post(post.id, admin).await.unwrap();
        assert!(store.post(post.id).await.is_none());
    }

    #[tokio::test]
    async fn update_merges_only_supplied_fields() {
        let store = store();
        let author = Uuid::new_v4();
        let mut d = draft(author, "the original body text");
        d.image_url = Some("https://example.com/cover.png".into());
        let post = store.create_post(d).await.unwrap();

        let updated = store
            .update_post(
                post.id,
                PostUpdate {
                    title: Some("renamed".into()),
                    ..Default::default()
                },
                Requester::member(author),
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.content, post.content);
        assert_eq!(updated.excerpt, post.excerpt);
        assert_eq!(updated.read_time, post.read_time);
        assert_eq!(updated.image_url, post.image_url);
        assert_eq!(updated.published_at, post.published_at);
    }

    #[tokio::test]
    async fn missing_post_is_reported_as_not_found() {
        let store = store();
        let requester = Requester::member(Uuid::new_v4());
        let id = Uuid::new_v4();
        assert!(matches!(
            store.delete_post(id, requester).await.unwrap_err(),
            DomainError::PostNotFound(_)
        ));
        assert!(matches!(
            store
                .update_post(id, PostUpdate::default(), requester)
                .await
                .unwrap_err(),
            DomainError::PostNotFound(_)
        ));
    }

    #[tokio::test]
    async fn posts_by_author_preserves_collection_order() {
        let store = store();
        let ada = Uuid::new_v4();
        let bob = Uuid::new_v4();
        store.create_post(draft(ada, "a1")).await.unwrap();
        store.create_post(draft(bob, "b1")).await.unwrap();
        store.create_post(draft(ada, "a2")).await.unwrap();

        let posts = store.posts_by_author(ada).await;
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].content, "a2");
        assert_eq!(posts[1].content, "a1");
    }

    #[tokio::test]
    async fn cascade_removes_only_the_given_author() {
        let store = store();
        let ada = Uuid::new_v4();
        let bob = Uuid::new_v4();
        store.create_post(draft(ada, "a1")).await.unwrap();
        store.create_post(draft(bob, "b1")).await.unwrap();
        store.create_post(draft(ada, "a2")).await.unwrap();

        let removed = store.delete_posts_by_author(ada).await.unwrap();
        assert_eq!(removed, 2);
        let remaining = store.posts().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].author_id, bob);
    }

    #[tokio::test]
    async fn persisted_posts_survive_a_reload() {
        let storage: Arc<dyn StorageBackend> = Arc::new(MapStorage::new());
        let store = ContentStore::new(storage.clone(), true);
        let author = Uuid::new_v4();
        let post = store.create_post(draft(author, "body")).await.unwrap();

        let reloaded = ContentStore::new(storage, true);
        reloaded.load().await.unwrap();
        assert!(reloaded.post(post.id).await.is_some());
    }

    #[tokio::test]
    async fn unpersisted_posts_do_not_survive_a_reload() {
        let storage: Arc<dyn StorageBackend> = Arc::new(MapStorage::new());
        let store = ContentStore::new(storage.clone(), false);
        let author = Uuid::new_v4();
        store.create_post(draft(author, "body")).await.unwrap();

        let reloaded = ContentStore::new(storage, false);
        reloaded.load().await.unwrap();
        assert!(reloaded.posts().await.is_empty());
    }

    #[tokio::test]
    async fn seed_leaves_a_non_empty_store_alone() {
        let store = store();
        let author = Uuid::new_v4();
        let post = store.create_post(draft(author, "body")).await.unwrap();

        store
            .seed_if_empty(vec![Post::publish(draft(Uuid::new_v4(), "seeded"))])
            .await
            .unwrap();
        let posts = store.posts().await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, post.id);
    }
}
