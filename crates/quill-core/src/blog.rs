//! Blog facade - wires the stores, the admin gate, and the cross-store
//! account-deletion cascade behind one constructor.

use std::sync::Arc;

use uuid::Uuid;

use crate::admin::AdminGate;
use crate::config::BlogConfig;
use crate::domain::{Requester, Role};
use crate::error::DomainError;
use crate::ports::{PasswordService, StorageBackend};
use crate::seed;
use crate::store::{ContentStore, IdentityStore};

/// The assembled application core.
///
/// Presentation code talks to `identity` and `content` directly for
/// single-store operations and to the facade for anything that spans
/// both.
pub struct Blog {
    pub identity: IdentityStore,
    pub content: ContentStore,
    pub admin: AdminGate,
}

impl Blog {
    /// Open the blog against a storage backend: restore persisted state
    /// and, when configured, seed an empty store with demo content.
    pub async fn open(
        config: &BlogConfig,
        storage: Arc<dyn StorageBackend>,
        hasher: Arc<dyn PasswordService>,
    ) -> Result<Self, DomainError> {
        let identity = IdentityStore::new(storage.clone(), hasher.clone());
        identity.load().await?;

        let content = ContentStore::new(storage, config.persist_posts);
        content.load().await?;

        if config.seed_demo_content {
            identity
                .seed_if_empty(seed::demo_accounts(hasher.as_ref())?)
                .await?;
            content.seed_if_empty(seed::demo_posts()).await?;
        }

        let admin = AdminGate::new(&config.admin_email, &config.admin_password, hasher)?;
        tracing::info!(persist_posts = config.persist_posts, "blog opened");

        Ok(Self {
            identity,
            content,
            admin,
        })
    }

    /// The requester for the signed-in account, if any.
    pub async fn session_requester(&self) -> Option<Requester> {
        self.identity
            .current_user()
            .await
            .map(|account| Requester::member(account.id))
    }

    /// Delete an account and cascade to its posts. Admin only; the
    /// self-deletion guard of the identity store still applies. Returns
    /// the number of posts removed by the cascade.
    pub async fn delete_account(
        &self,
        id: Uuid,
        requester: Requester,
    ) -> Result<usize, DomainError> {
        if requester.role != Role::Admin {
            tracing::warn!(%id, "account deletion rejected: not admin");
            return Err(DomainError::AdminRequired);
        }
        let removed = self.identity.delete_account(id).await?;
        self.content.delete_posts_by_author(removed.id).await
    }
}
