//! Identity store - owns the registered accounts and the current session.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::Account;
use crate::error::DomainError;
use crate::ports::{PasswordService, StorageBackend, StorageError};

use super::{ACCOUNTS_KEY, SESSION_KEY};

#[derive(Default)]
struct IdentityState {
    accounts: Vec<Account>,
    session: Option<Account>,
}

/// Registered-account list plus the at-most-one signed-in session.
///
/// Every mutation swaps the in-memory state first and then writes both
/// affected storage keys before returning, so a reload observes the same
/// accounts and session. A storage failure is reported to the caller as
/// [`DomainError::Storage`].
pub struct IdentityStore {
    storage: Arc<dyn StorageBackend>,
    hasher: Arc<dyn PasswordService>,
    state: RwLock<IdentityState>,
}

impl IdentityStore {
    pub fn new(storage: Arc<dyn StorageBackend>, hasher: Arc<dyn PasswordService>) -> Self {
        Self {
            storage,
            hasher,
            state: RwLock::new(IdentityState::default()),
        }
    }

    /// Restore accounts and session from storage. Absent keys leave the
    /// store empty.
    pub async fn load(&self) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if let Some(blob) = self.storage.get(ACCOUNTS_KEY).await? {
            state.accounts = serde_json::from_str(&blob).map_err(StorageError::from)?;
        }
        if let Some(blob) = self.storage.get(SESSION_KEY).await? {
            state.session = Some(serde_json::from_str(&blob).map_err(StorageError::from)?);
        }
        tracing::debug!(accounts = state.accounts.len(), "identity store loaded");
        Ok(())
    }

    /// Register a new account and sign it in.
    ///
    /// Fails with [`DomainError::DuplicateEmail`] when the raw email
    /// string is already taken (case-sensitive comparison, matching the
    /// uniqueness rule applied at registration time only).
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, DomainError> {
        let mut state = self.state.write().await;
        if state.accounts.iter().any(|a| a.email == email) {
            tracing::warn!(email, "registration rejected: email already taken");
            return Err(DomainError::DuplicateEmail);
        }

        let password_hash = self.hasher.hash(password)?;
        let account = Account::new(name.to_string(), email.to_string(), password_hash);
        state.accounts.push(account.clone());
        state.session = Some(account.clone());

        self.persist_accounts(&state.accounts).await?;
        self.persist_session(state.session.as_ref()).await?;
        tracing::info!(id = %account.id, "account registered");
        Ok(account)
    }

    /// Sign in with an email and password.
    ///
    /// Unknown email and wrong password both produce
    /// [`DomainError::InvalidCredentials`]; the session is untouched on
    /// failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<Account, DomainError> {
        let mut state = self.state.write().await;
        let Some(account) = state.accounts.iter().find(|a| a.email == email).cloned() else {
            tracing::debug!("login failed");
            return Err(DomainError::InvalidCredentials);
        };
        if !self.hasher.verify(password, &account.password_hash)? {
            tracing::debug!("login failed");
            return Err(DomainError::InvalidCredentials);
        }

        state.session = Some(account.clone());
        self.persist_session(state.session.as_ref()).await?;
        tracing::info!(id = %account.id, "signed in");
        Ok(account)
    }

    /// Clear the session unconditionally.
    pub async fn logout(&self) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        state.session = None;
        self.persist_session(None).await?;
        tracing::info!("signed out");
        Ok(())
    }

    /// Remove an account and return it.
    ///
    /// The signed-in account cannot remove itself; that request fails
    /// with [`DomainError::SelfDeletionForbidden`] and leaves the
    /// collection untouched.
    pub async fn delete_account(&self, id: Uuid) -> Result<Account, DomainError> {
        let mut state = self.state.write().await;
        if state.session.as_ref().is_some_and(|s| s.id == id) {
            tracing::warn!(%id, "refusing to delete the signed-in account");
            return Err(DomainError::SelfDeletionForbidden);
        }
        let index = state
            .accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or(DomainError::AccountNotFound(id))?;
        let removed = state.accounts.remove(index);

        self.persist_accounts(&state.accounts).await?;
        tracing::info!(%id, "account deleted");
        Ok(removed)
    }

    /// The currently signed-in account, if any.
    pub async fn current_user(&self) -> Option<Account> {
        self.state.read().await.session.clone()
    }

    /// Snapshot of all registered accounts, in registration order.
    pub async fn accounts(&self) -> Vec<Account> {
        self.state.read().await.accounts.clone()
    }

    /// Seed the account list when it is empty. Used for demo content
    /// only; a non-empty store is left alone.
    pub(crate) async fn seed_if_empty(&self, accounts: Vec<Account>) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if !state.accounts.is_empty() {
            return Ok(());
        }
        tracing::info!(count = accounts.len(), "seeding demo accounts");
        state.accounts = accounts;
        self.persist_accounts(&state.accounts).await?;
        Ok(())
    }

    async fn persist_accounts(&self, accounts: &[Account]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(accounts)?;
        self.storage.put(ACCOUNTS_KEY, &blob).await
    }

    async fn persist_session(&self, session: Option<&Account>) -> Result<(), StorageError> {
        match session {
            Some(account) => {
                let blob = serde_json::to_string(account)?;
                self.storage.put(SESSION_KEY, &blob).await
            }
            None => self.storage.remove(SESSION_KEY).await,
        }
    }
}
