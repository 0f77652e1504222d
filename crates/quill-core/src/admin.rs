//! Administrator gate.
//!
//! The administrator is a separate credential pair, not an account in
//! the identity store. A successful check yields a [`Requester`] with
//! [`Role::Admin`], which the content store recognizes directly; the
//! admin never impersonates a post's owner.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Requester;
use crate::error::DomainError;
use crate::ports::PasswordService;

pub struct AdminGate {
    email: String,
    password_hash: String,
    admin_id: Uuid,
    hasher: Arc<dyn PasswordService>,
}

impl AdminGate {
    /// Build the gate from the configured credential pair. The password
    /// is hashed once here and the plain text is not retained.
    pub fn new(
        email: &str,
        password: &str,
        hasher: Arc<dyn PasswordService>,
    ) -> Result<Self, DomainError> {
        let password_hash = hasher.hash(password)?;
        Ok(Self {
            email: email.to_string(),
            password_hash,
            admin_id: Uuid::new_v4(),
            hasher,
        })
    }

    /// Check the supplied credentials against the configured pair.
    /// Failure is undifferentiated, like member login.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Requester, DomainError> {
        if email != self.email || !self.hasher.verify(password, &self.password_hash)? {
            tracing::warn!("admin login failed");
            return Err(DomainError::InvalidCredentials);
        }
        tracing::info!("admin signed in");
        Ok(Requester::admin(self.admin_id))
    }
}
