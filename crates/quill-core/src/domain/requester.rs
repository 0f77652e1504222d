use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Permission level of a requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Member,
    Admin,
}

/// The principal presented to content mutations: who is asking, and with
/// what privilege. Members may only touch their own posts; admins may
/// touch any.
#[derive(Debug, Clone, Copy)]
pub struct Requester {
    pub id: Uuid,
    pub role: Role,
}

impl Requester {
    pub fn member(id: Uuid) -> Self {
        Self {
            id,
            role: Role::Member,
        }
    }

    pub fn admin(id: Uuid) -> Self {
        Self {
            id,
            role: Role::Admin,
        }
    }

    /// Ownership check: admins always pass, members pass only for their
    /// own posts.
    pub fn may_modify(&self, author_id: Uuid) -> bool {
        self.role == Role::Admin || self.id == author_id
    }
}
