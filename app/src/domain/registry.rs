//! In-memory user registry for one app session.
//!
//! The registry is append-only: insertion order decides both display order
//! and marker colour, so entries are never reordered, deduplicated, edited, or
//! removed. Other screens only ever see a [`RegistrySnapshot`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::user::User;

/// Ordered, append-only collection of registered users.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user to the end of the sequence. Duplicates are allowed.
    pub fn append(&mut self, user: User) {
        self.users.push(user);
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether nobody has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterate users in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    /// Freeze the current contents for hand-off to another screen.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot(Arc::from(self.users.as_slice()))
    }
}

/// Immutable copy of the registry at a point in time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<User>", into = "Vec<User>")]
pub struct RegistrySnapshot(Arc<[User]>);

impl RegistrySnapshot {
    /// Users in registration order.
    pub fn users(&self) -> &[User] {
        &self.0
    }

    /// Number of users in the snapshot.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot holds no users.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<User>> for RegistrySnapshot {
    fn from(users: Vec<User>) -> Self {
        Self(Arc::from(users))
    }
}

impl From<RegistrySnapshot> for Vec<User> {
    fn from(snapshot: RegistrySnapshot) -> Self {
        snapshot.0.to_vec()
    }
}
