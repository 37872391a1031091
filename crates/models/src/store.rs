use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ModelError;
use crate::user::{NewUser, User};

#[derive(Debug)]
struct Table {
    users: Vec<User>,
    next_id: i64,
}

/// In-memory user table.
///
/// The record list and the ID counter sit behind one lock: `add` and `update` hold the
/// write half for their whole check-then-mutate sequence, readers clone out snapshots.
/// Cloning the store clones the handle, not the table.
#[derive(Clone, Debug)]
pub struct UserStore {
    inner: Arc<RwLock<Table>>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(Table { users: Vec::new(), next_id: 1 })) }
    }

    /// Build a store and add each candidate in order.
    pub async fn with_users<I>(users: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = NewUser>,
    {
        let store = Self::new();
        for u in users {
            store.add(u).await?;
        }
        Ok(store)
    }

    /// Assign the next ID, stamp both timestamps and append.
    /// Fails with `DuplicateName` when a stored user has the same first and last name.
    pub async fn add(&self, candidate: NewUser) -> Result<User, ModelError> {
        let mut table = self.inner.write().await;
        Self::insert(&mut table, candidate)
    }

    /// `add`, then snapshot the table under the same write lock.
    pub async fn add_and_list(&self, candidate: NewUser) -> Result<(User, Vec<User>), ModelError> {
        let mut table = self.inner.write().await;
        let user = Self::insert(&mut table, candidate)?;
        Ok((user, table.users.clone()))
    }

    fn insert(table: &mut Table, candidate: NewUser) -> Result<User, ModelError> {
        if table.users.iter().any(|u| u.same_name(&candidate.first_name, &candidate.last_name)) {
            return Err(ModelError::DuplicateName {
                first_name: candidate.first_name,
                last_name: candidate.last_name,
            });
        }
        let now = Utc::now();
        let user = User {
            id: table.next_id,
            first_name: candidate.first_name,
            middle_initial: candidate.middle_initial,
            last_name: candidate.last_name,
            created_at: now,
            updated_at: now,
        };
        table.next_id += 1;
        table.users.push(user.clone());
        debug!(user_id = user.id, "user added");
        Ok(user)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<User, ModelError> {
        let table = self.inner.read().await;
        table.users.iter().find(|u| u.id == id).cloned().ok_or(ModelError::NotFound(id))
    }

    pub async fn get_by_name(&self, first_name: &str, last_name: &str) -> Result<User, ModelError> {
        let table = self.inner.read().await;
        table
            .users
            .iter()
            .find(|u| u.same_name(first_name, last_name))
            .cloned()
            .ok_or_else(|| ModelError::UnknownName {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            })
    }

    /// Snapshot of every record in insertion order.
    pub async fn list(&self) -> Vec<User> {
        let table = self.inner.read().await;
        debug!(count = table.users.len(), "listing users");
        table.users.clone()
    }

    /// Replace the record with `record.id` in full. `created_at` is kept from the stored
    /// record and `updated_at` is restamped.
    pub async fn update(&self, record: User) -> Result<User, ModelError> {
        let mut table = self.inner.write().await;
        let renamed_onto_other = table
            .users
            .iter()
            .any(|u| u.id != record.id && u.same_name(&record.first_name, &record.last_name));
        let slot = table
            .users
            .iter_mut()
            .find(|u| u.id == record.id)
            .ok_or(ModelError::NotFound(record.id))?;
        if renamed_onto_other {
            return Err(ModelError::DuplicateName {
                first_name: record.first_name,
                last_name: record.last_name,
            });
        }
        let created_at = slot.created_at;
        *slot = User { created_at, updated_at: Utc::now(), ..record };
        Ok(slot.clone())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
