// SPDX-License-Identifier: MIT

//! In-memory user store.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::authority::UserStore;
use crate::error::{AuthError, Result};
use crate::models::UserRecord;

/// Vec-backed [`UserStore`] for tests and database-less embedders.
///
/// Lookups match username and email exactly (no collation).
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    users: Vec<UserRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a record by id.
    pub fn get(&self, id: Uuid) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All stored records.
    pub fn records(&self) -> &[UserRecord] {
        &self.users
    }
}

impl UserStore for MemoryStore {
    fn find_by_username_or_email(&self, username: &str, email: &str) -> Result<Option<UserRecord>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.username == username || u.email == email)
            .cloned())
    }

    fn insert(&mut self, record: &UserRecord) -> Result<()> {
        self.users.push(record.clone());
        Ok(())
    }

    fn update_last_login(&mut self, id: Uuid, at: DateTime<Utc>) -> Result<()> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AuthError::Store(format!("no user record for id {id}")))?;
        user.last_login = Some(at);
        Ok(())
    }
}
