//! In-memory stores, used when no database is wanted (tests, dry runs).

use super::source::{OptionStore, UserDirectory};
use super::types::UserRecord;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Default)]
pub struct MemoryOptionStore {
    options: RwLock<HashMap<String, String>>,
}

impl MemoryOptionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OptionStore for MemoryOptionStore {
    fn get_option(&self, name: &str) -> Result<Option<String>> {
        let options = self.options.read().unwrap_or_else(PoisonError::into_inner);
        Ok(options.get(name).cloned())
    }

    fn update_option(&self, name: &str, value: &str) -> Result<()> {
        let mut options = self.options.write().unwrap_or_else(PoisonError::into_inner);
        options.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn delete_option(&self, name: &str) -> Result<bool> {
        let mut options = self.options.write().unwrap_or_else(PoisonError::into_inner);
        Ok(options.remove(name).is_some())
    }
}

#[derive(Debug, Default)]
pub struct MemoryUserDirectory {
    users: RwLock<Vec<UserRecord>>,
}

impl MemoryUserDirectory {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Users still present, in insertion order.
    pub fn snapshot(&self) -> Vec<UserRecord> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl UserDirectory for MemoryUserDirectory {
    fn list_users(&self) -> Result<Vec<UserRecord>> {
        Ok(self.snapshot())
    }

    fn delete_user(&self, id: u64) -> Result<bool> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        let before = users.len();
        users.retain(|user| user.id != id);
        Ok(users.len() < before)
    }
}
