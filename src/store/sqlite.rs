//! SQLite-backed option store and user directory.
//!
//! Both traits are served by the same `DbClient`, mirroring a host whose
//! options and users live in one database.

use super::source::{OptionStore, UserDirectory};
use super::types::UserRecord;
use crate::db::DbClient;
use anyhow::Result;
use std::sync::Arc;

pub struct SqliteStore {
    db: Arc<DbClient>,
}

impl SqliteStore {
    pub fn new(db: Arc<DbClient>) -> Self {
        Self { db }
    }
}

impl OptionStore for SqliteStore {
    fn get_option(&self, name: &str) -> Result<Option<String>> {
        Ok(self.db.get_option(name)?)
    }

    fn update_option(&self, name: &str, value: &str) -> Result<()> {
        Ok(self.db.update_option(name, value)?)
    }

    fn delete_option(&self, name: &str) -> Result<bool> {
        Ok(self.db.delete_option(name)?)
    }
}

impl UserDirectory for SqliteStore {
    fn list_users(&self) -> Result<Vec<UserRecord>> {
        Ok(self.db.list_users()?)
    }

    fn delete_user(&self, id: u64) -> Result<bool> {
        Ok(self.db.delete_user(id)?)
    }
}
