use super::types::UserRecord;
use anyhow::Result;

/// Key-value option store (get-by-key, upsert, delete).
pub trait OptionStore: Send + Sync {
    fn get_option(&self, name: &str) -> Result<Option<String>>;
    fn update_option(&self, name: &str, value: &str) -> Result<()>;
    /// Returns `true` if a value was removed.
    fn delete_option(&self, name: &str) -> Result<bool>;
}

/// The externally owned set of registered users.
pub trait UserDirectory: Send + Sync {
    fn list_users(&self) -> Result<Vec<UserRecord>>;
    /// Returns `false` if the user was already gone.
    fn delete_user(&self, id: u64) -> Result<bool>;
}
