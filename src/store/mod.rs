//! Persistence seams: the option store holding the cached domain list and the
//! user directory the sweeper deletes from.

mod memory;
mod source;
mod sqlite;
mod types;

pub use memory::{MemoryOptionStore, MemoryUserDirectory};
pub use source::{OptionStore, UserDirectory};
pub use sqlite::SqliteStore;
pub use types::UserRecord;
