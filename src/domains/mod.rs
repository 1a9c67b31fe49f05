mod cache;
mod list;
mod loader;
mod matcher;
mod traits;

pub use cache::{CacheSlot, DomainCache};
pub use list::DomainList;
pub use loader::DomainListLoader;
pub use matcher::SubstringMatcher;
pub use traits::{DomainMatcher, DomainProvider};
