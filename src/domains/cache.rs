//! Cache-aside access to the domain list.
//!
//! The list lives under a single option key. There is no expiry: a present
//! value (even an empty list) is returned as-is until it is cleared.

use super::list::DomainList;
use super::loader::DomainListLoader;
use super::traits::DomainProvider;
use crate::store::OptionStore;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The option key holding the serialized domain list.
pub struct CacheSlot {
    store: Arc<dyn OptionStore>,
    key: String,
}

impl CacheSlot {
    pub fn new(store: Arc<dyn OptionStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// A value that does not decode as a list of strings reads as absent.
    pub fn read(&self) -> Result<Option<DomainList>> {
        let raw = self
            .store
            .get_option(&self.key)
            .with_context(|| format!("Failed to read option '{}'", self.key))?;
        let Some(raw) = raw else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(domains) => Ok(Some(domains)),
            Err(e) => {
                warn!(
                    "Option '{}' does not hold a domain list ({}), reloading",
                    self.key, e
                );
                Ok(None)
            }
        }
    }

    pub fn write(&self, domains: &DomainList) -> Result<()> {
        let raw = serde_json::to_string(domains)?;
        self.store
            .update_option(&self.key, &raw)
            .with_context(|| format!("Failed to write option '{}'", self.key))
    }

    pub fn clear(&self) -> Result<bool> {
        self.store
            .delete_option(&self.key)
            .with_context(|| format!("Failed to delete option '{}'", self.key))
    }
}

pub struct DomainCache {
    loader: DomainListLoader,
}

impl DomainCache {
    pub fn new(loader: DomainListLoader) -> Self {
        Self { loader }
    }

    pub fn get_domains(&self) -> Result<DomainList> {
        if let Some(domains) = self.loader.cache().read()? {
            debug!("Domain cache hit ({} entries)", domains.len());
            return Ok(domains);
        }

        debug!("Domain cache miss, loading {}", self.loader.path().display());
        self.loader.load()
    }

    /// Drops the cached list so the next access reloads the file.
    pub fn clear(&self) -> Result<bool> {
        let removed = self.loader.cache().clear()?;
        if removed {
            info!("Cleared domain cache '{}'", self.loader.cache().key());
        }
        Ok(removed)
    }
}

impl DomainProvider for DomainCache {
    fn domains(&self) -> Result<DomainList> {
        self.get_domains()
    }
}
