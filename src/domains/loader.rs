use super::cache::CacheSlot;
use super::list::DomainList;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Reads the bundled domain file and refreshes the cached copy.
pub struct DomainListLoader {
    path: PathBuf,
    cache: Arc<CacheSlot>,
}

impl DomainListLoader {
    pub fn new(path: impl Into<PathBuf>, cache: Arc<CacheSlot>) -> Self {
        Self {
            path: path.into(),
            cache,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn cache(&self) -> &Arc<CacheSlot> {
        &self.cache
    }

    fn parse_line(line: &str) -> Option<String> {
        let line = line.trim();
        // One domain per line, no comment syntax
        if line.is_empty() {
            return None;
        }
        Some(line.to_string())
    }

    pub fn parse(text: &str) -> DomainList {
        text.lines().filter_map(Self::parse_line).collect()
    }

    fn read_file(&self) -> Result<DomainList> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "Domain list {} not found, continuing with an empty list",
                    self.path.display()
                );
                Ok(DomainList::default())
            }
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read domain list {}", self.path.display())),
        }
    }

    /// Reads the file and overwrites the cached list, even when the result is empty.
    pub fn load(&self) -> Result<DomainList> {
        let domains = self.read_file()?;
        self.cache.write(&domains)?;
        info!(
            "Loaded {} disposable domains from {}",
            domains.len(),
            self.path.display()
        );
        Ok(domains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryOptionStore, OptionStore};
    use std::io::Write;

    fn loader_for(path: impl Into<PathBuf>) -> (DomainListLoader, Arc<MemoryOptionStore>) {
        let store = Arc::new(MemoryOptionStore::new());
        let slot = Arc::new(CacheSlot::new(store.clone(), "temp_mail_domains_cache"));
        (DomainListLoader::new(path, slot), store)
    }

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let list = DomainListLoader::parse("tempmail.com\n  guerrillamail.com  \n\n");
        assert_eq!(list.as_slice(), ["tempmail.com", "guerrillamail.com"]);
    }

    #[test]
    fn test_parse_whitespace_only_lines_are_dropped() {
        let list = DomainListLoader::parse("\t\n   \nyopmail.com\r\n\r\n mailinator.com");
        assert_eq!(list.as_slice(), ["yopmail.com", "mailinator.com"]);
    }

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        let list = DomainListLoader::parse("b.com\na.com\nb.com\n");
        assert_eq!(list.as_slice(), ["b.com", "a.com", "b.com"]);
    }

    #[test]
    fn test_load_writes_cache() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "tempmail.com\n  guerrillamail.com  \n\n").unwrap();

        let (loader, store) = loader_for(file.path());
        let list = loader.load().unwrap();

        assert_eq!(list.as_slice(), ["tempmail.com", "guerrillamail.com"]);
        assert_eq!(
            store.get_option("temp_mail_domains_cache").unwrap().as_deref(),
            Some(r#"["tempmail.com","guerrillamail.com"]"#)
        );
    }

    #[test]
    fn test_load_is_deterministic() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a.com\n b.com\n\nc.com").unwrap();

        let (loader, _store) = loader_for(file.path());
        let first = loader.load().unwrap();
        let second = loader.load().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_file_caches_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let (loader, store) = loader_for(dir.path().join("missing.txt"));

        let list = loader.load().unwrap();
        assert!(list.is_empty());
        assert_eq!(
            store.get_option("temp_mail_domains_cache").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory exists but cannot be read as a file
        let (loader, store) = loader_for(dir.path());

        assert!(loader.load().is_err());
        assert_eq!(store.get_option("temp_mail_domains_cache").unwrap(), None);
    }
}
