//! Initialization helpers for the application startup.

use crate::config::Config;
use crate::db::DbClient;
use crate::domains::{CacheSlot, DomainCache, DomainListLoader};
use crate::host::AdminServer;
use crate::plugin::TempMailCleaner;
use crate::store::SqliteStore;
use crate::sweeper::UserSweeper;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Sets up the tracing subscriber with the configured filters.
pub fn setup_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let mut filter = config.logging.level.clone();

        // Keep connection-level chatter from the HTTP stack out unless asked for
        if !filter.contains("hyper") {
            filter.push_str(",hyper=warn");
        }

        tracing_subscriber::EnvFilter::new(filter)
    });

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Opens the SQLite database and makes sure the schema exists.
pub fn init_store(config: &Config) -> Result<Arc<DbClient>> {
    let path = &config.storage.sqlite_path;
    let client = DbClient::new(path.clone())
        .with_context(|| format!("Failed to open SQLite database {path}"))?;
    client
        .initialize()
        .context("Failed to initialize SQLite schema")?;
    Ok(Arc::new(client))
}

/// Wires the cleaner plugin onto a fresh admin host and activates it.
pub fn build_admin_host(config: &Config, db: Arc<DbClient>) -> Result<AdminServer> {
    let store = Arc::new(SqliteStore::new(db));

    let slot = Arc::new(CacheSlot::new(
        store.clone(),
        config.domains.cache_key.clone(),
    ));
    let loader = DomainListLoader::new(&config.domains.file_path, slot);
    let cache = Arc::new(DomainCache::new(loader));
    let sweeper = Arc::new(UserSweeper::new(cache.clone(), store));

    let plugin = TempMailCleaner::new(config.plugin.clone(), cache, sweeper);
    let mut host = AdminServer::new(plugin.info());
    plugin.register(&mut host);
    host.activate().context("Plugin activation failed")?;

    Ok(host)
}
