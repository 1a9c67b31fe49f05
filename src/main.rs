use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use tracing::info;

use tempmail_cleaner::config::Config;
use tempmail_cleaner::host::serve;
use tempmail_cleaner::init::{build_admin_host, init_store, setup_logging};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load Config
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config_found = Path::new(&config_path).exists();
    let config = if config_found {
        Config::load(&config_path).await?
    } else {
        Config::default()
    };

    // 2. Setup Logging
    setup_logging(&config);
    info!("Starting tempmail-cleaner...");

    if !config_found {
        info!("Config file not found, using defaults.");
    }

    // 3. Open Storage
    let db = init_store(&config)?;

    // 4. Register & Activate Plugin
    let host = build_admin_host(&config, db)?;

    // 5. Serve Admin UI until Ctrl-C
    let ip: IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid server host {}", config.server.host))?;
    serve(host.router()?, SocketAddr::new(ip, config.server.port)).await
}
