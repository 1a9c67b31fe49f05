use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub domains: DomainsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub plugin: PluginConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Database holding both the `options` and `users` tables.
    #[serde(default = "default_sqlite_path")]
    pub sqlite_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DomainsConfig {
    #[serde(default = "default_domains_file")]
    pub file_path: String,
    /// Option name the loaded list is cached under.
    #[serde(default = "default_cache_key")]
    pub cache_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PluginConfig {
    #[serde(default = "default_plugin_name")]
    pub name: String,
    #[serde(default = "default_plugin_slug")]
    pub slug: String,
    #[serde(default = "default_menu_parent")]
    pub menu_parent: String,
    #[serde(default = "default_capability")]
    pub capability: String,
    #[serde(default = "default_project_url")]
    pub project_url: String,
}

// Defaults
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_sqlite_path() -> String {
    "tempmail-cleaner.db".to_string()
}
fn default_domains_file() -> String {
    "data/temp_mail_domains.txt".to_string()
}
fn default_cache_key() -> String {
    "temp_mail_domains_cache".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "text".to_string()
}
fn default_plugin_name() -> String {
    "WP TempMail Cleaner".to_string()
}
fn default_plugin_slug() -> String {
    "wp-temp-mail-cleaner".to_string()
}
fn default_menu_parent() -> String {
    "users.php".to_string()
}
fn default_capability() -> String {
    "manage_options".to_string()
}
fn default_project_url() -> String {
    "https://github.com/GabryB03/WP-TempMail-Cleaner".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            sqlite_path: default_sqlite_path(),
        }
    }
}

impl Default for DomainsConfig {
    fn default() -> Self {
        Self {
            file_path: default_domains_file(),
            cache_key: default_cache_key(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            name: default_plugin_name(),
            slug: default_plugin_slug(),
            menu_parent: default_menu_parent(),
            capability: default_capability(),
            project_url: default_project_url(),
        }
    }
}

impl Config {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .await
            .context("Failed to read config file")?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config TOML")
    }
}
