pub mod config;
pub mod db;
pub mod domains;
pub mod host;
pub mod init;
pub mod plugin;
pub mod store;
pub mod sweeper;
