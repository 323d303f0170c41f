//! Configuration module for lookupd
//!
//! Configuration structures organized by concern:
//! - `root`: main configuration, CLI overrides and loading
//! - `server`: HTTP server binding and API versioning
//! - `dns`: upstream resolver settings
//! - `database`: history database settings
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod database;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use database::DatabaseConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
