use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::str::FromStr;

use super::database::DatabaseConfig;
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

/// Process configuration, built once at startup and injected into the
/// components that need it. Business logic never reads ambient state.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
}

impl Config {
    /// Loads configuration from an optional TOML file and applies CLI
    /// overrides. With no file, defaults apply.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p).map_err(|source| ConfigError::Io {
                    path: p.to_string(),
                    source,
                })?;
                toml::from_str(&raw)?
            }
            None => Self::default(),
        };

        if let Some(port) = overrides.web_port {
            config.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            config.server.bind_address = bind;
        }
        if let Some(db_path) = overrides.database_path {
            config.database.path = db_path;
        }

        if std::env::var_os("KUBERNETES_SERVICE_HOST").is_some() {
            config.server.kubernetes = true;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.api_version.is_empty() || self.server.api_version.contains('/') {
            return Err(ConfigError::Invalid(format!(
                "api_version must be a single path segment, got {:?}",
                self.server.api_version
            )));
        }
        if self.server.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "bind_address is not a valid IP address: {:?}",
                self.server.bind_address
            )));
        }
        if self.dns.query_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "dns.query_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.dns.attempts == 0 {
            return Err(ConfigError::Invalid(
                "dns.attempts must be greater than zero".to_string(),
            ));
        }
        for server in &self.dns.upstream_servers {
            if IpAddr::from_str(server).is_err() {
                return Err(ConfigError::Invalid(format!(
                    "upstream server is not a valid IP address: {server:?}"
                )));
            }
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
