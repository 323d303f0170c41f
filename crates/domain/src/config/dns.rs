use serde::{Deserialize, Serialize};

/// Upstream resolver configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Upstream DNS server IPs queried on port 53 (e.g. "1.1.1.1").
    /// When empty the system resolver configuration is used, falling back
    /// to well-known public servers if the system config cannot be read.
    #[serde(default)]
    pub upstream_servers: Vec<String>,

    /// Per-query timeout in milliseconds (default: 5000)
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Query attempts before giving up (default: 2)
    #[serde(default = "default_attempts")]
    pub attempts: usize,
}

fn default_query_timeout_ms() -> u64 {
    5_000
}

fn default_attempts() -> usize {
    2
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            upstream_servers: Vec::new(),
            query_timeout_ms: default_query_timeout_ms(),
            attempts: default_attempts(),
        }
    }
}
