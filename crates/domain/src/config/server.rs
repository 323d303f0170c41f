use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_web_port")]
    pub web_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Path segment prefixing the versioned API routes (default: "v1").
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Reported by `GET /`. Forced to `true` when the process detects the
    /// `KUBERNETES_SERVICE_HOST` environment variable at load time.
    #[serde(default)]
    pub kubernetes: bool,
}

fn default_web_port() -> u16 {
    8080
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_api_version() -> String {
    "v1".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            web_port: default_web_port(),
            bind_address: default_bind_address(),
            api_version: default_api_version(),
            kubernetes: false,
        }
    }
}
