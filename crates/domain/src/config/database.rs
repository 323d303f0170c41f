use serde::{Deserialize, Serialize};

/// Database configuration for the lookup history
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to SQLite database file (default: "./lookupd.db")
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Maximum pool connections (default: 8)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!("sqlite://{}", self.path)
    }
}

fn default_db_path() -> String {
    "./lookupd.db".to_string()
}

fn default_max_connections() -> u32 {
    8
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}
