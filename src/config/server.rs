//! Server configuration.

use std::{env, path::PathBuf};

/// Bind address and route manifest location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: String,
    pub manifest_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            manifest_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let bind_address =
            env::var("ROUTE_TEMPLATE_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        let manifest_path = env::var("ROUTE_MANIFEST_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            bind_address,
            manifest_path,
        }
    }
}
