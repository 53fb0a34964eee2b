//! TOML configuration for the document server
//!
//! All settings are explicit construction-time values handed to the store
//! and server at startup. Defaults match the reference deployment: listen
//! on all interfaces, port 5000, documents under ./uploads.

use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Top-level server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to listen on
    pub bind_address: String,
    /// TCP port
    pub port: u16,
    /// Filesystem root for stored documents
    pub storage_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 5000,
            storage_dir: PathBuf::from("./uploads"),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_deployment() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.storage_dir, PathBuf::from("./uploads"));
    }

    #[test]
    fn partial_toml_fills_missing_fields_with_defaults() {
        let config: ServerConfig = toml::from_str("port = 8080").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.storage_dir, PathBuf::from("./uploads"));
    }

    #[test]
    fn full_toml_overrides_everything() {
        let config: ServerConfig = toml::from_str(
            r#"
            bind_address = "127.0.0.1"
            port = 9000
            storage_dir = "/var/lib/docstore"
            "#,
        )
        .unwrap();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.storage_dir, PathBuf::from("/var/lib/docstore"));
    }
}
