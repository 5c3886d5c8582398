#[cfg(feature = "cli")]
pub mod cli;

use crate::core::loader::RowPolicy;
use crate::core::lookup::IdFormat;
use crate::utils::error::{PromoError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DATA_PATH: &str = "promotions.csv";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 1321;

/// Service configuration, loaded from TOML. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    pub lookup: LookupConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub path: String,
    pub row_policy: RowPolicy,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATA_PATH.to_string(),
            row_policy: RowPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub id_format: IdFormat,
}

impl Config {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PromoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PromoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// `host:port`, with IPv6 hosts bracketed so `::` binds dual-stack.
    pub fn server_addr(&self) -> String {
        let host = &self.server.host;
        if host.contains(':') && !host.starts_with('[') {
            format!("[{}]:{}", host, self.server.port)
        } else {
            format!("{}:{}", host, self.server.port)
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        validation::validate_listen_host("server.host", &self.server.host)?;
        validation::validate_listen_port("server.port", self.server.port)?;
        validation::validate_dataset_path("dataset.path", &self.dataset.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.server_addr(), "0.0.0.0:1321");
        assert_eq!(config.dataset.path, "promotions.csv");
        assert_eq!(config.dataset.row_policy, RowPolicy::Strict);
        assert_eq!(config.lookup.id_format, IdFormat::Numeric);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config() {
        let config_str = r#"
[server]
host = "127.0.0.1"
port = 8080

[dataset]
path = "/srv/data/promotions.csv"
row_policy = "skip"

[lookup]
id_format = "opaque"
"#;

        let config = Config::from_toml_str(config_str).unwrap();
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
        assert_eq!(config.dataset.path, "/srv/data/promotions.csv");
        assert_eq!(config.dataset.row_policy, RowPolicy::Skip);
        assert_eq!(config.lookup.id_format, IdFormat::Opaque);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = Config::from_toml_str("[server]\nport = 9000\n").unwrap();

        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_ipv6_host_is_bracketed() {
        let config = Config::from_toml_str("[server]\nhost = \"::\"\n").unwrap();
        assert_eq!(config.server_addr(), "[::]:1321");

        let config = Config::from_toml_str("[server]\nhost = \"[::1]\"\n").unwrap();
        assert_eq!(config.server_addr(), "[::1]:1321");
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml_str("[dataset]\nrow_policy = \"lenient\"\n").unwrap_err();
        assert!(matches!(err, PromoError::ConfigError { .. }));
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_validate_rejects_directory_dataset() {
        let mut config = Config::default();
        config.dataset.path = "data/".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("dataset.path"));
    }
}
