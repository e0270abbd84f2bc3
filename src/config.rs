//! Configuration module

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

pub const CONFIG_ENV: &str = "CATALOG_CONFIG";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Sizing of the in-memory store actors.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Capacity of each store's request channel
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { buffer_size: default_buffer_size() }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Fallback filter when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

fn default_buffer_size() -> usize { 32 }
fn default_level() -> String { "info".to_string() }

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let cfg: AppConfig = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads `CATALOG_CONFIG` (default `catalog.toml`). A missing file yields
    /// the defaults; an unreadable or invalid one is an error.
    pub fn load_default() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("catalog.toml"));
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn validate(&self) -> Result<()> {
        if self.store.buffer_size == 0 {
            return Err(anyhow!("store.buffer_size must be >= 1"));
        }
        if self.logging.level.trim().is_empty() {
            return Err(anyhow!("logging.level must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let cfg = AppConfig::parse("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.store.buffer_size, 32);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_partial_document_overrides_only_given_keys() {
        let cfg = AppConfig::parse("[store]\nbuffer_size = 4\n").unwrap();
        assert_eq!(cfg.store.buffer_size, 4);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_zero_buffer_is_rejected() {
        assert!(AppConfig::parse("[store]\nbuffer_size = 0\n").is_err());
        assert!(AppConfig::parse("[logging]\nlevel = \" \"\n").is_err());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.toml"));
    }
}
