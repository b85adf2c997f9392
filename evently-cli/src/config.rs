//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "http://localhost:4000";
pub const DEFAULT_BACKEND: &str = "flask";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_backend() -> String {
    DEFAULT_BACKEND.to_string()
}

/// Global configuration at ~/.config/evently/config.toml
///
/// Precedence, lowest to highest: defaults, config file, the
/// `EVENTLY_API_URL` / `EVENTLY_BACKEND` environment variables, CLI flags.
/// A missing config file is not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_backend", rename = "default_backend")]
    pub backend: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            backend: default_backend(),
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("evently");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file and apply environment and flag overrides.
    pub fn load(api_url_flag: Option<&str>, backend_flag: Option<&str>) -> Result<Self> {
        let mut config = match Self::config_path() {
            Ok(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", path.display()))?
            }
            _ => Config::default(),
        };

        if let Ok(url) = std::env::var("EVENTLY_API_URL") {
            config.api_url = url;
        }
        if let Ok(backend) = std::env::var("EVENTLY_BACKEND") {
            config.backend = backend;
        }
        if let Some(url) = api_url_flag {
            config.api_url = url.to_string();
        }
        if let Some(backend) = backend_flag {
            config.backend = backend.to_string();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.backend, DEFAULT_BACKEND);
    }

    #[test]
    fn file_values_override_defaults() {
        let config: Config = toml::from_str(
            r#"
            api_url = "https://events.example.com"
            default_backend = "rails"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_url, "https://events.example.com");
        assert_eq!(config.backend, "rails");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config: Config = toml::from_str(r#"default_backend = "django""#).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.backend, "django");
    }
}
