//! Configuration handling for the TUI
//!
//! The API base URL comes from `MULTYFORM_API_URL`, falling back to the
//! optional `config.json` in the platform config directory.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "MULTYFORM_API_URL";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while resolving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "no API base URL configured; set {} or api_url in {}",
        API_URL_ENV,
        config_location()
    )]
    MissingApiUrl,
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "multyform", "multyform-tui")
}

fn config_location() -> String {
    TuiConfig::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "config.json".to_string())
}

/// Log file path in the platform data directory
pub fn log_file_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join("multyform-tui.log"))
}

/// User configuration file contents
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Base URL of the receiving API
    pub api_url: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }
}

/// Effective settings for the form client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Base URL without a trailing slash
    pub api_url: String,
    pub request_timeout: Duration,
}

impl FormConfig {
    /// Resolve settings from the process environment and the config file
    pub fn load() -> Result<Self, ConfigError> {
        let file = TuiConfig::load()?;
        Self::resolve(std::env::var(API_URL_ENV).ok(), &file)
    }

    /// Merge an environment value with file settings; the environment wins.
    pub fn resolve(env_url: Option<String>, file: &TuiConfig) -> Result<Self, ConfigError> {
        let api_url = env_url
            .into_iter()
            .chain(file.api_url.clone())
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .find(|url| !url.is_empty())
            .ok_or(ConfigError::MissingApiUrl)?;

        let request_timeout =
            Duration::from_secs(file.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            api_url,
            request_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod tui_config {
        use super::*;

        #[test]
        fn test_default_config() {
            let config = TuiConfig::default();
            assert!(config.api_url.is_none());
            assert!(config.request_timeout_secs.is_none());
        }

        #[test]
        fn test_deserialize_from_empty_json() {
            let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
            assert!(parsed.api_url.is_none());
        }

        #[test]
        fn test_deserialize_with_extra_fields() {
            // Should ignore unknown fields
            let json = r#"{"api_url": "https://api.example.com", "unknown_field": "value"}"#;
            let parsed: TuiConfig = serde_json::from_str(json).unwrap();
            assert_eq!(parsed.api_url.as_deref(), Some("https://api.example.com"));
        }

        #[test]
        fn test_load_returns_ok_or_parse_error() {
            // Depends on whether a config file exists on this machine
            match TuiConfig::load() {
                Ok(_) | Err(ConfigError::Parse { .. }) | Err(ConfigError::Read { .. }) => {}
                Err(ConfigError::MissingApiUrl) => panic!("load never checks the URL"),
            }
        }

        #[test]
        fn test_log_path_is_named() {
            if let Some(path) = log_file_path() {
                assert!(path.ends_with("multyform-tui.log"));
            }
        }
    }

    mod form_config {
        use super::*;

        #[test]
        fn test_env_wins_over_file() {
            let file = TuiConfig {
                api_url: Some("https://file.example.com".to_string()),
                request_timeout_secs: None,
            };
            let config =
                FormConfig::resolve(Some("https://env.example.com".to_string()), &file).unwrap();
            assert_eq!(config.api_url, "https://env.example.com");
        }

        #[test]
        fn test_falls_back_to_file() {
            let file = TuiConfig {
                api_url: Some("https://file.example.com/".to_string()),
                request_timeout_secs: Some(5),
            };
            let config = FormConfig::resolve(None, &file).unwrap();
            assert_eq!(config.api_url, "https://file.example.com");
            assert_eq!(config.request_timeout, Duration::from_secs(5));
        }

        #[test]
        fn test_blank_env_falls_back_to_file() {
            let file = TuiConfig {
                api_url: Some("https://file.example.com".to_string()),
                request_timeout_secs: None,
            };
            let config = FormConfig::resolve(Some("  ".to_string()), &file).unwrap();
            assert_eq!(config.api_url, "https://file.example.com");
        }

        #[test]
        fn test_default_timeout() {
            let config =
                FormConfig::resolve(Some("http://localhost:4000".to_string()), &TuiConfig::default())
                    .unwrap();
            assert_eq!(config.request_timeout, Duration::from_secs(30));
        }

        #[test]
        fn test_missing_url_is_error() {
            let err = FormConfig::resolve(None, &TuiConfig::default()).unwrap_err();
            assert!(matches!(err, ConfigError::MissingApiUrl));
            assert!(err.to_string().contains(API_URL_ENV));
        }
    }
}
