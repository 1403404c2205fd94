//! Configuration for the Storedesk CLI/TUI.
//!
//! Settings are read from a small JSON file in the standard configuration
//! directory (`~/.config/storedesk/config.json` on most platforms) and then
//! overlaid with environment variables. Command-line flags are applied last
//! by the binary.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dirs_next::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "STOREDESK_CONFIG_PATH";
pub const API_BASE_ENV: &str = "STOREDESK_API_BASE";
pub const API_TOKEN_ENV: &str = "STOREDESK_API_TOKEN";
pub const THEME_ENV: &str = "STOREDESK_THEME";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_API_BASE: &str = "http://localhost:3000/";
pub const DEFAULT_ALERT_TIMEOUT_SECS: u64 = 4;

/// Error surfaced when reading configuration fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure (for example, permissions).
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolved configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredeskConfig {
    /// Base URL of the storefront backend; API paths are resolved against it.
    pub api_base: String,
    /// Bearer token sent with every request, when present.
    pub api_token: Option<String>,
    /// Theme identifier for the TUI.
    pub theme: Option<String>,
    /// Seconds before an alert message dismisses itself.
    pub alert_timeout_secs: u64,
}

impl Default for StoredeskConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_token: None,
            theme: None,
            alert_timeout_secs: DEFAULT_ALERT_TIMEOUT_SECS,
        }
    }
}

impl StoredeskConfig {
    /// Load the config file (if any) and apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = load_file(&default_config_path())?;
        config.apply_env();
        Ok(config)
    }

    /// Load from an explicit file path without consulting the environment.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        load_file(path)
    }

    /// Overlay `STOREDESK_*` environment variables onto this config.
    pub fn apply_env(&mut self) {
        if let Some(api_base) = non_empty_env(API_BASE_ENV) {
            self.api_base = api_base;
        }
        if let Some(token) = non_empty_env(API_TOKEN_ENV) {
            self.api_token = Some(token);
        }
        if let Some(theme) = non_empty_env(THEME_ENV) {
            self.theme = Some(theme);
        }
    }

    pub fn alert_timeout(&self) -> Duration {
        Duration::from_secs(self.alert_timeout_secs)
    }
}

/// Path of the config file, honoring [`CONFIG_PATH_ENV`].
pub fn default_config_path() -> PathBuf {
    if let Some(path) = non_empty_env(CONFIG_PATH_ENV) {
        return expand_tilde(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("storedesk")
        .join(CONFIG_FILE_NAME)
}

fn load_file(path: &Path) -> Result<StoredeskConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(config) => Ok(config),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse config file; using defaults"
                );
                Ok(StoredeskConfig::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(StoredeskConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn expand_tilde(path: &str) -> PathBuf {
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    match path {
        "~" => home(),
        _ => match path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
            Some(rest) => home().join(rest),
            None => PathBuf::from(path),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = StoredeskConfig::load_from(&dir.path().join("absent.json")).expect("load");
        assert_eq!(config, StoredeskConfig::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{ not json").expect("write");
        let config = StoredeskConfig::load_from(file.path()).expect("load");
        assert_eq!(config, StoredeskConfig::default());
    }

    #[test]
    fn file_values_are_read_and_partial_fields_default() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "apiBase": "https://shop.example.com/", "theme": "nord" }}"#).expect("write");
        let config = StoredeskConfig::load_from(file.path()).expect("load");
        assert_eq!(config.api_base, "https://shop.example.com/");
        assert_eq!(config.theme.as_deref(), Some("nord"));
        assert_eq!(config.alert_timeout_secs, DEFAULT_ALERT_TIMEOUT_SECS);
    }

    #[test]
    fn environment_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "apiBase": "https://shop.example.com/" }}"#).expect("write");
        let path = file.path().to_path_buf();
        temp_env::with_vars(
            [
                (CONFIG_PATH_ENV, Some(path.to_string_lossy().to_string())),
                (API_BASE_ENV, Some("http://localhost:4000/".to_string())),
                (API_TOKEN_ENV, Some("token-123".to_string())),
                (THEME_ENV, None),
            ],
            || {
                let config = StoredeskConfig::load().expect("load");
                assert_eq!(config.api_base, "http://localhost:4000/");
                assert_eq!(config.api_token.as_deref(), Some("token-123"));
                assert!(config.theme.is_none());
            },
        );
    }
}
