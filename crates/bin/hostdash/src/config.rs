//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `hostdash.toml` in the working directory (or the file named by
//! `HOSTDASH_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::time::Duration;

use serde::Deserialize;

use hostdash_adapter_http_reqwest::client::{self, parse_base_url};
use hostdash_app::services::Endpoints;

const DEFAULT_PATH: &str = "hostdash.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Host-management API settings.
    pub api: ApiConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Where the host-management API lives.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every href is resolved against.
    pub base_url: String,
    /// Path of the alive-host collection.
    pub hosts_path: String,
    /// Path of the log collection.
    pub logs_path: String,
    /// Per-request timeout.
    pub timeout_seconds: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("HOSTDASH_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("HOSTDASH_BASE_URL") {
            self.api.base_url = val;
        }
        if let Some(val) = lookup("HOSTDASH_HOSTS_PATH") {
            self.api.hosts_path = val;
        }
        if let Some(val) = lookup("HOSTDASH_LOGS_PATH") {
            self.api.logs_path = val;
        }
        if let Some(secs) = lookup("HOSTDASH_TIMEOUT").and_then(|val| val.parse().ok()) {
            self.api.timeout_seconds = secs;
        }
        if let Some(val) = lookup("HOSTDASH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        parse_base_url(&self.api.base_url)
            .map_err(|err| ConfigError::Validation(err.to_string()))?;
        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::Validation(
                "timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Collection endpoints to load.
    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            hosts: self.api.hosts_path.clone(),
            logs: self.api.logs_path.clone(),
        }
    }

    /// Settings for the reqwest adapter.
    #[must_use]
    pub fn client_config(&self) -> client::Config {
        client::Config {
            base_url: self.api.base_url.clone(),
            timeout: Duration::from_secs(self.api.timeout_seconds),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        let endpoints = Endpoints::default();
        Self {
            base_url: "http://localhost:1234".to_string(),
            hosts_path: endpoints.hosts,
            logs_path: endpoints.logs,
            timeout_seconds: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hostdash=info,hostdash_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, val)| ((*key).to_string(), (*val).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:1234");
        assert_eq!(config.api.hosts_path, "/api/host/alive");
        assert_eq!(config.api.logs_path, "/api/logs");
        assert_eq!(config.api.timeout_seconds, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.timeout_seconds, 10);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [api]
            base_url = 'https://services.example.org'
            hosts_path = '/api/host'
            logs_path = '/api/logs?limit=50'
            timeout_seconds = 3

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "https://services.example.org");
        assert_eq!(config.endpoints().hosts, "/api/host");
        assert_eq!(config.endpoints().logs, "/api/logs?limit=50");
        assert_eq!(config.client_config().timeout, Duration::from_secs(3));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [api]
            base_url = 'http://10.0.0.2:1234'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.2:1234");
        assert_eq!(config.api.hosts_path, "/api/host/alive");
        assert_eq!(config.logging.filter, "hostdash=info,hostdash_app=info");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:1234");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            ("HOSTDASH_BASE_URL", "http://proxy:8080"),
            ("HOSTDASH_LOGS_PATH", "/logs"),
            ("HOSTDASH_TIMEOUT", "30"),
            ("HOSTDASH_LOG", "hostdash=debug"),
        ]));

        assert_eq!(config.api.base_url, "http://proxy:8080");
        assert_eq!(config.api.hosts_path, "/api/host/alive");
        assert_eq!(config.api.logs_path, "/logs");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.logging.filter, "hostdash=debug");
    }

    #[test]
    fn should_prefer_rust_log_over_hostdash_log() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            ("HOSTDASH_LOG", "hostdash=debug"),
            ("RUST_LOG", "trace"),
        ]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_ignore_unparsable_timeout_override() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[("HOSTDASH_TIMEOUT", "soon")]));
        assert_eq!(config.api.timeout_seconds, 10);
    }

    #[test]
    fn should_reject_relative_base_url() {
        let mut config = Config::default();
        config.api.base_url = "/api".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_zero_timeout() {
        let mut config = Config::default();
        config.api.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }
}
