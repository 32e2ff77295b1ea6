//! Configuration loading and management

use crate::core::error::{ConfigError, TodoResult};
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ServerConfig::host`]
pub const ENV_HOST: &str = "TODOS_HOST";
/// Environment variable overriding [`ServerConfig::port`]
pub const ENV_PORT: &str = "TODOS_PORT";
/// Environment variable overriding [`ServerConfig::data_file`]
pub const ENV_DATA_FILE: &str = "TODOS_DATA_FILE";
/// Environment variable naming a YAML config file for the binary
pub const ENV_CONFIG: &str = "TODOS_CONFIG";

/// Server configuration
///
/// Every field has a default, so a YAML file only needs the keys it changes:
///
/// ```yaml
/// port: 8080
/// data_file: /srv/todos.json
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Path of the JSON file holding the todo collection
    pub data_file: String,

    /// Path prefix for the todo routes (e.g., `/api` gives `/api/todos`)
    pub api_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4567,
            data_file: "data/todos.json".to_string(),
            api_prefix: "/api".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> TodoResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_string(),
            },
            _ => ConfigError::ParseError {
                file: Some(path.to_string()),
                message: e.to_string(),
            },
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError {
                file: Some(path.to_string()),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> TodoResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply `TODOS_*` environment overrides
    pub fn apply_env(self) -> TodoResult<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> TodoResult<Self> {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }

        if let Some(port) = lookup(ENV_PORT) {
            self.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                field: "port".to_string(),
                value: port.clone(),
                message: "expected an integer between 0 and 65535".to_string(),
            })?;
        }

        if let Some(data_file) = lookup(ENV_DATA_FILE) {
            self.data_file = data_file;
        }

        Ok(self)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> TodoResult<()> {
        let prefix = &self.api_prefix;
        if !prefix.starts_with('/') || (prefix.len() > 1 && prefix.ends_with('/')) {
            return Err(ConfigError::InvalidValue {
                field: "api_prefix".to_string(),
                value: prefix.clone(),
                message: "must start with '/' and must not end with '/'".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// `host:port` for binding the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
