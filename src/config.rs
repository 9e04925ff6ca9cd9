//! # Configuration
//!
//! Runtime settings for the yard system. Sources, lowest to highest precedence:
//!
//! 1. Built-in defaults ([`YardConfig::default`])
//! 2. A TOML file named by `YARD_CONFIG`, if set
//! 3. `YARD_CHANNEL_CAPACITY`, `YARD_REFRESH_SECS` and `YARD_DEFAULT_ZONE`
//!
//! ```toml
//! channel_capacity = 64
//! refresh_interval_secs = 10
//! default_zone = "B2"
//! log_filter = "yard_flow=debug"
//! ```

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const CONFIG_PATH_VAR: &str = "YARD_CONFIG";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct YardConfig {
    /// Capacity of the truck actor's request channel.
    pub channel_capacity: usize,
    /// Period of the dashboard refresh task.
    pub refresh_interval_secs: u64,
    /// Zone used when a truck is called without an explicit one.
    pub default_zone: String,
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for YardConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            refresh_interval_secs: 5,
            default_zone: "A1".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl YardConfig {
    /// Loads the config file named by `YARD_CONFIG` (if any) and applies the
    /// environment overrides on top.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading config file");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: YardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `YARD_*` overrides, looking each key up through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("YARD_CHANNEL_CAPACITY") {
            self.channel_capacity = parse_number("YARD_CHANNEL_CAPACITY", &value)?;
        }
        if let Some(value) = lookup("YARD_REFRESH_SECS") {
            self.refresh_interval_secs = parse_number("YARD_REFRESH_SECS", &value)?;
        }
        if let Some(value) = lookup("YARD_DEFAULT_ZONE") {
            self.default_zone = value.trim().to_string();
        }
        self.validate()?;
        Ok(self)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Rejects values the runtime cannot start with: a zero channel capacity, a zero
    /// refresh period or a blank default zone.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(invalid("channel_capacity", self.channel_capacity));
        }
        if self.refresh_interval_secs == 0 {
            return Err(invalid("refresh_interval_secs", self.refresh_interval_secs));
        }
        if self.default_zone.trim().is_empty() {
            return Err(invalid("default_zone", &self.default_zone));
        }
        Ok(())
    }
}

fn parse_number<N: std::str::FromStr>(key: &'static str, value: &str) -> Result<N, ConfigError> {
    value.trim().parse().map_err(|_| invalid(key, value))
}

fn invalid(key: &'static str, value: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
}
