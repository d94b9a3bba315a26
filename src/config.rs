//! Configuration loading and validation.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Main configuration for the garpd announcer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Interfaces to announce on, by name. Empty means every eligible
    /// interface on the host.
    #[serde(default)]
    pub interfaces: Vec<String>,

    /// Seconds between announcement passes. If None, announce once and exit.
    pub repeat_interval_secs: Option<u64>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// The interval between announcement passes, if repeating is configured.
    pub fn repeat_interval(&self) -> Option<Duration> {
        self.repeat_interval_secs.map(Duration::from_secs)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.repeat_interval_secs == Some(0) {
            return Err(ConfigError::Validation("repeat_interval_secs must be > 0".into()).into());
        }

        for name in &self.interfaces {
            if name.is_empty() {
                return Err(ConfigError::Validation("empty interface name".into()).into());
            }
        }

        Ok(())
    }
}
