//! Configuration management for Groundwork
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (GW_* prefix, `__` between section and key)
//! 2. groundwork.local.toml (local overrides)
//! 3. groundwork.toml (project config)
//! 4. ~/.config/groundwork/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

mod error;
mod loader;
mod paths;

pub use error::{ConfigError, Result};
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main Groundwork configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundworkConfig {
    pub project: ProjectConfig,
    pub timing: TimingConfig,
    pub rules: RulesConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "groundwork".to_string(),
        }
    }
}

/// Latencies for the async lessons, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub fetch_delay_ms: u64,
    pub settle_delay_ms: u64,
    pub user_delay_ms: u64,
    pub posts_delay_ms: u64,
    pub risky_delay_ms: u64,
    pub timeout_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: 1000,
            settle_delay_ms: 500,
            user_delay_ms: 1000,
            posts_delay_ms: 500,
            risky_delay_ms: 1000,
            timeout_ms: 2000,
        }
    }
}

impl TimingConfig {
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn user_delay(&self) -> Duration {
        Duration::from_millis(self.user_delay_ms)
    }

    pub fn posts_delay(&self) -> Duration {
        Duration::from_millis(self.posts_delay_ms)
    }

    pub fn risky_delay(&self) -> Duration {
        Duration::from_millis(self.risky_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Minimum age accepted when creating users.
    pub legal_age: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self { legal_age: 18 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl GroundworkConfig {
    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Parse a single TOML file, filling missing keys with defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no lesson can run with
    pub fn validate(&self) -> Result<()> {
        if self.timing.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "timing.timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.rules.legal_age == 0 {
            return Err(ConfigError::ValidationError(
                "rules.legal_age must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
