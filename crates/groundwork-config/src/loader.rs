//! Configuration loader with multi-source merging

use crate::{GroundworkConfig, Paths, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    include_user: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "GW".to_string(),
            include_user: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "GW")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/groundwork/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.include_user = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<GroundworkConfig> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = GroundworkConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/groundwork/config.toml)
        if self.include_user {
            if let Ok(user_config_file) = Paths::new().user_config_file() {
                builder = add_file_if_present(builder, user_config_file);
            }
        }

        // 3. Project config (groundwork.toml)
        builder = add_file_if_present(builder, Paths::project_config_file(&self.project_dir));

        // 4. Local config (groundwork.local.toml)
        builder = add_file_if_present(builder, Paths::local_config_file(&self.project_dir));

        // 5. Environment variables (GW_TIMING__FETCH_DELAY_MS=0)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: GroundworkConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }
}

fn add_file_if_present(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    path: PathBuf,
) -> config::ConfigBuilder<config::builder::DefaultState> {
    if !path.exists() {
        return builder;
    }
    debug!(path = %path.display(), "adding config source");
    builder.add_source(
        config::File::from(path)
            .required(false)
            .format(config::FileFormat::Toml),
    )
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
