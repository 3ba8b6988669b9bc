//! Configuration and token loading.

use crate::schema::Config;
use modstat_common::{ModstatError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "modstat.toml";

/// Loads the configuration file and the bot token it points at.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a loader for the given configuration file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the configuration file this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates the configuration.
    ///
    /// A missing file is not an error: the defaults are used instead.
    pub fn load(&self) -> Result<Config> {
        let config = if self.path.exists() {
            let content = std::fs::read_to_string(&self.path).map_err(|e| {
                ModstatError::config_with_source(
                    format!("Failed to read {}", self.path.display()),
                    e,
                )
            })?;
            let config: Config = toml::from_str(&content)?;
            info!("Loaded configuration from {}", self.path.display());
            config
        } else {
            info!(
                "No configuration file at {}, using defaults",
                self.path.display()
            );
            Config::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Reads the bot token: the first line of the configured token file, trimmed.
    pub fn load_token(config: &Config) -> Result<String> {
        let path = &config.discord.token_file;
        let content = std::fs::read_to_string(path).map_err(|e| {
            ModstatError::config_with_source(
                format!("Failed to read token file {}", path.display()),
                e,
            )
        })?;

        let token = content.lines().next().unwrap_or_default().trim().to_string();
        if token.is_empty() {
            return Err(ModstatError::config(format!(
                "Token file {} is empty",
                path.display()
            )));
        }

        debug!("Bot token loaded from {}", path.display());
        Ok(token)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}
