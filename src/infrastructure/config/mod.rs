use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use tracing::debug;

use crate::domain::error::{AppError, Result};
use crate::domain::roster_config::RosterConfig;

/// Default config file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "halaqa.toml";

/// Environment variables with this prefix override file values
pub const ENV_PREFIX: &str = "HALAQA_";

/// Layers defaults, a TOML file and `HALAQA_*` environment variables
pub struct ConfigService {
    config_path: Option<PathBuf>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Use an explicit config file; it must exist
    pub fn with_file(path: impl AsRef<Path>) -> Self {
        Self {
            config_path: Some(path.as_ref().to_path_buf()),
        }
    }

    pub fn figment(&self) -> Figment {
        let file = self
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        Figment::from(Serialized::defaults(RosterConfig::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load(&self) -> Result<RosterConfig> {
        if let Some(path) = &self.config_path {
            if !path.is_file() {
                return Err(AppError::ConfigError(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
        }

        let config: RosterConfig = self.figment().extract()?;
        config
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Invalid roster config: {}", e)))?;

        debug!(
            header_mode = ?config.header_mode,
            trim_mode = ?config.trim_mode,
            "Loaded roster config"
        );
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
