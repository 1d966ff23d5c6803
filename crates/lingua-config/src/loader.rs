//! Configuration loader (defaults + file + env merge).

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use lingua_types::{ErrorKind, LinguaError};
use thiserror::Error;

use crate::schema::LinguaConfig;

/// Prefix of environment variables read by [`load_config`].
pub const ENV_PREFIX: &str = "LINGUA_";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The explicitly requested config file does not exist.
    #[error("configuration file not found: {path}")]
    FileNotFound { path: String },
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
}

impl From<ConfigError> for LinguaError {
    fn from(e: ConfigError) -> Self {
        LinguaError::new(ErrorKind::Config, e.to_string())
    }
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`LINGUA_` prefix, `_` as the key separator)
pub fn load_config(config_path: Option<&str>) -> Result<LinguaConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(LinguaConfig::default()));

    if let Some(path) = config_path {
        // Toml::file silently skips missing files; an explicit path must exist.
        if !Path::new(path).exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_string(),
            });
        }
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("_"));

    figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}
