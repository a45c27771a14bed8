#![deny(missing_docs)]

use serde::Deserialize;
use std::{path::Path, sync::OnceLock};
use thiserror::Error;

use crate::{consts::CONFIG_PATH, net::session::config::SessionConfig};

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Error type for loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// If the config file could not be read.
    #[error("Unable to read config: {0}")]
    Read(#[from] std::io::Error),

    /// If the config file is not valid TOML.
    #[error("Unable to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Get the configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// The session to control.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Parse a configuration from TOML text.
pub fn parse(text: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Load a configuration from a TOML file.
pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    log::debug!("Loading config from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

/// Get or init config from `client.toml`
pub fn get_config() -> Result<&'static Config, ConfigError> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let config = load(CONFIG_PATH)?;
    Ok(CONFIG.get_or_init(|| config))
}
