//! Layered configuration loading.
//!
//! Sources stack the same way across all binaries: a YAML file, an optional
//! environment-specific overlay, and `HUB`-prefixed environment variable
//! overrides for scalar options.

use config::Config;
use thiserror::Error;

use crate::domain::hub::{HubConfig, HubConfigError};
use crate::models::config::HubConfigFile;

/// Environment variable prefix for scalar overrides, e.g. `HUB_LOG_LEVEL`.
pub const ENV_PREFIX: &str = "HUB";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error(transparent)]
    Invalid(#[from] HubConfigError),
}

fn build(sources: Config) -> Result<HubConfig, LoadError> {
    let raw: HubConfigFile = sources.try_deserialize()?;
    Ok(HubConfig::try_from(raw)?)
}

/// Loads and validates a configuration from an explicit file path.
pub fn load_from_file(path: &str) -> Result<HubConfig, LoadError> {
    let sources = Config::builder()
        .add_source(config::File::with_name(path))
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()?;
    build(sources)
}

/// Loads the default layering: `config/default.yaml`, an optional
/// `config/<app_env>.yaml` overlay, then environment overrides.
pub fn load_default(app_env: &str) -> Result<HubConfig, LoadError> {
    let sources = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()?;
    build(sources)
}
