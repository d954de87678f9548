//! Configuration loader (defaults + file + env merge).

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::TemplarConfig;

/// Prefix of environment overrides, e.g. `TEMPLAR_SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "TEMPLAR_";

/// Storage directory variable understood for compatibility with older
/// deployments.
pub const LEGACY_DIR_VAR: &str = "TEMPLATES_DIR";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {0}")]
    Missing(String),
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
}

/// Builds the layered provider:
/// 1. Default values
/// 2. Config file (if given)
/// 3. `TEMPLAR_`-prefixed variables, `__` separating nested keys
/// 4. `TEMPLATES_DIR`, which sets `store.templates_dir`
pub fn figment(config_path: Option<&Path>) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(TemplarConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(
            Env::raw()
                .only(&[LEGACY_DIR_VAR])
                .map(|_| "store.templates_dir".into()),
        )
}

/// Loads configuration by merging all layers.
///
/// # Errors
///
/// Returns `ConfigError::Missing` if `config_path` does not exist and
/// `ConfigError::Load` if a layer holds invalid values.
pub fn load_config(config_path: Option<&Path>) -> Result<TemplarConfig, ConfigError> {
    if let Some(path) = config_path {
        if !path.is_file() {
            return Err(ConfigError::Missing(path.display().to_string()));
        }
    }
    figment(config_path)
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}
