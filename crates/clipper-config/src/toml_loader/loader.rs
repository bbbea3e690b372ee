//! Read the config from a path or from the platform default location.

use std::path::Path;

use clipper_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::ClipperConfig;
use crate::validation;

/// Load config from a specific TOML file.
///
/// Missing fields take serde defaults. Validation problems are logged and
/// the parsed config is returned as-is; [`crate::load_config`] is the
/// strict entry point.
pub fn load_from_path(path: &Path) -> Result<ClipperConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ClipperConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path, writing a documented
/// default file first if none exists.
pub fn load_default() -> Result<ClipperConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(ClipperConfig::default())
        }
        other => other,
    }
}
