//! Clipper client configuration.
//!
//! TOML-based, with `serde(default)` on every section so partial files
//! work, and range validation that reports every problem at once.
//!
//! ```rust,no_run
//! use clipper_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("history size: {}", config.history.size);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

use std::path::Path;

pub use schema::{ClipperConfig, DisplayStyleSetting, LogLevel, CONFIG_SCHEMA_VERSION};

use clipper_common::ConfigError;

/// Load and validate config from the platform default path, creating a
/// default file if none exists.
pub fn load_config() -> Result<ClipperConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<ClipperConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ClipperConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
