use std::path::PathBuf;

use clipper_common::PlatformError;

pub(super) const APP_NAME: &str = "clipper";

/// Platform configuration directory for Clipper.
///
/// - macOS: `~/Library/Application Support/clipper`
/// - Linux: `$XDG_CONFIG_HOME/clipper` (defaults to `~/.config/clipper`)
/// - Windows: `%APPDATA%\clipper`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Platform data directory for Clipper.
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// `config_dir()/config.toml`
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// `data_dir()/logs`
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}
