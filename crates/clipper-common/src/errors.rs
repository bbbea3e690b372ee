use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeymapError {
    /// The code set holds only modifier codes. Callers must check
    /// `is_valid_hotkey` before converting.
    #[error("no non-modifier key in code set {0:?}")]
    NoKey(Vec<String>),
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend call '{command}' failed: {message}")]
    Call { command: String, message: String },

    #[error("could not decode reply to '{command}': {message}")]
    Decode { command: String, message: String },

    #[error("invalid backend event: {0}")]
    Event(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl BackendError {
    pub fn call(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Call {
            command: command.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClipperError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Keymap(#[from] KeymapError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
