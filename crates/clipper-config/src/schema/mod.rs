//! Configuration schema types for Clipper.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod history;
mod hotkey;
mod system;

pub use history::*;
pub use hotkey::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the Clipper client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipperConfig {
    pub history: HistoryConfig,
    pub hotkey: HotkeyConfig,
    pub events: EventsConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: ClipperConfig = toml::from_str("").unwrap();
        assert_eq!(config, ClipperConfig::default());
        assert_eq!(config.history.size, 10);
        assert_eq!(config.events.capacity, 256);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: ClipperConfig = toml::from_str(
            r#"
[history]
size = 50

[hotkey]
display_style = "symbols"
"#,
        )
        .unwrap();
        assert_eq!(config.history.size, 50);
        assert_eq!(config.history.trim_interval_secs, 600);
        assert_eq!(config.hotkey.display_style, DisplayStyleSetting::Symbols);
        assert_eq!(config.hotkey.default_shortcut, "ctrl+alt+keyc");
    }

    #[test]
    fn unknown_display_style_is_rejected() {
        let result: Result<ClipperConfig, _> = toml::from_str("[hotkey]\ndisplay_style = \"emoji\"");
        assert!(result.is_err());
    }

    #[test]
    fn log_level_directives() {
        let config: ClipperConfig = toml::from_str("[logging]\nlevel = \"warn\"").unwrap();
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.logging.level.as_directive(), "warn");
    }
}
