use serde::{Deserialize, Serialize};

/// How shortcuts are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyleSetting {
    /// Symbols on macOS, words elsewhere.
    #[default]
    Auto,
    Symbols,
    Words,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    pub display_style: DisplayStyleSetting,
    /// Accelerator used when the backend has no shortcut stored.
    pub default_shortcut: String,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            display_style: DisplayStyleSetting::Auto,
            default_shortcut: "ctrl+alt+keyc".into(),
        }
    }
}
