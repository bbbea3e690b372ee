use serde::{Deserialize, Serialize};

/// Accent color family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorPreference {
    #[default]
    Default,
    Azure,
    Yellow,
    Cyan,
}

impl ColorPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorPreference::Default => "default",
            ColorPreference::Azure => "azure",
            ColorPreference::Yellow => "yellow",
            ColorPreference::Cyan => "cyan",
        }
    }
}

/// Light/dark preference. `System` follows the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LightingPreference {
    #[default]
    System,
    Light,
    Dark,
}

impl LightingPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            LightingPreference::System => "system",
            LightingPreference::Light => "light",
            LightingPreference::Dark => "dark",
        }
    }
}

/// User settings owned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub color: ColorPreference,
    pub lighting: LightingPreference,
    /// Number of clipboard entries kept.
    pub history_size: usize,
    /// Global shortcut as an accelerator string, e.g. `"ctrl+shift+v"`.
    pub shortcut: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: ColorPreference::Default,
            lighting: LightingPreference::System,
            history_size: 10,
            shortcut: String::new(),
        }
    }
}
