use clipper_config::schema::DisplayStyleSetting;
use serde::{Deserialize, Serialize};

use super::parse::is_single_alphanumeric;
use super::tables::{function_key_number, lookup, SYMBOL_KEYS, WORD_KEYS};
use super::types::{Chord, Modifier};

/// How a platform presents shortcuts to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// Modifier glyphs run together, e.g. `⌘⇧A` (macOS).
    Symbols,
    /// Words joined by `" + "`, e.g. `Ctrl + Shift + A`.
    Words,
}

impl DisplayStyle {
    /// The style native to the platform this binary was built for.
    pub fn native() -> Self {
        if cfg!(target_os = "macos") {
            DisplayStyle::Symbols
        } else {
            DisplayStyle::Words
        }
    }

    /// Resolve a configured style; `auto` picks [`DisplayStyle::native`].
    pub fn from_setting(setting: DisplayStyleSetting) -> Self {
        match setting {
            DisplayStyleSetting::Auto => Self::native(),
            DisplayStyleSetting::Symbols => DisplayStyle::Symbols,
            DisplayStyleSetting::Words => DisplayStyle::Words,
        }
    }

    pub fn profile(self) -> &'static DisplayProfile {
        match self {
            DisplayStyle::Symbols => &SYMBOL_PROFILE,
            DisplayStyle::Words => &WORD_PROFILE,
        }
    }
}

/// Presentation rules for one display style.
///
/// Both profiles share the key-naming policy in [`key_label`]; they differ
/// only in modifier order and labels, named-key labels and the separator.
#[derive(Debug)]
pub struct DisplayProfile {
    /// Modifiers in display order with their labels.
    pub modifiers: [(Modifier, &'static str); 4],
    /// Labels for named keys, keyed by lowercase key name.
    pub named_keys: &'static [(&'static str, &'static str)],
    pub separator: &'static str,
}

pub(super) static SYMBOL_PROFILE: DisplayProfile = DisplayProfile {
    modifiers: [
        (Modifier::Meta, "\u{2318}"),  // ⌘
        (Modifier::Shift, "\u{21E7}"), // ⇧
        (Modifier::Alt, "\u{2325}"),   // ⌥
        (Modifier::Ctrl, "\u{2303}"),  // ⌃
    ],
    named_keys: SYMBOL_KEYS,
    separator: "",
};

pub(super) static WORD_PROFILE: DisplayProfile = DisplayProfile {
    modifiers: [
        (Modifier::Ctrl, "Ctrl"),
        (Modifier::Shift, "Shift"),
        (Modifier::Alt, "Alt"),
        (Modifier::Meta, "Super"),
    ],
    named_keys: WORD_KEYS,
    separator: " + ",
};

/// Renders a [`Chord`] for display in the given style.
///
/// Modifiers follow the profile's fixed order regardless of how the chord
/// was written. An empty key (capture preview) renders modifiers only.
pub fn render(chord: &Chord, style: DisplayStyle) -> String {
    let profile = style.profile();
    let mut parts: Vec<String> = profile
        .modifiers
        .iter()
        .filter(|(m, _)| chord.modifiers.contains(*m))
        .map(|(_, label)| (*label).to_string())
        .collect();

    if !chord.key.is_empty() {
        parts.push(key_label(&chord.key, profile));
    }
    parts.join(profile.separator)
}

/// Renders in the platform's native style.
pub fn render_native(chord: &Chord) -> String {
    render(chord, DisplayStyle::native())
}

/// Named key from the profile table, else `F1`..`F20`, else an upper-cased
/// single letter or digit, else the key as-is.
fn key_label(key: &str, profile: &DisplayProfile) -> String {
    let lower = key.to_lowercase();
    if let Some(label) = lookup(profile.named_keys, &lower) {
        return label.to_string();
    }
    if let Some(n) = function_key_number(&lower).filter(|n| *n <= 20) {
        return format!("F{n}");
    }
    if is_single_alphanumeric(key) {
        return key.to_uppercase();
    }
    key.to_string()
}
