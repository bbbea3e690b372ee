use super::tables::{lookup, KEY_GLYPHS};
use super::types::{Chord, Modifier, ModifierSet};

/// Parses an accelerator string like `"ctrl+shift+keya"`, `"CmdOrCtrl+F5"`
/// or `"alt+space"` into a [`Chord`].
///
/// Tokens are trimmed and lower-cased. Modifier aliases:
/// - `"ctrl"` / `"control"` / `"cmdorctrl"` / `"commandorcontrol"` -> `Ctrl`
/// - `"alt"` / `"option"` -> `Alt`
/// - `"shift"` -> `Shift`
/// - `"super"` / `"cmd"` / `"command"` / `"meta"` -> `Meta`
///
/// Any other token is the key. Known tokens map through the key table
/// (`"keya"` -> `"a"`, `"arrowleft"` -> `"ArrowLeft"`); unknown tokens are
/// kept verbatim. If several key tokens appear, the last one wins.
///
/// Parsing never fails: a chord without modifiers is a legal result and is
/// only rejected when registering.
pub fn parse_accelerator(s: &str) -> Chord {
    let mut modifiers = ModifierSet::empty();
    let mut key = String::new();

    for token in s.split('+').map(|t| t.trim().to_lowercase()) {
        if token.is_empty() {
            continue;
        }
        match normalize_modifier(&token) {
            Some(modifier) => modifiers.insert(modifier),
            None => key = key_for_token(&token),
        }
    }

    Chord { modifiers, key }
}

/// Converts a [`Chord`] back into an accelerator string.
///
/// Modifiers come out in canonical order (`ctrl`, `alt`, `shift`, `super`).
/// Keys from the key table map back to their token; single letters and
/// digits stand for themselves; anything else is lower-cased.
pub fn chord_to_accelerator(chord: &Chord) -> String {
    let mut parts: Vec<&str> = chord.modifiers.iter().map(Modifier::accelerator_token).collect();
    let key = token_for_key(&chord.key);
    if !key.is_empty() {
        parts.push(&key);
    }
    parts.join("+")
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "cmdorctrl" | "commandorcontrol" => Some(Modifier::Ctrl),
        "alt" | "option" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "super" | "cmd" | "command" | "meta" => Some(Modifier::Meta),
        _ => None,
    }
}

/// Logical key for a lowercase accelerator token.
pub(super) fn key_for_token(token: &str) -> String {
    lookup(KEY_GLYPHS, token).unwrap_or(token).to_string()
}

fn token_for_key(key: &str) -> String {
    let lower = key.to_lowercase();
    if is_single_alphanumeric(&lower) {
        return lower;
    }
    KEY_GLYPHS
        .iter()
        .find(|(_, glyph)| *glyph == key)
        .map(|(token, _)| (*token).to_string())
        .unwrap_or(lower)
}

pub(super) fn is_single_alphanumeric(key: &str) -> bool {
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphanumeric())
}
