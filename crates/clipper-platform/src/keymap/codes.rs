//! Conversion from OS key-event codes (`"ControlLeft"`, `"KeyQ"`,
//! `"ArrowUp"`, ...) to accelerator strings.

use clipper_common::KeymapError;

use super::parse::key_for_token;
use super::tables::{function_key_number, lookup, CODE_TOKENS};
use super::types::{Chord, Modifier, ModifierSet};

/// Code prefixes that identify a modifier key, in accelerator emit order.
/// Left/right variants (`ControlLeft`, `ControlRight`) share a prefix.
const MODIFIER_PREFIXES: [(&str, Modifier); 4] = [
    ("Control", Modifier::Ctrl),
    ("Shift", Modifier::Shift),
    ("Alt", Modifier::Alt),
    ("Meta", Modifier::Meta),
];

/// The modifier a key-event code belongs to, if any.
pub fn modifier_for_code(code: &str) -> Option<Modifier> {
    MODIFIER_PREFIXES
        .iter()
        .find(|(prefix, _)| code.starts_with(prefix))
        .map(|(_, m)| *m)
}

/// Whether the held codes form a complete hotkey: at least one modifier
/// code and at least one other code.
pub fn is_valid_hotkey<I, S>(codes: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut has_modifier = false;
    let mut has_key = false;

    for code in codes {
        if modifier_for_code(code.as_ref()).is_some() {
            has_modifier = true;
        } else {
            has_key = true;
        }
        if has_modifier && has_key {
            return true;
        }
    }
    false
}

/// Converts a complete set of held codes into an accelerator string, e.g.
/// `["ControlLeft", "KeyQ"]` -> `"ctrl+q"`.
///
/// Modifiers are emitted as `ctrl`, `shift`, `alt`, `super` in that order.
/// The first non-modifier code is the key. Callers must check
/// [`is_valid_hotkey`] first; a set without a key is a contract violation
/// reported as [`KeymapError::NoKey`].
pub fn codes_to_accelerator<S: AsRef<str>>(codes: &[S]) -> Result<String, KeymapError> {
    let mut parts: Vec<String> = MODIFIER_PREFIXES
        .iter()
        .filter(|(prefix, _)| codes.iter().any(|c| c.as_ref().starts_with(prefix)))
        .map(|(_, m)| m.accelerator_token().to_string())
        .collect();

    let key = first_key_code(codes).ok_or_else(|| {
        KeymapError::NoKey(codes.iter().map(|c| c.as_ref().to_string()).collect())
    })?;

    parts.push(code_to_token(key));
    Ok(parts.join("+"))
}

/// Builds a display chord from whatever is currently held.
///
/// Unlike [`codes_to_accelerator`] this accepts partial sets: a chord with
/// no modifiers, or with an empty key while only modifiers are held.
pub fn codes_to_chord<S: AsRef<str>>(codes: &[S]) -> Chord {
    let modifiers: ModifierSet = codes
        .iter()
        .filter_map(|c| modifier_for_code(c.as_ref()))
        .collect();
    let key = first_key_code(codes)
        .map(|code| key_for_token(&code_to_token(code).to_lowercase()))
        .unwrap_or_default();
    Chord { modifiers, key }
}

/// Accelerator token for a non-modifier key-event code.
///
/// `KeyX` -> `x`, `DigitN` -> `N`, `Fn` -> `fn`, named codes through the
/// code table; unknown codes pass through unchanged.
pub fn code_to_token(code: &str) -> String {
    if let Some(letter) = code.strip_prefix("Key").filter(|rest| is_single(rest, char::is_ascii_alphabetic)) {
        return letter.to_lowercase();
    }
    if let Some(digit) = code.strip_prefix("Digit").filter(|rest| is_single(rest, char::is_ascii_digit)) {
        return digit.to_string();
    }
    if function_key_number(code).is_some() {
        return code.to_lowercase();
    }
    lookup(CODE_TOKENS, code).map(str::to_string).unwrap_or_else(|| code.to_string())
}

fn first_key_code<S: AsRef<str>>(codes: &[S]) -> Option<&str> {
    codes
        .iter()
        .map(AsRef::as_ref)
        .find(|c| modifier_for_code(c).is_none())
}

fn is_single(s: &str, pred: fn(&char) -> bool) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if pred(&c))
}
