//! Fixed key tables shared by the parser, the renderer and code conversion.

/// Accelerator key token -> logical key.
///
/// Primary tokens come before numpad aliases so a reverse lookup by key
/// finds the main-keyboard token first.
pub(super) const KEY_GLYPHS: &[(&str, &str)] = &[
    // Letters
    ("keya", "a"),
    ("keyb", "b"),
    ("keyc", "c"),
    ("keyd", "d"),
    ("keye", "e"),
    ("keyf", "f"),
    ("keyg", "g"),
    ("keyh", "h"),
    ("keyi", "i"),
    ("keyj", "j"),
    ("keyk", "k"),
    ("keyl", "l"),
    ("keym", "m"),
    ("keyn", "n"),
    ("keyo", "o"),
    ("keyp", "p"),
    ("keyq", "q"),
    ("keyr", "r"),
    ("keys", "s"),
    ("keyt", "t"),
    ("keyu", "u"),
    ("keyv", "v"),
    ("keyw", "w"),
    ("keyx", "x"),
    ("keyy", "y"),
    ("keyz", "z"),
    // Digits
    ("digit0", "0"),
    ("digit1", "1"),
    ("digit2", "2"),
    ("digit3", "3"),
    ("digit4", "4"),
    ("digit5", "5"),
    ("digit6", "6"),
    ("digit7", "7"),
    ("digit8", "8"),
    ("digit9", "9"),
    // Punctuation
    ("backquote", "`"),
    ("backslash", "\\"),
    ("bracketleft", "["),
    ("bracketright", "]"),
    ("comma", ","),
    ("equal", "="),
    ("minus", "-"),
    ("period", "."),
    ("quote", "'"),
    ("semicolon", ";"),
    ("slash", "/"),
    // Whitespace and editing
    ("space", "Space"),
    ("tab", "Tab"),
    ("enter", "Enter"),
    ("backspace", "Backspace"),
    ("escape", "Escape"),
    ("capslock", "CapsLock"),
    ("delete", "Delete"),
    ("insert", "Insert"),
    // Navigation
    ("end", "End"),
    ("home", "Home"),
    ("pagedown", "PageDown"),
    ("pageup", "PageUp"),
    ("arrowdown", "ArrowDown"),
    ("arrowleft", "ArrowLeft"),
    ("arrowright", "ArrowRight"),
    ("arrowup", "ArrowUp"),
    ("printscreen", "PrintScreen"),
    ("scrolllock", "ScrollLock"),
    ("numlock", "NumLock"),
    // Function keys
    ("f1", "F1"),
    ("f2", "F2"),
    ("f3", "F3"),
    ("f4", "F4"),
    ("f5", "F5"),
    ("f6", "F6"),
    ("f7", "F7"),
    ("f8", "F8"),
    ("f9", "F9"),
    ("f10", "F10"),
    ("f11", "F11"),
    ("f12", "F12"),
    ("f13", "F13"),
    ("f14", "F14"),
    ("f15", "F15"),
    ("f16", "F16"),
    ("f17", "F17"),
    ("f18", "F18"),
    ("f19", "F19"),
    ("f20", "F20"),
    ("f21", "F21"),
    ("f22", "F22"),
    ("f23", "F23"),
    ("f24", "F24"),
    // Numpad
    ("numpad0", "0"),
    ("numpad1", "1"),
    ("numpad2", "2"),
    ("numpad3", "3"),
    ("numpad4", "4"),
    ("numpad5", "5"),
    ("numpad6", "6"),
    ("numpad7", "7"),
    ("numpad8", "8"),
    ("numpad9", "9"),
    ("numpadadd", "+"),
    ("numpaddecimal", "."),
    ("numpaddivide", "/"),
    ("numpadenter", "Enter"),
    ("numpadequal", "="),
    ("numpadmultiply", "*"),
    ("numpadsubtract", "-"),
    // Media
    ("audiovolumedown", "AudioVolumeDown"),
    ("audiovolumeup", "AudioVolumeUp"),
    ("audiovolumemute", "AudioVolumeMute"),
    ("mediaplay", "MediaPlay"),
    ("mediapause", "MediaPause"),
    ("mediaplaypause", "MediaPlayPause"),
    ("mediastop", "MediaStop"),
    ("mediatracknext", "MediaTrackNext"),
    ("mediatrackprevious", "MediaTrackPrevious"),
];

/// Key-event codes that do not follow the `KeyX` / `DigitN` / `Fn`
/// patterns -> accelerator token.
pub(super) const CODE_TOKENS: &[(&str, &str)] = &[
    ("Space", "space"),
    ("Spacebar", "space"),
    ("Backspace", "backspace"),
    ("Enter", "enter"),
    ("Tab", "tab"),
    ("Escape", "escape"),
    ("Esc", "escape"),
    ("ArrowLeft", "arrowleft"),
    ("ArrowRight", "arrowright"),
    ("ArrowUp", "arrowup"),
    ("ArrowDown", "arrowdown"),
    ("CapsLock", "capslock"),
    ("Delete", "delete"),
    ("End", "end"),
    ("Home", "home"),
    ("Insert", "insert"),
    ("PageDown", "pagedown"),
    ("PageUp", "pageup"),
    ("PrintScreen", "printscreen"),
    ("ScrollLock", "scrolllock"),
    ("NumLock", "numlock"),
    ("Numpad0", "numpad0"),
    ("Numpad1", "numpad1"),
    ("Numpad2", "numpad2"),
    ("Numpad3", "numpad3"),
    ("Numpad4", "numpad4"),
    ("Numpad5", "numpad5"),
    ("Numpad6", "numpad6"),
    ("Numpad7", "numpad7"),
    ("Numpad8", "numpad8"),
    ("Numpad9", "numpad9"),
    ("NumpadAdd", "numpadadd"),
    ("NumpadDecimal", "numpaddecimal"),
    ("NumpadDivide", "numpaddivide"),
    ("NumpadEnter", "numpadenter"),
    ("NumpadEqual", "numpadequal"),
    ("NumpadMultiply", "numpadmultiply"),
    ("NumpadSubtract", "numpadsubtract"),
    ("Backquote", "backquote"),
    ("Backslash", "backslash"),
    ("BracketLeft", "bracketleft"),
    ("BracketRight", "bracketright"),
    ("Comma", "comma"),
    ("Equal", "equal"),
    ("Minus", "minus"),
    ("Period", "period"),
    ("Quote", "quote"),
    ("Semicolon", "semicolon"),
    ("Slash", "slash"),
];

/// Symbol-style labels for named keys, keyed by lowercase key.
pub(super) const SYMBOL_KEYS: &[(&str, &str)] = &[
    ("enter", "\u{21A9}"),      // ↩
    ("return", "\u{21A9}"),     // ↩
    ("tab", "\u{21E5}"),        // ⇥
    ("backspace", "\u{232B}"),  // ⌫
    ("delete", "\u{2326}"),     // ⌦
    ("escape", "\u{238B}"),     // ⎋
    ("esc", "\u{238B}"),        // ⎋
    ("arrowleft", "\u{2190}"),  // ←
    ("arrowup", "\u{2191}"),    // ↑
    ("arrowright", "\u{2192}"), // →
    ("arrowdown", "\u{2193}"),  // ↓
    ("space", "\u{2423}"),      // ␣
    ("capslock", "\u{21EA}"),   // ⇪
    ("pageup", "\u{21DE}"),     // ⇞
    ("pagedown", "\u{21DF}"),   // ⇟
    ("home", "\u{2196}"),       // ↖
    ("end", "\u{2198}"),        // ↘
];

/// Word-style labels for named keys, keyed by lowercase key.
pub(super) const WORD_KEYS: &[(&str, &str)] = &[
    ("enter", "Enter"),
    ("return", "Enter"),
    ("tab", "Tab"),
    ("backspace", "Backspace"),
    ("delete", "Delete"),
    ("escape", "Esc"),
    ("esc", "Esc"),
    ("arrowleft", "Left"),
    ("arrowup", "Up"),
    ("arrowright", "Right"),
    ("arrowdown", "Down"),
    ("space", "Space"),
    ("capslock", "CapsLock"),
    ("pageup", "PageUp"),
    ("pagedown", "PageDown"),
    ("home", "Home"),
    ("end", "End"),
];

pub(super) fn lookup<'a>(table: &'a [(&'a str, &'a str)], key: &str) -> Option<&'a str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Parse `f1`..`f24` (any case) into the function key number.
pub(super) fn function_key_number(key: &str) -> Option<u8> {
    let digits = key.strip_prefix('f').or_else(|| key.strip_prefix('F'))?;
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|n| (1..=24).contains(n))
}
