//! Keyboard shortcut representations.
//!
//! Three forms of the same shortcut:
//! - accelerator strings used by the backend (`"ctrl+shift+keya"`),
//! - [`Chord`], the decoded modifier set and key,
//! - display strings, symbol style (`⌘⇧A`) or word style (`Ctrl + Shift + A`).
//!
//! Plus conversion from raw key-event codes captured while recording.

mod codes;
mod display;
mod parse;
mod tables;
mod types;


pub use codes::{
    code_to_token, codes_to_accelerator, codes_to_chord, is_valid_hotkey, modifier_for_code,
};
pub use display::{render, render_native, DisplayProfile, DisplayStyle};
pub use parse::{chord_to_accelerator, parse_accelerator};
pub use types::{Chord, Modifier, ModifierSet};

/// Parse an accelerator and render it in one step.
pub fn accelerator_to_display(accelerator: &str, style: DisplayStyle) -> String {
    render(&parse_accelerator(accelerator), style)
}
