pub mod capture;
pub mod keymap;
pub mod paths;

pub use capture::{CaptureOutcome, CaptureSession};
pub use keymap::{
    accelerator_to_display, chord_to_accelerator, codes_to_accelerator, codes_to_chord,
    is_valid_hotkey, parse_accelerator, render, render_native, Chord, DisplayProfile,
    DisplayStyle, Modifier, ModifierSet,
};
pub use paths::{config_dir, config_file, data_dir, ensure_dirs, log_dir};
