//! Recording a new global shortcut from raw key events.

use tracing::{debug, error};

use crate::keymap::{codes_to_accelerator, codes_to_chord, is_valid_hotkey, Chord};

/// Result of feeding one key-down into a [`CaptureSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Still waiting for a complete modifier + key combination.
    Pending,
    /// The held codes formed a valid hotkey, converted to an accelerator.
    Complete(String),
}

/// The set of key-event codes currently held down, in press order.
///
/// Completes the instant the held set is a valid hotkey; the session is
/// then cleared and may record again.
#[derive(Debug, Default, Clone)]
pub struct CaptureSession {
    held: Vec<String>,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, code: &str) -> CaptureOutcome {
        if self.held.iter().any(|c| c == code) {
            return CaptureOutcome::Pending;
        }
        self.held.push(code.to_string());

        if !is_valid_hotkey(&self.held) {
            return CaptureOutcome::Pending;
        }

        let outcome = match codes_to_accelerator(&self.held) {
            Ok(accelerator) => {
                debug!(%accelerator, "shortcut captured");
                CaptureOutcome::Complete(accelerator)
            }
            Err(e) => {
                error!("capture: {e}");
                CaptureOutcome::Pending
            }
        };
        self.held.clear();
        outcome
    }

    pub fn key_up(&mut self, code: &str) {
        self.held.retain(|c| c != code);
    }

    pub fn cancel(&mut self) {
        self.held.clear();
    }

    pub fn held(&self) -> &[String] {
        &self.held
    }

    pub fn is_idle(&self) -> bool {
        self.held.is_empty()
    }

    /// The chord for what is held right now, for live display.
    pub fn preview(&self) -> Chord {
        codes_to_chord(&self.held)
    }
}
