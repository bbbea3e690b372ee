//! Recording a new global shortcut from the settings view.

use std::sync::Arc;

use tracing::info;

use clipper_common::{BackendError, Settings};
use clipper_platform::keymap::{accelerator_to_display, render};
use clipper_platform::{CaptureOutcome, CaptureSession, DisplayStyle};

use crate::settings::SettingsService;

/// Owns a [`CaptureSession`] while recording and saves the captured
/// shortcut through [`SettingsService::update`].
///
/// The saved shortcut shows up in settings only once the backend's
/// `settings_changed` event arrives.
pub struct ShortcutRecorder {
    settings: Arc<SettingsService>,
    style: DisplayStyle,
    default_shortcut: String,
    session: Option<CaptureSession>,
}

impl ShortcutRecorder {
    pub fn new(
        settings: Arc<SettingsService>,
        style: DisplayStyle,
        default_shortcut: impl Into<String>,
    ) -> Self {
        Self {
            settings,
            style,
            default_shortcut: default_shortcut.into(),
            session: None,
        }
    }

    pub fn start(&mut self) {
        self.session = Some(CaptureSession::new());
    }

    pub fn is_recording(&self) -> bool {
        self.session.is_some()
    }

    /// Feed a key-down while recording. On completion recording stops and
    /// the new shortcut is sent to the backend.
    pub async fn key_down(&mut self, code: &str) -> Result<CaptureOutcome, BackendError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(CaptureOutcome::Pending);
        };

        let outcome = session.key_down(code);
        if let CaptureOutcome::Complete(accelerator) = &outcome {
            self.session = None;
            info!(%accelerator, "recorded new shortcut");
            let settings = Settings {
                shortcut: accelerator.clone(),
                ..self.settings.settings().unwrap_or_default()
            };
            self.settings.update(&settings).await?;
        }
        Ok(outcome)
    }

    pub fn key_up(&mut self, code: &str) {
        if let Some(session) = self.session.as_mut() {
            session.key_up(code);
        }
    }

    /// Stop recording without saving.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Drop held keys but keep recording.
    pub fn clear(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.cancel();
        }
    }

    /// The stored shortcut, or the configured default when none is set.
    pub fn current_shortcut(&self) -> String {
        self.settings
            .settings()
            .map(|s| s.shortcut)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| self.default_shortcut.clone())
    }

    /// What the view shows: live held keys while recording, otherwise the
    /// current shortcut.
    pub fn display(&self) -> String {
        match &self.session {
            Some(session) => render(&session.preview(), self.style),
            None => accelerator_to_display(&self.current_shortcut(), self.style),
        }
    }
}

#[cfg(test)]
mod tests {
    use clipper_bridge::Command;
    use clipper_common::ColorPreference;

    use super::*;
    use crate::testing::{settle, FakeBackend, Store};

    async fn recorder(shortcut: &str) -> (Arc<FakeBackend>, ShortcutRecorder) {
        let backend = FakeBackend::with_store(Store {
            settings: Settings {
                color: ColorPreference::Azure,
                shortcut: shortcut.into(),
                ..Settings::default()
            },
            ..Store::default()
        });
        let settings = Arc::new(SettingsService::new(backend.clone()).await.unwrap());
        let recorder = ShortcutRecorder::new(settings, DisplayStyle::Words, "ctrl+alt+keyc");
        (backend, recorder)
    }

    #[tokio::test]
    async fn records_and_saves_shortcut() {
        let (backend, mut recorder) = recorder("ctrl+alt+keyc").await;
        recorder.start();

        assert_eq!(
            recorder.key_down("ControlLeft").await.unwrap(),
            CaptureOutcome::Pending
        );
        assert_eq!(recorder.display(), "Ctrl");
        assert_eq!(
            recorder.key_down("KeyQ").await.unwrap(),
            CaptureOutcome::Complete("ctrl+q".into())
        );
        assert!(!recorder.is_recording());

        let saved = backend.calls().into_iter().find_map(|c| match c {
            Command::UpdateSettings { settings } => Some(settings),
            _ => None,
        });
        let saved = saved.unwrap();
        assert_eq!(saved.shortcut, "ctrl+q");
        assert_eq!(saved.color, ColorPreference::Azure);

        settle().await;
        assert_eq!(recorder.display(), "Ctrl + Q");
    }

    #[tokio::test]
    async fn keys_are_ignored_when_not_recording() {
        let (backend, mut recorder) = recorder("").await;
        recorder.key_down("ControlLeft").await.unwrap();
        recorder.key_down("KeyQ").await.unwrap();
        assert_eq!(backend.count("update_settings"), 0);
    }

    #[tokio::test]
    async fn cancel_and_clear() {
        let (backend, mut recorder) = recorder("alt+f4").await;
        recorder.start();
        recorder.key_down("ShiftLeft").await.unwrap();
        recorder.clear();
        assert!(recorder.is_recording());
        assert_eq!(recorder.display(), "");

        recorder.key_down("KeyA").await.unwrap();
        recorder.key_up("KeyA");
        recorder.cancel();
        assert_eq!(recorder.display(), "Alt + F4");
        assert_eq!(backend.count("update_settings"), 0);
    }

    #[tokio::test]
    async fn empty_shortcut_falls_back_to_default() {
        let (_backend, recorder) = recorder("  ").await;
        assert_eq!(recorder.current_shortcut(), "ctrl+alt+keyc");
        assert_eq!(recorder.display(), "Ctrl + Alt + C");
    }

    #[tokio::test]
    async fn failed_save_is_reported() {
        let (backend, mut recorder) = recorder("alt+f4").await;
        backend.fail("update_settings");
        recorder.start();
        recorder.key_down("AltLeft").await.unwrap();
        assert!(recorder.key_down("KeyZ").await.is_err());
        assert_eq!(recorder.current_shortcut(), "alt+f4");
    }
}
