//! One instance of each service per window, created on first use.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, info};

use clipper_bridge::Backend;
use clipper_common::BackendError;
use clipper_config::ClipperConfig;
use clipper_platform::DisplayStyle;

use crate::bookmarks::BookmarksService;
use crate::clipboard::{ClipboardHistoryService, HistoryOptions};
use crate::dropper::DropperService;
use crate::notes::NotesService;
use crate::recorder::ShortcutRecorder;
use crate::settings::SettingsService;
use crate::theme::{SystemLighting, ThemeService};
use crate::window::WindowActions;

/// Holds the shared services for one window.
///
/// A service that fails its initial read is not cached; the next getter
/// call tries again.
pub struct ServiceRegistry {
    backend: Arc<dyn Backend>,
    config: ClipperConfig,
    system_lighting: SystemLighting,
    clipboard: OnceCell<Arc<ClipboardHistoryService>>,
    notes: OnceCell<Arc<NotesService>>,
    bookmarks: OnceCell<Arc<BookmarksService>>,
    dropper: OnceCell<Arc<DropperService>>,
    settings: OnceCell<Arc<SettingsService>>,
    theme: OnceCell<Arc<ThemeService>>,
    window: OnceCell<Arc<WindowActions>>,
}

impl ServiceRegistry {
    pub fn new(
        backend: Arc<dyn Backend>,
        config: ClipperConfig,
        system_lighting: SystemLighting,
    ) -> Self {
        Self {
            backend,
            config,
            system_lighting,
            clipboard: OnceCell::new(),
            notes: OnceCell::new(),
            bookmarks: OnceCell::new(),
            dropper: OnceCell::new(),
            settings: OnceCell::new(),
            theme: OnceCell::new(),
            window: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &ClipperConfig {
        &self.config
    }

    pub async fn clipboard(&self) -> Result<Arc<ClipboardHistoryService>, BackendError> {
        self.clipboard
            .get_or_try_init(|| async {
                let options = HistoryOptions::from(&self.config.history);
                ClipboardHistoryService::new(self.backend.clone(), options)
                    .await
                    .map(Arc::new)
            })
            .await
            .cloned()
    }

    pub async fn notes(&self) -> Result<Arc<NotesService>, BackendError> {
        self.notes
            .get_or_try_init(|| async {
                NotesService::new(self.backend.clone()).await.map(Arc::new)
            })
            .await
            .cloned()
    }

    pub async fn bookmarks(&self) -> Result<Arc<BookmarksService>, BackendError> {
        self.bookmarks
            .get_or_try_init(|| async {
                BookmarksService::new(self.backend.clone())
                    .await
                    .map(Arc::new)
            })
            .await
            .cloned()
    }

    pub async fn dropper(&self) -> Result<Arc<DropperService>, BackendError> {
        self.dropper
            .get_or_try_init(|| async {
                DropperService::new(self.backend.clone()).await.map(Arc::new)
            })
            .await
            .cloned()
    }

    pub async fn settings(&self) -> Result<Arc<SettingsService>, BackendError> {
        self.settings
            .get_or_try_init(|| async {
                SettingsService::new(self.backend.clone())
                    .await
                    .map(Arc::new)
            })
            .await
            .cloned()
    }

    /// Creates the settings service first if needed.
    pub async fn theme(&self) -> Result<Arc<ThemeService>, BackendError> {
        self.theme
            .get_or_try_init(|| async {
                let settings = self.settings().await?;
                Ok::<_, BackendError>(Arc::new(ThemeService::new(
                    &settings,
                    self.system_lighting,
                )))
            })
            .await
            .cloned()
    }

    pub async fn window(&self) -> Arc<WindowActions> {
        self.window
            .get_or_init(|| async { Arc::new(WindowActions::new(self.backend.clone())) })
            .await
            .clone()
    }

    /// A fresh recorder per settings view; it shares the settings service.
    pub async fn shortcut_recorder(&self) -> Result<ShortcutRecorder, BackendError> {
        let settings = self.settings().await?;
        let style = DisplayStyle::from_setting(self.config.hotkey.display_style);
        Ok(ShortcutRecorder::new(
            settings,
            style,
            self.config.hotkey.default_shortcut.clone(),
        ))
    }

    /// Listener tasks still running across every created service.
    pub fn active_subscriptions(&self) -> usize {
        self.clipboard.get().map_or(0, |s| s.active_subscriptions())
            + self.dropper.get().map_or(0, |s| s.active_subscriptions())
            + self.settings.get().map_or(0, |s| s.active_subscriptions())
            + self.theme.get().map_or(0, |s| s.active_subscriptions())
    }

    /// Stop every listener and forget all services. Getters called after
    /// this create new instances.
    pub fn teardown(&mut self) {
        if let Some(service) = self.clipboard.take() {
            service.teardown();
        }
        if let Some(service) = self.dropper.take() {
            service.teardown();
        }
        if let Some(service) = self.theme.take() {
            service.teardown();
        }
        if let Some(service) = self.settings.take() {
            service.teardown();
        }
        self.notes.take();
        self.bookmarks.take();
        self.window.take();
        debug!("service registry torn down");
    }
}

impl Drop for ServiceRegistry {
    fn drop(&mut self) {
        if self.active_subscriptions() > 0 {
            info!("dropping service registry with live listeners");
        }
        self.teardown();
    }
}
