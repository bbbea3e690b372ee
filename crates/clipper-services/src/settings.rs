//! User settings.
//!
//! Event-only: [`SettingsService::update`] never touches local state. The
//! backend answers every update with `settings_changed` to all windows,
//! and that event is the only writer after the initial read.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use clipper_bridge::Backend;
use clipper_common::{BackendError, BackendEvent, Settings};

use crate::call::LogFailure;
use crate::observable::Observable;
use crate::subscription::Subscriptions;

pub struct SettingsService {
    backend: Arc<dyn Backend>,
    settings: Observable<Option<Settings>>,
    subscriptions: Subscriptions,
}

impl SettingsService {
    pub async fn new(backend: Arc<dyn Backend>) -> Result<Self, BackendError> {
        let service = Self {
            backend,
            settings: Observable::new(None),
            subscriptions: Subscriptions::new(),
        };

        let settings = service.settings.clone();
        service
            .subscriptions
            .listen("settings", service.backend.subscribe(), move |event| {
                if let BackendEvent::SettingsChanged(value) = event {
                    settings.set(Some(value));
                }
            });

        service.refresh().await?;
        info!("settings ready");
        Ok(service)
    }

    /// `None` until the first read or event.
    pub fn settings(&self) -> Option<Settings> {
        self.settings.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Settings>> {
        self.settings.subscribe()
    }

    pub(crate) fn observable(&self) -> Observable<Option<Settings>> {
        self.settings.clone()
    }

    pub async fn refresh(&self) -> Result<(), BackendError> {
        let settings = self
            .backend
            .read_settings()
            .await
            .log_failure("read_settings")?;
        self.settings.set(Some(settings));
        Ok(())
    }

    pub async fn update(&self, settings: &Settings) -> Result<(), BackendError> {
        self.backend
            .update_settings(settings)
            .await
            .log_failure("update_settings")
    }

    pub async fn db_path(&self) -> Result<String, BackendError> {
        self.backend.get_db_path().await.log_failure("get_db_path")
    }

    pub async fn delete_db(&self) -> Result<(), BackendError> {
        self.backend.delete_db().await.log_failure("delete_db")
    }

    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.active()
    }

    pub fn teardown(&self) {
        self.subscriptions.teardown();
    }
}
