//! Clipboard history and watcher status.
//!
//! Optimistic: local state changes before the backend call goes out. A
//! failed call is logged and returned; nothing is rolled back.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use clipper_bridge::Backend;
use clipper_common::{BackendError, BackendEvent, ClipperEntry};
use clipper_config::schema::HistoryConfig;

use crate::call::LogFailure;
use crate::list::{prepend_bounded, remove_by_key};
use crate::observable::Observable;
use crate::subscription::Subscriptions;

/// Sizing and housekeeping for [`ClipboardHistoryService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryOptions {
    /// Bound on the local list and the count requested on load.
    pub size: usize,
    pub trim_interval: Duration,
    pub trim_initial_delay: Duration,
}

impl From<&HistoryConfig> for HistoryOptions {
    fn from(config: &HistoryConfig) -> Self {
        Self {
            size: config.size as usize,
            trim_interval: Duration::from_secs(config.trim_interval_secs),
            trim_initial_delay: Duration::from_secs(config.trim_initial_delay_secs),
        }
    }
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self::from(&HistoryConfig::default())
    }
}

fn entry_id(entry: &ClipperEntry) -> &str {
    &entry.id
}

pub struct ClipboardHistoryService {
    backend: Arc<dyn Backend>,
    items: Observable<Vec<ClipperEntry>>,
    running: Observable<bool>,
    history_size: Observable<usize>,
    subscriptions: Subscriptions,
}

impl ClipboardHistoryService {
    /// Subscribe to push events, load the newest `size` entries and the
    /// watcher status, then start periodic trimming.
    pub async fn new(
        backend: Arc<dyn Backend>,
        options: HistoryOptions,
    ) -> Result<Self, BackendError> {
        let service = Self {
            backend,
            items: Observable::new(Vec::new()),
            running: Observable::new(true),
            history_size: Observable::new(options.size),
            subscriptions: Subscriptions::new(),
        };

        service.listen();
        service.refresh().await?;
        service.spawn_trim(options.trim_initial_delay, options.trim_interval);

        info!(size = options.size, "clipboard history ready");
        Ok(service)
    }

    fn listen(&self) {
        let items = self.items.clone();
        let running = self.running.clone();
        let history_size = self.history_size.clone();

        self.subscriptions
            .listen("clipboard", self.backend.subscribe(), move |event| match event {
                BackendEvent::EntryAdded(entry) => {
                    let bound = history_size.snapshot();
                    items.modify(|list| prepend_bounded(list, entry, bound));
                }
                BackendEvent::StatusChanged(value) => running.set(value),
                BackendEvent::SettingsChanged(settings) => {
                    resize(&items, &history_size, settings.history_size);
                }
                _ => {}
            });
    }

    fn spawn_trim(&self, initial_delay: Duration, interval: Duration) {
        let backend = Arc::clone(&self.backend);
        let history_size = self.history_size.clone();
        let interval = interval.max(Duration::from_secs(1));

        self.subscriptions.spawn("history-trim", async move {
            tokio::time::sleep(initial_delay).await;
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let keep = history_size.snapshot();
                if backend
                    .clean_old_entries(keep)
                    .await
                    .log_failure("clean_old_entries")
                    .is_ok()
                {
                    debug!(keep, "trimmed stored clipboard history");
                }
            }
        });
    }

    pub fn items(&self) -> Vec<ClipperEntry> {
        self.items.snapshot()
    }

    pub fn subscribe_items(&self) -> watch::Receiver<Vec<ClipperEntry>> {
        self.items.subscribe()
    }

    pub fn running(&self) -> bool {
        self.running.snapshot()
    }

    pub fn subscribe_running(&self) -> watch::Receiver<bool> {
        self.running.subscribe()
    }

    pub fn history_size(&self) -> usize {
        self.history_size.snapshot()
    }

    /// Re-read entries and watcher status, replacing local state.
    pub async fn refresh(&self) -> Result<(), BackendError> {
        let count = self.history_size.snapshot();
        let entries = self
            .backend
            .read_clipboard_entries(count)
            .await
            .log_failure("read_clipboard_entries")?;
        let running = self
            .backend
            .read_watcher_status()
            .await
            .log_failure("read_watcher_status")?;

        self.items.set(entries.into_iter().take(count).collect());
        self.running.set(running);
        Ok(())
    }

    /// Put the text of entry `id` back on the system clipboard. Unknown ids
    /// are ignored.
    pub async fn copy(&self, id: &str) -> Result<(), BackendError> {
        let text = self
            .items
            .with(|items| items.iter().find(|e| e.id == id).map(|e| e.entry.clone()));
        match text {
            Some(text) => self
                .backend
                .clipboard_add_entry(&text)
                .await
                .log_failure("clipboard_add_entry"),
            None => {
                debug!(id, "copy of unknown clipboard entry ignored");
                Ok(())
            }
        }
    }

    pub async fn open(&self, id: &str) -> Result<(), BackendError> {
        self.backend
            .open_clipboard_entry(id)
            .await
            .log_failure("open_clipboard_entry")
    }

    pub async fn delete(&self, id: &str) -> Result<(), BackendError> {
        self.items.modify(|list| remove_by_key(list, id, entry_id));
        self.backend
            .delete_clipboard_entry(id)
            .await
            .log_failure("delete_one_clipboard_entry")
    }

    pub async fn clear(&self) -> Result<(), BackendError> {
        self.items.set(Vec::new());
        self.backend
            .delete_all_clipboard_entries()
            .await
            .log_failure("delete_all_clipboard_entries")
    }

    pub async fn pause(&self) -> Result<(), BackendError> {
        self.running.set(false);
        self.backend
            .pause_clipboard_watcher()
            .await
            .log_failure("pause_clipboard_watcher")
    }

    pub async fn resume(&self) -> Result<(), BackendError> {
        self.running.set(true);
        self.backend
            .resume_clipboard_watcher()
            .await
            .log_failure("resume_clipboard_watcher")
    }

    /// Change the bound; the local list is truncated to it immediately.
    pub fn set_history_size(&self, size: usize) {
        resize(&self.items, &self.history_size, size);
    }

    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.active()
    }

    pub fn teardown(&self) {
        self.subscriptions.teardown();
    }
}

fn resize(items: &Observable<Vec<ClipperEntry>>, history_size: &Observable<usize>, size: usize) {
    if history_size.snapshot() == size {
        return;
    }
    history_size.set(size);
    items.modify(|list| {
        let before = list.len();
        list.truncate(size);
        list.len() != before
    });
    debug!(size, "clipboard history resized");
}
