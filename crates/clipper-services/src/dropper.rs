//! Files dropped onto the window and the drag-in-progress flag.
//!
//! Confirmed: deletions apply locally after the backend accepts them.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use clipper_bridge::Backend;
use clipper_common::{BackendError, BackendEvent, DragEventType, FileEntry};

use crate::call::LogFailure;
use crate::list::{remove_by_key, upsert_by_key};
use crate::observable::Observable;
use crate::subscription::Subscriptions;

fn file_key(entry: &FileEntry) -> &str {
    &entry.file
}

pub struct DropperService {
    backend: Arc<dyn Backend>,
    files: Observable<Vec<FileEntry>>,
    in_progress: Observable<bool>,
    subscriptions: Subscriptions,
}

impl DropperService {
    pub async fn new(backend: Arc<dyn Backend>) -> Result<Self, BackendError> {
        let service = Self {
            backend,
            files: Observable::new(Vec::new()),
            in_progress: Observable::new(false),
            subscriptions: Subscriptions::new(),
        };
        service.listen();
        service.refresh().await?;
        info!(count = service.files.with(Vec::len), "dropped files ready");
        Ok(service)
    }

    fn listen(&self) {
        let files = self.files.clone();
        let in_progress = self.in_progress.clone();

        self.subscriptions
            .listen("dropper", self.backend.subscribe(), move |event| match event {
                BackendEvent::FilesAdded(added) => {
                    files.modify(|list| upsert_by_key(list, added, file_key));
                }
                BackendEvent::DragDrop(drag) => {
                    in_progress.set(drag.event_type == DragEventType::Started);
                }
                _ => {}
            });
    }

    pub fn files(&self) -> Vec<FileEntry> {
        self.files.snapshot()
    }

    pub fn subscribe_files(&self) -> watch::Receiver<Vec<FileEntry>> {
        self.files.subscribe()
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress.snapshot()
    }

    pub fn subscribe_in_progress(&self) -> watch::Receiver<bool> {
        self.in_progress.subscribe()
    }

    pub async fn refresh(&self) -> Result<(), BackendError> {
        let files = self.backend.get_files().await.log_failure("get_files")?;
        self.files.set(files);
        Ok(())
    }

    pub async fn delete_file(&self, file: &str) -> Result<(), BackendError> {
        self.backend
            .delete_file(file)
            .await
            .log_failure("delete_file")?;
        self.files.modify(|list| remove_by_key(list, file, file_key));
        Ok(())
    }

    pub async fn delete_all(&self) -> Result<(), BackendError> {
        self.backend
            .delete_all_files()
            .await
            .log_failure("delete_files_path")?;
        self.files.set(Vec::new());
        Ok(())
    }

    /// Directory the backend copies dropped files into.
    pub async fn files_path(&self) -> Result<String, BackendError> {
        self.backend
            .get_files_path()
            .await
            .log_failure("get_files_path")
    }

    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.active()
    }

    pub fn teardown(&self) {
        self.subscriptions.teardown();
    }
}
