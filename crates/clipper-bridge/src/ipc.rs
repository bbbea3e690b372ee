//! JSON IPC implementation of [`Backend`].
//!
//! Calls go out through a [`Transport`] as [`Command`] values and come back
//! as JSON which is decoded into the typed reply. Push events arrive raw
//! through [`IpcBackend::deliver_raw`] or [`IpcBackend::deliver_json`] and
//! are validated into [`BackendEvent`] before anything downstream sees them.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use clipper_common::{
    BackendError, BackendEvent, BookmarkEntry, ClipperEntry, EventBus, FileEntry, NoteItem,
    Settings,
};

use crate::backend::Backend;
use crate::command::Command;
use crate::wire::RawEvent;

/// Carries one call to the backend and returns its raw JSON reply.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn invoke(&self, command: &Command) -> Result<serde_json::Value, BackendError>;
}

pub struct IpcBackend<T> {
    transport: T,
    bus: EventBus,
}

impl<T: Transport> IpcBackend<T> {
    pub fn new(transport: T, event_capacity: usize) -> Self {
        Self {
            transport,
            bus: EventBus::new(event_capacity),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call<R: DeserializeOwned>(&self, command: Command) -> Result<R, BackendError> {
        let name = command.name();
        debug!(command = name, "backend call");
        let value = self.transport.invoke(&command).await?;
        serde_json::from_value(value).map_err(|e| BackendError::Decode {
            command: name.to_string(),
            message: e.to_string(),
        })
    }

    /// Validate a raw push event and fan it out.
    ///
    /// Unknown names and malformed payloads are logged and dropped; the
    /// returned error says why.
    pub fn deliver_raw(
        &self,
        name: &str,
        payload: serde_json::Value,
    ) -> Result<BackendEvent, BackendError> {
        match BackendEvent::from_raw(name, payload) {
            Ok(event) => {
                let receivers = self.bus.publish(event.clone());
                debug!(event = event.name(), receivers, "backend event");
                Ok(event)
            }
            Err(e) => {
                warn!("dropping backend event: {e}");
                Err(e)
            }
        }
    }

    /// Same as [`IpcBackend::deliver_raw`] for a `{"event", "payload"}` JSON
    /// text frame.
    pub fn deliver_json(&self, text: &str) -> Result<BackendEvent, BackendError> {
        let raw: RawEvent = serde_json::from_str(text).map_err(|e| {
            warn!("dropping unreadable backend event: {e}");
            BackendError::Event(e.to_string())
        })?;
        self.deliver_raw(&raw.event, raw.payload)
    }
}

#[async_trait]
impl<T: Transport> Backend for IpcBackend<T> {
    async fn read_clipboard_entries(&self, count: usize) -> Result<Vec<ClipperEntry>, BackendError> {
        self.call(Command::ReadClipboardEntries { count }).await
    }

    async fn clipboard_add_entry(&self, entry: &str) -> Result<(), BackendError> {
        self.call(Command::ClipboardAddEntry {
            entry: entry.to_string(),
        })
        .await
    }

    async fn open_clipboard_entry(&self, id: &str) -> Result<(), BackendError> {
        self.call(Command::OpenClipboardEntry { id: id.to_string() })
            .await
    }

    async fn delete_clipboard_entry(&self, id: &str) -> Result<(), BackendError> {
        self.call(Command::DeleteOneClipboardEntry { id: id.to_string() })
            .await
    }

    async fn delete_all_clipboard_entries(&self) -> Result<(), BackendError> {
        self.call(Command::DeleteAllClipboardEntries).await
    }

    async fn clean_old_entries(&self, keep: usize) -> Result<(), BackendError> {
        self.call(Command::CleanOldEntries { keep }).await
    }

    async fn pause_clipboard_watcher(&self) -> Result<(), BackendError> {
        self.call(Command::PauseClipboardWatcher).await
    }

    async fn resume_clipboard_watcher(&self) -> Result<(), BackendError> {
        self.call(Command::ResumeClipboardWatcher).await
    }

    async fn read_watcher_status(&self) -> Result<bool, BackendError> {
        self.call(Command::ReadWatcherStatus).await
    }

    async fn read_notes(&self) -> Result<Vec<NoteItem>, BackendError> {
        self.call(Command::ReadNotes).await
    }

    async fn create_note(&self, id: &str, entry: &str) -> Result<NoteItem, BackendError> {
        self.call(Command::CreateNote {
            id: id.to_string(),
            entry: entry.to_string(),
        })
        .await
    }

    async fn update_note(&self, id: &str, entry: &str) -> Result<NoteItem, BackendError> {
        self.call(Command::UpdateNote {
            id: id.to_string(),
            entry: entry.to_string(),
        })
        .await
    }

    async fn delete_note(&self, id: &str) -> Result<(), BackendError> {
        self.call(Command::DeleteNote { id: id.to_string() }).await
    }

    async fn read_bookmarks(&self) -> Result<Vec<BookmarkEntry>, BackendError> {
        self.call(Command::BookmarksReadEntries).await
    }

    async fn delete_bookmark(&self, id: &str) -> Result<(), BackendError> {
        self.call(Command::DeleteBookmark { id: id.to_string() })
            .await
    }

    async fn get_files(&self) -> Result<Vec<FileEntry>, BackendError> {
        self.call(Command::GetFiles).await
    }

    async fn delete_file(&self, file: &str) -> Result<(), BackendError> {
        self.call(Command::DeleteFile {
            file: file.to_string(),
        })
        .await
    }

    async fn delete_all_files(&self) -> Result<(), BackendError> {
        self.call(Command::DeleteAllFiles).await
    }

    async fn get_files_path(&self) -> Result<String, BackendError> {
        self.call(Command::GetFilesPath).await
    }

    async fn read_settings(&self) -> Result<Settings, BackendError> {
        self.call(Command::ReadSettings).await
    }

    async fn update_settings(&self, settings: &Settings) -> Result<(), BackendError> {
        self.call(Command::UpdateSettings {
            settings: settings.clone(),
        })
        .await
    }

    async fn get_db_path(&self) -> Result<String, BackendError> {
        self.call(Command::GetDbPath).await
    }

    async fn delete_db(&self) -> Result<(), BackendError> {
        self.call(Command::DeleteDb).await
    }

    async fn hide_window(&self) -> Result<(), BackendError> {
        self.call(Command::HideWindow).await
    }

    fn subscribe(&self) -> broadcast::Receiver<BackendEvent> {
        self.bus.subscribe()
    }
}
