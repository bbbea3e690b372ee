use async_trait::async_trait;
use tokio::sync::broadcast;

use clipper_common::{
    BackendError, BackendEvent, BookmarkEntry, ClipperEntry, FileEntry, NoteItem, Settings,
};

/// The native backend as seen by the caches: one async method per call and
/// a stream of validated push events.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn read_clipboard_entries(&self, count: usize) -> Result<Vec<ClipperEntry>, BackendError>;
    /// Put `entry` back on the system clipboard.
    async fn clipboard_add_entry(&self, entry: &str) -> Result<(), BackendError>;
    async fn open_clipboard_entry(&self, id: &str) -> Result<(), BackendError>;
    async fn delete_clipboard_entry(&self, id: &str) -> Result<(), BackendError>;
    async fn delete_all_clipboard_entries(&self) -> Result<(), BackendError>;
    /// Drop stored entries beyond the newest `keep`.
    async fn clean_old_entries(&self, keep: usize) -> Result<(), BackendError>;
    async fn pause_clipboard_watcher(&self) -> Result<(), BackendError>;
    async fn resume_clipboard_watcher(&self) -> Result<(), BackendError>;
    async fn read_watcher_status(&self) -> Result<bool, BackendError>;

    async fn read_notes(&self) -> Result<Vec<NoteItem>, BackendError>;
    async fn create_note(&self, id: &str, entry: &str) -> Result<NoteItem, BackendError>;
    async fn update_note(&self, id: &str, entry: &str) -> Result<NoteItem, BackendError>;
    async fn delete_note(&self, id: &str) -> Result<(), BackendError>;

    async fn read_bookmarks(&self) -> Result<Vec<BookmarkEntry>, BackendError>;
    async fn delete_bookmark(&self, id: &str) -> Result<(), BackendError>;

    async fn get_files(&self) -> Result<Vec<FileEntry>, BackendError>;
    async fn delete_file(&self, file: &str) -> Result<(), BackendError>;
    async fn delete_all_files(&self) -> Result<(), BackendError>;
    async fn get_files_path(&self) -> Result<String, BackendError>;

    async fn read_settings(&self) -> Result<Settings, BackendError>;
    /// Persist settings. The backend answers every window with a
    /// `settings_changed` event.
    async fn update_settings(&self, settings: &Settings) -> Result<(), BackendError>;
    async fn get_db_path(&self) -> Result<String, BackendError>;
    async fn delete_db(&self) -> Result<(), BackendError>;

    async fn hide_window(&self) -> Result<(), BackendError>;

    /// A new receiver for push events delivered after this call.
    fn subscribe(&self) -> broadcast::Receiver<BackendEvent>;
}
