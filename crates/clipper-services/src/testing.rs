//! In-memory backend for service tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use tokio::sync::broadcast;

use clipper_bridge::{Backend, Command};
use clipper_common::{
    BackendError, BackendEvent, BookmarkEntry, ClipperEntry, EntryKind, EventBus, FileEntry,
    FileType, NoteItem, Settings,
};

#[derive(Default)]
pub struct Store {
    pub entries: Vec<ClipperEntry>,
    pub running: bool,
    pub notes: Vec<NoteItem>,
    pub bookmarks: Vec<BookmarkEntry>,
    pub files: Vec<FileEntry>,
    pub settings: Settings,
}

/// Behaves like the native backend over an in-memory store, records every
/// call, and fails the calls named in `failing`.
pub struct FakeBackend {
    store: Mutex<Store>,
    calls: Mutex<Vec<Command>>,
    failing: Mutex<HashSet<&'static str>>,
    bus: EventBus,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Self::with_store(Store {
            running: true,
            ..Store::default()
        })
    }

    pub fn with_store(store: Store) -> Arc<Self> {
        Arc::new(Self {
            store: Mutex::new(store),
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
            bus: EventBus::new(64),
        })
    }

    pub fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<Command> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls().iter().map(Command::name).collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls().iter().filter(|c| c.name() == name).count()
    }

    pub fn fail(&self, name: &'static str) {
        self.failing.lock().unwrap().insert(name);
    }

    pub fn succeed(&self, name: &str) {
        self.failing.lock().unwrap().remove(name);
    }

    pub fn emit(&self, event: BackendEvent) {
        self.bus.publish(event);
    }

    pub fn receivers(&self) -> usize {
        self.bus.receiver_count()
    }

    fn record(&self, command: Command) -> Result<(), BackendError> {
        let name = command.name();
        self.calls.lock().unwrap().push(command);
        if self.failing.lock().unwrap().contains(name) {
            return Err(BackendError::call(name, "scripted failure"));
        }
        Ok(())
    }
}

pub fn entry(id: &str, text: &str) -> ClipperEntry {
    ClipperEntry {
        id: id.into(),
        entry: text.into(),
        kind: EntryKind::Text,
        timestamp: "2024-08-02T09:18:00.776Z".into(),
    }
}

pub fn note(id: &str, text: &str) -> NoteItem {
    NoteItem {
        id: id.into(),
        entry: text.into(),
        created_time: Some("2024-08-02T09:18:00Z".into()),
        updated_time: None,
    }
}

pub fn bookmark(id: &str, url: &str) -> BookmarkEntry {
    BookmarkEntry {
        id: id.into(),
        url: url.into(),
        text: format!("title {id}"),
        image: None,
        timestamp: "2024-08-02T09:18:00.776Z".into(),
    }
}

pub fn file(name: &str) -> FileEntry {
    FileEntry {
        file: name.into(),
        clipper_path: format!("/data/clipper/files/{name}"),
        file_type: FileType::File,
    }
}

/// Let spawned listener tasks drain what was published.
pub async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn read_clipboard_entries(&self, count: usize) -> Result<Vec<ClipperEntry>, BackendError> {
        self.record(Command::ReadClipboardEntries { count })?;
        Ok(self.store().entries.iter().take(count).cloned().collect())
    }

    async fn clipboard_add_entry(&self, entry: &str) -> Result<(), BackendError> {
        self.record(Command::ClipboardAddEntry {
            entry: entry.into(),
        })
    }

    async fn open_clipboard_entry(&self, id: &str) -> Result<(), BackendError> {
        self.record(Command::OpenClipboardEntry { id: id.into() })
    }

    async fn delete_clipboard_entry(&self, id: &str) -> Result<(), BackendError> {
        self.record(Command::DeleteOneClipboardEntry { id: id.into() })?;
        self.store().entries.retain(|e| e.id != id);
        Ok(())
    }

    async fn delete_all_clipboard_entries(&self) -> Result<(), BackendError> {
        self.record(Command::DeleteAllClipboardEntries)?;
        self.store().entries.clear();
        Ok(())
    }

    async fn clean_old_entries(&self, keep: usize) -> Result<(), BackendError> {
        self.record(Command::CleanOldEntries { keep })?;
        self.store().entries.truncate(keep);
        Ok(())
    }

    async fn pause_clipboard_watcher(&self) -> Result<(), BackendError> {
        self.record(Command::PauseClipboardWatcher)?;
        self.store().running = false;
        Ok(())
    }

    async fn resume_clipboard_watcher(&self) -> Result<(), BackendError> {
        self.record(Command::ResumeClipboardWatcher)?;
        self.store().running = true;
        Ok(())
    }

    async fn read_watcher_status(&self) -> Result<bool, BackendError> {
        self.record(Command::ReadWatcherStatus)?;
        Ok(self.store().running)
    }

    async fn read_notes(&self) -> Result<Vec<NoteItem>, BackendError> {
        self.record(Command::ReadNotes)?;
        Ok(self.store().notes.clone())
    }

    async fn create_note(&self, id: &str, entry: &str) -> Result<NoteItem, BackendError> {
        self.record(Command::CreateNote {
            id: id.into(),
            entry: entry.into(),
        })?;
        let created = note(id, entry);
        self.store().notes.insert(0, created.clone());
        Ok(created)
    }

    async fn update_note(&self, id: &str, entry: &str) -> Result<NoteItem, BackendError> {
        self.record(Command::UpdateNote {
            id: id.into(),
            entry: entry.into(),
        })?;
        let mut updated = note(id, entry);
        updated.updated_time = Some("2024-08-03T10:00:00Z".into());
        let mut store = self.store();
        if let Some(existing) = store.notes.iter_mut().find(|n| n.id == id) {
            *existing = updated.clone();
        }
        Ok(updated)
    }

    async fn delete_note(&self, id: &str) -> Result<(), BackendError> {
        self.record(Command::DeleteNote { id: id.into() })?;
        self.store().notes.retain(|n| n.id != id);
        Ok(())
    }

    async fn read_bookmarks(&self) -> Result<Vec<BookmarkEntry>, BackendError> {
        self.record(Command::BookmarksReadEntries)?;
        Ok(self.store().bookmarks.clone())
    }

    async fn delete_bookmark(&self, id: &str) -> Result<(), BackendError> {
        self.record(Command::DeleteBookmark { id: id.into() })?;
        self.store().bookmarks.retain(|b| b.id != id);
        Ok(())
    }

    async fn get_files(&self) -> Result<Vec<FileEntry>, BackendError> {
        self.record(Command::GetFiles)?;
        Ok(self.store().files.clone())
    }

    async fn delete_file(&self, file: &str) -> Result<(), BackendError> {
        self.record(Command::DeleteFile { file: file.into() })?;
        self.store().files.retain(|f| f.file != file);
        Ok(())
    }

    async fn delete_all_files(&self) -> Result<(), BackendError> {
        self.record(Command::DeleteAllFiles)?;
        self.store().files.clear();
        Ok(())
    }

    async fn get_files_path(&self) -> Result<String, BackendError> {
        self.record(Command::GetFilesPath)?;
        Ok("/data/clipper/files".into())
    }

    async fn read_settings(&self) -> Result<Settings, BackendError> {
        self.record(Command::ReadSettings)?;
        Ok(self.store().settings.clone())
    }

    async fn update_settings(&self, settings: &Settings) -> Result<(), BackendError> {
        self.record(Command::UpdateSettings {
            settings: settings.clone(),
        })?;
        self.store().settings = settings.clone();
        self.bus.publish(BackendEvent::SettingsChanged(settings.clone()));
        Ok(())
    }

    async fn get_db_path(&self) -> Result<String, BackendError> {
        self.record(Command::GetDbPath)?;
        Ok("/data/clipper/clipper.db".into())
    }

    async fn delete_db(&self) -> Result<(), BackendError> {
        self.record(Command::DeleteDb)
    }

    async fn hide_window(&self) -> Result<(), BackendError> {
        self.record(Command::HideWindow)
    }

    fn subscribe(&self) -> broadcast::Receiver<BackendEvent> {
        self.bus.subscribe()
    }
}
