//! Notes cache.
//!
//! Confirmed: local state changes only after the backend accepts a call,
//! using the note the backend returns.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

use clipper_bridge::Backend;
use clipper_common::{new_id, BackendError, NoteItem};

use crate::call::LogFailure;
use crate::list::{remove_by_key, replace_by_key};
use crate::observable::Observable;

fn note_id(note: &NoteItem) -> &str {
    &note.id
}

pub struct NotesService {
    backend: Arc<dyn Backend>,
    notes: Observable<Vec<NoteItem>>,
}

impl NotesService {
    pub async fn new(backend: Arc<dyn Backend>) -> Result<Self, BackendError> {
        let service = Self {
            backend,
            notes: Observable::new(Vec::new()),
        };
        service.refresh().await?;
        info!(count = service.notes.with(Vec::len), "notes ready");
        Ok(service)
    }

    pub fn notes(&self) -> Vec<NoteItem> {
        self.notes.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<NoteItem>> {
        self.notes.subscribe()
    }

    pub async fn refresh(&self) -> Result<(), BackendError> {
        let notes = self.backend.read_notes().await.log_failure("read_notes")?;
        self.notes.set(notes);
        Ok(())
    }

    /// Save a new note at the top of the list.
    ///
    /// Whitespace-only text is not saved and returns `None`. Non-blank text
    /// is stored exactly as typed.
    pub async fn create(&self, entry: &str) -> Result<Option<NoteItem>, BackendError> {
        if NoteItem::is_blank(entry) {
            debug!("blank note not created");
            return Ok(None);
        }

        let id = new_id();
        let saved = self
            .backend
            .create_note(&id, entry)
            .await
            .log_failure("create_note")?;

        self.notes.modify(|notes| {
            notes.insert(0, saved.clone());
            true
        });
        Ok(Some(saved))
    }

    /// Replace a note's text. Clearing a note to whitespace deletes it.
    pub async fn update(&self, id: &str, entry: &str) -> Result<Option<NoteItem>, BackendError> {
        if NoteItem::is_blank(entry) {
            self.delete(id).await?;
            return Ok(None);
        }

        let saved = self
            .backend
            .update_note(id, entry)
            .await
            .log_failure("update_note")?;

        self.notes
            .modify(|notes| replace_by_key(notes, saved.clone(), note_id));
        Ok(Some(saved))
    }

    pub async fn delete(&self, id: &str) -> Result<(), BackendError> {
        self.backend
            .delete_note(id)
            .await
            .log_failure("delete_note")?;
        self.notes.modify(|notes| remove_by_key(notes, id, note_id));
        Ok(())
    }

    /// Put note text on the system clipboard.
    pub async fn copy(&self, entry: &str) -> Result<(), BackendError> {
        self.backend
            .clipboard_add_entry(entry)
            .await
            .log_failure("clipboard_add_entry")
    }
}
