//! Bookmarks cache. Optimistic, like clipboard history.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

use clipper_bridge::Backend;
use clipper_common::{BackendError, BookmarkEntry};

use crate::call::LogFailure;
use crate::list::remove_by_key;
use crate::observable::Observable;

fn bookmark_id(bookmark: &BookmarkEntry) -> &str {
    &bookmark.id
}

pub struct BookmarksService {
    backend: Arc<dyn Backend>,
    bookmarks: Observable<Vec<BookmarkEntry>>,
}

impl BookmarksService {
    pub async fn new(backend: Arc<dyn Backend>) -> Result<Self, BackendError> {
        let service = Self {
            backend,
            bookmarks: Observable::new(Vec::new()),
        };
        service.refresh().await?;
        info!(count = service.bookmarks.with(Vec::len), "bookmarks ready");
        Ok(service)
    }

    pub fn bookmarks(&self) -> Vec<BookmarkEntry> {
        self.bookmarks.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<BookmarkEntry>> {
        self.bookmarks.subscribe()
    }

    pub async fn refresh(&self) -> Result<(), BackendError> {
        let bookmarks = self
            .backend
            .read_bookmarks()
            .await
            .log_failure("bookmarks_read_entries")?;
        self.bookmarks.set(bookmarks);
        Ok(())
    }

    /// Put the bookmark's URL on the system clipboard.
    pub async fn copy(&self, id: &str) -> Result<(), BackendError> {
        let url = self
            .bookmarks
            .with(|list| list.iter().find(|b| b.id == id).map(|b| b.url.clone()));
        let Some(url) = url else {
            debug!(id, "copy of unknown bookmark ignored");
            return Ok(());
        };
        self.backend
            .clipboard_add_entry(&url)
            .await
            .log_failure("clipboard_add_entry")
    }

    pub async fn open(&self, id: &str) -> Result<(), BackendError> {
        self.backend
            .open_clipboard_entry(id)
            .await
            .log_failure("open_clipboard_entry")
    }

    pub async fn delete(&self, id: &str) -> Result<(), BackendError> {
        self.bookmarks
            .modify(|list| remove_by_key(list, id, bookmark_id));
        self.backend
            .delete_bookmark(id)
            .await
            .log_failure("delete_bookmark")
    }

    /// Empty the local list. Stored bookmarks are untouched.
    pub fn clear(&self) {
        self.bookmarks.set(Vec::new());
    }
}
