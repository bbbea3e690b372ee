use serde::{Deserialize, Serialize};

/// Kind of content captured by the clipboard watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Text,
    Image,
}

/// One clipboard history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipperEntry {
    pub id: String,
    pub entry: String,
    pub kind: EntryKind,
    pub timestamp: String,
}
