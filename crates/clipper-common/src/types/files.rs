use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    File,
    Directory,
}

/// A file or directory dropped onto the widget and copied into storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Original name; unique within the storage directory.
    pub file: String,
    /// Location of the stored copy.
    pub clipper_path: String,
    pub file_type: FileType,
}

impl FileEntry {
    pub fn format(&self) -> FileFormat {
        match self.file_type {
            FileType::Directory => FileFormat::Unknown,
            FileType::File => FileFormat::from_path(&self.file),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragEventType {
    Started,
    Dropped,
    Ended,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEvent {
    pub event_type: DragEventType,
    #[serde(default)]
    pub paths: Vec<String>,
}

/// Coarse content class used to pick a file icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    Zip,
    Image,
    Video,
    Audio,
    Text,
    Pdf,
    Unknown,
}

impl FileFormat {
    /// Classify by extension (case-insensitive).
    pub fn from_path(file: &str) -> Self {
        let ext = Path::new(file)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("zip" | "gz" | "bz2") => FileFormat::Zip,
            Some("jpg" | "jpeg" | "png" | "gif") => FileFormat::Image,
            Some("mp4" | "avi") => FileFormat::Video,
            Some("mp3" | "wav") => FileFormat::Audio,
            Some("txt") => FileFormat::Text,
            Some("pdf") => FileFormat::Pdf,
            _ => FileFormat::Unknown,
        }
    }
}
