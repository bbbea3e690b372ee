pub mod errors;
pub mod events;
pub mod id;
pub mod text;
pub mod types;

pub use errors::{BackendError, ClipperError, ConfigError, KeymapError, PlatformError};
pub use events::{BackendEvent, EventBus};
pub use id::new_id;
pub use text::{segment_urls, Segment};
pub use types::{
    BookmarkEntry, ClipperEntry, ColorPreference, DragEvent, DragEventType, EntryKind, FileEntry,
    FileFormat, FileType, LightingPreference, NoteItem, Settings,
};

pub type Result<T> = std::result::Result<T, ClipperError>;
