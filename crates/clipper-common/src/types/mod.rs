//! Payload shapes exchanged with the backend.
//!
//! Field names follow the backend's JSON encoding; do not rename without
//! checking the command handlers on the other side.

mod bookmarks;
mod clipboard;
mod files;
mod notes;
mod settings;

pub use bookmarks::*;
pub use clipboard::*;
pub use files::*;
pub use notes::*;
pub use settings::*;
