//! Reactive caches over the backend's entities.
//!
//! Each service loads its entities once, keeps them current from backend
//! events, and exposes them as [`tokio::sync::watch`] receivers. Services
//! differ in how local state follows a mutating call:
//!
//! - clipboard history, watcher status and bookmarks change locally first,
//! - notes and dropped files change only after the backend confirms,
//! - settings change only when the backend's `settings_changed` arrives.
//!
//! [`ServiceRegistry`] hands out one shared instance of each.

pub mod bookmarks;
mod call;
pub mod clipboard;
pub mod dropper;
pub mod list;
pub mod notes;
pub mod observable;
pub mod recorder;
pub mod registry;
pub mod settings;
pub mod subscription;
pub mod theme;
pub mod window;

#[cfg(test)]
mod testing;

pub use bookmarks::BookmarksService;
pub use clipboard::{ClipboardHistoryService, HistoryOptions};
pub use dropper::DropperService;
pub use notes::NotesService;
pub use observable::Observable;
pub use recorder::ShortcutRecorder;
pub use registry::ServiceRegistry;
pub use settings::SettingsService;
pub use subscription::Subscriptions;
pub use theme::{body_class, SystemLighting, ThemeService};
pub use window::WindowActions;
