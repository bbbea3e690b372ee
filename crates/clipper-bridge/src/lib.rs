//! Boundary between the client caches and the native backend.
//!
//! [`Backend`] is the typed call surface the caches program against.
//! [`IpcBackend`] implements it over any [`Transport`] that can carry a
//! [`Command`] and return JSON.

pub mod backend;
pub mod command;
pub mod ipc;
pub mod wire;

pub use backend::Backend;
pub use command::Command;
pub use ipc::{IpcBackend, Transport};
pub use wire::{RawEvent, Reply};
