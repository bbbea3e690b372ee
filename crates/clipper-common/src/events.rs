use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

use crate::errors::BackendError;
use crate::types::{ClipperEntry, DragEvent, FileEntry, Settings};

/// A push event emitted by the backend.
///
/// The wire form is `{"event": "<name>", "payload": ...}`. Raw events are
/// validated into this enum at the boundary; nothing past the bridge sees an
/// untyped payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload")]
pub enum BackendEvent {
    #[serde(rename = "clipboard_entry_added")]
    EntryAdded(ClipperEntry),
    /// Watcher running (`true`) or paused (`false`).
    #[serde(rename = "clipboard_status_changed")]
    StatusChanged(bool),
    #[serde(rename = "files_added")]
    FilesAdded(Vec<FileEntry>),
    #[serde(rename = "dragdrop")]
    DragDrop(DragEvent),
    /// Broadcast to every window after any window's `update_settings` call.
    #[serde(rename = "settings_changed")]
    SettingsChanged(Settings),
}

impl BackendEvent {
    pub const ENTRY_ADDED: &'static str = "clipboard_entry_added";
    pub const STATUS_CHANGED: &'static str = "clipboard_status_changed";
    pub const FILES_ADDED: &'static str = "files_added";
    pub const DRAG_DROP: &'static str = "dragdrop";
    pub const SETTINGS_CHANGED: &'static str = "settings_changed";

    /// Validate a raw event name and payload.
    pub fn from_raw(name: &str, payload: serde_json::Value) -> Result<Self, BackendError> {
        let tagged = serde_json::json!({ "event": name, "payload": payload });
        serde_json::from_value(tagged).map_err(|e| BackendError::Event(format!("{name}: {e}")))
    }

    /// The wire name of this event.
    pub fn name(&self) -> &'static str {
        match self {
            BackendEvent::EntryAdded(_) => Self::ENTRY_ADDED,
            BackendEvent::StatusChanged(_) => Self::STATUS_CHANGED,
            BackendEvent::FilesAdded(_) => Self::FILES_ADDED,
            BackendEvent::DragDrop(_) => Self::DRAG_DROP,
            BackendEvent::SettingsChanged(_) => Self::SETTINGS_CHANGED,
        }
    }
}

/// Fan-out of backend events to every subscribed cache.
pub struct EventBus {
    sender: broadcast::Sender<BackendEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BackendEvent> {
        self.sender.subscribe()
    }

    /// Returns how many subscribers received the event. With none, the
    /// event is dropped.
    pub fn publish(&self, event: BackendEvent) -> usize {
        let name = event.name();
        match self.sender.send(event) {
            Ok(delivered) => delivered,
            Err(_) => {
                debug!(event = name, "no subscribers, event dropped");
                0
            }
        }
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DragEventType, EntryKind, FileType};

    fn entry(id: &str) -> ClipperEntry {
        ClipperEntry {
            id: id.into(),
            entry: "hello".into(),
            kind: EntryKind::Text,
            timestamp: "2024-08-02T09:18:00.776Z".into(),
        }
    }

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(BackendEvent::StatusChanged(false));

        let event = rx.recv().await.unwrap();
        assert_eq!(event, BackendEvent::StatusChanged(false));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(BackendEvent::EntryAdded(entry("1")));

        assert_eq!(rx1.recv().await.unwrap().name(), "clipboard_entry_added");
        assert_eq!(rx2.recv().await.unwrap().name(), "clipboard_entry_added");
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(BackendEvent::StatusChanged(true)), 0);
    }

    #[test]
    fn publish_after_last_subscriber_leaves_is_dropped() {
        let bus = EventBus::new(16);
        let rx = bus.subscribe();
        assert_eq!(bus.publish(BackendEvent::StatusChanged(true)), 1);
        drop(rx);
        assert_eq!(bus.publish(BackendEvent::StatusChanged(false)), 0);
    }

    #[test]
    fn receiver_count_tracks_drops() {
        let bus = EventBus::new(4);
        let rx = bus.subscribe();
        assert_eq!(bus.receiver_count(), 1);
        drop(rx);
        assert_eq!(bus.receiver_count(), 0);
    }

    #[test]
    fn from_raw_entry_added() {
        let payload = serde_json::json!({
            "id": "abc",
            "entry": "copied text",
            "kind": "Text",
            "timestamp": "2024-08-02T09:18:00.776Z"
        });
        let event = BackendEvent::from_raw("clipboard_entry_added", payload).unwrap();
        match event {
            BackendEvent::EntryAdded(e) => {
                assert_eq!(e.id, "abc");
                assert_eq!(e.entry, "copied text");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn from_raw_dragdrop_uses_camel_case() {
        let payload = serde_json::json!({ "eventType": "Started", "paths": ["/tmp/a.txt"] });
        let event = BackendEvent::from_raw("dragdrop", payload).unwrap();
        assert_eq!(
            event,
            BackendEvent::DragDrop(DragEvent {
                event_type: DragEventType::Started,
                paths: vec!["/tmp/a.txt".into()],
            })
        );
    }

    #[test]
    fn from_raw_files_added() {
        let payload = serde_json::json!([
            { "file": "a.png", "clipperPath": "/home/u/clipper/a.png", "fileType": "File" }
        ]);
        let event = BackendEvent::from_raw("files_added", payload).unwrap();
        match event {
            BackendEvent::FilesAdded(files) => {
                assert_eq!(files.len(), 1);
                assert_eq!(files[0].file_type, FileType::File);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn from_raw_rejects_unknown_event() {
        let err = BackendEvent::from_raw("window_moved", serde_json::json!({})).unwrap_err();
        assert!(matches!(err, BackendError::Event(ref m) if m.starts_with("window_moved")));
    }

    #[test]
    fn from_raw_rejects_wrong_payload_shape() {
        let err = BackendEvent::from_raw("clipboard_status_changed", serde_json::json!("yes"));
        assert!(err.is_err());
    }

    #[test]
    fn wire_form_is_adjacently_tagged() {
        let json = serde_json::to_value(BackendEvent::StatusChanged(true)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "event": "clipboard_status_changed", "payload": true })
        );
    }
}
