use serde::{Deserialize, Serialize};

use clipper_common::Settings;

/// Every call the backend accepts.
///
/// Wire form: `{"cmd": "<name>", "args": {...}}`; calls without arguments
/// omit `args`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", content = "args", rename_all = "snake_case")]
pub enum Command {
    // Clipboard history
    ReadClipboardEntries { count: usize },
    ClipboardAddEntry { entry: String },
    OpenClipboardEntry { id: String },
    DeleteOneClipboardEntry { id: String },
    DeleteAllClipboardEntries,
    CleanOldEntries { keep: usize },
    PauseClipboardWatcher,
    ResumeClipboardWatcher,
    ReadWatcherStatus,

    // Notes
    ReadNotes,
    CreateNote { id: String, entry: String },
    UpdateNote { id: String, entry: String },
    DeleteNote { id: String },

    // Bookmarks
    BookmarksReadEntries,
    DeleteBookmark { id: String },

    // Dropped files
    GetFiles,
    DeleteFile { file: String },
    /// Wipes the dropped-file storage directory.
    #[serde(rename = "delete_files_path")]
    DeleteAllFiles,
    GetFilesPath,

    // Settings and storage
    ReadSettings,
    UpdateSettings { settings: Settings },
    GetDbPath,
    DeleteDb,

    // Window
    HideWindow,
}

impl Command {
    /// The wire name of this call.
    pub fn name(&self) -> &'static str {
        match self {
            Command::ReadClipboardEntries { .. } => "read_clipboard_entries",
            Command::ClipboardAddEntry { .. } => "clipboard_add_entry",
            Command::OpenClipboardEntry { .. } => "open_clipboard_entry",
            Command::DeleteOneClipboardEntry { .. } => "delete_one_clipboard_entry",
            Command::DeleteAllClipboardEntries => "delete_all_clipboard_entries",
            Command::CleanOldEntries { .. } => "clean_old_entries",
            Command::PauseClipboardWatcher => "pause_clipboard_watcher",
            Command::ResumeClipboardWatcher => "resume_clipboard_watcher",
            Command::ReadWatcherStatus => "read_watcher_status",
            Command::ReadNotes => "read_notes",
            Command::CreateNote { .. } => "create_note",
            Command::UpdateNote { .. } => "update_note",
            Command::DeleteNote { .. } => "delete_note",
            Command::BookmarksReadEntries => "bookmarks_read_entries",
            Command::DeleteBookmark { .. } => "delete_bookmark",
            Command::GetFiles => "get_files",
            Command::DeleteFile { .. } => "delete_file",
            Command::DeleteAllFiles => "delete_files_path",
            Command::GetFilesPath => "get_files_path",
            Command::ReadSettings => "read_settings",
            Command::UpdateSettings { .. } => "update_settings",
            Command::GetDbPath => "get_db_path",
            Command::DeleteDb => "delete_db",
            Command::HideWindow => "hide_window",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_with_args() {
        let cmd = Command::ReadClipboardEntries { count: 10 };
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({ "cmd": "read_clipboard_entries", "args": { "count": 10 } })
        );
    }

    #[test]
    fn call_without_args() {
        assert_eq!(
            serde_json::to_value(Command::DeleteAllClipboardEntries).unwrap(),
            json!({ "cmd": "delete_all_clipboard_entries" })
        );
    }

    #[test]
    fn note_call_carries_id_and_entry() {
        let cmd = Command::CreateNote {
            id: "n1".into(),
            entry: "buy milk".into(),
        };
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({ "cmd": "create_note", "args": { "id": "n1", "entry": "buy milk" } })
        );
    }

    #[test]
    fn settings_args_use_camel_case_payload() {
        let cmd = Command::UpdateSettings {
            settings: Settings::default(),
        };
        let value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(value["args"]["settings"]["historySize"], 10);
    }

    #[test]
    fn name_matches_wire_tag() {
        let commands = [
            Command::ReadClipboardEntries { count: 1 },
            Command::ClipboardAddEntry { entry: "x".into() },
            Command::OpenClipboardEntry { id: "x".into() },
            Command::DeleteOneClipboardEntry { id: "x".into() },
            Command::DeleteAllClipboardEntries,
            Command::CleanOldEntries { keep: 1 },
            Command::PauseClipboardWatcher,
            Command::ResumeClipboardWatcher,
            Command::ReadWatcherStatus,
            Command::ReadNotes,
            Command::CreateNote { id: "x".into(), entry: "y".into() },
            Command::UpdateNote { id: "x".into(), entry: "y".into() },
            Command::DeleteNote { id: "x".into() },
            Command::BookmarksReadEntries,
            Command::DeleteBookmark { id: "x".into() },
            Command::GetFiles,
            Command::DeleteFile { file: "x".into() },
            Command::DeleteAllFiles,
            Command::GetFilesPath,
            Command::ReadSettings,
            Command::UpdateSettings { settings: Settings::default() },
            Command::GetDbPath,
            Command::DeleteDb,
            Command::HideWindow,
        ];
        for cmd in commands {
            let value = serde_json::to_value(&cmd).unwrap();
            assert_eq!(value["cmd"], cmd.name());
        }
    }

    #[test]
    fn file_storage_wipe_uses_backend_command_name() {
        assert_eq!(
            serde_json::to_value(Command::DeleteAllFiles).unwrap(),
            json!({ "cmd": "delete_files_path" })
        );
        let cmd: Command = serde_json::from_value(json!({ "cmd": "delete_files_path" })).unwrap();
        assert_eq!(cmd, Command::DeleteAllFiles);
    }

    #[test]
    fn decodes_from_wire() {
        let cmd: Command =
            serde_json::from_value(json!({ "cmd": "delete_file", "args": { "file": "a.png" } }))
                .unwrap();
        assert_eq!(cmd, Command::DeleteFile { file: "a.png".into() });
    }
}
