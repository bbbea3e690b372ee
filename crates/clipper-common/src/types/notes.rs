use serde::{Deserialize, Serialize};

/// A user note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteItem {
    pub id: String,
    pub entry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<String>,
}

impl NoteItem {
    /// Note text with nothing but whitespace is never stored.
    pub fn is_blank(entry: &str) -> bool {
        entry.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(NoteItem::is_blank(""));
        assert!(NoteItem::is_blank("  \n\t "));
        assert!(!NoteItem::is_blank("  x "));
    }

    #[test]
    fn optional_times_are_omitted() {
        let note = NoteItem {
            id: "n1".into(),
            entry: "text".into(),
            created_time: None,
            updated_time: None,
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "n1", "entry": "text" }));
    }
}
