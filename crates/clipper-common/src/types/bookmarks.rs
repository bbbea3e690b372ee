use serde::{Deserialize, Serialize};

/// A saved link with an optional preview image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkEntry {
    pub id: String,
    pub url: String,
    pub text: String,
    #[serde(default)]
    pub image: Option<Vec<u8>>,
    pub timestamp: String,
}
