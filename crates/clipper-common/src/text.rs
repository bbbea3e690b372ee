//! Splitting clipboard and note text into plain and link segments.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("text: static url pattern must compile"));

/// A run of text that is either plain or a clickable link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum Segment {
    Text(String),
    Url(String),
}

/// Split `text` into alternating plain and URL segments, in order.
///
/// Empty plain runs between adjacent links are dropped. A URL runs from
/// `http://` or `https://` up to the next whitespace.
pub fn segment_urls(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in URL_RE.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Text(text[last..m.start()].to_string()));
        }
        segments.push(Segment::Url(m.as_str().to_string()));
        last = m.end();
    }

    if last < text.len() {
        segments.push(Segment::Text(text[last..].to_string()));
    }
    segments
}

/// Decode stored bytes as text, replacing invalid UTF-8.
pub fn bytes_as_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
