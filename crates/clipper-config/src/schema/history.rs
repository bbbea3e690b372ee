use serde::{Deserialize, Serialize};

/// Clipboard history cache and housekeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Entries kept locally and requested on load (valid range: 1-1000).
    /// The backend's `historySize` setting overrides this once read.
    pub size: u32,
    /// Seconds between `clean_old_entries` calls (valid range: 10-86400).
    pub trim_interval_secs: u64,
    /// Seconds before the first trim (valid range: 0-3600).
    pub trim_initial_delay_secs: u64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            size: 10,
            trim_interval_secs: 600,
            trim_initial_delay_secs: 30,
        }
    }
}
