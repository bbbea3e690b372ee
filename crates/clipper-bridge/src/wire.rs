//! Envelopes a transport reads off the wire.

use serde::{Deserialize, Serialize};

use clipper_common::BackendError;

/// Outcome of one call as the backend reports it.
///
/// `{"ok": <value>}` or `{"err": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reply {
    Ok(serde_json::Value),
    Err(String),
}

impl Reply {
    pub fn into_result(self, command: &str) -> Result<serde_json::Value, BackendError> {
        match self {
            Reply::Ok(value) => Ok(value),
            Reply::Err(message) => Err(BackendError::call(command, message)),
        }
    }
}

/// A push event before validation: any name, any payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub event: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}
