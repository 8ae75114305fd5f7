//! Behavioral event bindings for a rendered element

use serde::{Deserialize, Serialize};

/// A client-side event handler bound to the element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataEvent {
    /// Event kind, e.g. "change" or "keydown".
    pub kind: String,
    /// Name of the client handler function.
    pub handler: String,
    /// Optional payload passed to the handler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl DataEvent {
    pub fn new(kind: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            handler: handler.into(),
            data: None,
        }
    }

    pub fn with_data(
        kind: impl Into<String>,
        handler: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            kind: kind.into(),
            handler: handler.into(),
            data: Some(data),
        }
    }
}
