//! JSON bodies returned by the contact endpoint.

use serde::{Deserialize, Serialize};

/// Flat response body: either `ok` (with an optional `message`) or `error`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContactResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    /// `{"ok": true}`
    pub fn ok() -> Self {
        Self {
            ok: Some(true),
            ..Default::default()
        }
    }

    /// `{"ok": true, "message": ...}`
    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self {
            ok: Some(true),
            message: Some(message.into()),
            error: None,
        }
    }

    /// `{"error": ...}`
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }
}
