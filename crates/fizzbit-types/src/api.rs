//! JSON bodies on the Fizzbit HTTP surface.
//!
//! Every body carries a `success` flag (except the health probe), so a
//! client can render something without special-casing status codes:
//!
//! ```json
//! { "success": true,  "response": "...", "timestamp": "2026-01-01T00:00:00Z" }
//! { "success": false, "error": "...", "response": "..." }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `POST /api/chat` request body.
///
/// `message` is kept as raw JSON so the gateway can reject non-string values
/// itself instead of failing at deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<serde_json::Value>,
}

impl ChatRequest {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: Some(serde_json::Value::String(message.into())),
        }
    }

    /// The message if it is present and a JSON string.
    pub fn message_str(&self) -> Option<&str> {
        self.message.as_ref().and_then(serde_json::Value::as_str)
    }
}

/// Successful `POST /api/chat` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSuccess {
    pub success: bool,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatSuccess {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            success: true,
            response: response.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Failed `POST /api/chat` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatFailure {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl ChatFailure {
    pub fn new(error: impl Into<String>, response: Option<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            response,
        }
    }
}

/// Lenient view of any `/api/chat` response, as read by a client.
///
/// Unknown fields are ignored and every field except `success` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReplyBody {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /api/health` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// `GET /api/space-fact` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceFact {
    pub success: bool,
    pub fact: String,
    pub timestamp: DateTime<Utc>,
}

impl SpaceFact {
    pub fn new(fact: impl Into<String>) -> Self {
        Self {
            success: true,
            fact: fact.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Body for unmatched routes and handler panics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteFailure {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl RouteFailure {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
        }
    }
}
