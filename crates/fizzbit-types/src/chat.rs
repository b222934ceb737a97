//! Chat transcript and exchange types for Fizzbit.
//!
//! A transcript is an ordered list of [`ChatMessage`]s held by the widget for
//! its own lifetime. A [`ChatExchange`] lives for exactly one request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Bot => write!(f, "bot"),
        }
    }
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bot,
            text: text.into(),
        }
    }
}

/// User-facing failure categories for a chat exchange.
///
/// Each category has a fixed HTTP status. None of them is retried
/// automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Client-correctable input problem.
    InvalidInput,
    /// Upstream quota or rate limit exhausted.
    ServiceUnavailable,
    /// Credentials or configuration need operator attention.
    ServerMisconfigured,
    /// Anything else that went wrong upstream.
    UpstreamError,
}

impl ErrorCategory {
    /// HTTP status code returned for this category.
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorCategory::InvalidInput => 400,
            ErrorCategory::ServiceUnavailable => 503,
            ErrorCategory::ServerMisconfigured | ErrorCategory::UpstreamError => 500,
        }
    }

    /// Map an HTTP status returned by the gateway back to a category.
    ///
    /// 500 is ambiguous on the wire; it is reported as `UpstreamError`.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            400 => Some(ErrorCategory::InvalidInput),
            503 => Some(ErrorCategory::ServiceUnavailable),
            500..=599 => Some(ErrorCategory::UpstreamError),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::InvalidInput => write!(f, "invalid_input"),
            ErrorCategory::ServiceUnavailable => write!(f, "service_unavailable"),
            ErrorCategory::ServerMisconfigured => write!(f, "server_misconfigured"),
            ErrorCategory::UpstreamError => write!(f, "upstream_error"),
        }
    }
}

/// One submit-to-render cycle on the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatExchange {
    /// What the user typed, trimmed. This is what the transcript shows.
    pub raw_input: String,
    /// What is sent to the gateway after canned-phrase substitution.
    pub effective_input: String,
    pub response_text: Option<String>,
    pub error_category: Option<ErrorCategory>,
}

impl ChatExchange {
    pub fn new(raw_input: impl Into<String>, effective_input: impl Into<String>) -> Self {
        Self {
            raw_input: raw_input.into(),
            effective_input: effective_input.into(),
            response_text: None,
            error_category: None,
        }
    }

    /// Whether the text sent differs from what the user typed.
    pub fn was_substituted(&self) -> bool {
        self.raw_input != self.effective_input
    }
}
