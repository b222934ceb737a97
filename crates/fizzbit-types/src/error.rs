use thiserror::Error;

use crate::chat::ErrorCategory;
use crate::llm::LlmError;

/// Why a chat message was refused before reaching the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputRejection {
    #[error("message is missing, not a string, or blank")]
    Empty,

    #[error("message is {chars} characters, limit is {max}")]
    TooLong { chars: usize, max: usize },
}

/// Failure of a gateway exchange, already sorted into a user-facing category.
///
/// The `Display` output is the operator-facing detail for logs. The text sent
/// to callers comes from [`GatewayError::error_text`] and
/// [`GatewayError::response_text`] and never includes the detail.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid input: {0}")]
    InvalidInput(InputRejection),

    #[error("completion service exhausted: {0}")]
    ServiceUnavailable(LlmError),

    #[error("completion service rejected our configuration: {0}")]
    ServerMisconfigured(LlmError),

    #[error("completion service failed: {0}")]
    Upstream(LlmError),
}

impl GatewayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GatewayError::InvalidInput(_) => ErrorCategory::InvalidInput,
            GatewayError::ServiceUnavailable(_) => ErrorCategory::ServiceUnavailable,
            GatewayError::ServerMisconfigured(_) => ErrorCategory::ServerMisconfigured,
            GatewayError::Upstream(_) => ErrorCategory::UpstreamError,
        }
    }

    /// Short `error` field of the failure body.
    pub fn error_text(&self) -> &'static str {
        match self {
            GatewayError::InvalidInput(InputRejection::Empty) => {
                "Hey! You gotta type *something* — even a meow counts"
            }
            GatewayError::InvalidInput(InputRejection::TooLong { .. }) => {
                "Whoa! That message’s longer than the Milky Way’s grocery list. Keep it under 500 chars, please 😵‍💫"
            }
            GatewayError::ServiceUnavailable(_) => "OpenAI quota exceeded. Please try again later.",
            GatewayError::ServerMisconfigured(_) => "Invalid API key configuration.",
            GatewayError::Upstream(_) => "Internal server error",
        }
    }

    /// In-character `response` field of the failure body, if any.
    pub fn response_text(&self) -> Option<&'static str> {
        match self {
            GatewayError::InvalidInput(_) => None,
            GatewayError::ServiceUnavailable(_) => {
                Some("Out of power like a forgotten Mars rover 😩 Come back later")
            }
            GatewayError::ServerMisconfigured(_) => Some(
                "🔑 My galactic access card got declined. Rude. Tell the dev to fix the vibes",
            ),
            GatewayError::Upstream(_) => {
                Some("💥 Yikes! A cosmic ray just corrupted my snack cache. Retry, please!")
            }
        }
    }
}

/// Failure talking to the gateway from a client.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("could not decode gateway response: {0}")]
    Decode(String),
}

/// Errors while assembling configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingSecret(&'static str),

    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("failed to read config file {path}: {message}")]
    Read { path: String, message: String },
}
