//! Server-side message gateway.
//!
//! [`MessageGateway::exchange`] validates one inbound message, forwards it with
//! the persona instruction to the completion service, and sorts any failure
//! into a [`GatewayError`] category. It keeps no state between calls, so a
//! single instance is shared by every request handler.

pub mod persona;

use std::time::Duration;

use fizzbit_types::config::{CompletionSettings, MAX_MESSAGE_CHARS};
use fizzbit_types::error::{GatewayError, InputRejection};
use fizzbit_types::llm::{CompletionRequest, LlmError, Message};

use crate::llm::provider::LlmProvider;

use self::persona::SYSTEM_PROMPT;

/// Check a raw message against the gateway's input rules.
///
/// Blank (after trimming) is checked before length. Length counts Unicode
/// scalar values of the untrimmed message.
pub fn validate_message(message: Option<&str>) -> Result<&str, InputRejection> {
    let message = match message {
        Some(m) if !m.trim().is_empty() => m,
        _ => return Err(InputRejection::Empty),
    };

    let chars = message.chars().count();
    if chars > MAX_MESSAGE_CHARS {
        return Err(InputRejection::TooLong {
            chars,
            max: MAX_MESSAGE_CHARS,
        });
    }

    Ok(message)
}

/// Sort a provider failure into a user-facing category.
pub fn classify_llm_error(err: LlmError) -> GatewayError {
    match err {
        LlmError::QuotaExceeded | LlmError::RateLimited => GatewayError::ServiceUnavailable(err),
        LlmError::AuthenticationFailed => GatewayError::ServerMisconfigured(err),
        other => GatewayError::Upstream(other),
    }
}

/// Stateless proxy between the chat endpoint and an [`LlmProvider`].
pub struct MessageGateway<P> {
    provider: P,
    settings: CompletionSettings,
    upstream_timeout: Option<Duration>,
}

impl<P: LlmProvider> MessageGateway<P> {
    pub fn new(provider: P, settings: CompletionSettings) -> Self {
        Self {
            provider,
            settings,
            upstream_timeout: None,
        }
    }

    /// Bound the upstream call. Without this the gateway waits indefinitely.
    pub fn with_upstream_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Build the completion request for an already validated message.
    pub fn build_request(&self, message: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(message)],
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
        }
    }

    /// Validate `message`, ask the completion service, and return its reply.
    ///
    /// `None` stands for an absent or non-string message field.
    pub async fn exchange(&self, message: Option<&str>) -> Result<String, GatewayError> {
        let message = validate_message(message).map_err(|rejection| {
            tracing::debug!(reason = %rejection, "Rejected chat message");
            GatewayError::InvalidInput(rejection)
        })?;

        tracing::info!(chars = message.chars().count(), "Received chat message");
        tracing::debug!(%message, "Chat message content");

        let request = self.build_request(message);
        let outcome = match self.upstream_timeout {
            Some(limit) => {
                match tokio::time::timeout(limit, self.provider.complete(&request)).await {
                    Ok(outcome) => outcome,
                    Err(_) => Err(LlmError::Timeout(limit.as_secs())),
                }
            }
            None => self.provider.complete(&request).await,
        };

        let err = match outcome {
            Ok(response) if !response.content.is_empty() => {
                tracing::debug!(
                    provider = self.provider.name(),
                    model = %response.model,
                    reply = %response.content,
                    "Bot response"
                );
                return Ok(response.content);
            }
            Ok(response) => classify_llm_error(LlmError::Provider {
                message: format!("completion {} returned no text", response.id),
            }),
            Err(e) => classify_llm_error(e),
        };

        match &err {
            GatewayError::ServerMisconfigured(_) => {
                tracing::error!(
                    category = %err.category(),
                    provider = self.provider.name(),
                    error = %err,
                    "Completion service rejected credentials; check OPENAI_API_KEY"
                );
            }
            _ => {
                tracing::warn!(
                    category = %err.category(),
                    provider = self.provider.name(),
                    error = %err,
                    "Chat exchange failed"
                );
            }
        }

        Err(err)
    }
}
