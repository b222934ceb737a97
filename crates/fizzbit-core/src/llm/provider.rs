//! LlmProvider trait definition.
//!
//! The single seam between the gateway and the completion service. Uses
//! RPITIT for `complete`; `BoxLlmProvider` restores object safety.

use fizzbit_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion service backends.
///
/// Implementations live in fizzbit-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
