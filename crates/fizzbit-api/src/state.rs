//! Application state shared by every request handler.

use std::sync::Arc;

use fizzbit_core::gateway::MessageGateway;
use fizzbit_core::llm::box_provider::BoxLlmProvider;
use fizzbit_core::llm::provider::LlmProvider;
use fizzbit_infra::llm::openai_compat::OpenAiCompatibleProvider;
use fizzbit_infra::secret::{EnvSecretProvider, OPENAI_API_KEY};
use fizzbit_types::config::ServerConfig;

/// The gateway is stateless, so one instance sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<MessageGateway<BoxLlmProvider>>,
}

impl AppState {
    pub fn new(gateway: MessageGateway<BoxLlmProvider>) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }

    /// Wire the OpenAI-compatible provider into a gateway.
    ///
    /// Fails if `OPENAI_API_KEY` is not set.
    pub fn init(config: &ServerConfig, secrets: &EnvSecretProvider) -> anyhow::Result<Self> {
        let api_key = secrets.require(OPENAI_API_KEY)?;
        let provider = OpenAiCompatibleProvider::from_parts(
            api_key,
            &config.completion.model,
            config.api_base.as_deref(),
        );

        tracing::info!(
            provider = provider.name(),
            model = %config.completion.model,
            upstream_timeout_secs = ?config.upstream_timeout_secs,
            "Completion provider ready"
        );

        let gateway = MessageGateway::new(BoxLlmProvider::new(provider), config.completion.clone())
            .with_upstream_timeout(config.upstream_timeout());

        Ok(Self::new(gateway))
    }
}
