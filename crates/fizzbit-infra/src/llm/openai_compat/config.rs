//! Configuration for the OpenAI-compatible provider.

use secrecy::SecretString;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for an OpenAI-compatible LLM provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`]. Does not derive
/// `Debug`; the key stays wrapped until it is handed to the HTTP client.
pub struct OpenAiCompatConfig {
    /// Human-readable provider name used in logs.
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    pub api_key: SecretString,
    /// Model used when a request leaves `model` empty.
    pub model: String,
}

/// OpenAI default configuration.
pub fn openai_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: OPENAI_BASE_URL.into(),
        api_key,
        model: model.into(),
    }
}

/// Any other endpoint speaking the OpenAI chat completions protocol.
pub fn custom_base(api_key: SecretString, model: &str, base_url: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai-compatible".into(),
        base_url: base_url.trim_end_matches('/').into(),
        api_key,
        model: model.into(),
    }
}
