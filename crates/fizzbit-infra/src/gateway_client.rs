//! HTTP client for the Fizzbit gateway, used by the terminal widget.

use std::time::Duration;

use serde::de::DeserializeOwned;

use fizzbit_core::widget::transport::{GatewayReply, MessageTransport};
use fizzbit_types::api::{ChatReplyBody, ChatRequest, HealthStatus, SpaceFact};
use fizzbit_types::error::TransportError;

/// Connect timeout only; a slow reply is waited for.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct GatewayHttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl GatewayHttpClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn space_fact(&self) -> Result<SpaceFact, TransportError> {
        self.get_json("/api/space-fact").await
    }

    pub async fn health(&self) -> Result<HealthStatus, TransportError> {
        self.get_json("/api/health").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Decode(format!("{path} returned {status}")));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

impl MessageTransport for GatewayHttpClient {
    async fn send(&self, message: &str) -> Result<GatewayReply, TransportError> {
        let response = self
            .client
            .post(self.url("/api/chat"))
            .json(&ChatRequest::text(message))
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let body = match serde_json::from_slice::<ChatReplyBody>(&bytes) {
            Ok(body) => body,
            // A failure status with an unreadable body still ends the exchange.
            Err(err) if !status.is_success() => {
                tracing::debug!(%status, error = %err, "Unreadable failure body from gateway");
                ChatReplyBody::default()
            }
            Err(err) => return Err(TransportError::Decode(err.to_string())),
        };

        Ok(GatewayReply::new(status.as_u16(), body))
    }
}
