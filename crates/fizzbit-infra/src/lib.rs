//! Infrastructure layer for Fizzbit.
//!
//! Implements the ports defined in `fizzbit-core`: the OpenAI-compatible
//! [`llm::openai_compat::OpenAiCompatibleProvider`] behind `LlmProvider`,
//! and the [`gateway_client::GatewayHttpClient`] behind the widget's
//! `MessageTransport`. Also loads configuration and secrets.

pub mod config;
pub mod gateway_client;
pub mod llm;
pub mod secret;
