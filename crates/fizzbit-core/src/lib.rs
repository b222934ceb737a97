//! Business logic and port definitions for Fizzbit.
//!
//! This crate defines the `LlmProvider` port that the infrastructure layer
//! implements, the server-side [`gateway::MessageGateway`], and the
//! client-side [`widget::ChatController`]. It depends only on
//! `fizzbit-types` -- never on `fizzbit-infra` or any HTTP crate.

pub mod facts;
pub mod gateway;
pub mod llm;
pub mod widget;
