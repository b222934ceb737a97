//! Shared domain types for Fizzbit.
//!
//! This crate contains the types used on both sides of the chat wire:
//! completion requests for the LLM port, chat transcript entities, the HTTP
//! response envelopes, configuration structs, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
