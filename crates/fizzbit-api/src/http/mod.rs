//! HTTP layer for Fizzbit.
//!
//! Axum router with the chat gateway under `/api`, static front-end files at
//! `/`, and JSON bodies for every failure including 404s and panics.

pub mod error;
pub mod handlers;
pub mod router;
