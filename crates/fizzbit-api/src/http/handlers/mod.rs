//! HTTP request handlers.

pub mod chat;
pub mod fact;
pub mod health;
