//! Observability setup for Fizzbit binaries.

pub mod tracing_setup;

pub use tracing_setup::{default_filter, init_tracing, shutdown_tracing};
