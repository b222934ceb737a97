//! Secret resolution.

pub mod env;

pub use env::{EnvSecretProvider, OPENAI_API_KEY};
