//! Environment variable secret provider.
//!
//! Read-only. Values come from the process environment, which `main` has
//! already populated from `.env` via dotenvy.

use secrecy::SecretString;

use fizzbit_types::error::ConfigError;

/// Credential for the completion service.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads secrets through a lookup function; the process environment by default.
pub struct EnvSecretProvider {
    lookup: Lookup,
}

impl EnvSecretProvider {
    pub fn new() -> Self {
        // Invalid Unicode is treated as unset: secrets must be valid strings.
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    /// Secret stored under `key`. Blank values count as unset.
    pub fn get(&self, key: &str) -> Option<SecretString> {
        (self.lookup)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(SecretString::from)
    }

    pub fn require(&self, key: &'static str) -> Result<SecretString, ConfigError> {
        self.get(key).ok_or(ConfigError::MissingSecret(key))
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}
