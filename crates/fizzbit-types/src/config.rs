//! Configuration types for Fizzbit.
//!
//! `ServerConfig` covers the gateway process; `WidgetConfig` covers the chat
//! widget's timings and input cap. All fields have defaults, so an empty
//! `fizzbit.toml` is valid. Secrets are never part of these structs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Maximum characters accepted in a chat message, on both sides of the wire.
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Settings for the gateway server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of front-end assets served at `/`.
    #[serde(default = "default_web_dir")]
    pub web_dir: String,

    /// OpenAI-compatible base URL override.
    #[serde(default)]
    pub api_base: Option<String>,

    /// Upper bound on the upstream completion call. `None` waits forever.
    #[serde(default)]
    pub upstream_timeout_secs: Option<u64>,

    #[serde(default)]
    pub completion: CompletionSettings,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_web_dir() -> String {
    "public".to_string()
}

impl ServerConfig {
    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_secs.map(Duration::from_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            web_dir: default_web_dir(),
            api_base: None,
            upstream_timeout_secs: None,
            completion: CompletionSettings::default(),
        }
    }
}

/// Parameters passed with every completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionSettings {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_max_tokens() -> u32 {
    150
}

fn default_temperature() -> f64 {
    2.0
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

/// Timings and limits for the chat widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Delay between revealed characters of a bot reply.
    #[serde(default = "default_reveal_interval_ms")]
    pub reveal_interval_ms: u64,

    /// How long the close transition plays before the panel is hidden.
    #[serde(default = "default_close_transition_ms")]
    pub close_transition_ms: u64,

    /// Delay before the welcome message appears in an empty transcript.
    #[serde(default = "default_greeting_delay_ms")]
    pub greeting_delay_ms: u64,

    /// Edit-control cap; see [`WidgetConfig::input_cap`].
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

/// Shortest reveal step; a zero period is not a valid interval.
pub const MIN_REVEAL_INTERVAL: Duration = Duration::from_millis(1);

fn default_reveal_interval_ms() -> u64 {
    30
}

fn default_close_transition_ms() -> u64 {
    300
}

fn default_greeting_delay_ms() -> u64 {
    500
}

fn default_max_input_chars() -> usize {
    MAX_MESSAGE_CHARS
}

impl WidgetConfig {
    /// Never shorter than [`MIN_REVEAL_INTERVAL`].
    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms).max(MIN_REVEAL_INTERVAL)
    }

    pub fn close_transition(&self) -> Duration {
        Duration::from_millis(self.close_transition_ms)
    }

    pub fn greeting_delay(&self) -> Duration {
        Duration::from_millis(self.greeting_delay_ms)
    }

    /// `max_input_chars` clamped to `1..=MAX_MESSAGE_CHARS`, so the widget
    /// never lets through text the gateway would reject.
    pub fn input_cap(&self) -> usize {
        self.max_input_chars.clamp(1, MAX_MESSAGE_CHARS)
    }

    /// True if any value is outside what the widget will actually use.
    pub fn is_adjusted(&self) -> bool {
        self.reveal_interval_ms == 0 || self.input_cap() != self.max_input_chars
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            reveal_interval_ms: default_reveal_interval_ms(),
            close_transition_ms: default_close_transition_ms(),
            greeting_delay_ms: default_greeting_delay_ms(),
            max_input_chars: default_max_input_chars(),
        }
    }
}
