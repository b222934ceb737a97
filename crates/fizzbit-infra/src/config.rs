//! Configuration loader for Fizzbit.
//!
//! Reads an optional `fizzbit.toml` and then applies environment overrides.
//! The file's top-level keys populate [`ServerConfig`]; a `[widget]` table
//! populates [`WidgetConfig`]. A missing or malformed file falls back to
//! defaults. Secrets are never read from the file.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use fizzbit_types::config::{ServerConfig, WidgetConfig};
use fizzbit_types::error::ConfigError;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "fizzbit.toml";

pub const ENV_PORT: &str = "PORT";
pub const ENV_HOST: &str = "FIZZBIT_HOST";
pub const ENV_WEB_DIR: &str = "FIZZBIT_WEB_DIR";
pub const ENV_MODEL: &str = "FIZZBIT_MODEL";
pub const ENV_UPSTREAM_TIMEOUT: &str = "FIZZBIT_UPSTREAM_TIMEOUT_SECS";
pub const ENV_API_BASE: &str = "FIZZBIT_API_BASE";

/// Everything read from `fizzbit.toml`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FizzbitConfig {
    pub server: ServerConfig,
    pub widget: WidgetConfig,
}

#[derive(Deserialize)]
struct WidgetSection {
    #[serde(default)]
    widget: WidgetConfig,
}

/// Path to use when `--config` was not given.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`FizzbitConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_config(path: &Path) -> FizzbitConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return FizzbitConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return FizzbitConfig::default();
        }
    };

    let config = parse_config(&content).unwrap_or_else(|err| {
        tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
        FizzbitConfig::default()
    });
    if config.widget.is_adjusted() {
        tracing::warn!(
            reveal_interval_ms = config.widget.reveal_interval_ms,
            max_input_chars = config.widget.max_input_chars,
            "Widget values in {} are out of range and will be clamped",
            path.display()
        );
    }
    config
}

fn parse_config(content: &str) -> Result<FizzbitConfig, toml::de::Error> {
    let server = toml::from_str::<ServerConfig>(content)?;
    let WidgetSection { widget } = toml::from_str(content)?;
    Ok(FizzbitConfig { server, widget })
}

/// Overlay environment values on `config`. Unset or blank variables leave
/// the file value in place.
pub fn apply_env_overrides<F>(config: &mut ServerConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| {
        lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    if let Some(port) = get(ENV_PORT) {
        config.port = parse_value(ENV_PORT, &port)?;
    }
    if let Some(host) = get(ENV_HOST) {
        config.host = host;
    }
    if let Some(dir) = get(ENV_WEB_DIR) {
        config.web_dir = dir;
    }
    if let Some(model) = get(ENV_MODEL) {
        config.completion.model = model;
    }
    if let Some(secs) = get(ENV_UPSTREAM_TIMEOUT) {
        config.upstream_timeout_secs = Some(parse_value(ENV_UPSTREAM_TIMEOUT, &secs)?);
    }
    if let Some(base) = get(ENV_API_BASE) {
        config.api_base = Some(base);
    }

    Ok(())
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use tempfile::TempDir;

    use fizzbit_types::config::{MAX_MESSAGE_CHARS, MIN_REVEAL_INTERVAL};

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(CONFIG_FILE_NAME)).await;
        assert_eq!(config, FizzbitConfig::default());
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        tokio::fs::write(
            &path,
            r#"
port = 8088
web_dir = "site"

[completion]
model = "gpt-4o-mini"

[widget]
reveal_interval_ms = 10
"#,
        )
        .await
        .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.web_dir, "site");
        assert_eq!(config.server.completion.model, "gpt-4o-mini");
        assert_eq!(config.server.completion.max_tokens, 150);
        assert_eq!(config.widget.reveal_interval_ms, 10);
        assert_eq!(config.widget.close_transition_ms, 300);
    }

    #[tokio::test]
    async fn load_config_out_of_range_widget_values_are_clamped_on_use() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        tokio::fs::write(&path, "[widget]\nreveal_interval_ms = 0\nmax_input_chars = 9000\n")
            .await
            .unwrap();

        let widget = load_config(&path).await.widget;
        assert!(widget.is_adjusted());
        assert_eq!(widget.reveal_interval(), MIN_REVEAL_INTERVAL);
        assert_eq!(widget.input_cap(), MAX_MESSAGE_CHARS);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config, FizzbitConfig::default());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = ServerConfig {
            port: 8088,
            ..Default::default()
        };
        apply_env_overrides(
            &mut config,
            env(&[
                (ENV_PORT, "4000"),
                (ENV_HOST, "127.0.0.1"),
                (ENV_MODEL, "gpt-4o"),
                (ENV_UPSTREAM_TIMEOUT, "15"),
                (ENV_API_BASE, "http://localhost:9999/v1"),
            ]),
        )
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:4000");
        assert_eq!(config.completion.model, "gpt-4o");
        assert_eq!(config.upstream_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.api_base.as_deref(), Some("http://localhost:9999/v1"));
        assert_eq!(config.web_dir, "public");
    }

    #[test]
    fn env_blank_values_are_ignored() {
        let mut config = ServerConfig::default();
        apply_env_overrides(&mut config, env(&[(ENV_PORT, "  "), (ENV_MODEL, "")])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn env_invalid_port_is_rejected() {
        let mut config = ServerConfig::default();
        let err = apply_env_overrides(&mut config, env(&[(ENV_PORT, "eighty")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "PORT", ref value } if value == "eighty"
        ));
    }
}
