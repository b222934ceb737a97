//! Fizzbit CLI and REST gateway entry point.
//!
//! Binary name: `fizzbit`
//!
//! Parses CLI arguments, loads `.env` and the config file, then either
//! serves the message gateway or runs the terminal chat widget.

mod cli;
mod http;
mod state;

use std::path::Path;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use fizzbit_infra::config::{apply_env_overrides, default_config_path, load_config};
use fizzbit_infra::secret::EnvSecretProvider;
use fizzbit_types::config::ServerConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need config or tracing
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "fizzbit", &mut std::io::stdout());
        return Ok(());
    }

    let dotenv = dotenvy::dotenv();

    fizzbit_observe::init_tracing(
        cli.otel,
        fizzbit_observe::default_filter(cli.verbose, cli.quiet),
    )
    .map_err(|e| anyhow::anyhow!("failed to initialise tracing: {e}"))?;

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded environment file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "Failed to read .env, continuing without it"),
    }

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = load_config(&config_path).await;

    let result = match cli.command {
        Commands::Serve { port, host } => serve(config.server, port, host).await,
        Commands::Chat { url } => cli::chat::loop_runner::run_chat_loop(&url, config.widget).await,
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    fizzbit_observe::shutdown_tracing();
    result
}

/// Run the gateway until Ctrl+C or SIGTERM.
///
/// Precedence for each setting: CLI flag, then environment, then file.
async fn serve(
    mut config: ServerConfig,
    port: Option<u16>,
    host: Option<String>,
) -> anyhow::Result<()> {
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(host) = host {
        config.host = host;
    }

    let state = AppState::init(&config, &EnvSecretProvider::new())?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!(
        "  {} Fizzbit is online and orbiting on port {}",
        console::style("🚀").bold(),
        console::style(config.port).cyan()
    );
    println!(
        "  {} {}",
        console::style("🛸").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state, Path::new(&config.web_dir));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM, then print the nap message.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    };

    println!("\n  😴 Fizzbit is curling up for a nap ({signal}). Brb after a Saturn snooze...");
}
