//! CLI command definitions for the `fizzbit` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Fizzbit, the alien cat who naps on Saturn and overshares space facts.
#[derive(Parser)]
#[command(name = "fizzbit", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Path to the config file (default: ./fizzbit.toml).
    #[arg(long, global = true, env = "FIZZBIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the message gateway and serve the web front end.
    Serve {
        /// Port to listen on (overrides PORT and the config file).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides FIZZBIT_HOST and the config file).
        #[arg(long)]
        host: Option<String>,
    },

    /// Chat with Fizzbit in the terminal through a running gateway.
    Chat {
        /// Base URL of the gateway.
        #[arg(long, env = "FIZZBIT_URL", default_value = "http://localhost:3000")]
        url: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
