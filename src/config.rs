//! Command-line and environment configuration.
//!
//! Every option can also be supplied through a `KAFE_*` environment variable.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::net::SocketAddr;

/// Kafe Digital ordering assistant
#[derive(Debug, Parser)]
#[command(name = "kafe", version)]
pub struct Cli {
    /// Base log level (trace, debug, info, warn, error); RUST_LOG overrides it
    #[arg(long, global = true, env = "KAFE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(
        long,
        global = true,
        env = "KAFE_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Interactive chat when no subcommand is given
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat)
    }
}

#[derive(Debug, Clone, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Order interactively in the terminal
    Chat,
    /// Run a scripted ordering session and print every exchange
    Demo,
    /// Serve the ordering assistant over HTTP
    Serve(ServeArgs),
}

#[derive(Debug, Clone, Args, PartialEq, Eq)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "KAFE_ADDR", default_value = "0.0.0.0:8000")]
    pub addr: SocketAddr,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}
