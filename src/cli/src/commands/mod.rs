//! CLI command definitions and dispatch.

pub mod app;
mod version;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mctl_core::CtlConfig;

/// Client for the application management service.
#[derive(Parser)]
#[command(name = "mctl", version, about)]
pub struct Cli {
    /// Path to the config file (default: ~/.mctl/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Command {
    /// Manage applications
    App(app::AppArgs),
    /// Show version information
    Version(version::VersionArgs),
}

/// Load the config file named by `--config`, or the default one.
pub(crate) fn load_config(path: Option<&PathBuf>) -> mctl_core::Result<CtlConfig> {
    match path {
        Some(p) => CtlConfig::load(p),
        None => CtlConfig::load(&CtlConfig::default_path()),
    }
}

/// Dispatch a parsed CLI to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::App(args) => app::execute(args, cli.config).await,
        Command::Version(args) => version::execute(args).await,
    }
}
