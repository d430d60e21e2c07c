//! `mctl app` commands.

pub mod view;

use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Args)]
pub struct AppArgs {
    /// Path to the auth token file (default: token of the current context)
    #[arg(short = 't', long = "token", global = true)]
    pub token: Option<PathBuf>,

    #[command(subcommand)]
    pub command: AppCommand,
}

#[derive(Subcommand)]
pub enum AppCommand {
    /// Display application(s) by name or ID
    View(view::ViewArgs),
}

pub async fn execute(
    args: AppArgs,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        AppCommand::View(view_args) => view::execute(view_args, args.token, config).await,
    }
}
