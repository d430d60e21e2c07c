//! `mctl app view` command: display application(s) by name or ID.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::auth::AuthToken;
use crate::client::HttpSource;
use crate::view::{self, ViewRequest};

#[derive(Args)]
pub struct ViewArgs {
    /// Application name (multiple words allowed) or ID
    pub application: Vec<String>,

    /// View all applications
    #[arg(short, long)]
    pub all: bool,

    /// Format to display in [json|yaml]
    #[arg(short, long = "output-format", default_value = "yaml")]
    pub output_format: String,
}

pub async fn execute(
    args: ViewArgs,
    token: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = ViewRequest::new(&args.application, args.all, &args.output_format)?;

    let config = crate::commands::load_config(config.as_ref())?;
    let token_path = match token {
        Some(path) => path,
        None => config.token_path()?,
    };
    let source = HttpSource::new(config.base_url()?, AuthToken::load(&token_path)?);

    let mut stdout = std::io::stdout();
    view::run(&source, &request, &mut stdout).await?;
    stdout.flush()?;

    Ok(())
}
