//! `mctl version` command.

use clap::Args;

#[derive(Args)]
pub struct VersionArgs;

pub async fn execute(_args: VersionArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("mctl version {}", mctl_core::VERSION);
    Ok(())
}
