//! Version command implementation

use crate::cli::error::CliResult;
use clap::Args;

/// Display mdclint version
#[derive(Debug, Args)]
pub struct VersionArgs {}

pub fn execute_version(_args: VersionArgs) -> CliResult<()> {
    println!("mdclint {}", mdclint::VERSION);
    Ok(())
}
