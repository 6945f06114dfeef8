//! Main CLI application structure

use clap::Parser;

use crate::cli::commands::{shift_headers, validate, version, Commands};
use crate::cli::error::CliResult;

/// mdclint - Lint segmented .mdc agent documents
#[derive(Debug, Parser)]
#[command(name = "mdclint")]
#[command(version = mdclint::VERSION)]
#[command(about = "mdclint - Lint segmented .mdc agent documents")]
#[command(long_about = "mdclint checks the structure of .mdc agent documents.\n\n\
                         When no paths are given, files are taken from the default directory,\n\
                         resolved using this priority:\n\
                         1. --dir on the command line\n\
                         2. [validate].default_dir from the nearest .mdclint.toml\n\
                         3. agents/ in the current directory\n\n\
                         Examples:\n\
                           mdclint validate                       # Check every agents/*.mdc\n\
                           mdclint validate a.mdc b.mdc --json    # Check two files, JSON output\n\
                           mdclint shift-headers draft.md -i 2    # Demote headings by two levels")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose (debug) logging on stderr")]
    pub verbose: bool,
}

impl Cli {
    /// Execute the CLI command, returning the process exit status
    pub fn execute(self) -> CliResult<i32> {
        mdclint::init_logging(self.verbose);

        match self.command {
            Commands::Validate(args) => validate::execute_validate(args),
            Commands::ShiftHeaders(args) => {
                shift_headers::execute_shift_headers(args).map(|()| 0)
            }
            Commands::Version(args) => version::execute_version(args).map(|()| 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
