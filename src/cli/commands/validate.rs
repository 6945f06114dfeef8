//! Validate command implementation
//!
//! Checks each document in turn and prints a status line per file. The exit
//! status is 0 only when at least one file was checked and all of them passed.

use crate::cli::error::CliResult;
use crate::cli::utils::current_dir;
use clap::Args;
use mdclint::{LintConfig, Report};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// Validate .mdc documents
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Files to validate (defaults to every matching file in the default directory)
    pub paths: Vec<PathBuf>,

    /// Directory scanned when no paths are given
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Extension of the files picked up from the directory (without the dot)
    #[arg(long)]
    pub extension: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Execute the validate command
pub fn execute_validate(args: ValidateArgs) -> CliResult<i32> {
    let cwd = current_dir()?;
    let (base_dir, config) = LintConfig::discover(&cwd)?.unwrap_or((cwd, LintConfig::default()));

    let mut report_config = config.report_config(&base_dir);
    if let Some(dir) = args.dir {
        report_config.default_dir = dir;
    }
    if let Some(extension) = args.extension {
        report_config.extension = extension.trim_start_matches('.').to_string();
    }
    debug!("Report configuration: {:?}", report_config);

    let report = Report::with_validator(report_config, config.validator());
    let paths = report.collect_paths(&args.paths);
    let outcome = report.run(&paths);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        report.render_json(&outcome, &mut out)?;
    } else {
        report.render_text(&outcome, &mut out)?;
    }
    out.flush()?;

    Ok(outcome.exit_code())
}
