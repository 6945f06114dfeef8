//! Shift-headers command implementation

use crate::cli::error::CliResult;
use crate::cli::utils::messages;
use clap::Args;
use mdclint::headers::{self, DEFAULT_INCREMENT};
use std::path::PathBuf;

/// Shift markdown heading levels
#[derive(Debug, Args)]
pub struct ShiftHeadersArgs {
    /// Input markdown file to process
    pub input_file: PathBuf,

    /// Levels (1-5) added to each heading; headings deeper than 5 become bold
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_INCREMENT,
        value_parser = clap::value_parser!(u8).range(1..=5),
        value_name = "N"
    )]
    pub increment: u8,
}

/// Execute the shift-headers command
pub fn execute_shift_headers(args: ShiftHeadersArgs) -> CliResult<()> {
    let input = &args.input_file;

    if input.exists() && input.extension().and_then(|e| e.to_str()) != Some("md") {
        eprintln!(
            "{}",
            messages::warning(&format!(
                "Input file does not have .md extension: {}",
                input.display()
            ))
        );
    }

    println!(
        "{}",
        messages::info(&format!(
            "Processing {} with increment {}...",
            input.display(),
            args.increment
        ))
    );
    let output = headers::process_file(input, args.increment)?;
    println!(
        "{}",
        messages::ok(&format!("Output written to: {}", output.display()))
    );
    Ok(())
}
