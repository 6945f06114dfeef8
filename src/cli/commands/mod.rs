//! Command modules for CLI

pub mod shift_headers;
pub mod validate;
pub mod version;

use clap::Subcommand;

#[derive(Debug, Subcommand)]
#[command(about = "mdclint commands")]
pub enum Commands {
    /// Validate .mdc documents and report per-file results
    #[command(about = "Validate .mdc documents (explicit paths, or every file in the default directory)")]
    Validate(validate::ValidateArgs),

    /// Demote markdown headings into a new versioned file
    #[command(about = "Shift markdown heading levels and write <name>.vN.md")]
    ShiftHeaders(shift_headers::ShiftHeadersArgs),

    /// Show version information
    #[command(about = "Show version information")]
    Version(version::VersionArgs),
}
