//! # mdclint
//!
//! Structural linter for segmented `.mdc` agent documents. A document is laid
//! out as three parts separated by `---` delimiters:
//!
//! ```text
//! ---
//! alwaysApply: true          <- first block (simple flags)
//! ---
//! name: reviewer             <- second block (descriptive metadata)
//! model: some-model
//! description: Reviews code
//! ---
//! Free-form markdown body, with ```fenced``` regions and `inline` code.
//! ```
//!
//! The validator detects broken delimiter counts, unbalanced brackets and
//! braces in the metadata blocks, missing required fields, unterminated code
//! fences and unbalanced inline code markers, without parsing the metadata
//! language.
//!
//! ## Example Usage
//!
//! ```rust
//! use mdclint::DocumentValidator;
//! use std::path::Path;
//!
//! let validator = DocumentValidator::new();
//! let content = "---\na: 1\n---\nname: x\nmodel: y\ndescription: z\n---\nbody text\n";
//! let result = validator.validate_content(Path::new("agent.mdc"), content);
//! assert!(result.is_valid());
//! ```

pub mod config;
pub mod error;
pub mod headers;
pub mod report;
pub mod validation;

pub use config::{LintConfig, ValidateSection, CONFIG_FILE_NAME};
pub use error::{LintError, Result};
pub use report::{Report, ReportConfig, ReportOutcome};
pub use validation::{
    DocumentValidator, ErrorKind, ValidationError, ValidationResult, ValidationWarning,
    WarningKind,
};

/// Version of the linter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging (safe to call more than once, e.g. from tests)
pub fn init_logging(verbose: bool) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;

        let default_filter = if verbose { "mdclint=debug" } else { "mdclint=warn" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

        // stdout carries the report, so diagnostics go to stderr
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();

        // This will fail silently if already initialized
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
