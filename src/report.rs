//! Running the validator over a set of files and reporting the outcome.

use crate::error::Result;
use crate::validation::{DocumentValidator, ValidationResult};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Where to look for documents when no paths are given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Directory scanned (non-recursively) for documents
    pub default_dir: PathBuf,
    /// Extension, without the dot, of the documents to pick up
    pub extension: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_dir: PathBuf::from("agents"),
            extension: "mdc".to_string(),
        }
    }
}

/// Report aggregator: validates files one after another and renders results
#[derive(Debug, Clone)]
pub struct Report {
    config: ReportConfig,
    validator: DocumentValidator,
}

impl Report {
    pub fn new(config: ReportConfig) -> Self {
        Self::with_validator(config, DocumentValidator::new())
    }

    pub fn with_validator(config: ReportConfig, validator: DocumentValidator) -> Self {
        Self { config, validator }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// The explicit paths when any are given, otherwise every matching file
    /// directly inside the default directory, sorted by name
    pub fn collect_paths(&self, explicit: &[PathBuf]) -> Vec<PathBuf> {
        if !explicit.is_empty() {
            return explicit.to_vec();
        }

        debug!(
            "Scanning {} for .{} files",
            self.config.default_dir.display(),
            self.config.extension
        );
        WalkDir::new(&self.config.default_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| has_extension(e.path(), &self.config.extension))
            .map(|e| e.into_path())
            .collect()
    }

    /// Validate each path in order
    pub fn run(&self, paths: &[PathBuf]) -> ReportOutcome {
        let results: Vec<ValidationResult> = paths
            .iter()
            .map(|path| self.validator.validate_file(path))
            .collect();

        let outcome = ReportOutcome { results };
        info!(
            checked = outcome.results.len(),
            valid = outcome.valid_count(),
            "validation finished"
        );
        outcome
    }

    /// Write the text report for `outcome`
    pub fn render_text<W: Write>(&self, outcome: &ReportOutcome, out: &mut W) -> Result<()> {
        if outcome.results.is_empty() {
            writeln!(
                out,
                "No .{} files found to validate",
                self.config.extension
            )?;
            return Ok(());
        }

        writeln!(
            out,
            "Validating {} .{} file(s)...\n",
            outcome.results.len(),
            self.config.extension
        )?;
        for result in &outcome.results {
            write!(out, "{}", render_result(result))?;
            writeln!(out)?;
        }
        Ok(())
    }

    /// Write the results as a JSON array
    pub fn render_json<W: Write>(&self, outcome: &ReportOutcome, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, &outcome.results)?;
        writeln!(out)?;
        Ok(())
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == extension)
}

/// Status line followed by indented error and warning lines
pub fn render_result(result: &ValidationResult) -> String {
    let status = if result.is_valid() {
        "✓ VALID"
    } else {
        "✗ INVALID"
    };
    let mut text = format!("{}: {}\n", status, result.path().display());
    for error in result.errors() {
        text.push_str(&format!("  ERROR: {}\n", error));
    }
    for warning in result.warnings() {
        text.push_str(&format!("  WARNING: {}\n", warning));
    }
    text
}

/// Aggregate of every file checked in one run
#[derive(Debug, Clone, Default)]
pub struct ReportOutcome {
    results: Vec<ValidationResult>,
}

impl ReportOutcome {
    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    pub fn valid_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_valid()).count()
    }

    /// At least one file was checked and every file is valid
    pub fn success(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(ValidationResult::is_valid)
    }

    /// Process exit status for the run
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }
}
