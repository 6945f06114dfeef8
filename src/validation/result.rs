//! Shared validation result types for document validation.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of validating one document.
///
/// Validity is derived from the error list, so a result can never claim to be
/// valid while carrying errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    path: PathBuf,
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Create an empty (valid) result for `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Create a result that failed before any checks could run
    pub fn read_failure(path: impl Into<PathBuf>, message: &str) -> Self {
        Self::new(path).with_error(ErrorKind::ReadFailure, message)
    }

    /// Add an error
    pub fn with_error(mut self, kind: ErrorKind, message: &str) -> Self {
        self.push_error(kind, message);
        self
    }

    /// Add a warning
    pub fn with_warning(mut self, kind: WarningKind, message: &str) -> Self {
        self.push_warning(kind, message);
        self
    }

    pub(crate) fn push_error(&mut self, kind: ErrorKind, message: &str) {
        self.errors.push(ValidationError {
            kind,
            message: message.to_string(),
        });
    }

    pub(crate) fn push_warning(&mut self, kind: WarningKind, message: &str) {
        self.warnings.push(ValidationWarning {
            kind,
            message: message.to_string(),
        });
    }

    /// Append every message of `messages` as an error of the given kind
    pub(crate) fn extend_errors<I>(&mut self, kind: ErrorKind, messages: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.errors.extend(
            messages
                .into_iter()
                .map(|message| ValidationError { kind, message }),
        );
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether validation passed (no errors; warnings are advisory)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// Error messages in the order they were found
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Warning messages in the order they were found
    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|w| w.message.as_str()).collect()
    }

    /// Number of errors of a given kind
    pub fn count_kind(&self, kind: ErrorKind) -> usize {
        self.errors.iter().filter(|e| e.kind == kind).count()
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 4)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("is_valid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("warnings", &self.warnings)?;
        state.end()
    }
}

/// Validation error details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Which check produced the error
    pub kind: ErrorKind,

    /// Error message
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Error categories. Every kind makes the document invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Document does not start with, or does not contain enough, delimiters
    Structural,
    /// Bracket/brace imbalance or a dangling colon inside a metadata block
    BlockSyntax,
    /// A required field is absent from the metadata block
    MissingField,
    /// Odd number of code fence markers in the body
    Fence,
    /// The file could not be opened or decoded
    ReadFailure,
}

/// Validation warning details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationWarning {
    pub kind: WarningKind,

    /// Warning message
    pub message: String,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Warning categories. Warnings never affect validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Odd count of inline backticks once fences are discounted
    InlineCode,
}
