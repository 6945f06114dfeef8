//! Library error types.
//!
//! Document problems are never errors here: they are collected into a
//! [`ValidationResult`](crate::validation::ValidationResult). `LintError`
//! covers the surrounding I/O, configuration and header rewriting.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid header increment {0}: expected a value between 1 and 5")]
    InvalidIncrement(u8),

    #[error("Input file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("No version number left after {}", .0.display())]
    VersionOverflow(PathBuf),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LintError>;
