//! Utility functions for CLI operations

pub mod messages;

use crate::cli::error::{CliError, CliResult};
use std::env;
use std::path::PathBuf;

/// Current working directory, as a configuration error when unavailable
pub fn current_dir() -> CliResult<PathBuf> {
    env::current_dir()
        .map_err(|e| CliError::Config(format!("Failed to get current directory: {}", e)))
}
