//! Top-level delimiter gate for the document.

use crate::validation::result::{ErrorKind, ValidationResult};
use crate::validation::segment::{count_delimiters, DELIMITER};

/// Delimiters needed to frame first block, second block and body
const REQUIRED_DELIMITERS: usize = 3;

pub(crate) fn validate_structure(content: &str, result: &mut ValidationResult) {
    if !content.starts_with(DELIMITER) {
        result.push_error(
            ErrorKind::Structural,
            &format!("File must start with '{}' delimiter", DELIMITER),
        );
        return;
    }

    let found = count_delimiters(content);
    if found < REQUIRED_DELIMITERS {
        result.push_error(
            ErrorKind::Structural,
            &format!(
                "Expected at least {} '{}' delimiters (found {})",
                REQUIRED_DELIMITERS, DELIMITER, found
            ),
        );
        result.push_error(
            ErrorKind::Structural,
            "Expected structure: --- (first block) --- (second block) --- (markdown)",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structure_errors(content: &str) -> Vec<String> {
        let mut result = ValidationResult::new("t.mdc");
        validate_structure(content, &mut result);
        result
            .error_messages()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_well_formed_structure() {
        assert!(structure_errors("---\na\n---\nb\n---\nbody").is_empty());
    }

    #[test]
    fn test_must_start_with_delimiter() {
        assert_eq!(
            structure_errors("a\n---\nb\n---\nc\n---\n"),
            vec!["File must start with '---' delimiter"]
        );
    }

    #[test]
    fn test_leading_whitespace_fails_start_check() {
        assert_eq!(structure_errors("\n---\na\n---\nb\n---\n").len(), 1);
    }

    #[test]
    fn test_too_few_delimiters() {
        assert_eq!(
            structure_errors("---\na\n---\nbody"),
            vec![
                "Expected at least 3 '---' delimiters (found 2)",
                "Expected structure: --- (first block) --- (second block) --- (markdown)",
            ]
        );
    }
}
