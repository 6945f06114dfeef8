//! Document validation implementation

use crate::validation::block_structure;
use crate::validation::code_fence;
use crate::validation::field_validation;
use crate::validation::frontmatter;
use crate::validation::inline_code;
use crate::validation::result::{ErrorKind, ValidationResult, WarningKind};
use crate::validation::segment;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Validator running every structural check over one document
#[derive(Debug, Clone)]
pub struct DocumentValidator {
    /// Fields the second block must declare
    required_fields: Vec<String>,
}

impl Default for DocumentValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentValidator {
    /// Create a new validator requiring `name`, `model` and `description`
    pub fn new() -> Self {
        Self {
            required_fields: field_validation::default_required_fields(),
        }
    }

    /// Create a new validator with a custom set of required fields
    pub fn with_config(required_fields: Vec<String>) -> Self {
        Self { required_fields }
    }

    pub fn required_fields(&self) -> &[String] {
        &self.required_fields
    }

    /// Read and validate a document.
    ///
    /// A file that cannot be read yields a single error and no further checks.
    pub fn validate_file(&self, path: &Path) -> ValidationResult {
        match fs::read_to_string(path) {
            Ok(content) => self.validate_content(path, &content),
            Err(e) => {
                debug!("Cannot read {}: {}", path.display(), e);
                ValidationResult::read_failure(path, &format!("Cannot read file: {}", e))
            }
        }
    }

    /// Validate document text already in memory
    pub fn validate_content(&self, path: &Path, content: &str) -> ValidationResult {
        let mut result = ValidationResult::new(path);

        // A failed gate still lets the remaining checks run on best-effort segments
        frontmatter::validate_structure(content, &mut result);

        let segments = segment::split_document(content);
        debug!(
            path = %path.display(),
            first_block = segments.first_block.len(),
            second_block = segments.second_block.len(),
            body = segments.body.len(),
            "segmented document"
        );

        result.extend_errors(
            ErrorKind::BlockSyntax,
            block_structure::check_block(segments.first_block),
        );
        result.extend_errors(
            ErrorKind::BlockSyntax,
            block_structure::check_block(segments.second_block),
        );

        result.extend_errors(
            ErrorKind::MissingField,
            field_validation::validate_required_fields(
                segments.second_block,
                &self.required_fields,
            ),
        );

        result.extend_errors(
            ErrorKind::Fence,
            code_fence::validate_code_fences(segments.body),
        );

        if let Some(message) = inline_code::check_inline_code(segments.body) {
            result.push_warning(WarningKind::InlineCode, &message);
        }

        debug!(
            path = %path.display(),
            errors = result.errors().len(),
            warnings = result.warnings().len(),
            "validated document"
        );
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID: &str = "---\na: 1\n---\nname: x\nmodel: y\ndescription: z\n---\nbody text\n";

    fn validate(content: &str) -> ValidationResult {
        DocumentValidator::new().validate_content(Path::new("doc.mdc"), content)
    }

    #[test]
    fn test_valid_document() {
        let result = validate(VALID);
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_missing_description() {
        let result = validate("---\na: 1\n---\nname: x\nmodel: y\n---\nbody text\n");
        assert!(!result.is_valid());
        assert_eq!(
            result.error_messages(),
            vec!["Missing required YAML field in metadata block: 'description'"]
        );
    }

    #[test]
    fn test_unclosed_fence_in_body() {
        let result = validate(
            "---\na: 1\n---\nname: x\nmodel: y\ndescription: z\n---\nintro\n```\ncode\n",
        );
        assert!(!result.is_valid());
        assert_eq!(result.count_kind(ErrorKind::Fence), 3);
        assert_eq!(
            result.error_messages(),
            vec![
                "Unmatched code block markers: found 1 markers (should be even)",
                "Opening marker at line 2",
                "Orphaned marker at line 2",
            ]
        );
    }

    #[test]
    fn test_unbalanced_bracket_in_second_block() {
        let result =
            validate("---\na: 1\n---\nname: x\nmodel: y\ndescription: z\ntags: [a\n---\nbody\n");
        assert_eq!(
            result.error_messages(),
            vec!["Unmatched brackets: depth 1"]
        );
        assert_eq!(result.errors()[0].kind, ErrorKind::BlockSyntax);
    }

    #[test]
    fn test_first_block_errors_come_before_second_block_errors() {
        let result = validate(
            "---\nflags: {\n---\nname: x\nmodel: y\ndescription: z\ntags: [\n---\nbody\n",
        );
        assert_eq!(
            result.error_messages(),
            vec!["Unmatched braces: depth 1", "Unmatched brackets: depth 1"]
        );
    }

    #[test]
    fn test_first_block_fields_are_not_required() {
        let result = validate("---\n---\nname: x\nmodel: y\ndescription: z\n---\nbody\n");
        assert!(result.is_valid());
    }

    #[test]
    fn test_inline_warning_does_not_invalidate() {
        let result =
            validate("---\na: 1\n---\nname: x\nmodel: y\ndescription: z\n---\nan `open tick\n");
        assert!(result.is_valid());
        assert_eq!(
            result.warning_messages(),
            vec!["Possible unclosed inline code backticks (odd count after code blocks)"]
        );
    }

    #[test]
    fn test_missing_start_delimiter_still_runs_later_checks() {
        let result = validate("intro\n---\nflags: 1\n---\nname: x\n---\nbody\n");
        let messages = result.error_messages();
        assert_eq!(messages[0], "File must start with '---' delimiter");
        assert!(messages.contains(&"Missing required YAML field in metadata block: 'model'"));
        // start failure skips the delimiter count check
        assert!(!messages.iter().any(|m| m.starts_with("Expected at least")));
    }

    #[test]
    fn test_incomplete_document_reports_structure_and_fields() {
        let result = validate("---\nname: x\n");
        assert_eq!(result.count_kind(ErrorKind::Structural), 2);
        assert_eq!(result.count_kind(ErrorKind::MissingField), 3);
    }

    #[test]
    fn test_revalidation_is_identical() {
        let content = "---\na: [\n---\nname: x\n---\n```\n`x\n";
        assert_eq!(validate(content), validate(content));
    }

    #[test]
    fn test_custom_required_fields() {
        let validator = DocumentValidator::with_config(vec!["owner".to_string()]);
        let result = validator.validate_content(Path::new("doc.mdc"), VALID);
        assert_eq!(
            result.error_messages(),
            vec!["Missing required YAML field in metadata block: 'owner'"]
        );
    }

    #[test]
    fn test_validate_file_reads_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("agent.mdc");
        std::fs::write(&path, VALID).unwrap();

        let result = DocumentValidator::new().validate_file(&path);
        assert!(result.is_valid());
        assert_eq!(result.path(), path.as_path());
    }

    #[test]
    fn test_unreadable_file_is_single_read_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.mdc");

        let result = DocumentValidator::new().validate_file(&path);
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].kind, ErrorKind::ReadFailure);
        assert!(result.errors()[0].message.starts_with("Cannot read file:"));
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_non_utf8_file_is_read_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.mdc");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let result = DocumentValidator::new().validate_file(&path);
        assert_eq!(result.count_kind(ErrorKind::ReadFailure), 1);
        assert_eq!(result.errors().len(), 1);
    }
}
