//! Document validation: segmentation, block checks, fence and inline code checks

pub mod block_structure;
pub mod code_fence;
pub mod document_validator;
pub(crate) mod field_validation;
pub(crate) mod frontmatter;
pub(crate) mod inline_code;
pub mod result;
pub mod segment;

// Re-export main types
pub use document_validator::DocumentValidator;
pub use field_validation::DEFAULT_REQUIRED_FIELDS;
pub use result::{ErrorKind, ValidationError, ValidationResult, ValidationWarning, WarningKind};
pub use segment::{split_document, Segments, DELIMITER};
