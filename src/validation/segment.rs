//! Splitting a document into its first block, second block and body.

/// Line-level delimiter separating the document segments
pub const DELIMITER: &str = "---";

/// The three segments of a document, borrowed from its text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments<'a> {
    /// Simple key-value flags, trimmed
    pub first_block: &'a str,
    /// Descriptive metadata, trimmed
    pub second_block: &'a str,
    /// Free-form text after the third delimiter, leading whitespace removed
    pub body: &'a str,
}

/// Count delimiter occurrences (non-overlapping substring matches)
pub fn count_delimiters(content: &str) -> usize {
    content.matches(DELIMITER).count()
}

/// Split `content` on its first three delimiters.
///
/// Delimiters after the third belong to the body. When fewer than three are
/// present the blocks are empty and the whole text is returned as the body,
/// so that body checks still have something to look at.
pub fn split_document(content: &str) -> Segments<'_> {
    let mut parts = content.splitn(4, DELIMITER);
    // text before the first delimiter is not part of any segment
    let _preamble = parts.next();

    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), Some(body)) => Segments {
            first_block: first.trim(),
            second_block: second.trim(),
            body: body.trim_start(),
        },
        _ => Segments {
            first_block: "",
            second_block: "",
            body: content,
        },
    }
}
