//! Fenced code region pairing in the document body.

use regex::Regex;
use std::sync::LazyLock;

static FENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"`{3,}").expect("Invalid fence regex")
});

/// A run of three or more backticks and the 1-based line it starts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceMarker {
    pub line: usize,
}

/// Every fence marker in `body`, in order of appearance
pub fn find_fence_markers(body: &str) -> Vec<FenceMarker> {
    FENCE_REGEX
        .find_iter(body)
        .map(|m| FenceMarker {
            line: line_number_at(body, m.start()),
        })
        .collect()
}

fn line_number_at(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}

/// Check that fence markers pair up.
///
/// With an odd count the summary is followed by one line per marker, then the
/// last marker is named as the orphan.
pub(crate) fn validate_code_fences(body: &str) -> Vec<String> {
    let markers = find_fence_markers(body);
    if markers.len() % 2 == 0 {
        return Vec::new();
    }

    let mut errors = Vec::with_capacity(markers.len() + 2);
    errors.push(format!(
        "Unmatched code block markers: found {} markers (should be even)",
        markers.len()
    ));
    for (i, marker) in markers.iter().enumerate() {
        let role = if i % 2 == 0 { "Opening" } else { "Closing" };
        errors.push(format!("{} marker at line {}", role, marker.line));
    }
    if let Some(last) = markers.last() {
        errors.push(format!("Orphaned marker at line {}", last.line));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paired_fences_are_valid() {
        let body = "intro\n```rust\nfn main() {}\n```\noutro\n";
        assert!(validate_code_fences(body).is_empty());
    }

    #[test]
    fn test_no_fences_is_valid() {
        assert!(validate_code_fences("plain `inline` text").is_empty());
    }

    #[test]
    fn test_single_fence_is_orphaned() {
        let body = "line 1\nline 2\nline 3\nline 4\n```\ncode\n";
        assert_eq!(
            validate_code_fences(body),
            vec![
                "Unmatched code block markers: found 1 markers (should be even)",
                "Opening marker at line 5",
                "Orphaned marker at line 5",
            ]
        );
    }

    #[test]
    fn test_three_fences_report_each_role() {
        let body = "```\na\n```\n\n```python\nb\n";
        assert_eq!(
            validate_code_fences(body),
            vec![
                "Unmatched code block markers: found 3 markers (should be even)",
                "Opening marker at line 1",
                "Closing marker at line 3",
                "Opening marker at line 5",
                "Orphaned marker at line 5",
            ]
        );
    }

    #[test]
    fn test_long_runs_are_single_markers() {
        let markers = find_fence_markers("````\nx\n`````\n");
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].line, 1);
        assert_eq!(markers[1].line, 3);
    }

    #[test]
    fn test_double_backticks_are_not_fences() {
        assert!(find_fence_markers("``not a fence``").is_empty());
    }
}
