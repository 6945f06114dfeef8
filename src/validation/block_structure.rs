//! Lightweight structural checks for a metadata block.
//!
//! This is not a parser for the metadata language. It tracks bracket and
//! brace balance and flags keys whose value is missing with nothing nested
//! below them. A real parser can replace it behind [`check_block`] without
//! touching the rest of the pipeline.
//!
//! The dangling-colon rule only fires on a line with nothing after its first
//! colon that does not end in `:` once trimmed. Trimming makes those two
//! conditions exclusive, so the rule never reports anything in practice.

use tracing::trace;

/// Check one metadata block and return its errors in order
pub fn check_block(block: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let lines: Vec<&str> = block.split('\n').collect();

    let mut bracket_depth: isize = 0;
    let mut brace_depth: isize = 0;

    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        let stripped = line.trim();
        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }

        let mut quotes = QuoteScan::default();
        if quotes.scan_line(line) {
            trace!(line = line_number, "quoted value left open");
        }

        bracket_depth += depth_delta(line, '[', ']');
        brace_depth += depth_delta(line, '{', '}');

        if let Some(following) = lines.get(index + 1) {
            if is_dangling_colon(line) && !is_indented(following) {
                errors.push(format!(
                    "Line {}: Colon without value and no indented content following",
                    line_number
                ));
            }
        }
    }

    if bracket_depth != 0 {
        errors.push(format!("Unmatched brackets: depth {}", bracket_depth));
    }
    if brace_depth != 0 {
        errors.push(format!("Unmatched braces: depth {}", brace_depth));
    }

    errors
}

fn depth_delta(line: &str, open: char, close: char) -> isize {
    let opened = line.chars().filter(|c| *c == open).count() as isize;
    let closed = line.chars().filter(|c| *c == close).count() as isize;
    opened - closed
}

/// A line with a colon that is not a bare `key:` header but has only
/// whitespace after its first colon
fn is_dangling_colon(line: &str) -> bool {
    if line.trim().ends_with(':') {
        return false;
    }
    match line.split_once(':') {
        Some((_, value)) => value.trim().is_empty(),
        None => false,
    }
}

fn is_indented(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t')
}

/// Best-effort quote tracking over a single line.
///
/// It toggles an in-string flag on `"` and `'`, ignoring quotes escaped with a
/// backslash and quotes of the other kind while inside a string. It does not
/// produce errors.
#[derive(Debug, Default)]
pub(crate) struct QuoteScan {
    in_string: bool,
    quote_char: Option<char>,
}

impl QuoteScan {
    /// Scan `line`, returning whether a string is still open at its end
    pub(crate) fn scan_line(&mut self, line: &str) -> bool {
        let mut previous: Option<char> = None;
        for c in line.chars() {
            if (c == '"' || c == '\'') && previous != Some('\\') {
                if !self.in_string {
                    self.in_string = true;
                    self.quote_char = Some(c);
                } else if self.quote_char == Some(c) {
                    self.in_string = false;
                    self.quote_char = None;
                }
            }
            previous = Some(c);
        }
        self.in_string
    }
}
