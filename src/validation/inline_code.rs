//! Inline code backtick balance (advisory).

const FENCE: &str = "```";

/// Warn when the backticks left after discounting fences are odd in number.
///
/// Every three-backtick substring counts as a fence worth three backticks, so
/// a run of six discounts six and a run of four discounts three.
pub(crate) fn check_inline_code(body: &str) -> Option<String> {
    let inline_count = body.matches('`').count();
    let consumed = body.matches(FENCE).count() * 3;
    let remaining = inline_count - consumed;

    (remaining % 2 != 0)
        .then(|| "Possible unclosed inline code backticks (odd count after code blocks)".to_string())
}
