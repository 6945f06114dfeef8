//! Markdown heading level shifting.
//!
//! Every ATX heading is pushed down by a fixed increment. Headings that would
//! go past level 5 become bold text instead. The rewritten document is saved
//! next to the input as `<stem>.v<N>.md`, where `N` is one more than the
//! highest existing version (or 2 when there is none).

use crate::error::{LintError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

/// Deepest heading level kept as a heading
const MAX_HEADING_LEVEL: usize = 5;

/// Increment used when none is given
pub const DEFAULT_INCREMENT: u8 = 3;

static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^(\s*)(#{1,6})\s+(.+)$").expect("Invalid heading regex")
});

/// Check that `increment` is in `1..=5`
pub fn validate_increment(increment: u8) -> Result<()> {
    if (1..=5).contains(&increment) {
        Ok(())
    } else {
        Err(LintError::InvalidIncrement(increment))
    }
}

/// Shift a single line (without its line ending). Non-heading lines are
/// returned unchanged.
pub fn shift_header_line(line: &str, increment: u8) -> String {
    let Some(caps) = HEADING_REGEX.captures(line) else {
        return line.to_string();
    };
    let indent = &caps[1];
    let level = caps[2].len() + usize::from(increment);
    let text = caps[3].trim_end();

    if level > MAX_HEADING_LEVEL {
        format!("{}**{}**", indent, text)
    } else {
        format!("{}{} {}", indent, "#".repeat(level), text)
    }
}

/// Shift every heading in `content`, keeping line endings intact
pub fn shift_headers(content: &str, increment: u8) -> String {
    content
        .split_inclusive('\n')
        .map(|line| {
            let (body, ending) = split_line_ending(line);
            if body.trim_start().starts_with('#') {
                format!("{}{}", shift_header_line(body, increment), ending)
            } else {
                line.to_string()
            }
        })
        .collect()
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Next free version number for `<stem>.v<N>.md` beside `input_path`
pub fn next_version_number(input_path: &Path) -> Result<u64> {
    let stem = file_stem(input_path);
    let parent = parent_dir(input_path);
    let pattern = Regex::new(&format!(r"^{}\.v([0-9]+)\.md$", regex::escape(&stem)))
        .map_err(|e| LintError::Config(format!("Invalid version pattern: {}", e)))?;

    let mut highest: Option<u64> = None;
    for entry in fs::read_dir(&parent)?.filter_map(|entry| entry.ok()) {
        let name = entry.file_name();
        let Some(caps) = name.to_str().and_then(|name| pattern.captures(name)) else {
            continue;
        };
        let version = caps[1]
            .parse::<u64>()
            .map_err(|_| LintError::VersionOverflow(entry.path()))?;
        highest = highest.max(Some(version));
    }

    match highest {
        None => Ok(2),
        Some(version) => version.checked_add(1).ok_or_else(|| {
            LintError::VersionOverflow(parent.join(format!("{}.v{}.md", stem, version)))
        }),
    }
}

/// Shift the headings of `input_path` and write the next versioned copy.
/// Returns the path written.
pub fn process_file(input_path: &Path, increment: u8) -> Result<PathBuf> {
    validate_increment(increment)?;
    if !input_path.exists() {
        return Err(LintError::FileNotFound(input_path.to_path_buf()));
    }

    let content = fs::read_to_string(input_path)?;
    let shifted = shift_headers(&content, increment);

    let version = next_version_number(input_path)?;
    let output_path =
        parent_dir(input_path).join(format!("{}.v{}.md", file_stem(input_path), version));
    fs::write(&output_path, shifted)?;

    debug!(
        "Shifted headings of {} by {} into {}",
        input_path.display(),
        increment,
        output_path.display()
    );
    Ok(output_path)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
