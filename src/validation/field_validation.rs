//! Required field presence in the metadata block.

/// Fields every metadata block must declare
pub const DEFAULT_REQUIRED_FIELDS: &[&str] = &["name", "model", "description"];

/// Report each required field whose `<field>:` key does not occur in `block`.
///
/// The match is a plain substring test, not anchored to line starts.
pub(crate) fn validate_required_fields(block: &str, required_fields: &[String]) -> Vec<String> {
    required_fields
        .iter()
        .filter(|field| !block.contains(&format!("{}:", field)))
        .map(|field| {
            format!(
                "Missing required YAML field in metadata block: '{}'",
                field
            )
        })
        .collect()
}

pub(crate) fn default_required_fields() -> Vec<String> {
    DEFAULT_REQUIRED_FIELDS
        .iter()
        .map(|field| field.to_string())
        .collect()
}
