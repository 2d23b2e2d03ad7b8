//! Formatting utilities used for CLI and export outputs.

use crate::models::FieldSpec;

/// A reading, or the missing marker when nothing was entered.
pub fn value_or_marker(value: Option<u32>, marker: &str) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| marker.to_string())
}

/// Allowed range, e.g. "40 → 600".
pub fn range_label(field: &FieldSpec) -> String {
    format!("{} → {}", field.min, field.max)
}
