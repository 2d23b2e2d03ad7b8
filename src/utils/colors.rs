/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

/// Grey out the missing-value marker; other cells are returned as-is.
pub fn colorize_missing(value: &str, marker: &str) -> String {
    if value.trim().is_empty() || value == marker {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
