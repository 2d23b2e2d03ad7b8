//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Store file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("{field} must be a number! You entered '{input}'")]
    InvalidFormat { field: String, input: String },

    #[error(
        "{field} is out of range!\nEntered: {value}\nAllowed: {min} → {max}{}",
        advisory_suffix(.advisory)
    )]
    OutOfRange {
        field: String,
        value: String,
        min: u32,
        max: u32,
        advisory: String,
    },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("{field} does not belong to the {period} period")]
    FieldNotInPeriod { field: String, period: String },

    #[error("Invalid value assignment '{0}', expected NAME=VALUE")]
    InvalidAssignment(String),

    // ---------------------------
    // Lookup
    // ---------------------------
    #[error("No data found for {0}.")]
    NotFound(String),

    #[error("No logs found yet.")]
    NoData,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

fn advisory_suffix(advisory: &str) -> String {
    if advisory.is_empty() {
        String::new()
    } else {
        format!("\n\n{advisory}")
    }
}

pub type AppResult<T> = Result<T, AppError>;
