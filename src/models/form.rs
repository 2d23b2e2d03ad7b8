use super::field::{self, FIELDS, FieldSpec};
use crate::errors::{AppError, AppResult};
use std::collections::HashMap;

/// Raw text typed for each field during one form action.
///
/// Values are trimmed on insert; a field never set reads as "".
#[derive(Debug, Default, Clone)]
pub struct FormInput {
    entries: HashMap<&'static str, String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &'static FieldSpec, raw: &str) {
        self.entries.insert(field.name, raw.trim().to_string());
    }

    pub fn text(&self, field: &FieldSpec) -> &str {
        self.entries.get(field.name).map(String::as_str).unwrap_or("")
    }

    /// Fields with non-empty text, in schema order.
    pub fn filled(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        FIELDS.iter().filter(|f| !self.text(f).is_empty())
    }

    /// Build a form from `NAME=TEXT` pairs given on the command line.
    /// NAME may be the exact field name or its key.
    pub fn from_assignments(pairs: &[String]) -> AppResult<Self> {
        let mut form = FormInput::new();

        for pair in pairs {
            let (name, text) = pair
                .split_once('=')
                .ok_or_else(|| AppError::InvalidAssignment(pair.clone()))?;

            let spec = field::find(name).ok_or_else(|| AppError::UnknownField(name.to_string()))?;
            form.set(spec, text);
        }

        Ok(form)
    }
}
