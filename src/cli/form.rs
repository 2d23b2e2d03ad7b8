//! Collect the raw text of a form, from `--value` flags or stdin prompts.

use crate::errors::{AppError, AppResult};
use crate::models::{FieldSpec, FormInput};
use crate::ui::prompt;
use crate::utils::date;
use chrono::NaiveDate;

/// Use the `NAME=VALUE` pairs when given, else prompt for each field.
pub fn collect<I>(values: &[String], fields: I) -> AppResult<FormInput>
where
    I: IntoIterator<Item = &'static FieldSpec>,
{
    if !values.is_empty() {
        return FormInput::from_assignments(values);
    }

    let mut form = FormInput::new();
    for f in fields {
        let text = prompt::ask_field(f)?;
        form.set(f, &text);
    }
    Ok(form)
}

/// `--date` value, or today when omitted.
pub fn resolve_date(date: &Option<String>) -> AppResult<NaiveDate> {
    match date {
        Some(d) => date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string())),
        None => Ok(date::today()),
    }
}
