//! Range validation for typed readings.
//!
//! Validation is pure and stops at the first failing field, in schema
//! declaration order.

use crate::errors::{AppError, AppResult};
use crate::models::field::{self, FIELDS, FieldSpec};
use crate::models::{DayRecord, FormInput, Period};

/// A validated value for one field.
pub type Reading = (&'static FieldSpec, u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Empty fields are skipped.
    Partial,
    /// Every field must be filled.
    Full,
}

/// Check a single non-empty text against the field's rules.
pub fn check_value(field: &FieldSpec, text: &str) -> AppResult<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidFormat {
            field: field.name.to_string(),
            input: text.to_string(),
        });
    }

    let out_of_range = || AppError::OutOfRange {
        field: field.name.to_string(),
        value: text.to_string(),
        min: field.min,
        max: field.max,
        advisory: field.advisory.to_string(),
    };

    // all digits: the only possible parse failure is overflow
    let value: u32 = text.parse().map_err(|_| out_of_range())?;

    if !field.contains(value) {
        return Err(out_of_range());
    }

    Ok(value)
}

/// Validate `fields` in order against the typed `input`.
pub fn validate<I>(fields: I, input: &FormInput, mode: Mode) -> AppResult<Vec<Reading>>
where
    I: IntoIterator<Item = &'static FieldSpec>,
{
    let mut out = Vec::new();

    for f in fields {
        let text = input.text(f);

        if text.is_empty() && mode == Mode::Partial {
            continue;
        }

        out.push((f, check_value(f, text)?));
    }

    Ok(out)
}

/// Partial save of one period. Filled fields from other periods are
/// rejected before any value is looked at.
pub fn validate_period(period: Period, input: &FormInput) -> AppResult<Vec<Reading>> {
    if let Some(stray) = input.filled().find(|f| f.period != period) {
        return Err(AppError::FieldNotInPeriod {
            field: stray.name.to_string(),
            period: period.to_string(),
        });
    }

    validate(field::period_fields(period), input, Mode::Partial)
}

/// Full save: all 11 fields, all mandatory.
pub fn validate_full(input: &FormInput) -> AppResult<DayRecord> {
    let readings = validate(FIELDS.iter(), input, Mode::Full)?;
    Ok(readings.into_iter().collect())
}
