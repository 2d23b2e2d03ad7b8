// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::range_bounds;
use chrono::NaiveDate;

/// Parse an export range.
///
/// `None` and `"all"` select every day. Otherwise accepts `YYYY`,
/// `YYYY-MM`, `YYYY-MM-DD` or two of them joined by `:`.
pub(crate) fn parse_range(range: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match range.map(str::trim) {
        None => Ok(None),
        Some(r) if r.eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => range_bounds(r).map(Some).map_err(AppError::InvalidRange),
    }
}
