use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// First and last day of a `YYYY-MM-DD`, `YYYY-MM` or `YYYY` period.
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        let next_month = if first.month() == 12 {
            NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
        };
        let last = next_month
            .and_then(|d| d.pred_opt())
            .ok_or_else(|| format!("Invalid period: {p}"))?;
        return Ok((first, last));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {p}"))
}

/// Bounds of `A:B` (each side a period) or of a single period.
pub fn range_bounds(spec: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let (start, end) = match spec.split_once(':') {
        Some((a, b)) => (period_bounds(a)?.0, period_bounds(b)?.1),
        None => period_bounds(spec)?,
    };

    if start > end {
        return Err(format!("Range start is after its end: {spec}"));
    }

    Ok((start, end))
}
