//! Static field schema: the 11 readings, their ranges and their period.
//!
//! The table is compiled in and never re-derived; every lookup borrows
//! from [`FIELDS`], whose order is the declaration order used by
//! validation, prompts and exports.

use super::period::Period;

#[derive(Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Exact name used as the JSON key in the store.
    pub name: &'static str,
    /// Short command-line key (`--value morning-insulin=12`).
    pub key: &'static str,
    pub period: Period,
    pub min: u32,
    pub max: u32,
    /// Extra guidance shown with an out-of-range error; may be empty.
    pub advisory: &'static str,
}

impl FieldSpec {
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

const GLYCEMIA: (u32, u32) = (40, 600);
const INSULIN: (u32, u32) = (1, 60);

const fn spec(
    name: &'static str,
    key: &'static str,
    period: Period,
    range: (u32, u32),
    advisory: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        key,
        period,
        min: range.0,
        max: range.1,
        advisory,
    }
}

pub static FIELDS: [FieldSpec; 11] = [
    spec(
        "Morning Glycemia",
        "morning-glycemia",
        Period::Morning,
        GLYCEMIA,
        "Check your blood sugar!",
    ),
    spec(
        "Morning Insulin",
        "morning-insulin",
        Period::Morning,
        INSULIN,
        "Insulin dose too high or low.",
    ),
    spec(
        "Morning Glycemia After",
        "morning-glycemia-after",
        Period::Morning,
        GLYCEMIA,
        "Check your blood sugar after breakfast.",
    ),
    spec(
        "Glycemia Before Lunch",
        "lunch-glycemia-before",
        Period::Lunch,
        GLYCEMIA,
        "",
    ),
    spec("Lunch Insulin", "lunch-insulin", Period::Lunch, INSULIN, ""),
    spec(
        "Glycemia After Lunch",
        "lunch-glycemia-after",
        Period::Lunch,
        GLYCEMIA,
        "",
    ),
    spec(
        "Glycemia Before Dinner",
        "dinner-glycemia-before",
        Period::Dinner,
        GLYCEMIA,
        "",
    ),
    spec("Dinner Insulin", "dinner-insulin", Period::Dinner, INSULIN, ""),
    spec(
        "Glycemia After Dinner",
        "dinner-glycemia-after",
        Period::Dinner,
        GLYCEMIA,
        "",
    ),
    spec(
        "Glycemia At Night",
        "night-glycemia",
        Period::Bedtime,
        GLYCEMIA,
        "",
    ),
    spec("Night Insulin", "night-insulin", Period::Bedtime, INSULIN, ""),
];

/// Look a field up by exact name or by key, ignoring case.
pub fn find(name: &str) -> Option<&'static FieldSpec> {
    let wanted = name.trim();
    FIELDS
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(wanted) || f.key.eq_ignore_ascii_case(wanted))
}

/// Fields of one period, in declaration order.
pub fn period_fields(period: Period) -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS.iter().filter(move |f| f.period == period)
}

/// Position of a stored key in the schema; unknown keys sort last.
pub fn schema_index(name: &str) -> usize {
    FIELDS
        .iter()
        .position(|f| f.name == name)
        .unwrap_or(FIELDS.len())
}
