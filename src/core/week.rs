//! Sunday-anchored 7-day window over the store.

use crate::models::field::{self, FieldSpec};
use crate::models::Period;
use crate::store::Store;
use chrono::{Datelike, Days, Duration, NaiveDate};

/// One line of the weekly table: the date and the period's values,
/// `None` where nothing was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow {
    pub date: NaiveDate,
    pub values: Vec<Option<u32>>,
}

/// Most recent Sunday on or before `anchor`; `None` past chrono's first day.
pub fn week_start(anchor: NaiveDate) -> Option<NaiveDate> {
    anchor.checked_sub_days(Days::new(u64::from(anchor.weekday().num_days_from_sunday())))
}

/// A week is only usable when its Saturday is a valid date too.
fn whole_week(start: NaiveDate) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(6)).map(|_| start)
}

/// The week currently displayed and the period it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekView {
    start: NaiveDate,
    period: Period,
}

impl WeekView {
    /// Week containing `anchor`, or `None` when that week leaves the
    /// supported calendar.
    pub fn new(anchor: NaiveDate, period: Period) -> Option<Self> {
        let start = week_start(anchor).and_then(whole_week)?;
        Some(Self { start, period })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn previous(self) -> Option<Self> {
        self.shift(-1)
    }

    pub fn next(self) -> Option<Self> {
        self.shift(1)
    }

    /// Move by `weeks` whole weeks (negative goes back). `None` when the
    /// target week is outside the dates chrono can represent.
    pub fn shift(self, weeks: i64) -> Option<Self> {
        let delta = weeks.checked_mul(7).and_then(Duration::try_days)?;
        let start = self.start.checked_add_signed(delta).and_then(whole_week)?;
        Some(Self { start, ..self })
    }

    pub fn with_period(self, period: Period) -> Self {
        Self { period, ..self }
    }

    pub fn fields(&self) -> Vec<&'static FieldSpec> {
        field::period_fields(self.period).collect()
    }

    pub fn dates(&self) -> [NaiveDate; 7] {
        std::array::from_fn(|i| self.start + Duration::days(i as i64))
    }

    pub fn label(&self) -> String {
        format!("Week: {} → {}", self.start, self.end())
    }

    pub fn rows(&self, store: &Store) -> Vec<WeekRow> {
        let fields = self.fields();

        self.dates()
            .into_iter()
            .map(|date| {
                let record = store.get(&date);
                let values = fields
                    .iter()
                    .map(|f| record.and_then(|r| r.get(f)))
                    .collect();
                WeekRow { date, values }
            })
            .collect()
    }
}
