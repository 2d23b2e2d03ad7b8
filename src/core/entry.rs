use crate::config::Config;
use crate::core::log::LogLogic;
use crate::core::validator;
use crate::errors::AppResult;
use crate::models::{DayRecord, FormInput, Period};
use crate::store::{RecordStore, ReplaceOutcome, Store};
use crate::ui::messages::{info, success, warning};
use chrono::NaiveDate;

/// High-level business logic behind the form actions.
pub struct EntryLogic;

impl EntryLogic {
    /// Save the filled fields of one period, keeping everything else
    /// already stored for `date`. Returns the merged record, or `None`
    /// when the form had nothing filled in.
    pub fn save_period(
        cfg: &Config,
        date: NaiveDate,
        period: Period,
        input: &FormInput,
    ) -> AppResult<Option<DayRecord>> {
        let readings = validator::validate_period(period, input)?;

        if readings.is_empty() {
            warning(format!("Nothing to save for {period}: every field is empty."));
            return Ok(None);
        }

        let store = RecordStore::new(cfg.store_path());
        let merged = store.merge_into(load_with_notice(&store)?, date, &readings)?;

        LogLogic::record(
            cfg,
            "save",
            &format!("{date} {period}"),
            &format!("{} field(s) saved", readings.len()),
        );
        success(format!("Data saved for {date}!"));

        Ok(Some(merged))
    }

    /// Save all 11 fields for `date`. Nothing is written unless every
    /// field validates; an existing day is replaced only if `confirm`
    /// agrees.
    pub fn save_all<F>(
        cfg: &Config,
        date: NaiveDate,
        input: &FormInput,
        confirm: F,
    ) -> AppResult<ReplaceOutcome>
    where
        F: FnOnce(NaiveDate) -> AppResult<bool>,
    {
        let record = validator::validate_full(input)?;

        let store = RecordStore::new(cfg.store_path());

        let outcome = store.replace_into(load_with_notice(&store)?, date, record, confirm)?;

        match outcome {
            ReplaceOutcome::Declined => {
                warning(format!("Existing log for {date} left unchanged."));
            }
            ReplaceOutcome::Created | ReplaceOutcome::Replaced => {
                let verb = if outcome == ReplaceOutcome::Created {
                    "created"
                } else {
                    "overwritten"
                };
                LogLogic::record(cfg, "today", &date.to_string(), &format!("Day log {verb}"));
                success(format!("Data saved for {date}!"));
            }
        }

        Ok(outcome)
    }

    pub fn lookup(cfg: &Config, date: NaiveDate) -> AppResult<DayRecord> {
        RecordStore::new(cfg.store_path()).get(date)
    }

    pub fn has_entry(cfg: &Config, date: NaiveDate) -> AppResult<bool> {
        RecordStore::new(cfg.store_path()).has_entry(date)
    }
}

/// Load the store, telling the user once when this is the very first log.
fn load_with_notice(store: &RecordStore) -> AppResult<Store> {
    let loaded = store.load()?;
    if loaded.is_missing() {
        info("No logs written yet.");
    }
    Ok(loaded.into_store())
}
