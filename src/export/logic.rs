// src/export/logic.rs

use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::range::parse_range;
use crate::store::{RecordStore, Store};
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export logged days.
    ///
    /// - `format`: csv | json
    /// - `file`: output path
    /// - `range`: `None`, `"all"` or expressions such as:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    ///
    /// Returns the number of exported days.
    pub fn export(
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        // validate the range before touching the output file
        let bounds = parse_range(range)?;

        let store = RecordStore::new(cfg.store_path()).load()?.into_store();

        let (start, end) = bounds.unwrap_or((NaiveDate::MIN, NaiveDate::MAX));

        let mut selected = Store::new();
        for (date, record) in store.range(start, end) {
            selected.insert(*date, record.clone());
        }

        if selected.is_empty() {
            warning("No logs found for the selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&selected, path)?,
            ExportFormat::Json => export_json(&selected, path)?,
        }

        LogLogic::record(
            cfg,
            "export",
            &path.to_string_lossy(),
            &format!(
                "{} day(s) exported as {} ({})",
                selected.len(),
                format.as_str(),
                range.unwrap_or("all")
            ),
        );

        Ok(selected.len())
    }
}
