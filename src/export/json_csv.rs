// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::FIELDS;
use crate::store::{Store, to_pretty_json};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Export JSON pretty-printed, same shape as the store file.
pub(crate) fn export_json(days: &Store, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    fs::write(path, to_pretty_json(days)?)?;

    notify_export_success("JSON", path, days.len());
    Ok(())
}

/// Export CSV: one row per day, one column per field, empty cell when
/// the reading is missing.
pub(crate) fn export_csv(days: &Store, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let csv_err = |e: csv::Error| AppError::Export(format!("CSV write error: {e}"));

    let mut wtr = csv::Writer::from_path(path).map_err(csv_err)?;

    let header = std::iter::once("Date").chain(FIELDS.iter().map(|f| f.name));
    wtr.write_record(header).map_err(csv_err)?;

    for (date, record) in days.days() {
        let mut row = vec![date.to_string()];
        row.extend(
            FIELDS
                .iter()
                .map(|f| record.get(f).map(|v| v.to_string()).unwrap_or_default()),
        );
        wtr.write_record(&row).map_err(csv_err)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path, days.len());
    Ok(())
}
