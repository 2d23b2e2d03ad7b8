use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::date;

/// Print every reading stored for one date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date: raw } = cmd {
        let d = date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;
        let record = EntryLogic::lookup(cfg, d)?;

        header(format!("Log for {d}"));
        for (name, value) in record.entries() {
            println!("{name}: {value}");
        }
    }

    Ok(())
}
