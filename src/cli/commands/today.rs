use crate::cli::form;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::errors::AppResult;
use crate::models::FIELDS;
use crate::ui::messages::warning;
use crate::ui::prompt;

/// Save every reading of the day, asking before replacing an existing day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Today { date, values, yes } = cmd {
        let d = form::resolve_date(date)?;
        let input = form::collect(values, FIELDS.iter())?;

        EntryLogic::save_all(cfg, d, &input, |existing| {
            if *yes {
                return Ok(true);
            }
            warning(format!("Data for {existing} already exists."));
            prompt::confirm("Overwrite it?")
        })?;
    }

    Ok(())
}
