use crate::cli::form;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::errors::AppResult;
use crate::models::field::period_fields;

/// Save the readings of one period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Save {
        period,
        date,
        values,
    } = cmd
    {
        let d = form::resolve_date(date)?;
        let input = form::collect(values, period_fields(*period))?;

        EntryLogic::save_period(cfg, d, *period, &input)?;
    }

    Ok(())
}
