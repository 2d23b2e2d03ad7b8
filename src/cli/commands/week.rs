use crate::cli::form;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::week::WeekView;
use crate::errors::{AppError, AppResult};
use crate::models::Period;
use crate::store::{RecordStore, Store};
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_missing;
use crate::utils::formatting::value_or_marker;
use crate::utils::table::{Column, Table};

/// Show one week of readings, for one period or for all of them.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week {
        date,
        period,
        prev,
        next,
        all,
    } = cmd
    {
        let anchor = form::resolve_date(date)?;

        let loaded = RecordStore::new(cfg.store_path()).load()?;
        if loaded.is_missing() {
            info("No logs written yet.");
        }
        let store = loaded.into_store();
        if store.is_empty() {
            return Err(AppError::NoData);
        }

        let offset = i64::from(next.unwrap_or(0)) - i64::from(prev.unwrap_or(0));
        let view = WeekView::new(anchor, period.unwrap_or(cfg.default_period))
            .and_then(|v| v.shift(offset))
            .ok_or_else(|| {
                AppError::InvalidRange(format!(
                    "moving {offset} week(s) from {anchor} leaves the supported calendar"
                ))
            })?;

        let periods: Vec<Period> = if *all {
            Period::ALL.to_vec()
        } else {
            vec![view.period()]
        };

        header(view.label());
        for p in periods {
            println!("\n{p}");
            print!("{}", render_week(&view.with_period(p), &store, &cfg.missing_marker));
        }
    }

    Ok(())
}

fn render_week(view: &WeekView, store: &Store, marker: &str) -> String {
    let mut columns = vec![Column::new("Date", 10)];
    columns.extend(view.fields().iter().map(|f| Column::new(f.name, 6)));

    let mut table = Table::new(columns);
    for row in view.rows(store) {
        let mut cells = vec![row.date.to_string()];
        cells.extend(row.values.iter().map(|v| value_or_marker(*v, marker)));
        table.add_row(cells);
    }

    table.render_with(|cell| colorize_missing(cell, marker))
}
