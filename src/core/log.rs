use crate::config::Config;
use crate::errors::AppResult;
use crate::store::audit::{self, AuditEntry};
use crate::ui::messages::{info, warning};
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// ANSI colour per audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "save" => Colour::Green,
        "today" => Colour::Yellow,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

const MAX_OP_WIDTH: usize = 40;

pub struct LogLogic;

impl LogLogic {
    /// Append an audit line. A failure only warns: the operation it
    /// describes has already succeeded.
    pub fn record(cfg: &Config, operation: &str, target: &str, message: &str) {
        if let Err(e) = audit::record(&cfg.audit_log_path(), operation, target, message) {
            warning(format!("Failed to write audit log: {e}"));
        }
    }

    pub fn print_log(cfg: &Config) -> AppResult<()> {
        let entries = audit::read_all(&cfg.audit_log_path())?;

        if entries.is_empty() {
            info("The audit log is empty.");
            return Ok(());
        }

        println!("📜 Audit log:\n");

        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        for (i, entry) in entries.iter().enumerate() {
            println!(
                "{:>id_w$}: {:<date_w$} | {} => {}",
                i + 1,
                entry.date,
                render_op_target(entry),
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

/// Coloured "operation (target)" cell, truncated and padded on its
/// visible width.
fn render_op_target(entry: &AuditEntry) -> String {
    let color = color_for_operation(&entry.operation);

    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let visible = if plain.chars().count() > MAX_OP_WIDTH {
        let mut s: String = plain.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    // only the operation word is coloured
    let colored = match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    };

    let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(strip_ansi(&colored).chars().count()));
    format!("{colored}{padding}")
}
