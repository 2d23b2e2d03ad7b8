//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    /// Column at least as wide as its header.
    pub fn new(header: &str, min_width: usize) -> Self {
        Self {
            header: header.to_string(),
            width: min_width.max(header.width()),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render the table. `style` may wrap a cell in ANSI codes; padding is
    /// computed on the plain text so colored cells stay aligned.
    pub fn render_with<F>(&self, style: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, &col.header, col.width));
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad(&style(cell), cell, col.width));
            }
            out.push('\n');
        }

        out
    }

    pub fn render(&self) -> String {
        self.render_with(str::to_string)
    }
}

fn pad(shown: &str, plain: &str, width: usize) -> String {
    let fill = width.saturating_sub(plain.width());
    format!("{shown}{} ", " ".repeat(fill))
}
