use crate::models::{FIELDS, Period};
use crate::models::field::period_fields;
use crate::ui::messages::header;
use crate::utils::formatting::range_label;
use crate::utils::table::{Column, Table};

/// Print the field table grouped by period.
pub fn handle() {
    header("Fields");

    let mut table = Table::new(vec![
        Column::new("Period", 8),
        Column::new("Field", 24),
        Column::new("Key", 24),
        Column::new("Range", 10),
        Column::new("Advisory", 0),
    ]);

    for period in Period::ALL {
        for f in period_fields(period) {
            table.add_row(vec![
                period.to_string(),
                f.name.to_string(),
                f.key.to_string(),
                range_label(f),
                f.advisory.to_string(),
            ]);
        }
    }

    print!("{}", table.render());
    println!("\n{} fields.", FIELDS.len());
}
