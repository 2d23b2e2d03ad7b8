//! Interactive stdin prompts used by the form commands.

use crate::errors::AppResult;
use crate::models::FieldSpec;
use crate::utils::formatting::range_label;
use std::io::{self, Write};

fn read_answer() -> AppResult<String> {
    io::stdout().flush().ok();

    let mut answer = String::new();
    // EOF leaves the answer empty
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

/// Ask a `[y/N]` question. Anything but "y"/"yes" means no.
pub fn confirm(question: &str) -> AppResult<bool> {
    print!("{question} [y/N]: ");
    let ans = read_answer()?.to_ascii_lowercase();
    Ok(ans == "y" || ans == "yes")
}

/// Ask for the raw text of one field. An empty answer leaves it blank.
pub fn ask_field(field: &FieldSpec) -> AppResult<String> {
    print!("{} ({}): ", field.name, range_label(field));
    read_answer()
}
