//! sugarlog main entrypoint.

use sugarlog::run;
use sugarlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
