//! crewsheet main entrypoint.

use crewsheet::run;
use crewsheet::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
