//! rDriverLog main entrypoint.

use rdriverlog::run;
use rdriverlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
