//! rStopwatch main entrypoint.

use rstopwatch::run;

fn main() {
    if let Err(e) = run() {
        rstopwatch::ui::messages::error(e);
        std::process::exit(1);
    }
}
