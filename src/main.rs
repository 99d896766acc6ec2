//! daylog main entrypoint.

use daylog::errors::{ERR_UNKNOWN, SUCCESS};
use daylog::run;
use daylog::ui::messages;

fn main() {
    let code = match std::panic::catch_unwind(run) {
        Ok(Ok(())) => SUCCESS,
        Ok(Err(e)) => {
            messages::error(&e);
            e.exit_code()
        }
        Err(_) => {
            messages::error("Unexpected internal error");
            ERR_UNKNOWN
        }
    };
    std::process::exit(code);
}
