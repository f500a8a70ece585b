//! verchain CLI entry point
//!
//! Parses arguments and dispatches via `cli::run`, prints any fatal error
//! to stderr and exits non-zero. All other logic lives in the library.

use verchain::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
