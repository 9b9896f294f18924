//! Binary entrypoint for the `hostkit` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    hostkit::logging::init();
    match hostkit::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
