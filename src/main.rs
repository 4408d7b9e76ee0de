//! Binary entrypoint for the `ticketplugin` JSON-RPC plugin.

use std::process::ExitCode;

fn main() -> ExitCode {
    match jira_adapter::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
