//! trello2pivotal - Trello board export to Pivotal Tracker CSV

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = trello2pivotal::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
