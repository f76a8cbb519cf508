//! hn - Hacker News markdown digests

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = hn_digest::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
