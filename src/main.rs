//! Hangman entry point
//!
//! Sets up logging and settings, then runs one console session.

use std::io;
use std::process::ExitCode;

use hangman::{Console, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Hangman starting...");

    let settings = Settings::load();
    let mut console = Console::new(io::stdin().lock(), io::stdout());

    match console.run(&settings) {
        Ok(end) => {
            log::info!("Session ended: {end:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
