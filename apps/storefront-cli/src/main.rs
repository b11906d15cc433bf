//! # Storefront Entry Point
//!
//! ## Exit Codes
//! - `0`: the user quit (or input ended)
//! - `1`: the catalog could not be loaded, or the terminal failed

use std::process::ExitCode;

use clap::Parser;
use storefront_cli::CliArgs;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // The actual setup is in lib.rs for better testability
    match storefront_cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error [{}]: {e}", e.code());
            ExitCode::FAILURE
        }
    }
}
