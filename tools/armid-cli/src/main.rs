//! armid - inspect Azure Resource Manager resource ids.
//!
//! Parses ids, prints their type and scope strings, walks parents, compares
//! ids and normalizes keyword casing against scope templates.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

mod commands;
mod config;

use commands::Cli;

/// Exit code for usage and parse errors; 1 is reserved for a false verdict.
const ERROR_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.config.init_tracing();

    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
