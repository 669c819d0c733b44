use std::process::ExitCode;

use clap::Parser;
use urledit::logging;

mod cli;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging before any URL work so parse failures are traced.
    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("urledit warning: {:#}", err);
    }

    match cli.command.run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("urledit error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
