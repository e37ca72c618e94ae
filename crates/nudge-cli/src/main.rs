//! Entry point of the `nudge` binary.

use std::process::ExitCode;

use clap::Parser;
use nudge_cli::{execute, logging, Args};
use tracing::error;

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let args = Args::parse();
    if let Err(err) = execute(&args) {
        error!(error = %err, code = err.code(), "nudge failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
