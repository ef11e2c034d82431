//! Ripple CLI entry point: argument parsing, logging, command dispatch.

use std::process::ExitCode;

use clap::Parser;
use ripple_cli::{cli, commands, logger};
use ripple_core::errors::RippleErrorCode;

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    let ctx = commands::Context::from_cli(&args);

    let result = match args.command {
        cli::Command::Analyze(a) => commands::analyze_execute(a, &ctx),
        cli::Command::Combine(a) => commands::combine_execute(a, &ctx),
        cli::Command::Check(a) => commands::check_execute(a, &ctx),
    };

    if let Err(err) = &result {
        eprintln!("error: {}", err.coded_string());
    }
    commands::exit_code(&result)
}
