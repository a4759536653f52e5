//! statediagram CLI entry point.

use std::{env, process, str::FromStr};

use log::{LevelFilter, debug, info};
use miette::GraphicalReportHandler;

use statediagram::ExitCode;
use statediagram_cli::{Args, CliError, error_adapter, usage};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = match Args::try_parse_args(env::args_os()) {
        Ok(args) => args,
        Err(err) => fail(&CliError::from(err)),
    };

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting statediagram");
    debug!(args:?; "Parsed arguments");

    let request = args.to_request();
    if request.help() {
        println!("{}", usage());
        process::exit(ExitCode::Success.code());
    }

    let report = match statediagram_cli::run(&args) {
        Ok(report) => report,
        Err(err) => fail(&err),
    };

    match statediagram_cli::render_report(&report, request.json()) {
        Ok(text) => println!("{text}"),
        Err(err) => fail(&err),
    }

    info!("Completed successfully");
}

/// Print the diagnostic (and usage where it helps) to stderr, then exit
/// with the failure's code.
fn fail(err: &CliError) -> ! {
    debug!(error = err.to_string(); "Run failed");

    let reporter = GraphicalReportHandler::new();
    eprintln!("{}", error_adapter::render(err, &reporter));
    if err.shows_usage() {
        eprintln!("{}", usage());
    }

    process::exit(err.exit_code().code());
}
