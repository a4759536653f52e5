//! CLI logic for the statediagram tool.
//!
//! This module wires the command-line arguments and configuration file to
//! the [`statediagram::Pipeline`], using the real process runner and
//! filesystem.

pub mod error_adapter;

mod args;
mod config;
mod error;

pub use args::{ArgumentError, Args, usage};
pub use config::ConfigError;
pub use error::CliError;

use log::{debug, info};

use statediagram::{LocalFilesystem, Pipeline, Report, SystemRunner};

/// Run the statediagram CLI application
///
/// This function loads the configuration, then drives the input through
/// the pipeline: validation, tool probing, model compilation, artifact
/// discovery, fallback conversion and output placement. Printing the
/// report is left to the caller.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - Missing or nonexistent input
/// - Missing external tools
/// - Model compilation failures
/// - A missing image artifact
/// - Output placement errors
pub fn run(args: &Args) -> Result<Report, CliError> {
    let request = args.to_request();
    info!(
        input_path:? = request.input(),
        output_path:? = request.output();
        "Starting run"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let default_output_dir = config::default_output_dir(&app_config);
    debug!(default_output_dir:?; "Resolved default output directory");

    let pipeline = Pipeline::new(app_config, SystemRunner, LocalFilesystem, default_output_dir);
    let report = pipeline.run(&request)?;

    info!(output_path:? = report.output_path(); "Diagram written successfully");

    Ok(report)
}

/// Renders `report` for standard output, plain or as JSON.
///
/// # Errors
///
/// Returns [`CliError::Report`], carrying the already written output path,
/// if the report cannot be serialized.
pub fn render_report(report: &Report, json: bool) -> Result<String, CliError> {
    report.render(json).map_err(|source| CliError::Report {
        written: report.output_path().clone(),
        source,
    })
}
