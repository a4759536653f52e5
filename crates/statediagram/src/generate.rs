//! Invocation of the model compiler.

use std::{ffi::OsString, path::Path};

use log::{debug, warn};

use crate::process::ProcessRunner;

/// Generator the model compiler is asked to run.
pub const STATE_DIAGRAM_GENERATOR: &str = "GvStateDiagram";

/// Outcome of a model compiler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Whether the compiler exited with status zero.
    pub succeeded: bool,
    /// Standard output then standard error, trimmed.
    pub combined_output: String,
}

/// Builds the compiler argument list: the input, the generator selection,
/// then one `-s <suboption>` pair per suboption in the given order.
pub fn compiler_args(input: &Path, suboptions: &[String]) -> Vec<OsString> {
    let mut args = Vec::with_capacity(3 + suboptions.len() * 2);
    args.push(input.as_os_str().to_os_string());
    args.push("-g".into());
    args.push(STATE_DIAGRAM_GENERATOR.into());
    for suboption in suboptions {
        args.push("-s".into());
        args.push(suboption.into());
    }
    args
}

/// Runs the model compiler on `input`.
///
/// Success is decided by the exit status alone; the captured text is kept
/// for diagnostics and never inspected. A launch failure counts as a failed
/// run with the launch error as its output.
pub fn run_generation(
    runner: &impl ProcessRunner,
    compiler: &str,
    input: &Path,
    suboptions: &[String],
) -> GenerationResult {
    let args = compiler_args(input, suboptions);
    debug!(compiler, input:? = input; "Running model compiler");

    match runner.run(compiler, &args) {
        Ok(output) => GenerationResult {
            succeeded: output.success,
            combined_output: output.combined(),
        },
        Err(err) => {
            warn!(compiler, err:err; "Failed to launch model compiler");
            GenerationResult {
                succeeded: false,
                combined_output: format!("failed to launch {compiler}: {err}"),
            }
        }
    }
}
