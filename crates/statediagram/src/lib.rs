//! Statediagram - renders Umple state machines to SVG.
//!
//! The crate orchestrates two external tools: the Umple model compiler,
//! which turns a `.ump` model into a Graphviz graph description and/or an
//! SVG image, and the Graphviz renderer, used as a fallback when only the
//! graph description was produced. The result is copied to an explicit or
//! timestamped destination.
//!
//! Both tools and the filesystem are reached through the [`ProcessRunner`]
//! and [`Filesystem`] traits, so a [`Pipeline`] can run against test doubles.

pub mod artifact;
pub mod config;
pub mod convert;
pub mod fs;
pub mod generate;
pub mod output;
pub mod probe;
pub mod process;

mod error;
mod report;
mod request;

#[cfg(test)]
mod testing;

pub use error::{ExitCode, PipelineError, Tool};
pub use fs::{Filesystem, LocalFilesystem};
pub use output::{Clock, SystemClock};
pub use process::{ProcessOutput, ProcessRunner, SystemRunner};
pub use report::Report;
pub use request::Request;

use std::path::{self, Path, PathBuf};

use log::{debug, info, warn};

use artifact::{ArtifactPaths, ArtifactSet};
use config::AppConfig;

/// Sequences validation, tool probing, generation, artifact discovery,
/// fallback conversion and output placement for one request.
///
/// Every stage either hands its result to the next or ends the run with a
/// [`PipelineError`]. There are no retries.
///
/// # Examples
///
/// ```rust,no_run
/// use statediagram::{LocalFilesystem, Pipeline, Request, SystemRunner, config::AppConfig};
///
/// let pipeline = Pipeline::new(
///     AppConfig::default(),
///     SystemRunner,
///     LocalFilesystem,
///     Some("/home/me/downloads".into()),
/// );
///
/// let request = Request::new("model.ump").with_suboptions(vec!["hideactions".into()]);
/// let report = pipeline.run(&request).expect("pipeline failed");
/// println!("{}", report.output_path().display());
/// ```
pub struct Pipeline<R, F, C = SystemClock> {
    config: AppConfig,
    runner: R,
    fs: F,
    clock: C,
    default_output_dir: Option<PathBuf>,
}

impl<R: ProcessRunner, F: Filesystem> Pipeline<R, F> {
    /// Create a new pipeline.
    ///
    /// # Arguments
    ///
    /// * `config` - Tool selection
    /// * `runner` - Launches the external tools
    /// * `fs` - Filesystem the tools and the pipeline share
    /// * `default_output_dir` - Directory for timestamped outputs when the
    ///   request has no explicit output path
    pub fn new(config: AppConfig, runner: R, fs: F, default_output_dir: Option<PathBuf>) -> Self {
        Self {
            config,
            runner,
            fs,
            clock: SystemClock,
            default_output_dir,
        }
    }
}

impl<R, F, C> Pipeline<R, F, C> {
    /// Replace the clock used for default output names.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Pipeline<R, F, C2> {
        Pipeline {
            config: self.config,
            runner: self.runner,
            fs: self.fs,
            clock,
            default_output_dir: self.default_output_dir,
        }
    }
}

impl<R: ProcessRunner, F: Filesystem, C: Clock> Pipeline<R, F, C> {
    /// Run the pipeline for `request`.
    ///
    /// Help handling and report printing belong to the caller; this covers
    /// everything between a parsed request and a placed image.
    ///
    /// # Errors
    ///
    /// Returns the [`PipelineError`] of the first stage that fails. No
    /// external process is launched before the input and both tools have
    /// been validated.
    pub fn run(&self, request: &Request) -> Result<Report, PipelineError> {
        let input = self.validate_input(request.input())?;
        info!(input:? = input; "Processing model");

        self.ensure_dependencies()?;
        self.generate(&input, request.suboptions())?;

        let artifacts = self.collect_artifacts(&input);
        let image = artifacts
            .image
            .clone()
            .ok_or_else(|| PipelineError::ArtifactMissing {
                expected: ArtifactPaths::for_input(&input).image,
            })?;

        let destination = output::resolve_destination(
            request.output(),
            self.default_output_dir.as_deref(),
            &self.clock,
        )?;
        output::place(&self.fs, &image, &destination)?;

        Ok(Report::new(
            input,
            destination,
            artifacts.graph_description,
            image,
        ))
    }

    fn validate_input(&self, input: Option<&Path>) -> Result<PathBuf, PipelineError> {
        let input = input.ok_or(PipelineError::MissingInput)?;
        let resolved = path::absolute(input)
            .map_err(|_| PipelineError::InputNotFound(input.to_path_buf()))?;

        if !self.fs.exists(&resolved) {
            return Err(PipelineError::InputNotFound(resolved));
        }
        Ok(resolved)
    }

    fn ensure_dependencies(&self) -> Result<(), PipelineError> {
        let tools = self.config.tools();
        let status = probe::probe(&self.runner, tools);

        match status.first_missing() {
            Some(tool) => {
                let program = match tool {
                    Tool::ModelCompiler => tools.compiler(),
                    Tool::GraphRenderer => tools.renderer(),
                };
                Err(PipelineError::MissingDependency {
                    tool,
                    program: program.to_string(),
                })
            }
            None => Ok(()),
        }
    }

    fn generate(&self, input: &Path, suboptions: &[String]) -> Result<(), PipelineError> {
        let result = generate::run_generation(
            &self.runner,
            self.config.tools().compiler(),
            input,
            suboptions,
        );

        if !result.succeeded {
            return Err(PipelineError::GenerationFailed {
                output: result.combined_output,
            });
        }
        debug!(output = result.combined_output; "Model compiled");
        Ok(())
    }

    fn collect_artifacts(&self, input: &Path) -> ArtifactSet {
        let mut artifacts = artifact::locate_artifacts(&self.fs, input);

        if !artifacts.needs_conversion() {
            return artifacts;
        }

        let converted = artifacts.graph_description.as_deref().and_then(|graph_description| {
            info!(graph_description:?; "No image generated, converting graph description");
            convert::convert(
                &self.runner,
                &self.fs,
                self.config.tools().renderer(),
                graph_description,
            )
        });

        match converted {
            Some(image) => artifacts.image = Some(image),
            None => warn!("Fallback conversion did not produce an image"),
        }
        artifacts
    }
}
