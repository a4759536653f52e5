//! Top-level CLI error type.

use std::path::PathBuf;

use thiserror::Error;

use statediagram::{ExitCode, PipelineError};

use crate::{args::ArgumentError, config::ConfigError};

/// Every way a CLI invocation can fail.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Arguments(#[from] ArgumentError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// The run succeeded but its report could not be rendered.
    #[error("Failed to render report; the image was written to {}", written.display())]
    Report {
        written: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CliError {
    /// Exit code for this failure. Anything that is not a pipeline failure
    /// shares the code used for missing input.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Pipeline(err) => err.exit_code(),
            Self::Arguments(_) | Self::Config(_) | Self::Report { .. } => ExitCode::MissingDeps,
        }
    }

    /// Whether usage text should follow the diagnostic.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            Self::Arguments(_) | Self::Pipeline(PipelineError::MissingInput)
        )
    }
}
