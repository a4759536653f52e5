//! Error types for pipeline operations.
//!
//! This module provides the main error type [`PipelineError`] together with
//! the [`ExitCode`] contract each failure maps onto.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Process exit status reported by the pipeline.
///
/// The numeric values are part of the command-line contract and must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitCode {
    /// The diagram was rendered and placed at its destination.
    Success,
    /// An external tool is missing, the input was not supplied, or the
    /// arguments could not be parsed.
    MissingDeps,
    /// The input file does not exist or the model compiler rejected it.
    ValidationFailed,
    /// No image artifact was produced.
    SvgGenerationFailed,
}

impl ExitCode {
    /// Returns the numeric status passed to the operating system.
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::MissingDeps => 1,
            Self::ValidationFailed => 2,
            Self::SvgGenerationFailed => 3,
        }
    }
}

/// One of the two external collaborators the pipeline depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// The model compiler (`umple`).
    ModelCompiler,
    /// The graph renderer (`dot` from Graphviz).
    GraphRenderer,
}

impl Tool {
    /// Remediation hint shown when the tool cannot be found.
    pub fn install_hint(self) -> &'static str {
        match self {
            Self::ModelCompiler => {
                "Install from: https://cruise.umple.org/umpleonline/download_umple.shtml"
            }
            Self::GraphRenderer => {
                "Install via: brew install graphviz (or your platform's package manager)"
            }
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelCompiler => write!(f, "umple CLI"),
            Self::GraphRenderer => write!(f, "Graphviz (dot)"),
        }
    }
}

/// The main error type for pipeline runs.
///
/// Every variant is terminal: the pipeline never retries or recovers.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("--input is required")]
    MissingInput,

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("{tool} not found (looked for `{program}`)")]
    MissingDependency { tool: Tool, program: String },

    #[error("Umple generation failed:\n{output}")]
    GenerationFailed { output: String },

    #[error("SVG file was not generated (expected {})", expected.display())]
    ArtifactMissing { expected: PathBuf },

    #[error("No default output directory could be determined; pass --output")]
    NoOutputDirectory,

    #[error("Failed to write output {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    /// Returns the exit code this failure terminates the process with.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::MissingInput
            | Self::MissingDependency { .. }
            | Self::NoOutputDirectory
            | Self::Output { .. } => ExitCode::MissingDeps,
            Self::InputNotFound(_) | Self::GenerationFailed { .. } => ExitCode::ValidationFailed,
            Self::ArtifactMissing { .. } => ExitCode::SvgGenerationFailed,
        }
    }

    pub(crate) fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }
}
