//! Error adapter for converting [`CliError`] to miette diagnostics.
//!
//! This module provides the bridge between the CLI's error types and
//! miette's diagnostic formatting, attaching a stable code and, where one
//! exists, a remediation hint.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler};

use statediagram::PipelineError;

use crate::error::CliError;

/// Adapter that renders a [`CliError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Arguments(_) => "statediagram::arguments",
            CliError::Config(_) => "statediagram::config",
            CliError::Report { .. } => "statediagram::report",
            CliError::Pipeline(err) => match err {
                PipelineError::MissingInput => "statediagram::missing_input",
                PipelineError::InputNotFound(_) => "statediagram::input_not_found",
                PipelineError::MissingDependency { .. } => "statediagram::missing_dependency",
                PipelineError::GenerationFailed { .. } => "statediagram::generation_failed",
                PipelineError::ArtifactMissing { .. } => "statediagram::artifact_missing",
                PipelineError::NoOutputDirectory | PipelineError::Output { .. } => {
                    "statediagram::output"
                }
            },
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CliError::Arguments(_) => "Run with --help for usage",
            CliError::Pipeline(PipelineError::MissingInput) => "Pass the model with --input <path>",
            CliError::Pipeline(PipelineError::MissingDependency { tool, .. }) => {
                tool.install_hint()
            }
            CliError::Pipeline(PipelineError::ArtifactMissing { .. }) => {
                "Check that the model defines at least one state machine"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// Render `err` as a miette report.
pub fn render(err: &CliError, handler: &GraphicalReportHandler) -> String {
    let mut writer = String::new();
    handler
        .render_report(&mut writer, &ErrorAdapter(err))
        .expect("Writing to String buffer is infallible");
    writer
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use miette::GraphicalTheme;
    use statediagram::Tool;

    use super::*;
    use crate::args::ArgumentError;

    fn plain() -> GraphicalReportHandler {
        GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
    }

    fn code_of(err: &CliError) -> String {
        ErrorAdapter(err).code().unwrap().to_string()
    }

    #[test]
    fn test_missing_dependency_has_install_hint() {
        let err = CliError::from(PipelineError::MissingDependency {
            tool: Tool::ModelCompiler,
            program: "umple".to_string(),
        });

        assert_eq!(code_of(&err), "statediagram::missing_dependency");
        let help = ErrorAdapter(&err).help().unwrap().to_string();
        assert!(help.contains("cruise.umple.org"));
    }

    #[test]
    fn test_generation_output_is_rendered() {
        let err = CliError::from(PipelineError::GenerationFailed {
            output: "syntax error".to_string(),
        });

        let rendered = render(&err, &plain());
        assert!(rendered.contains("syntax error"), "{rendered}");
        assert!(rendered.contains("statediagram::generation_failed"), "{rendered}");
    }

    #[test]
    fn test_codes() {
        let cases = [
            (
                CliError::from(ArgumentError::UnknownOption {
                    option: "--x".to_string(),
                }),
                "statediagram::arguments",
            ),
            (
                CliError::from(PipelineError::InputNotFound(PathBuf::from("m.ump"))),
                "statediagram::input_not_found",
            ),
            (
                CliError::from(PipelineError::ArtifactMissing {
                    expected: PathBuf::from("m.svg"),
                }),
                "statediagram::artifact_missing",
            ),
            (
                CliError::from(PipelineError::NoOutputDirectory),
                "statediagram::output",
            ),
        ];

        for (err, expected) in &cases {
            assert_eq!(code_of(err), *expected);
        }
    }

    #[test]
    fn test_no_help_for_input_not_found() {
        let err = CliError::from(PipelineError::InputNotFound(PathBuf::from("m.ump")));
        assert!(ErrorAdapter(&err).help().is_none());
    }
}
