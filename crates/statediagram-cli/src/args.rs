//! Command-line argument definitions for the statediagram CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Parsing never exits the process: clap failures are mapped
//! onto [`ArgumentError`] so the caller controls the exit code.
//!
//! Tokens are scanned before clap sees them. Flags are matched exactly, so
//! `--input=m.ump`, a lone `-` and `--` are all unknown options, and a
//! missing value is reported against the flag as typed.

use std::{ffi::OsString, path::PathBuf};

use clap::{
    ArgAction, CommandFactory, Parser,
    builder::NonEmptyStringValueParser,
    error::{ContextKind, ContextValue, ErrorKind},
};
use thiserror::Error;

use statediagram::Request;

/// Flags that consume the following token as their value.
const VALUE_FLAGS: &[&str] = &[
    "-i",
    "--input",
    "-o",
    "--output",
    "-s",
    "--suboption",
    "-c",
    "--config",
    "--log-level",
];

/// Flags that take no value.
const SWITCHES: &[&str] = &["--json", "-h", "--help"];

const AFTER_HELP: &str = "\
Examples:
  statediagram --input model.ump
  statediagram --input model.ump --output diagram.svg
  statediagram --input model.ump -s hideactions -s hideguards

Exit Codes:
  0  Success
  1  Missing dependencies (umple or dot) or missing --input
  2  Input not found or Umple compilation failed
  3  SVG generation failed";

/// Command-line arguments for the state diagram tool
#[derive(Parser, Debug)]
#[command(
    name = "statediagram",
    author,
    about,
    long_about = None,
    disable_help_flag = true,
    args_override_self = true,
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Input .ump file (required)
    #[arg(
        short,
        long,
        value_name = "PATH",
        allow_hyphen_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub input: Option<String>,

    /// Output SVG path (default: ~/downloads/state_machine_<timestamp>.svg)
    #[arg(
        short,
        long,
        value_name = "PATH",
        allow_hyphen_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub output: Option<String>,

    /// GvStateDiagram suboption (repeatable: hideactions, hideguards,
    /// showtransitionlabels, showguardlabels)
    #[arg(
        short = 's',
        long = "suboption",
        value_name = "OPT",
        action = ArgAction::Append,
        allow_hyphen_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub suboptions: Vec<String>,

    /// JSON output
    #[arg(long)]
    pub json: bool,

    /// Show help
    #[arg(short, long)]
    pub help: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Input file given without --input; only the first one is used
    #[arg(value_name = "INPUT", hide = true)]
    pub inputs: Vec<String>,
}

impl Args {
    /// Parse `tokens` (program name first) without exiting on failure.
    ///
    /// # Errors
    ///
    /// Returns an [`ArgumentError`] describing the first rejected token.
    pub fn try_parse_args<I, T>(tokens: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let tokens: Vec<OsString> = tokens.into_iter().map(Into::into).collect();
        check_tokens(tokens.iter().skip(1))?;
        Self::try_parse_from(tokens).map_err(ArgumentError::from)
    }

    /// Builds the pipeline request.
    ///
    /// `--input` always wins; otherwise the first bare token is the input
    /// and any further bare tokens are ignored.
    pub fn to_request(&self) -> Request {
        let input = self
            .input
            .as_ref()
            .or_else(|| self.inputs.first())
            .map(PathBuf::from);

        Request::default()
            .with_input(input)
            .with_output(self.output.as_ref().map(PathBuf::from))
            .with_suboptions(self.suboptions.clone())
            .with_json(self.json)
            .with_help(self.help)
    }
}

/// Usage text printed for `--help` and after argument errors.
pub fn usage() -> String {
    Args::command().render_help().to_string()
}

/// Rejected command lines.
#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("Missing value for {option}")]
    MissingOptionValue { option: String },

    #[error("Unknown option: {option}")]
    UnknownOption { option: String },

    #[error("{0}")]
    Malformed(String),
}

impl From<clap::Error> for ArgumentError {
    fn from(err: clap::Error) -> Self {
        match (err.kind(), offending_option(&err)) {
            (ErrorKind::UnknownArgument, Some(option)) => Self::UnknownOption { option },
            (ErrorKind::InvalidValue | ErrorKind::ValueValidation, Some(option)) => {
                Self::MissingOptionValue { option }
            }
            _ => Self::Malformed(err.to_string().trim().to_string()),
        }
    }
}

/// Rejects the first token that is neither a known flag, a flag's value nor
/// a bare word, in command-line order.
fn check_tokens<'a>(mut tokens: impl Iterator<Item = &'a OsString>) -> Result<(), ArgumentError> {
    while let Some(token) = tokens.next() {
        let flag = token.to_string_lossy();
        let flag: &str = &flag;
        if VALUE_FLAGS.contains(&flag) {
            if tokens.next().is_none_or(|value| value.is_empty()) {
                return Err(ArgumentError::MissingOptionValue {
                    option: flag.to_string(),
                });
            }
        } else if flag.starts_with('-') && !SWITCHES.contains(&flag) {
            return Err(ArgumentError::UnknownOption {
                option: flag.to_string(),
            });
        }
    }
    Ok(())
}

/// The flag clap rejected, without its value placeholder.
fn offending_option(err: &clap::Error) -> Option<String> {
    match err.get(ContextKind::InvalidArg)? {
        ContextValue::String(arg) => arg.split_whitespace().next().map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn parse(tokens: &[&str]) -> Result<Args, ArgumentError> {
        Args::try_parse_args(std::iter::once("statediagram").chain(tokens.iter().copied()))
    }

    #[test]
    fn test_long_and_short_forms() {
        let long = parse(&["--input", "m.ump", "--output", "o.svg", "--suboption", "hideactions"])
            .unwrap()
            .to_request();
        let short = parse(&["-i", "m.ump", "-o", "o.svg", "-s", "hideactions"])
            .unwrap()
            .to_request();

        assert_eq!(long, short);
        assert_eq!(long.input(), Some(Path::new("m.ump")));
        assert_eq!(long.output(), Some(Path::new("o.svg")));
        assert_eq!(long.suboptions(), ["hideactions"]);
        assert!(!long.json());
        assert!(!long.help());
    }

    #[test]
    fn test_suboptions_keep_order_and_duplicates() {
        let request = parse(&[
            "-s",
            "hideguards",
            "-i",
            "m.ump",
            "--suboption",
            "showtransitionlabels",
            "-s",
            "hideguards",
        ])
        .unwrap()
        .to_request();

        assert_eq!(
            request.suboptions(),
            ["hideguards", "showtransitionlabels", "hideguards"]
        );
    }

    #[test]
    fn test_boolean_flags() {
        let request = parse(&["--json", "-h"]).unwrap().to_request();
        assert!(request.json());
        assert!(request.help());

        assert!(parse(&["--help"]).unwrap().help);
    }

    #[test]
    fn test_missing_value_for_each_flag() {
        for flag in ["-i", "--input", "-o", "--output", "-s", "--suboption"] {
            match parse(&[flag]).unwrap_err() {
                ArgumentError::MissingOptionValue { option } => assert_eq!(option, flag),
                other => panic!("{flag}: expected MissingOptionValue, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_missing_value_names_short_flag() {
        let err = parse(&["-i"]).unwrap_err();
        assert_eq!(err.to_string(), "Missing value for -i");
    }

    #[test]
    fn test_empty_value_is_missing() {
        match parse(&["-o", "out.svg", "--input", ""]).unwrap_err() {
            ArgumentError::MissingOptionValue { option } => assert_eq!(option, "--input"),
            other => panic!("Expected MissingOptionValue, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_option() {
        let err = parse(&["-i", "m.ump", "--verbose"]).unwrap_err();
        match err {
            ArgumentError::UnknownOption { option } => assert_eq!(option, "--verbose"),
            other => panic!("Expected UnknownOption, got {other:?}"),
        }
    }

    #[test]
    fn test_dash_prefixed_bare_tokens_are_unknown() {
        for token in ["-", "--", "--input=m.ump", "-x"] {
            match parse(&[token, "m.ump"]).unwrap_err() {
                ArgumentError::UnknownOption { option } => assert_eq!(option, token),
                other => panic!("{token}: expected UnknownOption, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_first_bad_token_wins() {
        let err = parse(&["--verbose", "-i"]).unwrap_err();
        assert!(matches!(err, ArgumentError::UnknownOption { .. }));

        let args = parse(&["-o", "--bogus"]).unwrap();
        assert_eq!(args.output.as_deref(), Some("--bogus"));
    }

    #[test]
    fn test_value_may_start_with_dash() {
        let request = parse(&["-i", "-model.ump"]).unwrap().to_request();
        assert_eq!(request.input(), Some(Path::new("-model.ump")));
    }

    #[test]
    fn test_first_bare_token_is_input() {
        let request = parse(&["first.ump", "second.ump"]).unwrap().to_request();
        assert_eq!(request.input(), Some(Path::new("first.ump")));
    }

    #[test]
    fn test_explicit_input_beats_bare_token() {
        let before = parse(&["bare.ump", "--input", "flag.ump"]).unwrap().to_request();
        let after = parse(&["--input", "flag.ump", "bare.ump"]).unwrap().to_request();
        assert_eq!(before.input(), Some(Path::new("flag.ump")));
        assert_eq!(after.input(), Some(Path::new("flag.ump")));
    }

    #[test]
    fn test_repeated_input_keeps_last() {
        let request = parse(&["-i", "a.ump", "-i", "b.ump"]).unwrap().to_request();
        assert_eq!(request.input(), Some(Path::new("b.ump")));
    }

    #[test]
    fn test_no_arguments() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.to_request().input(), None);
        assert_eq!(args.log_level, "warn");
        assert!(args.config.is_none());
    }

    #[test]
    fn test_usage_mentions_flags_and_exit_codes() {
        let text = usage();
        for needle in ["--input", "--output", "--suboption", "--json", "--help", "Exit Codes"] {
            assert!(text.contains(needle), "usage is missing {needle}");
        }
    }
}
