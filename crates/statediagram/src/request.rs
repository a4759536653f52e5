//! The typed request a single pipeline run is driven by.

use std::path::{Path, PathBuf};

/// A fully parsed invocation.
///
/// Built once from the command line and never mutated afterwards. Paths are
/// kept exactly as given; resolution happens inside the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    suboptions: Vec<String>,
    json: bool,
    help: bool,
}

impl Request {
    /// Creates a request for the given input with every other field at its default.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: Some(input.into()),
            ..Self::default()
        }
    }

    /// Sets or clears the input path.
    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        self.input = input;
        self
    }

    /// Sets or clears the explicit output path.
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Sets the suboptions forwarded to the model compiler, in order.
    pub fn with_suboptions(mut self, suboptions: Vec<String>) -> Self {
        self.suboptions = suboptions;
        self
    }

    /// Selects the structured JSON report.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Marks the request as a help request.
    pub fn with_help(mut self, help: bool) -> Self {
        self.help = help;
        self
    }

    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Suboptions in command-line order, duplicates included.
    pub fn suboptions(&self) -> &[String] {
        &self.suboptions
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn help(&self) -> bool {
        self.help
    }
}
