//! Presence checks for the external tools.

use log::debug;

use crate::{config::ToolsConfig, error::Tool, process::ProcessRunner};

/// Which external tools were reachable when probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyStatus {
    pub model_compiler_available: bool,
    pub graph_renderer_available: bool,
}

impl DependencyStatus {
    /// Returns the first unavailable tool, model compiler first.
    pub fn first_missing(&self) -> Option<Tool> {
        if !self.model_compiler_available {
            Some(Tool::ModelCompiler)
        } else if !self.graph_renderer_available {
            Some(Tool::GraphRenderer)
        } else {
            None
        }
    }
}

/// Looks up both configured tools.
///
/// Absence is reported as `false`, never as an error. Nothing is cached;
/// every call queries the runner again.
pub fn probe(runner: &impl ProcessRunner, tools: &ToolsConfig) -> DependencyStatus {
    let compiler = runner.locate(tools.compiler());
    let renderer = runner.locate(tools.renderer());
    debug!(compiler:?, renderer:?; "Probed external tools");

    DependencyStatus {
        model_compiler_available: compiler.is_some(),
        graph_renderer_available: renderer.is_some(),
    }
}
