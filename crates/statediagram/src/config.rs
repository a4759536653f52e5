//! Configuration types for the state diagram pipeline.
//!
//! This module provides configuration structures that select the external
//! tools and the default output location. All types implement
//! [`serde::Deserialize`] so they can be loaded from TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining tool and output settings.
//! - [`ToolsConfig`] - Program names (or paths) of the model compiler and graph renderer.
//! - [`OutputConfig`] - Overrides the directory used when no output path is given.
//!
//! # Example
//!
//! ```
//! # use statediagram::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.tools().compiler(), "umple");
//! assert_eq!(config.tools().renderer(), "dot");
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_COMPILER: &str = "umple";
const DEFAULT_RENDERER: &str = "dot";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// External tool section.
    #[serde(default)]
    tools: ToolsConfig,

    /// Output placement section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(tools: ToolsConfig, output: OutputConfig) -> Self {
        Self { tools, output }
    }

    /// Returns the tool configuration.
    pub fn tools(&self) -> &ToolsConfig {
        &self.tools
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Names of the external programs invoked by the pipeline.
///
/// A value containing a path separator is treated as a path to the
/// executable rather than a name to look up on `PATH`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_compiler")]
    compiler: String,

    #[serde(default = "default_renderer")]
    renderer: String,
}

impl ToolsConfig {
    /// Creates a new [`ToolsConfig`].
    ///
    /// # Arguments
    ///
    /// * `compiler` - Model compiler program name or path.
    /// * `renderer` - Graph renderer program name or path.
    pub fn new(compiler: impl Into<String>, renderer: impl Into<String>) -> Self {
        Self {
            compiler: compiler.into(),
            renderer: renderer.into(),
        }
    }

    /// Returns the model compiler program.
    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    /// Returns the graph renderer program.
    pub fn renderer(&self) -> &str {
        &self.renderer
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COMPILER, DEFAULT_RENDERER)
    }
}

fn default_compiler() -> String {
    DEFAULT_COMPILER.to_string()
}

fn default_renderer() -> String {
    DEFAULT_RENDERER.to_string()
}

/// Output placement configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory for timestamped output files. `None` means `~/downloads`.
    #[serde(default)]
    directory: Option<PathBuf>,
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`] with an explicit default directory.
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }

    /// Returns the configured default directory, if any.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}
