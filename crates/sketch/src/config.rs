//! Configuration types for Sketch rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from any
//! serde format. Missing fields fall back to the document defaults.
//!
//! # Example
//!
//! ```
//! # use sketch::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.render().indent_step(), 2);
//! assert_eq!(config.render().indent(), 2);
//! ```

use serde::Deserialize;

use sketch_core::document::{DEFAULT_INDENT, DEFAULT_INDENT_STEP};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render configuration.
    pub fn new(render: RenderConfig) -> Self {
        Self { render }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Indentation used when writing a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    /// Spaces added per nesting level.
    #[serde(default = "default_indent_step")]
    indent_step: usize,

    /// Spaces before each top-level primitive.
    #[serde(default = "default_indent")]
    indent: usize,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    ///
    /// # Arguments
    ///
    /// * `indent_step` - Spaces added per nesting level.
    /// * `indent` - Spaces before each top-level primitive.
    pub fn new(indent_step: usize, indent: usize) -> Self {
        Self {
            indent_step,
            indent,
        }
    }

    pub fn indent_step(&self) -> usize {
        self.indent_step
    }

    pub fn indent(&self) -> usize {
        self.indent
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_STEP, DEFAULT_INDENT)
    }
}

fn default_indent_step() -> usize {
    DEFAULT_INDENT_STEP
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}
