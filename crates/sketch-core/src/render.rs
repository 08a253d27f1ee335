//! Indentation-aware output state for a single render pass.
//!
//! A [`RenderContext`] pairs the output sink with the current indentation.
//! Nested output asks for an [`indented`](RenderContext::indented) child
//! context; the parent keeps its own indentation unchanged.
//!
//! # Example
//!
//! ```
//! # use sketch_core::render::RenderContext;
//! let mut buf = Vec::new();
//! let mut ctx = RenderContext::with_indent(&mut buf, 2, 0);
//! {
//!     let mut child = ctx.indented();
//!     child.render_indent().unwrap();
//! }
//! assert_eq!(ctx.indent(), 0);
//! assert_eq!(buf, b"  ");
//! ```

use std::{fmt, io};

/// Output sink plus indentation for rendering SVG elements.
pub struct RenderContext<'a> {
    out: &'a mut dyn io::Write,
    indent_step: usize,
    indent: usize,
}

impl<'a> RenderContext<'a> {
    /// Creates a context with no indentation and a zero indent step.
    pub fn new(out: &'a mut dyn io::Write) -> Self {
        Self::with_indent(out, 0, 0)
    }

    /// Creates a context with an explicit indent step and starting indent.
    ///
    /// # Arguments
    ///
    /// * `out` - Sink receiving the rendered markup.
    /// * `indent_step` - Spaces added per nesting level.
    /// * `indent` - Spaces written before elements at this level.
    pub fn with_indent(out: &'a mut dyn io::Write, indent_step: usize, indent: usize) -> Self {
        Self {
            out,
            indent_step,
            indent,
        }
    }

    /// Returns a child context one nesting level deeper.
    ///
    /// The child writes to the same sink; `self` keeps its indentation.
    pub fn indented(&mut self) -> RenderContext<'_> {
        RenderContext {
            out: &mut *self.out,
            indent_step: self.indent_step,
            indent: self.indent + self.indent_step,
        }
    }

    /// Writes the current indentation as spaces.
    pub fn render_indent(&mut self) -> io::Result<()> {
        write!(self.out, "{:width$}", "", width = self.indent)
    }

    /// Returns the sink for writing element bodies.
    pub fn out(&mut self) -> &mut dyn io::Write {
        &mut *self.out
    }

    /// Number of spaces written by [`render_indent`](Self::render_indent).
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Number of spaces added by [`indented`](Self::indented).
    pub fn indent_step(&self) -> usize {
        self.indent_step
    }
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("indent_step", &self.indent_step)
            .field("indent", &self.indent)
            .finish()
    }
}
