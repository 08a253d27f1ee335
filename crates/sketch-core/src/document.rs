//! The SVG document container.
//!
//! A [`Document`] owns every primitive added to it and renders them inside a
//! fixed SVG envelope:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8" ?>
//! <svg xmlns="http://www.w3.org/2000/svg" version="1.1">
//!   <circle cx="20" cy="20" r="5" />
//! </svg>
//! ```
//!
//! The closing `</svg>` tag is not followed by a line break.

use std::{fmt, io, slice};

use log::debug;

use crate::{
    container::ObjectContainer,
    object::{self, Object},
    render::RenderContext,
};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;
const SVG_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#;
const SVG_CLOSE: &str = "</svg>";

/// Spaces added per nesting level when rendering a document.
pub const DEFAULT_INDENT_STEP: usize = 2;

/// Indentation of the primitives directly below `<svg>`.
pub const DEFAULT_INDENT: usize = 2;

/// An append-only list of primitives rendered as a complete SVG file.
///
/// Rendering never modifies the document, so it can be rendered any number of
/// times with identical output.
#[derive(Default)]
pub struct Document {
    objects: Vec<Box<dyn Object>>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Boxes `object` and appends it to the document.
    pub fn add<T: Object + 'static>(&mut self, object: T) {
        self.add_boxed(Box::new(object));
    }

    /// Returns the number of primitives in the document.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if no primitive has been added.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterates over the primitives in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Box<dyn Object>> {
        self.objects.iter()
    }

    /// Writes the document with the default indentation.
    ///
    /// # Errors
    ///
    /// Returns any error produced by `out`.
    pub fn render(&self, out: &mut dyn io::Write) -> io::Result<()> {
        self.render_with_indent(out, DEFAULT_INDENT_STEP, DEFAULT_INDENT)
    }

    /// Writes the document, indenting each primitive by `indent` spaces.
    ///
    /// # Arguments
    ///
    /// * `out` - Sink receiving the markup.
    /// * `indent_step` - Spaces per nesting level below the primitives.
    /// * `indent` - Spaces before each top-level primitive.
    ///
    /// # Errors
    ///
    /// Returns any error produced by `out`.
    pub fn render_with_indent(
        &self,
        out: &mut dyn io::Write,
        indent_step: usize,
        indent: usize,
    ) -> io::Result<()> {
        debug!(
            objects = self.objects.len(),
            indent_step = indent_step,
            indent = indent;
            "Rendering document"
        );

        writeln!(out, "{XML_DECLARATION}")?;
        writeln!(out, "{SVG_OPEN}")?;
        for obj in &self.objects {
            let mut ctx = RenderContext::with_indent(&mut *out, indent_step, indent);
            object::render(obj.as_ref(), &mut ctx)?;
        }
        write!(out, "{SVG_CLOSE}")
    }

    /// Renders the document into a `String` with the default indentation.
    ///
    /// # Errors
    ///
    /// Rendering into memory only fails if a primitive reports an error.
    pub fn render_to_string(&self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.render(&mut buf)?;
        String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

impl ObjectContainer for Document {
    fn add_boxed(&mut self, object: Box<dyn Object>) {
        self.objects.push(object);
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.objects).finish()
    }
}
