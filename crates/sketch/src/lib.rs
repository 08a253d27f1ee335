//! Sketch - compose vector shapes into SVG documents.
//!
//! Shapes implementing [`Drawable`](container::Drawable) are drawn into a
//! [`Document`](document::Document), which renders the collected primitives
//! as an SVG file. The reference shapes live in [`shapes`].

pub mod config;
pub mod shapes;

mod error;

pub use sketch_core::{container, document, geometry, object, render};

pub use error::{ConfigSource, SketchError};

use std::io;

use log::{debug, info};

use config::AppConfig;
use container::{Drawable, draw_picture};
use document::Document;

/// Builder for turning a picture into SVG markup.
///
/// # Examples
///
/// ```
/// use sketch::{
///     SceneBuilder,
///     container::Drawable,
///     geometry::Point,
///     shapes::{Snowman, Star, Triangle},
/// };
///
/// let picture: Vec<Box<dyn Drawable>> = vec![
///     Box::new(Triangle::new(
///         Point::new(100.0, 20.0),
///         Point::new(120.0, 50.0),
///         Point::new(80.0, 40.0),
///     )),
///     Box::new(Star::new(Point::new(50.0, 20.0), 10.0, 4.0, 5)),
///     Box::new(Snowman::new(Point::new(30.0, 20.0), 10.0)),
/// ];
///
/// let builder = SceneBuilder::default();
/// let document = builder.build(&picture);
/// assert_eq!(document.len(), 5);
///
/// let svg = builder.render_svg(&document).expect("Failed to render");
/// assert!(svg.ends_with("</svg>"));
/// ```
#[derive(Debug, Default)]
pub struct SceneBuilder {
    config: AppConfig,
}

impl SceneBuilder {
    /// Create a new scene builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used for rendering.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Draws every shape of `picture` into a new document, in order.
    pub fn build<I>(&self, picture: I) -> Document
    where
        I: IntoIterator,
        I::Item: Drawable,
    {
        let mut document = Document::new();
        draw_picture(picture, &mut document);
        debug!(objects = document.len(); "Picture drawn");
        document
    }

    /// Writes `document` to `out` using the configured indentation.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Io`] if writing to `out` fails.
    pub fn render(&self, document: &Document, out: &mut dyn io::Write) -> Result<(), SketchError> {
        let render = self.config.render();
        info!(
            objects = document.len(),
            indent_step = render.indent_step(),
            indent = render.indent();
            "Rendering SVG"
        );

        document.render_with_indent(out, render.indent_step(), render.indent())?;
        out.flush()?;
        Ok(())
    }

    /// Renders `document` into an SVG string using the configured indentation.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Io`] if a primitive fails to render.
    pub fn render_svg(&self, document: &Document) -> Result<String, SketchError> {
        let mut buf = Vec::new();
        self.render(document, &mut buf)?;
        String::from_utf8(buf)
            .map_err(|err| SketchError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
    }
}
