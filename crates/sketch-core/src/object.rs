//! SVG primitives and the shared rendering template.
//!
//! Every primitive implements [`Object`], which only knows how to write its
//! own tag. The surrounding indentation and line break are written by
//! [`render`], so all primitives share one layout.
//!
//! Numeric attributes are written with the `Display` form of `f64`, which is
//! the shortest text that parses back to the same value: `100`, `1.5`,
//! `52.35114100916989`. No rounding to a fixed number of significant digits
//! is applied, so a coordinate that a 6-digit formatter would print as
//! `52.3511` appears here with full precision.

use std::{fmt, io};

use crate::render::RenderContext;

mod circle;
mod polyline;
mod text;

pub use circle::Circle;
pub use polyline::Polyline;
pub use text::Text;

/// A directly renderable SVG element.
pub trait Object: fmt::Debug {
    /// Writes the element's tag, attributes and content without any
    /// leading indentation or trailing line break.
    fn render_object(&self, ctx: &mut RenderContext<'_>) -> io::Result<()>;
}

/// Renders `object` as a single indented line.
///
/// Writes the context's indentation, the object's tag and a newline.
///
/// # Errors
///
/// Returns any error produced by the underlying sink.
pub fn render(object: &dyn Object, ctx: &mut RenderContext<'_>) -> io::Result<()> {
    ctx.render_indent()?;
    object.render_object(ctx)?;
    writeln!(ctx.out())
}

#[cfg(test)]
pub(crate) fn render_line(object: &dyn Object) -> String {
    let mut buf = Vec::new();
    let mut ctx = RenderContext::new(&mut buf);
    object
        .render_object(&mut ctx)
        .expect("writing to Vec is infallible");
    String::from_utf8(buf).expect("rendered markup is UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_render_wraps_tag_with_indent_and_newline() {
        let circle = Circle::new()
            .with_center(Point::new(1.0, 2.0))
            .with_radius(3.0);

        let mut buf = Vec::new();
        let mut ctx = RenderContext::with_indent(&mut buf, 2, 4);
        render(&circle, &mut ctx).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "    <circle cx=\"1\" cy=\"2\" r=\"3\" />\n"
        );
    }

    #[test]
    fn test_render_in_indented_context() {
        let polyline = Polyline::new();

        let mut buf = Vec::new();
        let mut ctx = RenderContext::with_indent(&mut buf, 2, 2);
        render(&polyline, &mut ctx.indented()).unwrap();
        render(&polyline, &mut ctx).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "    <polyline points=\"\" />\n  <polyline points=\"\" />\n"
        );
    }
}
