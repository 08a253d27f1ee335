use std::io;

use crate::{geometry::Point, object::Object, render::RenderContext};

/// The `<text>` element.
///
/// Font family and weight are only emitted when set. The text content is
/// written verbatim: markup characters are not escaped, so callers must pass
/// content that is already valid inside an SVG element.
///
/// # Examples
///
/// ```
/// # use sketch_core::{geometry::Point, object::Text};
/// let label = Text::new()
///     .with_position(Point::new(35.0, 20.0))
///     .with_font_size(12)
///     .with_font_family("Verdana")
///     .with_data("Hello");
/// assert_eq!(label.data(), "Hello");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    position: Point,
    offset: Point,
    font_size: u32,
    font_family: String,
    font_weight: String,
    data: String,
}

impl Text {
    /// Creates an empty text element with font size 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the anchor point (`x`, `y` attributes).
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Sets the offset from the anchor point (`dx`, `dy` attributes).
    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the `font-size` attribute.
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    /// Sets the `font-family` attribute; an empty name omits it.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Sets the `font-weight` attribute; an empty weight omits it.
    pub fn with_font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = weight.into();
        self
    }

    /// Sets the element content.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_weight(&self) -> &str {
        &self.font_weight
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

impl Default for Text {
    fn default() -> Self {
        Self {
            position: Point::default(),
            offset: Point::default(),
            font_size: 1,
            font_family: String::new(),
            font_weight: String::new(),
            data: String::new(),
        }
    }
}

impl Object for Text {
    fn render_object(&self, ctx: &mut RenderContext<'_>) -> io::Result<()> {
        let out = ctx.out();
        write!(
            out,
            r#"<text x="{}" y="{}" dx="{}" dy="{}" font-size="{}""#,
            self.position.x(),
            self.position.y(),
            self.offset.x(),
            self.offset.y(),
            self.font_size
        )?;
        // Trailing space after the family value is part of the output format.
        if !self.font_family.is_empty() {
            write!(out, r#" font-family="{}" "#, self.font_family)?;
        }
        if !self.font_weight.is_empty() {
            write!(out, r#"font-weight="{}""#, self.font_weight)?;
        }
        write!(out, ">{}</text>", self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::render_line;

    #[test]
    fn test_default_text() {
        assert_eq!(
            render_line(&Text::new()),
            r#"<text x="0" y="0" dx="0" dy="0" font-size="1"></text>"#
        );
    }

    #[test]
    fn test_without_family_and_weight() {
        let text = Text::new()
            .with_position(Point::new(35.0, 20.0))
            .with_offset(Point::new(0.0, 6.0))
            .with_font_size(12)
            .with_data("Hello, World!");
        assert_eq!(
            render_line(&text),
            r#"<text x="35" y="20" dx="0" dy="6" font-size="12">Hello, World!</text>"#
        );
    }

    #[test]
    fn test_family_keeps_trailing_space() {
        let text = Text::new().with_font_family("Verdana").with_data("A");
        assert_eq!(
            render_line(&text),
            r#"<text x="0" y="0" dx="0" dy="0" font-size="1" font-family="Verdana" >A</text>"#
        );
    }

    #[test]
    fn test_family_and_weight() {
        let text = Text::new()
            .with_font_size(14)
            .with_font_family("Verdana")
            .with_font_weight("bold");
        assert_eq!(
            render_line(&text),
            r#"<text x="0" y="0" dx="0" dy="0" font-size="14" font-family="Verdana" font-weight="bold"></text>"#
        );
    }

    #[test]
    fn test_weight_without_family_has_no_separator() {
        let text = Text::new().with_font_weight("bold");
        assert_eq!(
            render_line(&text),
            r#"<text x="0" y="0" dx="0" dy="0" font-size="1"font-weight="bold"></text>"#
        );
    }

    #[test]
    fn test_data_is_not_escaped() {
        let text = Text::new().with_data("a < b & \"c\"");
        assert_eq!(
            render_line(&text),
            r#"<text x="0" y="0" dx="0" dy="0" font-size="1">a < b & "c"</text>"#
        );
    }

    #[test]
    fn test_accessors() {
        let text = Text::new()
            .with_position(Point::new(1.0, 2.0))
            .with_offset(Point::new(3.0, 4.0))
            .with_font_size(9)
            .with_font_family("serif")
            .with_font_weight("300")
            .with_data("x");
        assert_eq!(text.position(), Point::new(1.0, 2.0));
        assert_eq!(text.offset(), Point::new(3.0, 4.0));
        assert_eq!(text.font_size(), 9);
        assert_eq!(text.font_family(), "serif");
        assert_eq!(text.font_weight(), "300");
        assert_eq!(text.data(), "x");
    }
}
