use std::io;

use crate::{geometry::Point, object::Object, render::RenderContext};

/// The `<polyline>` element: an open path through an ordered list of points.
///
/// Points keep their insertion order and may repeat; a closed outline simply
/// ends with its first point.
///
/// # Examples
///
/// ```
/// # use sketch_core::{geometry::Point, object::Polyline};
/// let line = Polyline::new()
///     .add_point(Point::new(0.0, 0.0))
///     .add_point(Point::new(1.0, 2.0));
/// assert_eq!(line.points().len(), 2);
///
/// let collected: Polyline = [Point::new(0.0, 0.0), Point::new(1.0, 2.0)].into_iter().collect();
/// assert_eq!(collected, line);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Creates a polyline with no points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex to the end of the line.
    pub fn add_point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for Polyline {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl Object for Polyline {
    fn render_object(&self, ctx: &mut RenderContext<'_>) -> io::Result<()> {
        let out = ctx.out();
        write!(out, r#"<polyline points=""#)?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            write!(out, "{},{}", point.x(), point.y())?;
        }
        write!(out, r#"" />"#)
    }
}
