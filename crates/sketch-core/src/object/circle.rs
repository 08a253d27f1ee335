use std::io;

use crate::{geometry::Point, object::Object, render::RenderContext};

/// The `<circle>` element.
///
/// # Examples
///
/// ```
/// # use sketch_core::{geometry::Point, object::Circle};
/// let circle = Circle::new()
///     .with_center(Point::new(30.0, 20.0))
///     .with_radius(10.0);
/// assert_eq!(circle.radius(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Creates a unit circle at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the center (`cx`, `cy` attributes).
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Sets the radius (`r` attribute).
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            center: Point::default(),
            radius: 1.0,
        }
    }
}

impl Object for Circle {
    fn render_object(&self, ctx: &mut RenderContext<'_>) -> io::Result<()> {
        write!(
            ctx.out(),
            r#"<circle cx="{}" cy="{}" r="{}" />"#,
            self.center.x(),
            self.center.y(),
            self.radius
        )
    }
}
