use std::{f64::consts::PI, iter};

use sketch_core::{
    container::{Drawable, ObjectContainer},
    geometry::Point,
    object::Polyline,
};

/// Builds the closed outline of a star with `num_rays` rays.
///
/// The outline alternates between outer and inner vertices, starting with the
/// outer vertex straight above `center`, and ends by repeating that first
/// vertex. A star with `n` rays therefore has `2n + 1` points. Zero rays
/// yields an empty polyline.
///
/// # Examples
///
/// ```
/// # use sketch::{geometry::Point, shapes::create_star};
/// let star = create_star(Point::new(50.0, 20.0), 10.0, 4.0, 5);
/// let points = star.points();
/// assert_eq!(points.len(), 11);
/// assert_eq!(points.first(), points.last());
/// ```
pub fn create_star(
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    num_rays: u32,
) -> Polyline {
    if num_rays == 0 {
        return Polyline::new();
    }

    let rays = f64::from(num_rays);
    (0..=num_rays)
        .flat_map(|i| {
            let angle = 2.0 * PI * f64::from(i % num_rays) / rays;
            let outer = center.polar_offset(outer_radius, angle);
            // The closing vertex repeats the first outer point without an inner one.
            let inner =
                (i < num_rays).then(|| center.polar_offset(inner_radius, angle + PI / rays));
            iter::once(outer).chain(inner)
        })
        .collect()
}

/// A star drawn as a single closed polyline, see [`create_star`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    num_rays: u32,
}

impl Star {
    pub fn new(center: Point, outer_radius: f64, inner_radius: f64, num_rays: u32) -> Self {
        Self {
            center,
            outer_radius,
            inner_radius,
            num_rays,
        }
    }
}

impl Drawable for Star {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        container.add(create_star(
            self.center,
            self.outer_radius,
            self.inner_radius,
            self.num_rays,
        ));
    }
}
