use sketch_core::{
    container::{Drawable, ObjectContainer},
    geometry::Point,
    object::Circle,
};

/// Three stacked circles positioned relative to the head.
///
/// The bottom circle is drawn first and the head last, so later circles
/// overlap earlier ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snowman {
    head: Point,
    head_radius: f64,
}

impl Snowman {
    /// Creates a snowman whose head is centered at `head`.
    pub fn new(head: Point, head_radius: f64) -> Self {
        Self { head, head_radius }
    }
}

impl Drawable for Snowman {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        let r = self.head_radius;
        let base = self.head.offset_by(Point::new(0.0, 5.0 * r));
        let body = self.head.offset_by(Point::new(0.0, 2.0 * r));

        container.add(Circle::new().with_center(base).with_radius(2.0 * r));
        container.add(Circle::new().with_center(body).with_radius(1.5 * r));
        container.add(Circle::new().with_center(self.head).with_radius(r));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::test_utils::draw_lines;

    #[test]
    fn test_snowman_circles_bottom_to_top() {
        let snowman = Snowman::new(Point::new(30.0, 20.0), 10.0);
        assert_eq!(
            draw_lines(&snowman),
            [
                r#"<circle cx="30" cy="70" r="20" />"#,
                r#"<circle cx="30" cy="40" r="15" />"#,
                r#"<circle cx="30" cy="20" r="10" />"#,
            ]
        );
    }

    #[test]
    fn test_zero_radius_collapses_to_head() {
        let snowman = Snowman::new(Point::new(5.0, 5.0), 0.0);
        assert_eq!(
            draw_lines(&snowman),
            [r#"<circle cx="5" cy="5" r="0" />"#; 3]
        );
    }
}
