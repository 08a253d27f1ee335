use sketch_core::{
    container::{Drawable, ObjectContainer},
    geometry::Point,
    object::Polyline,
};

/// A triangle drawn as a closed polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    p1: Point,
    p2: Point,
    p3: Point,
}

impl Triangle {
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }
}

impl Drawable for Triangle {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        container.add(
            Polyline::new()
                .add_point(self.p1)
                .add_point(self.p2)
                .add_point(self.p3)
                .add_point(self.p1),
        );
    }
}
