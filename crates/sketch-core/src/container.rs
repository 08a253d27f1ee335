//! Containers for primitives and the [`Drawable`] capability.
//!
//! [`ObjectContainer`] is the sink that takes ownership of primitives;
//! [`Drawable`] is anything that can decompose itself into primitives and add
//! them to such a sink. Shapes never need to know which container they draw
//! into.

use crate::object::Object;

/// A sink that takes ownership of primitives and keeps them in order.
pub trait ObjectContainer {
    /// Appends a boxed primitive.
    fn add_boxed(&mut self, object: Box<dyn Object>);
}

impl dyn ObjectContainer + '_ {
    /// Boxes `object` and appends it.
    pub fn add<T: Object + 'static>(&mut self, object: T) {
        self.add_boxed(Box::new(object));
    }
}

/// A higher-level shape that renders itself as one or more primitives.
pub trait Drawable {
    /// Adds this shape's primitives to `container` in drawing order.
    fn draw(&self, container: &mut dyn ObjectContainer);
}

impl<T: Drawable + ?Sized> Drawable for &T {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        (**self).draw(container);
    }
}

impl<T: Drawable + ?Sized> Drawable for Box<T> {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        (**self).draw(container);
    }
}

/// Draws every shape of `drawables` into `target`, in iteration order.
///
/// # Examples
///
/// ```
/// use sketch_core::{
///     container::{Drawable, ObjectContainer, draw_picture},
///     document::Document,
///     geometry::Point,
///     object::Circle,
/// };
///
/// struct Dot(Point);
///
/// impl Drawable for Dot {
///     fn draw(&self, container: &mut dyn ObjectContainer) {
///         container.add(Circle::new().with_center(self.0));
///     }
/// }
///
/// let picture: Vec<Box<dyn Drawable>> = vec![
///     Box::new(Dot(Point::new(1.0, 1.0))),
///     Box::new(Dot(Point::new(2.0, 2.0))),
/// ];
///
/// let mut doc = Document::new();
/// draw_picture(&picture, &mut doc);
/// assert_eq!(doc.len(), 2);
/// ```
pub fn draw_picture<I>(drawables: I, target: &mut dyn ObjectContainer)
where
    I: IntoIterator,
    I::Item: Drawable,
{
    for drawable in drawables {
        drawable.draw(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::Point,
        object::{Circle, Polyline, render_line},
    };

    struct Segment(Point, Point);

    impl Drawable for Segment {
        fn draw(&self, container: &mut dyn ObjectContainer) {
            container.add(Polyline::new().add_point(self.0).add_point(self.1));
        }
    }

    struct Nothing;

    impl ObjectContainer for Vec<Box<dyn Object>> {
        fn add_boxed(&mut self, object: Box<dyn Object>) {
            self.push(object);
        }
    }

    impl Drawable for Nothing {
        fn draw(&self, _container: &mut dyn ObjectContainer) {}
    }

    fn rendered(objects: &[Box<dyn Object>]) -> Vec<String> {
        objects.iter().map(|o| render_line(o.as_ref())).collect()
    }

    #[test]
    fn test_add_preserves_order() {
        let mut objects: Vec<Box<dyn Object>> = Vec::new();
        let container: &mut dyn ObjectContainer = &mut objects;
        container.add(Circle::new().with_radius(2.0));
        container.add(Polyline::new());
        container.add(Circle::new().with_radius(3.0));

        assert_eq!(
            rendered(&objects),
            [
                r#"<circle cx="0" cy="0" r="2" />"#,
                r#"<polyline points="" />"#,
                r#"<circle cx="0" cy="0" r="3" />"#,
            ]
        );
    }

    #[test]
    fn test_draw_picture_boxed_in_order() {
        let picture: Vec<Box<dyn Drawable>> = vec![
            Box::new(Segment(Point::new(0.0, 0.0), Point::new(1.0, 1.0))),
            Box::new(Nothing),
            Box::new(Segment(Point::new(2.0, 2.0), Point::new(3.0, 3.0))),
        ];

        let mut objects: Vec<Box<dyn Object>> = Vec::new();
        draw_picture(&picture, &mut objects);

        assert_eq!(
            rendered(&objects),
            [
                r#"<polyline points="0,0 1,1" />"#,
                r#"<polyline points="2,2 3,3" />"#,
            ]
        );
    }

    #[test]
    fn test_draw_picture_by_value_and_slice() {
        let mut objects: Vec<Box<dyn Object>> = Vec::new();
        draw_picture([Nothing, Nothing], &mut objects);
        assert!(objects.is_empty());

        let segments = [Segment(Point::new(0.0, 0.0), Point::new(0.0, 1.0))];
        draw_picture(segments.iter(), &mut objects);
        assert_eq!(objects.len(), 1);
    }
}
