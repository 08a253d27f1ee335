//! Basic geometric types.

/// A point in the 2-D SVG user coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns this point translated by `delta`
    pub fn offset_by(self, delta: Point) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }

    /// Returns the point at `radius` from this one, rotated `angle` radians
    /// clockwise from "straight up" (negative y in SVG coordinates).
    pub fn polar_offset(self, radius: f64, angle: f64) -> Self {
        Self {
            x: self.x + radius * angle.sin(),
            y: self.y - radius * angle.cos(),
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Point::default(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_offset_by() {
        let p = Point::new(30.0, 20.0).offset_by(Point::new(0.0, 50.0));
        assert_eq!(p, Point::new(30.0, 70.0));
    }

    #[test]
    fn test_polar_offset_up() {
        let p = Point::new(50.0, 20.0).polar_offset(10.0, 0.0);
        assert_approx_eq!(f64, p.x(), 50.0);
        assert_approx_eq!(f64, p.y(), 10.0);
    }

    #[test]
    fn test_polar_offset_right_and_down() {
        let right = Point::default().polar_offset(4.0, FRAC_PI_2);
        assert_approx_eq!(f64, right.x(), 4.0);
        assert_approx_eq!(f64, right.y(), 0.0, epsilon = 1e-12);

        let down = Point::default().polar_offset(4.0, PI);
        assert_approx_eq!(f64, down.x(), 0.0, epsilon = 1e-12);
        assert_approx_eq!(f64, down.y(), 4.0);
    }

    #[test]
    fn test_from_tuple() {
        let p: Point = (1.5, -2.0).into();
        assert_eq!(p.x(), 1.5);
        assert_eq!(p.y(), -2.0);
    }
}
