use std::fmt::{Display, Formatter};

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Pixel coordinate or offset on the screen, e.g. an anchor of a pushpin icon.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Linear distance between two points.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns true if the distance between the points does not exceed `tolerance`.
    ///
    /// With zero tolerance the coordinates must match exactly.
    pub fn equals(&self, other: &Point, tolerance: f64) -> bool {
        self.distance(other) <= tolerance.max(0.0)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Point2<f64>> for Point {
    fn from(value: Point2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point> for Point2<f64> {
    fn from(value: Point) -> Self {
        Point2::new(value.x, value.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(2.5, -4.0);
        assert_eq!(a + b, Point::new(12.5, 16.0));
        assert_eq!(a - b, Point::new(7.5, 24.0));
    }

    #[test]
    fn equality_with_tolerance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!(a.equals(&b, 5.0));
        assert!(!a.equals(&b, 4.9));
        assert!(a.equals(&a, 0.0));
        assert!(!a.equals(&b, -1.0));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }

    #[test]
    fn nalgebra_conversion() {
        let point = Point::new(3.0, 7.0);
        let converted: Point2<f64> = point.into();
        assert_eq!(converted, Point2::new(3.0, 7.0));
        assert_eq!(Point::from(converted), point);
    }
}
