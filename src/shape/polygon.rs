use std::fmt::{self, Display, Formatter};

use crate::shape::{Point, PointList};

/// A closed shape made of straight edges between consecutive points.
pub trait Polygon: Display {
    /// The corners of the polygon, in order.
    fn points(&self) -> &[Point];
}

/// Returns the description of any polygon.
///
/// # Examples
/// ```
/// # use workbench::shape::{describe_polygon, Rectangle};
/// let box_ = Rectangle::new(0.0, 0.0, 10.0, 20.0);
/// assert_eq!(
///     describe_polygon(&box_),
///     "Rectangle { points: [(0.00, 0.00), (10.00, 0.00), (10.00, 20.00), (0.00, 20.00)] }"
/// );
/// ```
pub fn describe_polygon(polygon: &dyn Polygon) -> String {
    polygon.to_string()
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    points: [Point; 4],
}

impl Rectangle {
    /// Creates a rectangle with one corner at `(x, y)`, extending by `width` along x and `height`
    /// along y. Points are ordered around the perimeter starting from `(x, y)`.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Rectangle {
        Rectangle {
            points: [
                Point::new(x, y),
                Point::new(x + width, y),
                Point::new(x + width, y + height),
                Point::new(x, y + height),
            ],
        }
    }
}

impl Polygon for Rectangle {
    fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle {{ points: {} }}", PointList(&self.points))
    }
}

/// A triangle defined by three arbitrary points.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    points: [Point; 3],
}

impl Triangle {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Triangle {
        Triangle {
            points: [Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3)],
        }
    }
}

impl Polygon for Triangle {
    fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Display for Triangle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle {{ points: {} }}", PointList(&self.points))
    }
}
