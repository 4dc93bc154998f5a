use std::fmt;

use crate::quadrant::Quadrant;

/// A location in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Classifies the point. Axis checks come before the quadrant checks, so
    /// `(0, 5)` is on the Y-axis rather than in any quadrant.
    pub fn quadrant(&self) -> Quadrant {
        let (x, y) = (self.x, self.y);
        if x == 0.0 && y == 0.0 {
            Quadrant::Origin
        } else if x == 0.0 {
            Quadrant::YAxis
        } else if y == 0.0 {
            Quadrant::XAxis
        } else if x > 0.0 && y > 0.0 {
            Quadrant::First
        } else if x < 0.0 && y > 0.0 {
            Quadrant::Second
        } else if x < 0.0 && y < 0.0 {
            Quadrant::Third
        } else if x > 0.0 && y < 0.0 {
            Quadrant::Fourth
        } else {
            // only a NaN coordinate gets here
            Quadrant::Undefined
        }
    }

    /// Displacement from `self` to `other`.
    #[inline]
    pub fn vector(&self, other: &Point) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }

    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        let (dx, dy) = self.vector(other);
        dx.hypot(dy)
    }

    #[inline]
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
