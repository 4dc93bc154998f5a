use crate::point::Point;

/// An axis-aligned rectangle spanned by two opposite corners.
///
/// The corners may be given in any order; all derived quantities are
/// normalized with `abs`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub p1: Point,
    pub p2: Point,
}

impl Rect {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn base(&self) -> f64 {
        (self.p2.x - self.p1.x).abs()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        (self.p2.y - self.p1.y).abs()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.base() * self.height()
    }

    /// The four corners in outline order, starting and ending next to `p1`.
    pub fn corners(&self) -> [Point; 4] {
        let Self { p1, p2 } = *self;
        [p1, Point::new(p2.x, p1.y), p2, Point::new(p1.x, p2.y)]
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.p1.midpoint(&self.p2)
    }

    /// Lower-left and upper-right corners.
    pub fn extents(&self) -> (Point, Point) {
        let Self { p1, p2 } = *self;
        (
            Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            Point::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        )
    }
}
