use std::fmt;

/// The region of the plane a [`Point`](crate::point::Point) lies in.
///
/// The first seven variants partition all points with non-NaN coordinates.
/// `Undefined` is only produced when a coordinate is NaN.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Origin,
    YAxis,
    XAxis,
    First,
    Second,
    Third,
    Fourth,
    Undefined,
}

impl Quadrant {
    pub const fn label(&self) -> &'static str {
        match self {
            Quadrant::Origin => "Origin",
            Quadrant::YAxis => "Y-axis",
            Quadrant::XAxis => "X-axis",
            Quadrant::First => "First quadrant",
            Quadrant::Second => "Second quadrant",
            Quadrant::Third => "Third quadrant",
            Quadrant::Fourth => "Fourth quadrant",
            Quadrant::Undefined => "Undefined",
        }
    }

    #[inline]
    pub fn is_axis(&self) -> bool {
        matches!(self, Quadrant::Origin | Quadrant::XAxis | Quadrant::YAxis)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
