//! The demonstration computations: a handful of labelled points, how they
//! relate to one another, and the rectangle spanned by the first two.

use std::fmt;

use itertools::Itertools;
use tracing::debug;

use crate::debug::{
    display_with, paint_if, STYLE_HEADING, STYLE_HIGHLIGHT, STYLE_LABEL,
    STYLE_QUADRANT, STYLE_RECT,
};
use crate::point::Point;
use crate::quadrant::Quadrant;
use crate::rect::Rect;

#[derive(Clone, Debug, PartialEq)]
pub struct LabelledPoint {
    pub label: String,
    pub point: Point,
}

impl LabelledPoint {
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: label.into(),
            point: Point::new(x, y),
        }
    }
}

impl fmt::Display for LabelledPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.point)
    }
}

/// Rounds half away from zero to two decimals.
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[derive(Clone, Debug, PartialEq)]
pub struct Farthest {
    pub label: String,
    pub distance: f64,
}

/// Everything the demonstration prints, computed once from its inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    first: LabelledPoint,
    second: LabelledPoint,
    others: Vec<LabelledPoint>,
    reference: LabelledPoint,
    pub farthest: Farthest,
    pub rect: Rect,
}

impl Report {
    /// `first` and `second` span the rectangle and give the vectors and
    /// distances; the farthest point is searched among `first`, `second`
    /// and `others`, measured from `reference`.
    pub fn new(
        first: LabelledPoint,
        second: LabelledPoint,
        others: Vec<LabelledPoint>,
        reference: LabelledPoint,
    ) -> Self {
        let farthest = farthest_from(
            &reference.point,
            &first,
            std::iter::once(&second).chain(others.iter()),
        );
        let rect = Rect::new(first.point, second.point);
        debug!(
            farthest = %farthest.label,
            distance = farthest.distance,
            base = rect.base(),
            height = rect.height(),
            "report computed"
        );
        Self {
            first,
            second,
            others,
            reference,
            farthest,
            rect,
        }
    }

    /// A=(2,3), B=(5,5), C=(-3,-1), measured from D=(0,0).
    pub fn demo() -> Self {
        Self::new(
            LabelledPoint::new("A", 2.0, 3.0),
            LabelledPoint::new("B", 5.0, 5.0),
            vec![LabelledPoint::new("C", -3.0, -1.0)],
            LabelledPoint::new("D", 0.0, 0.0),
        )
    }

    /// All points in input order, reference last.
    pub fn points(&self) -> impl Iterator<Item = &LabelledPoint> + '_ {
        [&self.first, &self.second]
            .into_iter()
            .chain(self.others.iter())
            .chain(std::iter::once(&self.reference))
    }

    pub fn quadrants(&self) -> Vec<(&str, Quadrant)> {
        self.points()
            .map(|lp| (lp.label.as_str(), lp.point.quadrant()))
            .collect()
    }

    /// Vectors first->second and second->first.
    pub fn vectors(&self) -> [(f64, f64); 2] {
        let (a, b) = (&self.first.point, &self.second.point);
        [a.vector(b), b.vector(a)]
    }

    /// Distances first->second and second->first.
    pub fn distances(&self) -> [f64; 2] {
        let (a, b) = (&self.first.point, &self.second.point);
        [a.distance(b), b.distance(a)]
    }

    /// The report with ANSI styling, for terminals.
    pub fn styled(&self) -> impl fmt::Display + '_ {
        display_with(move |f| self.write(f, true))
    }

    fn write(&self, f: &mut fmt::Formatter<'_>, styled: bool) -> fmt::Result {
        let heading = |text: &str| paint_if(styled, STYLE_HEADING, text);
        let label = |text: &str| paint_if(styled, STYLE_LABEL, text);
        let (a, b) = (&self.first.label, &self.second.label);

        writeln!(f, "{}", heading("Points:"))?;
        for lp in self.points() {
            writeln!(f, "{}: {}", label(&lp.label), lp.point)?;
        }
        writeln!(f)?;

        writeln!(f, "{}", heading("Quadrants:"))?;
        for (name, quadrant) in self.quadrants() {
            let quadrant = quadrant.to_string();
            writeln!(
                f,
                "{}: {}",
                label(name),
                paint_if(styled, STYLE_QUADRANT, &quadrant)
            )?;
        }
        writeln!(f)?;

        let [ab, ba] = self.vectors();
        writeln!(f, "{}", heading("Vectors:"))?;
        writeln!(f, "{} {a}{b}: ({}, {})", label("Vector"), ab.0, ab.1)?;
        writeln!(f, "{} {b}{a}: ({}, {})", label("Vector"), ba.0, ba.1)?;
        writeln!(f)?;

        let [d_ab, d_ba] = self.distances();
        writeln!(f, "{}", heading("Distances:"))?;
        writeln!(f, "{} {a}-{b}: {}", label("Distance"), round2(d_ab))?;
        writeln!(f, "{} {b}-{a}: {}", label("Distance"), round2(d_ba))?;
        writeln!(f)?;

        let farthest = format!(
            "{} with distance {}",
            self.farthest.label,
            round2(self.farthest.distance)
        );
        writeln!(
            f,
            "Farthest point from {} {} among {}: {}",
            self.reference.label,
            self.reference.point,
            [&self.first, &self.second]
                .into_iter()
                .chain(self.others.iter())
                .map(|lp| lp.label.as_str())
                .join(", "),
            paint_if(styled, STYLE_HIGHLIGHT, &farthest)
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{}",
            heading(&format!("Rectangle formed by {a} and {b}:"))
        )?;
        let rect = [
            ("Base", self.rect.base()),
            ("Height", self.rect.height()),
            ("Area", self.rect.area()),
        ];
        for (name, value) in rect {
            writeln!(
                f,
                "{}: {}",
                label(name),
                paint_if(styled, STYLE_RECT, &value.to_string())
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, false)
    }
}

/// The first point with the greatest distance from `reference`, starting
/// from `first`. A NaN distance never replaces a real one.
fn farthest_from<'a>(
    reference: &Point,
    first: &LabelledPoint,
    rest: impl Iterator<Item = &'a LabelledPoint>,
) -> Farthest {
    let mut best = Farthest {
        label: first.label.clone(),
        distance: reference.distance(&first.point),
    };
    for lp in rest {
        let distance = reference.distance(&lp.point);
        let better = distance > best.distance
            || (best.distance.is_nan() && !distance.is_nan());
        if better {
            best = Farthest {
                label: lp.label.clone(),
                distance,
            };
        }
    }
    best
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(round2(13f64.sqrt()), 3.61);
        assert_eq!(round2(50f64.sqrt()), 7.07);
        assert_eq!(round2(10f64.sqrt()), 3.16);
        assert_eq!(round2(-2.346), -2.35);
        assert_eq!(round2(2.0), 2.0);
    }

    #[test]
    fn demo_values() {
        let report = Report::demo();
        assert_eq!(report.vectors(), [(3.0, 2.0), (-3.0, -2.0)]);
        let [ab, ba] = report.distances();
        assert_eq!(ab, ba);
        assert_eq!(round2(ab), 3.61);
        assert_eq!(report.farthest.label, "B");
        assert_eq!(round2(report.farthest.distance), 7.07);
        assert_eq!(report.rect.base(), 3.0);
        assert_eq!(report.rect.height(), 2.0);
        assert_eq!(report.rect.area(), 6.0);
    }

    #[test]
    fn demo_quadrants() {
        let report = Report::demo();
        assert_eq!(
            report.quadrants(),
            vec![
                ("A", Quadrant::First),
                ("B", Quadrant::First),
                ("C", Quadrant::Third),
                ("D", Quadrant::Origin),
            ]
        );
    }

    #[test]
    fn farthest_ties_go_to_first() {
        let report = Report::new(
            LabelledPoint::new("P", 3.0, 4.0),
            LabelledPoint::new("Q", -4.0, 3.0),
            vec![LabelledPoint::new("R", 0.0, -5.0)],
            LabelledPoint::new("O", 0.0, 0.0),
        );
        assert_eq!(report.farthest.label, "P");
        assert_eq!(report.farthest.distance, 5.0);
    }

    #[test]
    fn farthest_skips_nan() {
        let report = Report::new(
            LabelledPoint::new("N", f64::NAN, 0.0),
            LabelledPoint::new("M", 1.0, 1.0),
            vec![],
            LabelledPoint::new("O", 0.0, 0.0),
        );
        assert_eq!(report.farthest.label, "M");
    }

    #[test]
    fn farthest_all_nan_keeps_first() {
        let report = Report::new(
            LabelledPoint::new("N1", f64::NAN, 0.0),
            LabelledPoint::new("N2", 0.0, f64::NAN),
            vec![LabelledPoint::new("N3", f64::NAN, f64::NAN)],
            LabelledPoint::new("O", 0.0, 0.0),
        );
        assert_eq!(report.farthest.label, "N1");
        assert!(report.farthest.distance.is_nan());
    }

    #[test]
    fn farthest_among_others() {
        let report = Report::new(
            LabelledPoint::new("P", 1.0, 0.0),
            LabelledPoint::new("Q", 0.0, 2.0),
            vec![
                LabelledPoint::new("R", -3.0, 0.0),
                LabelledPoint::new("S", 0.0, -3.0),
            ],
            LabelledPoint::new("O", 0.0, 0.0),
        );
        assert_eq!(report.farthest.label, "R");
        assert_eq!(report.farthest.distance, 3.0);
    }

    #[test]
    fn plain_output() {
        let text = Report::demo().to_string();
        let expected = [
            "Points:",
            "A: (2,3)",
            "B: (5,5)",
            "C: (-3,-1)",
            "D: (0,0)",
            "",
            "Quadrants:",
            "A: First quadrant",
            "B: First quadrant",
            "C: Third quadrant",
            "D: Origin",
            "",
            "Vectors:",
            "Vector AB: (3, 2)",
            "Vector BA: (-3, -2)",
            "",
            "Distances:",
            "Distance A-B: 3.61",
            "Distance B-A: 3.61",
            "",
            "Farthest point from D (0,0) among A, B, C: B with distance 7.07",
            "",
            "Rectangle formed by A and B:",
            "Base: 3",
            "Height: 2",
            "Area: 6",
        ];
        assert_eq!(text.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn styled_output_keeps_content() {
        let report = Report::demo();
        let styled = report.styled().to_string();
        assert!(styled.contains("Quadrants:"));
        assert!(styled.contains("B with distance 7.07"));
        assert!(styled.len() > report.to_string().len());
    }
}
