//! SVG rendering of labelled points and a rectangle with its base, height
//! and area annotations.

use std::path::Path as FsPath;

use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Line, Path, Rectangle, Text};
use svg::Document;
use tracing::{debug, info, warn};

use crate::error::PlotErr;
use crate::point::Point;
use crate::rect::Rect;
use crate::report::LabelledPoint;

/// Canvas geometry. Pixel sizes are in SVG user units, `padding` is in
/// data units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub padding: f64,
    pub marker_radius: f64,
    pub font_size: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 60.0,
            padding: 1.5,
            marker_radius: 5.0,
            font_size: 14.0,
        }
    }
}

/// The visible data range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub min: Point,
    pub max: Point,
}

impl Window {
    /// Smallest window holding the origin and every finite point, grown by
    /// `padding` on each side.
    pub fn covering<'a>(
        points: impl IntoIterator<Item = &'a Point>,
        padding: f64,
    ) -> Self {
        let (mut min, mut max) = (Point::ORIGIN, Point::ORIGIN);
        for p in points
            .into_iter()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
        {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        let padding = padding.abs().max(f64::EPSILON);
        Self {
            min: Point::new(min.x - padding, min.y - padding),
            max: Point::new(max.x + padding, max.y + padding),
        }
    }

    #[inline]
    pub fn span_x(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn span_y(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Maps data coordinates onto the canvas, flipping y.
#[derive(Clone, Copy, Debug)]
struct Projection {
    window: Window,
    config: PlotConfig,
}

impl Projection {
    fn x(&self, x: f64) -> f64 {
        let inner = self.config.width - 2.0 * self.config.margin;
        self.config.margin + (x - self.window.min.x) / self.window.span_x() * inner
    }

    fn y(&self, y: f64) -> f64 {
        let inner = self.config.height - 2.0 * self.config.margin;
        self.config.margin + (self.window.max.y - y) / self.window.span_y() * inner
    }

    fn point(&self, p: &Point) -> (f64, f64) {
        (self.x(p.x), self.y(p.y))
    }
}

/// Grid step giving at most about twenty lines across `span`.
fn grid_step(span: f64) -> f64 {
    (span / 20.0).ceil().max(1.0)
}

fn grid_values(min: f64, max: f64) -> Vec<f64> {
    let step = grid_step(max - min);
    let (start, end) = ((min / step).ceil() as i64, (max / step).floor() as i64);
    (start..=end).map(|k| k as f64 * step).collect()
}

pub struct Plot {
    config: PlotConfig,
    title: String,
    points: Vec<LabelledPoint>,
    rect: Option<Rect>,
}

impl Plot {
    pub fn new(config: PlotConfig) -> Self {
        Self {
            config,
            title: "Points and rectangle".to_string(),
            points: Vec::new(),
            rect: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_points(
        mut self,
        points: impl IntoIterator<Item = LabelledPoint>,
    ) -> Self {
        self.points.extend(points);
        self
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }

    pub fn window(&self) -> Window {
        // without a rectangle these are four origins, already covered
        let corners = self.rect.map(|r| r.corners()).unwrap_or_default();
        Window::covering(
            self.points.iter().map(|lp| &lp.point).chain(corners.iter()),
            self.config.padding,
        )
    }

    pub fn render(&self) -> Document {
        let config = self.config;
        let window = self.window();
        let proj = Projection { window, config };
        debug!(?window, points = self.points.len(), "rendering plot");

        let mut document = Document::new()
            .set("viewBox", (0, 0, config.width, config.height))
            .set("width", config.width)
            .set("height", config.height)
            .set("font-family", "sans-serif")
            .add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", "white"),
            );

        document = document.add(self.grid(&proj)).add(self.axes(&proj));

        if let Some(rect) = self.rect {
            document = document.add(self.outline(&proj, &rect));
        }

        for lp in &self.points {
            if !(lp.point.x.is_finite() && lp.point.y.is_finite()) {
                warn!(label = %lp.label, point = %lp.point, "skipping non-finite point");
                continue;
            }
            document = document.add(self.marker(&proj, lp));
        }

        if let Some(rect) = self.rect {
            document = document.add(self.annotations(&proj, &rect));
        }

        document
            .add(
                text(&self.title, config.font_size + 4.0)
                    .set("x", config.width / 2.0)
                    .set("y", config.margin / 2.0)
                    .set("text-anchor", "middle"),
            )
            .add(
                text("X", config.font_size)
                    .set("x", config.width / 2.0)
                    .set("y", config.height - config.margin / 4.0)
                    .set("text-anchor", "middle"),
            )
            .add(
                text("Y", config.font_size)
                    .set("x", config.margin / 4.0)
                    .set("y", config.height / 2.0)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central"),
            )
    }

    /// Renders the plot and writes it to `path`.
    pub fn save(&self, path: impl AsRef<FsPath>) -> Result<(), PlotErr> {
        let path = path.as_ref();
        svg::save(path, &self.render())?;
        info!(path = %path.display(), "plot written");
        Ok(())
    }

    fn grid(&self, proj: &Projection) -> Group {
        let Window { min, max } = proj.window;
        let mut group = Group::new()
            .set("stroke", "lightgray")
            .set("stroke-width", 0.5);
        for x in grid_values(min.x, max.x) {
            group = group.add(segment(
                (proj.x(x), proj.y(min.y)),
                (proj.x(x), proj.y(max.y)),
            ));
        }
        for y in grid_values(min.y, max.y) {
            group = group.add(segment(
                (proj.x(min.x), proj.y(y)),
                (proj.x(max.x), proj.y(y)),
            ));
        }
        group
    }

    fn axes(&self, proj: &Projection) -> Group {
        let Window { min, max } = proj.window;
        Group::new()
            .set("stroke", "gray")
            .set("stroke-width", 1)
            .add(segment(
                (proj.x(min.x), proj.y(0.0)),
                (proj.x(max.x), proj.y(0.0)),
            ))
            .add(segment(
                (proj.x(0.0), proj.y(min.y)),
                (proj.x(0.0), proj.y(max.y)),
            ))
    }

    fn outline(&self, proj: &Projection, rect: &Rect) -> Path {
        let [c0, c1, c2, c3] = rect.corners().map(|c| {
            let (x, y) = proj.point(&c);
            (x as f32, y as f32)
        });
        let data = Data::new()
            .move_to(c0)
            .line_to(c1)
            .line_to(c2)
            .line_to(c3)
            .close();
        Path::new()
            .set("fill", "none")
            .set("stroke", "blue")
            .set("stroke-width", 2)
            .set("d", data)
    }

    fn marker(&self, proj: &Projection, lp: &LabelledPoint) -> Group {
        let (x, y) = proj.point(&lp.point);
        let offset = self.config.marker_radius + 2.0;
        Group::new()
            .add(
                Circle::new()
                    .set("cx", x)
                    .set("cy", y)
                    .set("r", self.config.marker_radius)
                    .set("fill", "red"),
            )
            .add(
                text(&lp.label, self.config.font_size)
                    .set("x", x + offset)
                    .set("y", y - offset)
                    .set("text-anchor", "middle"),
            )
    }

    fn annotations(&self, proj: &Projection, rect: &Rect) -> Group {
        let (lo, hi) = rect.extents();
        let center = rect.center();
        let size = self.config.font_size;
        Group::new()
            .add(label_box(
                &format!("Base = {}", rect.base()),
                (proj.x(center.x), proj.y(lo.y - 0.5)),
                Anchor::Middle,
                "blue",
                size,
            ))
            .add(label_box(
                &format!("Height = {}", rect.height()),
                (proj.x(hi.x + 0.5), proj.y(center.y)),
                Anchor::Start,
                "green",
                size,
            ))
            .add(label_box(
                &format!("Area = {}", rect.area()),
                proj.point(&center),
                Anchor::Middle,
                "purple",
                size + 1.0,
            ))
    }
}

impl Default for Plot {
    fn default() -> Self {
        Self::new(PlotConfig::default())
    }
}

#[derive(Clone, Copy, Debug)]
enum Anchor {
    Start,
    Middle,
}

fn text(content: &str, size: f64) -> Text {
    Text::new()
        .set("font-size", size)
        .add(svg::node::Text::new(content))
}

fn segment(from: (f64, f64), to: (f64, f64)) -> Line {
    Line::new()
        .set("x1", from.0)
        .set("y1", from.1)
        .set("x2", to.0)
        .set("y2", to.1)
}

/// Text inside a translucent white box with a coloured border.
fn label_box(
    content: &str,
    (x, y): (f64, f64),
    anchor: Anchor,
    color: &str,
    size: f64,
) -> Group {
    // glyph width estimate, no font metrics available
    let width = content.chars().count() as f64 * size * 0.6 + 8.0;
    let height = size + 8.0;
    let (left, text_x, anchor) = match anchor {
        Anchor::Start => (x, x + 4.0, "start"),
        Anchor::Middle => (x - width / 2.0, x, "middle"),
    };
    Group::new()
        .add(
            Rectangle::new()
                .set("x", left)
                .set("y", y - height / 2.0)
                .set("width", width)
                .set("height", height)
                .set("fill", "white")
                .set("fill-opacity", 0.7)
                .set("stroke", color),
        )
        .add(
            text(content, size)
                .set("x", text_x)
                .set("y", y)
                .set("fill", color)
                .set("text-anchor", anchor)
                .set("dominant-baseline", "central"),
        )
}
