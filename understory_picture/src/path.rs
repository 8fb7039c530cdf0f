// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path geometry: an ordered list of path commands plus a fill rule.

use alloc::vec::Vec;

use kurbo::{BezPath, PathEl, Point, Shape, SvgArc, Vec2};

use crate::geometry::{PointF, RectF};
use crate::style::{ArcSize, FillRule, SweepDirection};

/// Tolerance used by [`Path::contains`] when flattening curves.
pub const CONTAINS_TOLERANCE: f64 = 0.01;

/// A single path command.
///
/// Commands are interpreted strictly in order against a current point, the
/// same way a canvas path builder would.
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at the given point.
    MoveTo {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },
    /// Line from the current point.
    LineTo {
        /// X coordinate of the line end.
        x: f32,
        /// Y coordinate of the line end.
        y: f32,
    },
    /// SVG-style elliptical arc from the current point to `(x, y)`.
    ArcTo {
        /// Horizontal radius.
        rx: f32,
        /// Vertical radius.
        ry: f32,
        /// Rotation of the ellipse's x axis, in degrees.
        x_axis_rotation: f32,
        /// Which of the candidate arcs to use.
        size: ArcSize,
        /// Direction to sweep in.
        sweep: SweepDirection,
        /// X coordinate of the arc end.
        x: f32,
        /// Y coordinate of the arc end.
        y: f32,
    },
    /// Quadratic Bézier from the current point.
    QuadTo {
        /// X coordinate of the control point.
        x0: f32,
        /// Y coordinate of the control point.
        y0: f32,
        /// X coordinate of the curve end.
        x1: f32,
        /// Y coordinate of the curve end.
        y1: f32,
    },
    /// Cubic Bézier from the current point.
    CubicTo {
        /// X coordinate of the first control point.
        x0: f32,
        /// Y coordinate of the first control point.
        y0: f32,
        /// X coordinate of the second control point.
        x1: f32,
        /// Y coordinate of the second control point.
        y1: f32,
        /// X coordinate of the curve end.
        x2: f32,
        /// Y coordinate of the curve end.
        y2: f32,
    },
    /// Close the current subpath.
    Close,
    /// Add a closed rectangle as a new subpath.
    AddRect(RectF),
    /// Add a closed rounded rectangle with elliptical corners as a new subpath.
    AddRoundRect {
        /// Bounds of the rounded rectangle.
        rect: RectF,
        /// Horizontal corner radius.
        rx: f32,
        /// Vertical corner radius.
        ry: f32,
    },
    /// Add a closed ellipse inscribed in the rectangle as a new subpath.
    AddOval(RectF),
    /// Add a closed circle as a new subpath.
    AddCircle {
        /// X coordinate of the center.
        x: f32,
        /// Y coordinate of the center.
        y: f32,
        /// Circle radius.
        radius: f32,
    },
    /// Add a polyline or polygon as a new subpath.
    AddPoly {
        /// Vertices in order.
        points: Vec<PointF>,
        /// Whether to close the subpath.
        close: bool,
    },
}

/// Path geometry with a fill rule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    /// Rule deciding which points are inside the path.
    pub fill_rule: FillRule,
    /// Commands in drawing order. An empty list is a valid, empty path.
    pub commands: Vec<PathCommand>,
}

impl Path {
    /// Create an empty path with the non-zero fill rule.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from a fill rule and a command list.
    #[inline]
    pub fn from_commands(fill_rule: FillRule, commands: Vec<PathCommand>) -> Self {
        Self {
            fill_rule,
            commands,
        }
    }

    /// Set the fill rule.
    #[must_use]
    pub fn with_fill_rule(mut self, fill_rule: FillRule) -> Self {
        self.fill_rule = fill_rule;
        self
    }

    /// Append a command.
    #[must_use]
    pub fn push(mut self, command: PathCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Append a [`PathCommand::MoveTo`].
    #[must_use]
    pub fn move_to(self, x: f32, y: f32) -> Self {
        self.push(PathCommand::MoveTo { x, y })
    }

    /// Append a [`PathCommand::LineTo`].
    #[must_use]
    pub fn line_to(self, x: f32, y: f32) -> Self {
        self.push(PathCommand::LineTo { x, y })
    }

    /// Append a [`PathCommand::QuadTo`].
    #[must_use]
    pub fn quad_to(self, x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        self.push(PathCommand::QuadTo { x0, y0, x1, y1 })
    }

    /// Append a [`PathCommand::CubicTo`].
    #[must_use]
    pub fn cubic_to(self, x0: f32, y0: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.push(PathCommand::CubicTo {
            x0,
            y0,
            x1,
            y1,
            x2,
            y2,
        })
    }

    /// Append a [`PathCommand::ArcTo`].
    #[must_use]
    pub fn arc_to(
        self,
        rx: f32,
        ry: f32,
        x_axis_rotation: f32,
        size: ArcSize,
        sweep: SweepDirection,
        x: f32,
        y: f32,
    ) -> Self {
        self.push(PathCommand::ArcTo {
            rx,
            ry,
            x_axis_rotation,
            size,
            sweep,
            x,
            y,
        })
    }

    /// Append a [`PathCommand::Close`].
    #[must_use]
    pub fn close(self) -> Self {
        self.push(PathCommand::Close)
    }

    /// Append a [`PathCommand::AddRect`].
    #[must_use]
    pub fn add_rect(self, rect: RectF) -> Self {
        self.push(PathCommand::AddRect(rect))
    }

    /// Append a [`PathCommand::AddRoundRect`].
    #[must_use]
    pub fn add_round_rect(self, rect: RectF, rx: f32, ry: f32) -> Self {
        self.push(PathCommand::AddRoundRect { rect, rx, ry })
    }

    /// Append a [`PathCommand::AddOval`].
    #[must_use]
    pub fn add_oval(self, rect: RectF) -> Self {
        self.push(PathCommand::AddOval(rect))
    }

    /// Append a [`PathCommand::AddCircle`].
    #[must_use]
    pub fn add_circle(self, x: f32, y: f32, radius: f32) -> Self {
        self.push(PathCommand::AddCircle { x, y, radius })
    }

    /// Append a [`PathCommand::AddPoly`].
    #[must_use]
    pub fn add_poly(self, points: impl Into<Vec<PointF>>, close: bool) -> Self {
        self.push(PathCommand::AddPoly {
            points: points.into(),
            close,
        })
    }

    /// Returns `true` if the path has no commands.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Interpret the commands into a [`BezPath`].
    ///
    /// This is the backend-independent reading of the command list:
    /// - a segment with no open subpath starts one at the current point
    ///   (the origin for a fresh path, the subpath start after a close),
    /// - arcs follow SVG endpoint semantics, degrading to a line when a radius
    ///   is zero,
    /// - added shapes are closed subpaths wound clockwise.
    ///
    /// `tolerance` bounds the error of the cubic approximation of arcs.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut interp = Interpreter::default();
        for command in &self.commands {
            interp.apply(command, tolerance);
        }
        interp.path
    }

    /// Bounding box of the interpreted geometry, or `None` for an empty path.
    pub fn bounds(&self, tolerance: f64) -> Option<RectF> {
        let path = self.to_bez_path(tolerance);
        if path.elements().is_empty() {
            return None;
        }
        let bbox = path.bounding_box();
        Some(rect_from_kurbo(bbox))
    }

    /// Returns `true` if `point` is inside the filled path under its fill rule.
    ///
    /// Open subpaths are treated as implicitly closed, as they are when filling.
    pub fn contains(&self, point: PointF) -> bool {
        let closed = close_subpaths(&self.to_bez_path(CONTAINS_TOLERANCE));
        let winding = closed.winding(point.to_kurbo());
        match self.fill_rule {
            FillRule::NonZero => winding != 0,
            FillRule::EvenOdd => winding % 2 != 0,
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "the picture IR stores f32 coordinates"
)]
fn rect_from_kurbo(rect: kurbo::Rect) -> RectF {
    RectF::new(rect.x0 as f32, rect.y0 as f32, rect.x1 as f32, rect.y1 as f32)
}

fn close_subpaths(path: &BezPath) -> BezPath {
    let mut out = BezPath::new();
    let mut open = false;
    for el in path.elements() {
        match el {
            PathEl::MoveTo(_) => {
                if open {
                    out.close_path();
                }
                open = true;
            }
            PathEl::ClosePath => open = false,
            _ => {}
        }
        out.push(*el);
    }
    if open {
        out.close_path();
    }
    out
}

#[derive(Default)]
struct Interpreter {
    path: BezPath,
    current: Point,
    start: Point,
    open: bool,
}

impl Interpreter {
    fn begin_segment(&mut self) {
        if !self.open {
            self.path.move_to(self.current);
            self.start = self.current;
            self.open = true;
        }
    }

    fn apply(&mut self, command: &PathCommand, tolerance: f64) {
        match *command {
            PathCommand::MoveTo { x, y } => {
                let p = point(x, y);
                self.path.move_to(p);
                self.current = p;
                self.start = p;
                self.open = true;
            }
            PathCommand::LineTo { x, y } => {
                self.begin_segment();
                self.current = point(x, y);
                self.path.line_to(self.current);
            }
            PathCommand::QuadTo { x0, y0, x1, y1 } => {
                self.begin_segment();
                self.current = point(x1, y1);
                self.path.quad_to(point(x0, y0), self.current);
            }
            PathCommand::CubicTo {
                x0,
                y0,
                x1,
                y1,
                x2,
                y2,
            } => {
                self.begin_segment();
                self.current = point(x2, y2);
                self.path.curve_to(point(x0, y0), point(x1, y1), self.current);
            }
            PathCommand::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                size,
                sweep,
                x,
                y,
            } => {
                self.begin_segment();
                let arc = SvgArc {
                    from: self.current,
                    to: point(x, y),
                    radii: Vec2::new(f64::from(rx.abs()), f64::from(ry.abs())),
                    x_rotation: f64::from(x_axis_rotation) * (core::f64::consts::PI / 180.0),
                    large_arc: size == ArcSize::Large,
                    sweep: sweep == SweepDirection::Clockwise,
                };
                match kurbo::Arc::from_svg_arc(&arc) {
                    Some(arc) => self.path.extend(arc.append_iter(tolerance)),
                    None => self.path.line_to(arc.to),
                }
                self.current = arc.to;
            }
            PathCommand::Close => {
                if self.open {
                    self.path.close_path();
                    self.open = false;
                }
                self.current = self.start;
            }
            PathCommand::AddRect(rect) => {
                self.add_closed(rect.to_kurbo().path_elements(tolerance));
            }
            PathCommand::AddRoundRect { rect, rx, ry } => {
                // Negative radii add nothing, matching canvas path builders.
                if rx < 0.0 || ry < 0.0 {
                    return;
                }
                let rr = round_rect_path(rect, rx, ry, tolerance);
                self.add_closed(rr.elements().iter().copied());
            }
            PathCommand::AddOval(rect) => {
                let ellipse = kurbo::Ellipse::from_rect(rect.to_kurbo());
                self.add_closed(ellipse.path_elements(tolerance));
            }
            PathCommand::AddCircle { x, y, radius } => {
                let circle = kurbo::Circle::new(point(x, y), f64::from(radius));
                self.add_closed(circle.path_elements(tolerance));
            }
            PathCommand::AddPoly { ref points, close } => {
                let Some((first, rest)) = points.split_first() else {
                    return;
                };
                let first = first.to_kurbo();
                self.path.move_to(first);
                self.start = first;
                self.current = first;
                for p in rest {
                    self.current = p.to_kurbo();
                    self.path.line_to(self.current);
                }
                if close {
                    self.path.close_path();
                    self.current = first;
                    self.open = false;
                } else {
                    self.open = true;
                }
            }
        }
    }

    fn add_closed(&mut self, elements: impl Iterator<Item = PathEl>) {
        let mut first = None;
        for el in elements {
            if let PathEl::MoveTo(p) = el {
                first.get_or_insert(p);
            }
            if el != PathEl::ClosePath {
                self.path.push(el);
            }
        }
        if let Some(first) = first {
            self.path.close_path();
            self.start = first;
            self.current = first;
        }
        self.open = false;
    }
}

fn point(x: f32, y: f32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

/// Rounded rectangle with elliptical corners, wound clockwise.
///
/// The subpath starts on the left edge at `(x0, y1 - ry)`, the same start
/// point canvas builders use, so a segment appended after it begins there.
/// Radii that do not fit are scaled down uniformly; a zero radius gives a
/// plain rectangle starting at the bottom-left corner.
fn round_rect_path(rect: RectF, rx: f32, ry: f32, tolerance: f64) -> BezPath {
    use core::f64::consts::{FRAC_PI_2, PI};

    let r = rect.to_kurbo().abs();
    let mut path = BezPath::new();
    if rx == 0.0 || ry == 0.0 {
        path.move_to((r.x0, r.y1));
        path.line_to((r.x0, r.y0));
        path.line_to((r.x1, r.y0));
        path.line_to((r.x1, r.y1));
        path.close_path();
        return path;
    }

    let mut rx = f64::from(rx);
    let mut ry = f64::from(ry);
    let scale = (r.width() / (2.0 * rx)).min(r.height() / (2.0 * ry));
    if scale < 1.0 {
        rx *= scale;
        ry *= scale;
    }
    // (center, start angle, start point) per corner, clockwise from top-left.
    let corners = [
        (
            Point::new(r.x0 + rx, r.y0 + ry),
            PI,
            Point::new(r.x0, r.y0 + ry),
        ),
        (
            Point::new(r.x1 - rx, r.y0 + ry),
            -FRAC_PI_2,
            Point::new(r.x1 - rx, r.y0),
        ),
        (
            Point::new(r.x1 - rx, r.y1 - ry),
            0.0,
            Point::new(r.x1, r.y1 - ry),
        ),
        (
            Point::new(r.x0 + rx, r.y1 - ry),
            FRAC_PI_2,
            Point::new(r.x0 + rx, r.y1),
        ),
    ];

    path.move_to((r.x0, r.y1 - ry));
    for (center, start_angle, start) in corners {
        path.line_to(start);
        let arc = kurbo::Arc::new(center, (rx, ry), start_angle, FRAC_PI_2, 0.0);
        path.extend(arc.append_iter(tolerance));
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const EPSILON: f64 = 1e-6;

    fn last_point(path: &BezPath) -> Point {
        path.elements()
            .iter()
            .rev()
            .find_map(|el| el.end_point())
            .expect("path has a point")
    }

    #[test]
    fn empty_path_is_empty() {
        let path = Path::new();
        assert!(path.is_empty());
        assert!(path.to_bez_path(0.1).elements().is_empty());
        assert_eq!(path.bounds(0.1), None);
        assert!(!path.contains(PointF::new(0.0, 0.0)));
    }

    #[test]
    fn arc_ends_at_endpoint() {
        let path = Path::new().move_to(0.0, 0.0).arc_to(
            10.0,
            10.0,
            0.0,
            ArcSize::Small,
            SweepDirection::Clockwise,
            20.0,
            0.0,
        );
        let end = last_point(&path.to_bez_path(0.01));
        assert!((end.x - 20.0).abs() < EPSILON, "x = {}", end.x);
        assert!(end.y.abs() < EPSILON, "y = {}", end.y);
    }

    #[test]
    fn clockwise_half_circle_passes_over_the_top() {
        // In y-down space, sweeping clockwise from (0, 0) to (20, 0) passes through (10, -10).
        let path = Path::new()
            .move_to(0.0, 0.0)
            .arc_to(
                10.0,
                10.0,
                0.0,
                ArcSize::Small,
                SweepDirection::Clockwise,
                20.0,
                0.0,
            )
            .close();
        assert!(path.contains(PointF::new(10.0, -5.0)));
        assert!(!path.contains(PointF::new(10.0, 5.0)));

        let ccw = Path::new()
            .move_to(0.0, 0.0)
            .arc_to(
                10.0,
                10.0,
                0.0,
                ArcSize::Small,
                SweepDirection::CounterClockwise,
                20.0,
                0.0,
            )
            .close();
        assert!(ccw.contains(PointF::new(10.0, 5.0)));
        assert!(!ccw.contains(PointF::new(10.0, -5.0)));
    }

    #[test]
    fn zero_radius_arc_is_a_line() {
        let path = Path::new().move_to(0.0, 0.0).arc_to(
            0.0,
            5.0,
            0.0,
            ArcSize::Large,
            SweepDirection::Clockwise,
            7.0,
            3.0,
        );
        let bez = path.to_bez_path(0.1);
        assert_eq!(bez.elements().len(), 2);
        assert_eq!(bez.elements()[1], PathEl::LineTo(Point::new(7.0, 3.0)));
    }

    #[test]
    fn leading_segment_starts_at_origin() {
        let bez = Path::new().line_to(5.0, 5.0).to_bez_path(0.1);
        assert_eq!(bez.elements()[0], PathEl::MoveTo(Point::ZERO));
    }

    #[test]
    fn segment_after_close_restarts_at_subpath_start() {
        let bez = Path::new()
            .move_to(1.0, 2.0)
            .line_to(5.0, 2.0)
            .line_to(5.0, 6.0)
            .close()
            .line_to(9.0, 9.0)
            .to_bez_path(0.1);
        assert_eq!(
            bez.elements()[4..],
            [
                PathEl::MoveTo(Point::new(1.0, 2.0)),
                PathEl::LineTo(Point::new(9.0, 9.0))
            ]
        );
    }

    #[test]
    fn fill_rules_differ_on_overlap() {
        let outer = RectF::new(0.0, 0.0, 10.0, 10.0);
        let inner = RectF::new(2.0, 2.0, 8.0, 8.0);
        let non_zero = Path::new().add_rect(outer).add_rect(inner);
        let even_odd = non_zero.clone().with_fill_rule(FillRule::EvenOdd);

        let center = PointF::new(5.0, 5.0);
        assert!(non_zero.contains(center));
        assert!(!even_odd.contains(center));
        assert!(even_odd.contains(PointF::new(1.0, 1.0)));
    }

    #[test]
    fn open_polygon_fills_as_if_closed() {
        let tri = Path::new().add_poly(
            vec![
                PointF::new(0.0, 0.0),
                PointF::new(10.0, 0.0),
                PointF::new(0.0, 10.0),
            ],
            false,
        );
        assert!(tri.contains(PointF::new(2.0, 2.0)));
        assert!(!tri.contains(PointF::new(8.0, 8.0)));
    }

    #[test]
    fn round_rect_cuts_corners() {
        let rr = Path::new().add_round_rect(RectF::new(0.0, 0.0, 40.0, 20.0), 10.0, 5.0);
        assert!(rr.contains(PointF::new(20.0, 10.0)));
        assert!(rr.contains(PointF::new(1.0, 10.0)));
        assert!(!rr.contains(PointF::new(0.5, 0.5)));
        let bounds = rr.bounds(0.01).expect("non-empty");
        assert!((bounds.x1 - 40.0).abs() < 1e-3);
        assert!((bounds.y1 - 20.0).abs() < 1e-3);
    }

    #[test]
    fn negative_round_rect_radius_adds_nothing() {
        let path = Path::new().add_round_rect(RectF::new(0.0, 0.0, 20.0, 20.0), -1.0, 5.0);
        assert!(!path.contains(PointF::new(10.0, 10.0)));
        assert!(path.to_bez_path(0.1).elements().is_empty());
    }

    #[test]
    fn segment_after_round_rect_starts_on_left_edge() {
        let rounded = Path::new()
            .add_round_rect(RectF::new(0.0, 0.0, 20.0, 20.0), 4.0, 4.0)
            .line_to(30.0, 30.0)
            .to_bez_path(0.1);
        let tail = &rounded.elements()[rounded.elements().len() - 2..];
        assert_eq!(
            tail,
            [
                PathEl::MoveTo(Point::new(0.0, 16.0)),
                PathEl::LineTo(Point::new(30.0, 30.0))
            ]
        );

        let square = Path::new()
            .add_round_rect(RectF::new(0.0, 0.0, 20.0, 20.0), 0.0, 4.0)
            .line_to(30.0, 30.0)
            .to_bez_path(0.1);
        assert_eq!(square.elements()[0], PathEl::MoveTo(Point::new(0.0, 20.0)));
        let tail = &square.elements()[square.elements().len() - 2..];
        assert_eq!(tail[0], PathEl::MoveTo(Point::new(0.0, 20.0)));
    }

    #[test]
    fn oversized_round_rect_radii_become_an_oval() {
        let rr = Path::new().add_round_rect(RectF::new(0.0, 0.0, 20.0, 20.0), 50.0, 50.0);
        assert!(rr.contains(PointF::new(10.0, 10.0)));
        assert!(!rr.contains(PointF::new(1.5, 1.5)));
    }

    #[test]
    fn circle_and_oval_contain_their_centers() {
        let circle = Path::new().add_circle(50.0, 50.0, 10.0);
        assert!(circle.contains(PointF::new(50.0, 50.0)));
        assert!(!circle.contains(PointF::new(58.0, 58.0)));

        let oval = Path::new().add_oval(RectF::new(0.0, 0.0, 40.0, 10.0));
        assert!(oval.contains(PointF::new(20.0, 5.0)));
        assert!(!oval.contains(PointF::new(20.0, 12.0)));
    }
}
