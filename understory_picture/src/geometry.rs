// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small f32 geometry primitives shared by paths, shaders, and pictures.

/// Affine transform type from kurbo, used when converting to and from [`Matrix`].
pub type Affine = kurbo::Affine;

/// A point in f32 coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointF {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl PointF {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert to kurbo's point type.
    #[inline]
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(f32, f32)> for PointF {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// An integer size, used for noise tiling.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SizeI {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl SizeI {
    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero or negative.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// A simple axis-aligned rectangle in f32 coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RectF {
    /// Minimum X coordinate (left).
    pub x0: f32,
    /// Minimum Y coordinate (top).
    pub y0: f32,
    /// Maximum X coordinate (right).
    pub x1: f32,
    /// Maximum Y coordinate (bottom).
    pub y1: f32,
}

impl RectF {
    /// Create a new rectangle from min/max corners.
    #[inline]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(self) -> f32 {
        self.y1 - self.y0
    }

    /// Returns `true` if the rectangle has no area.
    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.x1 > self.x0 && self.y1 > self.y0)
    }

    /// Half-open containment test (`x0 <= x < x1`, same for y).
    #[inline]
    pub fn contains(self, p: PointF) -> bool {
        p.x >= self.x0 && p.x < self.x1 && p.y >= self.y0 && p.y < self.y1
    }

    /// Convert to kurbo's rectangle type.
    #[inline]
    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1),
            f64::from(self.y1),
        )
    }
}

/// A 3x3 row-major transform matrix, including perspective terms.
///
/// The layout matches the usual canvas convention:
///
/// ```text
/// [scale_x  skew_x   trans_x]
/// [skew_y   scale_y  trans_y]
/// [persp0   persp1   persp2 ]
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix {
    /// Horizontal scale.
    pub scale_x: f32,
    /// Horizontal skew.
    pub skew_x: f32,
    /// Horizontal translation.
    pub trans_x: f32,
    /// Vertical skew.
    pub skew_y: f32,
    /// Vertical scale.
    pub scale_y: f32,
    /// Vertical translation.
    pub trans_y: f32,
    /// Input x perspective factor.
    pub persp0: f32,
    /// Input y perspective factor.
    pub persp1: f32,
    /// Perspective bias.
    pub persp2: f32,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::affine(1.0, 0.0, 0.0, 0.0, 1.0, 0.0);

    /// Create an affine matrix (no perspective) from its six coefficients.
    #[inline]
    pub const fn affine(
        scale_x: f32,
        skew_x: f32,
        trans_x: f32,
        skew_y: f32,
        scale_y: f32,
        trans_y: f32,
    ) -> Self {
        Self {
            scale_x,
            skew_x,
            trans_x,
            skew_y,
            scale_y,
            trans_y,
            persp0: 0.0,
            persp1: 0.0,
            persp2: 1.0,
        }
    }

    /// A pure translation.
    #[inline]
    pub const fn translate(dx: f32, dy: f32) -> Self {
        Self::affine(1.0, 0.0, dx, 0.0, 1.0, dy)
    }

    /// A pure scale.
    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self::affine(sx, 0.0, 0.0, 0.0, sy, 0.0)
    }

    /// Returns `true` if this is exactly the identity matrix.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns `true` if any perspective term differs from `[0, 0, 1]`.
    #[inline]
    pub fn has_perspective(&self) -> bool {
        self.persp0 != 0.0 || self.persp1 != 0.0 || self.persp2 != 1.0
    }

    /// Convert to a kurbo affine, or `None` if the matrix has perspective.
    pub fn to_affine(&self) -> Option<Affine> {
        if self.has_perspective() {
            return None;
        }
        // kurbo stores [a, b, c, d, e, f] as
        // [a c e]
        // [b d f]
        Some(Affine::new([
            f64::from(self.scale_x),
            f64::from(self.skew_y),
            f64::from(self.skew_x),
            f64::from(self.scale_y),
            f64::from(self.trans_x),
            f64::from(self.trans_y),
        ]))
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "the picture IR stores f32 coordinates; f64 precision is not needed"
)]
impl From<Affine> for Matrix {
    fn from(xf: Affine) -> Self {
        let [a, b, c, d, e, f] = xf.as_coeffs();
        Self::affine(a as f32, c as f32, e as f32, b as f32, d as f32, f as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affine_round_trip_preserves_layout() {
        let m = Matrix::affine(2.0, 0.5, 10.0, 0.25, 3.0, -4.0);
        let xf = m.to_affine().expect("no perspective");
        assert_eq!(xf.as_coeffs(), [2.0, 0.25, 0.5, 3.0, 10.0, -4.0]);
        assert_eq!(Matrix::from(xf), m);
    }

    #[test]
    fn perspective_has_no_affine() {
        let mut m = Matrix::IDENTITY;
        m.persp0 = 0.01;
        assert!(m.has_perspective());
        assert!(m.to_affine().is_none());
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = RectF::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(PointF::new(0.0, 0.0)));
        assert!(!r.contains(PointF::new(10.0, 5.0)));
        assert!(RectF::new(5.0, 5.0, 5.0, 10.0).is_empty());
    }
}
