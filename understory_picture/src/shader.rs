// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shaders: per-pixel color sources used in place of a flat paint color.

use alloc::sync::Arc;

use peniko::Color;

use crate::geometry::{Matrix, PointF, RectF, SizeI};
use crate::picture::Picture;
use crate::style::TileMode;

/// Parameters shared by the two Perlin noise shaders.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PerlinNoise {
    /// Base frequency along the X axis.
    pub base_frequency_x: f32,
    /// Base frequency along the Y axis.
    pub base_frequency_y: f32,
    /// Number of octaves.
    pub octaves: u32,
    /// Random seed.
    pub seed: f32,
    /// Size of the stitching tile; an empty size disables stitching.
    pub tile_size: SizeI,
}

/// A closed set of shader kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum Shader {
    /// A single solid color.
    Color(Color),
    /// Linear gradient between two points.
    LinearGradient {
        /// Start point.
        start: PointF,
        /// End point.
        end: PointF,
        /// Stop colors; must have the same length as `positions`.
        colors: Arc<[Color]>,
        /// Stop offsets in `[0, 1]`, non-decreasing.
        positions: Arc<[f32]>,
        /// Behavior outside of `[start, end]`.
        mode: TileMode,
        /// Optional transform from gradient space to local space.
        local_matrix: Option<Matrix>,
    },
    /// Gradient between two circles.
    TwoPointConicalGradient {
        /// Center of the start circle.
        start: PointF,
        /// Radius of the start circle.
        start_radius: f32,
        /// Center of the end circle.
        end: PointF,
        /// Radius of the end circle.
        end_radius: f32,
        /// Stop colors; must have the same length as `positions`.
        colors: Arc<[Color]>,
        /// Stop offsets in `[0, 1]`, non-decreasing.
        positions: Arc<[f32]>,
        /// Behavior outside of the gradient extent.
        mode: TileMode,
        /// Optional transform from gradient space to local space.
        local_matrix: Option<Matrix>,
    },
    /// A nested picture tiled across the plane (repeat in both directions).
    Picture {
        /// Picture to tile.
        picture: Arc<Picture>,
        /// Transform from tile space to local space.
        local_matrix: Matrix,
        /// Tile rectangle in picture space.
        tile: RectF,
    },
    /// Perlin fractal noise.
    PerlinNoiseFractalNoise(PerlinNoise),
    /// Perlin turbulence.
    PerlinNoiseTurbulence(PerlinNoise),
}

impl Shader {
    /// Create a linear gradient without a local matrix.
    pub fn linear_gradient(
        start: PointF,
        end: PointF,
        colors: impl Into<Arc<[Color]>>,
        positions: impl Into<Arc<[f32]>>,
        mode: TileMode,
    ) -> Self {
        Self::LinearGradient {
            start,
            end,
            colors: colors.into(),
            positions: positions.into(),
            mode,
            local_matrix: None,
        }
    }

    /// Create a two-point conical gradient without a local matrix.
    pub fn two_point_conical_gradient(
        start: PointF,
        start_radius: f32,
        end: PointF,
        end_radius: f32,
        colors: impl Into<Arc<[Color]>>,
        positions: impl Into<Arc<[f32]>>,
        mode: TileMode,
    ) -> Self {
        Self::TwoPointConicalGradient {
            start,
            start_radius,
            end,
            end_radius,
            colors: colors.into(),
            positions: positions.into(),
            mode,
            local_matrix: None,
        }
    }

    /// Replace the local matrix of a gradient; other shaders are returned unchanged.
    #[must_use]
    pub fn with_local_matrix(mut self, matrix: Matrix) -> Self {
        match &mut self {
            Self::LinearGradient { local_matrix, .. }
            | Self::TwoPointConicalGradient { local_matrix, .. } => *local_matrix = Some(matrix),
            Self::Picture { local_matrix, .. } => *local_matrix = matrix,
            Self::Color(_) | Self::PerlinNoiseFractalNoise(_) | Self::PerlinNoiseTurbulence(_) => {}
        }
        self
    }

    /// Returns `true` unless this is a gradient whose stops are malformed.
    ///
    /// Gradient stops are well formed when there is at least one color, the
    /// color and position lists have the same length, and positions are
    /// non-decreasing.
    pub fn gradient_is_well_formed(&self) -> bool {
        match self {
            Self::LinearGradient {
                colors, positions, ..
            }
            | Self::TwoPointConicalGradient {
                colors, positions, ..
            } => stops_are_well_formed(colors, positions),
            Self::Color(_)
            | Self::Picture { .. }
            | Self::PerlinNoiseFractalNoise(_)
            | Self::PerlinNoiseTurbulence(_) => true,
        }
    }
}

fn stops_are_well_formed(colors: &[Color], positions: &[f32]) -> bool {
    !colors.is_empty()
        && colors.len() == positions.len()
        && positions.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use peniko::color::palette::css;

    fn linear(colors: alloc::vec::Vec<Color>, positions: alloc::vec::Vec<f32>) -> Shader {
        Shader::linear_gradient(
            PointF::new(0.0, 0.0),
            PointF::new(10.0, 0.0),
            colors,
            positions,
            TileMode::Clamp,
        )
    }

    #[test]
    fn matching_stops_are_well_formed() {
        assert!(linear(vec![css::RED, css::BLUE], vec![0.0, 1.0]).gradient_is_well_formed());
        assert!(linear(vec![css::RED, css::RED], vec![0.5, 0.5]).gradient_is_well_formed());
    }

    #[test]
    fn mismatched_or_unsorted_stops_are_rejected() {
        assert!(!linear(vec![css::RED, css::BLUE], vec![0.0]).gradient_is_well_formed());
        assert!(!linear(vec![css::RED, css::BLUE], vec![1.0, 0.0]).gradient_is_well_formed());
        assert!(!linear(vec![], vec![]).gradient_is_well_formed());
    }

    #[test]
    fn with_local_matrix_only_touches_matrix_carriers() {
        let m = Matrix::translate(1.0, 2.0);
        let grad = linear(vec![css::RED], vec![0.0]).with_local_matrix(m);
        assert!(matches!(
            grad,
            Shader::LinearGradient {
                local_matrix: Some(lm),
                ..
            } if lm == m
        ));
        assert_eq!(
            Shader::Color(css::RED).with_local_matrix(m),
            Shader::Color(css::RED)
        );
    }
}
