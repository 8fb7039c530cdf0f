// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color filters, image filters, and path effects.

use alloc::boxed::Box;
use alloc::sync::Arc;

use peniko::Color;

use crate::geometry::RectF;
use crate::paint::Paint;
use crate::style::BlendMode;

/// Post-processing applied to every color a paint produces.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorFilter {
    /// Blend a constant color with the source using `mode`.
    Blend {
        /// Constant color.
        color: Color,
        /// Blend mode, with the constant color as source.
        mode: BlendMode,
    },
    /// Multiply RGBA by a 4x5 row-major matrix (the fifth column is a bias).
    ///
    /// A missing matrix means the producer could not build one; it is
    /// treated as no filter.
    ColorMatrix {
        /// Row-major 4x5 matrix.
        matrix: Option<[f32; 20]>,
    },
    /// Replace color with luminance-as-alpha.
    LumaColor,
}

/// Optional crop applied to an image filter's output.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CropRect {
    /// Crop bounds in local coordinates.
    pub rect: RectF,
}

impl CropRect {
    /// Create a crop rect.
    #[inline]
    pub const fn new(rect: RectF) -> Self {
        Self { rect }
    }
}

/// Filter applied to the rendered content of a layer or draw.
///
/// `input` fields name the filter providing this filter's source; `None`
/// means the unfiltered source content.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageFilter {
    /// Fill the crop region with a paint's shader or color.
    Paint {
        /// Paint providing the content; `None` is treated as no filter.
        paint: Option<Box<Paint>>,
        /// Region to fill.
        crop: Option<CropRect>,
    },
    /// Gaussian blur.
    Blur {
        /// Standard deviation along the X axis.
        sigma_x: f32,
        /// Standard deviation along the Y axis.
        sigma_y: f32,
        /// Source filter.
        input: Option<Arc<ImageFilter>>,
        /// Output crop.
        crop: Option<CropRect>,
    },
    /// Translate the source.
    Offset {
        /// Offset along the X axis.
        dx: f32,
        /// Offset along the Y axis.
        dy: f32,
        /// Source filter.
        input: Option<Arc<ImageFilter>>,
        /// Output crop.
        crop: Option<CropRect>,
    },
    /// Blurred, offset, tinted copy of the source alpha, drawn under the source.
    DropShadow {
        /// Shadow offset along the X axis.
        dx: f32,
        /// Shadow offset along the Y axis.
        dy: f32,
        /// Blur standard deviation along the X axis.
        sigma_x: f32,
        /// Blur standard deviation along the Y axis.
        sigma_y: f32,
        /// Shadow color.
        color: Color,
        /// Draw only the shadow, without the source on top.
        shadow_only: bool,
        /// Source filter.
        input: Option<Arc<ImageFilter>>,
        /// Output crop.
        crop: Option<CropRect>,
    },
    /// Apply a color filter to the source.
    ColorFilter {
        /// Color filter to apply.
        filter: ColorFilter,
        /// Source filter.
        input: Option<Arc<ImageFilter>>,
        /// Output crop.
        crop: Option<CropRect>,
    },
    /// Draw several filter results on top of each other, first at the bottom.
    Merge {
        /// Filters to merge; `None` entries stand for the source content.
        inputs: Arc<[Option<ImageFilter>]>,
        /// Output crop.
        crop: Option<CropRect>,
    },
}

impl ImageFilter {
    /// A paint filter covering `crop`.
    pub fn paint(paint: Paint, crop: Option<CropRect>) -> Self {
        Self::Paint {
            paint: Some(Box::new(paint)),
            crop,
        }
    }

    /// A uniform blur of the source content.
    pub const fn blur(sigma: f32) -> Self {
        Self::Blur {
            sigma_x: sigma,
            sigma_y: sigma,
            input: None,
            crop: None,
        }
    }

    /// An offset of the source content.
    pub const fn offset(dx: f32, dy: f32) -> Self {
        Self::Offset {
            dx,
            dy,
            input: None,
            crop: None,
        }
    }
}

/// Effect applied to geometry before it is stroked or filled.
#[derive(Clone, Debug, PartialEq)]
pub enum PathEffect {
    /// Dash the outline with alternating on/off intervals.
    Dash {
        /// On/off lengths; an even count of positive values.
        intervals: Arc<[f32]>,
        /// Offset into the interval pattern.
        phase: f32,
    },
}

impl PathEffect {
    /// Create a dash effect.
    pub fn dash(intervals: impl Into<Arc<[f32]>>, phase: f32) -> Self {
        Self::Dash {
            intervals: intervals.into(),
            phase,
        }
    }
}
