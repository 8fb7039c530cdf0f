// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint: everything that describes how geometry is colored.

use alloc::string::String;

use peniko::Color;

use crate::effects::{ColorFilter, ImageFilter, PathEffect};
use crate::shader::Shader;
use crate::style::{
    BlendMode, FilterQuality, FontSlant, FontWeight, FontWidth, PaintStyle, StrokeCap, StrokeJoin,
    TextAlign,
};

/// Font selection request carried by a paint.
///
/// Only the description is stored; resolution to an actual font happens in
/// the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Typeface {
    /// Font family name; `None` selects the backend's default family.
    pub family_name: Option<String>,
    /// Weight class.
    pub weight: FontWeight,
    /// Width class.
    pub width: FontWidth,
    /// Slant.
    pub slant: FontSlant,
}

impl Typeface {
    /// A normal-weight, normal-width, upright typeface request for `family`.
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family_name: Some(family.into()),
            weight: FontWeight::Normal,
            width: FontWidth::Normal,
            slant: FontSlant::Upright,
        }
    }
}

/// Styling for a draw or a layer.
///
/// When both `shader` and `color` are set, the shader provides the color
/// and `color`'s alpha still modulates it, as on a canvas paint.
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    /// Fill, stroke, or both.
    pub style: PaintStyle,
    /// Whether edges are antialiased.
    pub antialias: bool,
    /// Stroke width; `0` means a hairline.
    pub stroke_width: f32,
    /// Stroke endpoint shape.
    pub stroke_cap: StrokeCap,
    /// Stroke corner shape.
    pub stroke_join: StrokeJoin,
    /// Miter limit for [`StrokeJoin::Miter`].
    pub stroke_miter: f32,
    /// Text size in points.
    pub text_size: f32,
    /// Horizontal text alignment.
    pub text_align: TextAlign,
    /// Font selection.
    pub typeface: Option<Typeface>,
    /// Solid color; `None` means transparent.
    pub color: Option<Color>,
    /// Shader overriding the solid color.
    pub shader: Option<Shader>,
    /// Color filter applied to the produced colors.
    pub color_filter: Option<ColorFilter>,
    /// Image filter applied to the draw.
    pub image_filter: Option<ImageFilter>,
    /// Geometry effect applied before painting.
    pub path_effect: Option<PathEffect>,
    /// Compositing mode.
    pub blend_mode: BlendMode,
    /// Image sampling quality.
    pub filter_quality: FilterQuality,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            style: PaintStyle::Fill,
            antialias: true,
            stroke_width: 0.0,
            stroke_cap: StrokeCap::Butt,
            stroke_join: StrokeJoin::Miter,
            stroke_miter: 4.0,
            text_size: 12.0,
            text_align: TextAlign::Left,
            typeface: None,
            color: None,
            shader: None,
            color_filter: None,
            image_filter: None,
            path_effect: None,
            blend_mode: BlendMode::SrcOver,
            filter_quality: FilterQuality::None,
        }
    }
}

impl Paint {
    /// A fill paint with a solid color.
    pub fn fill(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// A stroke paint with a solid color and width.
    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            style: PaintStyle::Stroke,
            stroke_width: width,
            color: Some(color),
            ..Self::default()
        }
    }

    /// Set the paint style.
    #[must_use]
    pub fn with_style(mut self, style: PaintStyle) -> Self {
        self.style = style;
        self
    }

    /// Enable or disable antialiasing.
    #[must_use]
    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    /// Set stroke cap and join.
    #[must_use]
    pub fn with_stroke_style(mut self, cap: StrokeCap, join: StrokeJoin, miter: f32) -> Self {
        self.stroke_cap = cap;
        self.stroke_join = join;
        self.stroke_miter = miter;
        self
    }

    /// Set text size, alignment, and typeface.
    #[must_use]
    pub fn with_text(mut self, size: f32, align: TextAlign, typeface: Option<Typeface>) -> Self {
        self.text_size = size;
        self.text_align = align;
        self.typeface = typeface;
        self
    }

    /// Set the solid color.
    #[must_use]
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    /// Set the shader.
    #[must_use]
    pub fn with_shader(mut self, shader: Shader) -> Self {
        self.shader = Some(shader);
        self
    }

    /// Set the color filter.
    #[must_use]
    pub fn with_color_filter(mut self, filter: ColorFilter) -> Self {
        self.color_filter = Some(filter);
        self
    }

    /// Set the image filter.
    #[must_use]
    pub fn with_image_filter(mut self, filter: ImageFilter) -> Self {
        self.image_filter = Some(filter);
        self
    }

    /// Set the path effect.
    #[must_use]
    pub fn with_path_effect(mut self, effect: PathEffect) -> Self {
        self.path_effect = Some(effect);
        self
    }

    /// Set the blend mode.
    #[must_use]
    pub fn with_blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = mode;
        self
    }

    /// Set the filter quality.
    #[must_use]
    pub fn with_filter_quality(mut self, quality: FilterQuality) -> Self {
        self.filter_quality = quality;
        self
    }
}
