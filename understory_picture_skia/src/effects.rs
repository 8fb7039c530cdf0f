// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color filters, image filters, and path effects.
//!
//! Every translator returns `None` for "no effect". Failures are recorded in
//! [`Diagnostics`] and never panic.

use alloc::vec::Vec;

use skia_safe as sk;
use sk::color_filters::Clamp;
use sk::image_filters::{self, CropRect as SkCropRect};
use understory_picture::{
    Attribute, ColorFilter, CropRect, Degradation, Diagnostics, EffectKind, ImageFilter,
    PathEffect,
};

use crate::mapping;
use crate::shader::to_sk_shader;

/// Translate a color filter.
pub fn to_sk_color_filter(
    filter: &ColorFilter,
    diagnostics: &mut Diagnostics,
) -> Option<sk::ColorFilter> {
    match filter {
        ColorFilter::Blend { color, mode } => {
            let built =
                sk::color_filters::blend(mapping::color(*color), mapping::blend_mode(*mode));
            if built.is_none() {
                diagnostics.record(Degradation::Unsupported(EffectKind::ColorFilter));
            }
            built
        }
        ColorFilter::ColorMatrix { matrix: Some(m) } => {
            Some(sk::color_filters::matrix_row_major(m, Clamp::Yes))
        }
        ColorFilter::ColorMatrix { matrix: None } => {
            diagnostics.record(Degradation::MissingAttribute(Attribute::ColorMatrix));
            None
        }
        ColorFilter::LumaColor => Some(sk::luma_color_filter::new()),
    }
}

/// Translate an image filter and its inputs.
pub fn to_sk_image_filter(
    filter: &ImageFilter,
    diagnostics: &mut Diagnostics,
) -> Option<sk::ImageFilter> {
    let built = match filter {
        ImageFilter::Paint { paint: None, .. } => {
            diagnostics.record(Degradation::MissingAttribute(Attribute::NestedPaint));
            return None;
        }
        ImageFilter::Paint {
            paint: Some(paint),
            crop,
        } => {
            // Paint image filters are gone from Skia; fill the crop with the
            // paint's shader (or color) and apply its color filter on top.
            let shader = match &paint.shader {
                Some(shader) => to_sk_shader(shader, paint.filter_quality, diagnostics),
                None => None,
            }
            .unwrap_or_else(|| {
                sk::shaders::color(paint.color.map_or(sk::Color::TRANSPARENT, mapping::color))
            });
            let source = image_filters::shader(shader, crop_rect(*crop));
            match (&paint.color_filter, source) {
                (Some(cf), Some(source)) => match to_sk_color_filter(cf, diagnostics) {
                    Some(cf) => image_filters::color_filter(cf, source, crop_rect(*crop)),
                    None => Some(source),
                },
                (_, source) => source,
            }
        }
        ImageFilter::Blur {
            sigma_x,
            sigma_y,
            input,
            crop,
        } => image_filters::blur(
            (*sigma_x, *sigma_y),
            None,
            input_filter(input.as_deref(), diagnostics),
            crop_rect(*crop),
        ),
        ImageFilter::Offset {
            dx,
            dy,
            input,
            crop,
        } => image_filters::offset(
            (*dx, *dy),
            input_filter(input.as_deref(), diagnostics),
            crop_rect(*crop),
        ),
        ImageFilter::DropShadow {
            dx,
            dy,
            sigma_x,
            sigma_y,
            color,
            shadow_only,
            input,
            crop,
        } => {
            let input = input_filter(input.as_deref(), diagnostics);
            let color = mapping::color(*color);
            if *shadow_only {
                image_filters::drop_shadow_only(
                    (*dx, *dy),
                    (*sigma_x, *sigma_y),
                    color,
                    None,
                    input,
                    crop_rect(*crop),
                )
            } else {
                image_filters::drop_shadow(
                    (*dx, *dy),
                    (*sigma_x, *sigma_y),
                    color,
                    None,
                    input,
                    crop_rect(*crop),
                )
            }
        }
        ImageFilter::ColorFilter {
            filter,
            input,
            crop,
        } => {
            let input = input_filter(input.as_deref(), diagnostics);
            let cf = to_sk_color_filter(filter, diagnostics)?;
            image_filters::color_filter(cf, input, crop_rect(*crop))
        }
        ImageFilter::Merge { inputs, crop } => {
            let inputs: Vec<Option<sk::ImageFilter>> = inputs
                .iter()
                .map(|input| input_filter(input.as_ref(), diagnostics))
                .collect();
            image_filters::merge(inputs, crop_rect(*crop))
        }
    };
    if built.is_none() {
        diagnostics.record(Degradation::Unsupported(EffectKind::ImageFilter));
    }
    built
}

/// Translate a path effect.
pub fn to_sk_path_effect(
    effect: &PathEffect,
    diagnostics: &mut Diagnostics,
) -> Option<sk::PathEffect> {
    match effect {
        PathEffect::Dash { intervals, phase } => {
            let built = sk::PathEffect::dash(intervals, *phase);
            if built.is_none() {
                diagnostics.record(Degradation::Unsupported(EffectKind::PathEffect));
            }
            built
        }
    }
}

/// `None` stands for the unfiltered source.
fn input_filter(
    input: Option<&ImageFilter>,
    diagnostics: &mut Diagnostics,
) -> Option<sk::ImageFilter> {
    input.and_then(|f| to_sk_image_filter(f, diagnostics))
}

fn crop_rect(crop: Option<CropRect>) -> SkCropRect {
    match crop {
        Some(crop) => SkCropRect::from(mapping::rect(crop.rect)),
        None => SkCropRect::NO_CROP_RECT,
    }
}
