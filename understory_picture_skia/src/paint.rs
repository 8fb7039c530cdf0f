// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! IR paints to Skia paint state.

use skia_safe as sk;
use sk::utils::text_utils::Align;
use understory_picture::{Attribute, Degradation, Diagnostics, Paint, Typeface};

use crate::effects::{to_sk_color_filter, to_sk_image_filter, to_sk_path_effect};
use crate::mapping;
use crate::shader::to_sk_shader;

/// Everything a legacy canvas paint carried.
///
/// Skia split text and sampling state out of `SkPaint`, so a translated
/// paint is the Skia paint plus the font, text alignment, and sampling
/// options that go with it.
#[derive(Clone, Debug)]
pub struct SkiaPaint {
    /// Style, stroke, color, shader, filters, and blend mode.
    pub paint: sk::Paint,
    /// Text size and typeface.
    pub font: sk::Font,
    /// Horizontal text alignment.
    pub text_align: Align,
    /// Sampling for image draws.
    pub sampling: sk::SamplingOptions,
}

/// Translate a paint.
///
/// Sub-objects that cannot be built are left unset and recorded in
/// `diagnostics`; the rest of the paint is still applied.
pub fn to_sk_paint(paint: &Paint, diagnostics: &mut Diagnostics) -> SkiaPaint {
    let mut font = sk::Font::default();
    font.set_size(paint.text_size);
    if let Some(typeface) = &paint.typeface
        && let Some(resolved) = resolve_typeface(typeface, diagnostics)
    {
        font.set_typeface(resolved);
    }

    SkiaPaint {
        paint: to_sk_draw_paint(paint, diagnostics),
        font,
        text_align: mapping::text_align(paint.text_align),
        sampling: mapping::sampling(paint.filter_quality),
    }
}

/// Translate the part of a paint that path draws and layers use.
///
/// Skips font resolution entirely. The paint's filter quality still reaches
/// any picture shader.
pub fn to_sk_draw_paint(paint: &Paint, diagnostics: &mut Diagnostics) -> sk::Paint {
    let mut sk_paint = sk::Paint::default();
    sk_paint.set_style(mapping::paint_style(paint.style));
    sk_paint.set_anti_alias(paint.antialias);
    sk_paint.set_stroke_width(paint.stroke_width);
    sk_paint.set_stroke_cap(mapping::stroke_cap(paint.stroke_cap));
    sk_paint.set_stroke_join(mapping::stroke_join(paint.stroke_join));
    sk_paint.set_stroke_miter(paint.stroke_miter);
    // Absent color means transparent, not Skia's default black.
    sk_paint.set_color(paint.color.map_or(sk::Color::TRANSPARENT, mapping::color));
    sk_paint.set_blend_mode(mapping::blend_mode(paint.blend_mode));

    if let Some(shader) = &paint.shader {
        sk_paint.set_shader(to_sk_shader(shader, paint.filter_quality, diagnostics));
    }
    if let Some(filter) = &paint.color_filter {
        sk_paint.set_color_filter(to_sk_color_filter(filter, diagnostics));
    }
    if let Some(filter) = &paint.image_filter {
        sk_paint.set_image_filter(to_sk_image_filter(filter, diagnostics));
    }
    if let Some(effect) = &paint.path_effect {
        sk_paint.set_path_effect(to_sk_path_effect(effect, diagnostics));
    }
    sk_paint
}

/// Look up a typeface, falling back to the platform default face.
///
/// Only a missing family name is a degradation; an uninstalled family gets
/// whatever face the font manager substitutes.
fn resolve_typeface(typeface: &Typeface, diagnostics: &mut Diagnostics) -> Option<sk::Typeface> {
    let Some(family) = typeface.family_name.as_deref() else {
        diagnostics.record(Degradation::MissingAttribute(Attribute::TypefaceFamily));
        return None;
    };
    let style = sk::FontStyle::new(
        mapping::font_weight(typeface.weight),
        mapping::font_width(typeface.width),
        mapping::font_slant(typeface.slant),
    );
    let font_mgr = sk::FontMgr::new();
    font_mgr
        .match_family_style(family, style)
        .or_else(|| font_mgr.match_family_style("", style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_picture::{
        BlendMode, Color, FilterQuality, PaintStyle, PathEffect, PointF, Shader, StrokeCap,
        StrokeJoin, TextAlign, TileMode,
    };

    fn assert_same(a: &SkiaPaint, b: &SkiaPaint) {
        assert_eq!(a.paint.style(), b.paint.style());
        assert_eq!(a.paint.is_anti_alias(), b.paint.is_anti_alias());
        assert_eq!(a.paint.stroke_width(), b.paint.stroke_width());
        assert_eq!(a.paint.stroke_cap(), b.paint.stroke_cap());
        assert_eq!(a.paint.stroke_join(), b.paint.stroke_join());
        assert_eq!(a.paint.stroke_miter(), b.paint.stroke_miter());
        assert_eq!(a.paint.color(), b.paint.color());
        assert_eq!(a.paint.as_blend_mode(), b.paint.as_blend_mode());
        assert_eq!(a.paint.shader().is_some(), b.paint.shader().is_some());
        assert_eq!(a.paint.path_effect().is_some(), b.paint.path_effect().is_some());
        assert_eq!(a.font.size(), b.font.size());
        assert_eq!(a.text_align, b.text_align);
        assert_eq!(a.sampling.filter, b.sampling.filter);
        assert_eq!(a.sampling.use_cubic, b.sampling.use_cubic);
    }

    fn busy_paint() -> Paint {
        Paint::stroke(Color::from_rgba8(10, 20, 30, 200), 3.0)
            .with_stroke_style(StrokeCap::Round, StrokeJoin::Bevel, 2.0)
            .with_blend_mode(BlendMode::Screen)
            .with_filter_quality(FilterQuality::Medium)
            .with_text(20.0, TextAlign::Right, None)
            .with_path_effect(PathEffect::dash([5.0, 5.0], 1.0))
            .with_shader(Shader::linear_gradient(
                PointF::new(0.0, 0.0),
                PointF::new(10.0, 0.0),
                [Color::from_rgb8(0, 0, 0), Color::from_rgb8(255, 255, 255)],
                [0.0, 1.0],
                TileMode::Mirror,
            ))
    }

    #[test]
    fn translation_is_deterministic() {
        let paint = busy_paint();
        let mut d = Diagnostics::new();
        let a = to_sk_paint(&paint, &mut d);
        let b = to_sk_paint(&paint, &mut d);
        assert_same(&a, &b);
        assert!(d.is_empty());
    }

    #[test]
    fn scalar_fields_are_mapped() {
        let mut d = Diagnostics::new();
        let p = to_sk_paint(&busy_paint(), &mut d);
        assert_eq!(p.paint.style(), sk::PaintStyle::Stroke);
        assert_eq!(p.paint.stroke_width(), 3.0);
        assert_eq!(p.paint.stroke_cap(), sk::PaintCap::Round);
        assert_eq!(p.paint.stroke_join(), sk::PaintJoin::Bevel);
        assert_eq!(p.paint.stroke_miter(), 2.0);
        assert_eq!(p.paint.color(), sk::Color::from_argb(200, 10, 20, 30));
        assert_eq!(p.paint.as_blend_mode(), Some(sk::BlendMode::Screen));
        assert_eq!(p.font.size(), 20.0);
        assert_eq!(p.text_align, Align::Right);
        assert!(p.paint.shader().is_some());
        assert!(p.paint.path_effect().is_some());
    }

    #[test]
    fn absent_color_is_transparent() {
        let mut d = Diagnostics::new();
        let p = to_sk_paint(&Paint::default(), &mut d);
        assert_eq!(p.paint.color(), sk::Color::TRANSPARENT);
        assert!(p.paint.is_anti_alias());
        assert_eq!(p.paint.style(), sk::PaintStyle::Fill);
    }

    #[test]
    fn nameless_typeface_keeps_default() {
        let mut d = Diagnostics::new();
        let paint = Paint::default().with_text(
            12.0,
            TextAlign::Left,
            Some(Typeface {
                family_name: None,
                ..Typeface::default()
            }),
        );
        let p = to_sk_paint(&paint, &mut d);
        assert_eq!(p.font.size(), 12.0);
        assert_eq!(
            d.events(),
            [Degradation::MissingAttribute(Attribute::TypefaceFamily)]
        );
    }

    #[test]
    fn unknown_family_falls_back_silently() {
        let mut d = Diagnostics::new();
        let paint = Paint::fill(Color::from_rgb8(0, 0, 0)).with_text(
            12.0,
            TextAlign::Left,
            Some(Typeface::new("Understory No Such Family")),
        );
        let p = to_sk_paint(&paint, &mut d);
        assert_eq!(p.font.size(), 12.0);
        assert!(d.is_empty());
    }

    #[test]
    fn draw_paint_ignores_text_state() {
        let mut d = Diagnostics::new();
        let paint = busy_paint().with_text(
            30.0,
            TextAlign::Center,
            Some(Typeface {
                family_name: None,
                ..Typeface::default()
            }),
        );
        let draw = to_sk_draw_paint(&paint, &mut d);
        assert!(d.is_empty());
        assert_eq!(draw.color(), to_sk_paint(&busy_paint(), &mut d).paint.color());
        assert_eq!(draw.stroke_width(), 3.0);
    }

    #[test]
    fn failed_sub_objects_do_not_block_the_rest() {
        let mut d = Diagnostics::new();
        let paint = Paint::fill(Color::from_rgb8(1, 2, 3))
            .with_style(PaintStyle::StrokeAndFill)
            .with_path_effect(PathEffect::dash([1.0], 0.0));
        let p = to_sk_paint(&paint, &mut d);
        assert!(p.paint.path_effect().is_none());
        assert_eq!(p.paint.style(), sk::PaintStyle::StrokeAndFill);
        assert_eq!(p.paint.color(), sk::Color::from_rgb(1, 2, 3));
        assert_eq!(d.total(), 1);
    }
}
