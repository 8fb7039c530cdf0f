// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Total lookup tables from IR attribute enums to Skia's.
//!
//! Each function is a single exhaustive `match`; adding a variant to an IR
//! enum is a compile error here until the table is extended.

use skia_safe as sk;
use sk::font_style::{Slant, Weight, Width};
use sk::utils::text_utils::Align;
use understory_picture::{
    ArcSize, BlendMode, ClipOperation, Color, FillRule, FilterQuality, FontSlant, FontWeight,
    FontWidth, Matrix, PaintStyle, PointF, RectF, StrokeCap, StrokeJoin, SweepDirection,
    TextAlign, TileMode,
};

/// Paint style.
pub fn paint_style(style: PaintStyle) -> sk::PaintStyle {
    match style {
        PaintStyle::Fill => sk::PaintStyle::Fill,
        PaintStyle::Stroke => sk::PaintStyle::Stroke,
        PaintStyle::StrokeAndFill => sk::PaintStyle::StrokeAndFill,
    }
}

/// Stroke cap.
pub fn stroke_cap(cap: StrokeCap) -> sk::PaintCap {
    match cap {
        StrokeCap::Butt => sk::PaintCap::Butt,
        StrokeCap::Round => sk::PaintCap::Round,
        StrokeCap::Square => sk::PaintCap::Square,
    }
}

/// Stroke join.
pub fn stroke_join(join: StrokeJoin) -> sk::PaintJoin {
    match join {
        StrokeJoin::Miter => sk::PaintJoin::Miter,
        StrokeJoin::Round => sk::PaintJoin::Round,
        StrokeJoin::Bevel => sk::PaintJoin::Bevel,
    }
}

/// Text alignment.
pub fn text_align(align: TextAlign) -> Align {
    match align {
        TextAlign::Left => Align::Left,
        TextAlign::Center => Align::Center,
        TextAlign::Right => Align::Right,
    }
}

/// Font weight.
pub fn font_weight(weight: FontWeight) -> Weight {
    match weight {
        FontWeight::Invisible => Weight::INVISIBLE,
        FontWeight::Thin => Weight::THIN,
        FontWeight::ExtraLight => Weight::EXTRA_LIGHT,
        FontWeight::Light => Weight::LIGHT,
        FontWeight::Normal => Weight::NORMAL,
        FontWeight::Medium => Weight::MEDIUM,
        FontWeight::SemiBold => Weight::SEMI_BOLD,
        FontWeight::Bold => Weight::BOLD,
        FontWeight::ExtraBold => Weight::EXTRA_BOLD,
        FontWeight::Black => Weight::BLACK,
        FontWeight::ExtraBlack => Weight::EXTRA_BLACK,
    }
}

/// Font width.
pub fn font_width(width: FontWidth) -> Width {
    match width {
        FontWidth::UltraCondensed => Width::ULTRA_CONDENSED,
        FontWidth::ExtraCondensed => Width::EXTRA_CONDENSED,
        FontWidth::Condensed => Width::CONDENSED,
        FontWidth::SemiCondensed => Width::SEMI_CONDENSED,
        FontWidth::Normal => Width::NORMAL,
        FontWidth::SemiExpanded => Width::SEMI_EXPANDED,
        FontWidth::Expanded => Width::EXPANDED,
        FontWidth::ExtraExpanded => Width::EXTRA_EXPANDED,
        FontWidth::UltraExpanded => Width::ULTRA_EXPANDED,
    }
}

/// Font slant.
pub fn font_slant(slant: FontSlant) -> Slant {
    match slant {
        FontSlant::Upright => Slant::Upright,
        FontSlant::Italic => Slant::Italic,
        FontSlant::Oblique => Slant::Oblique,
    }
}

/// Shader tile mode.
pub fn tile_mode(mode: TileMode) -> sk::TileMode {
    match mode {
        TileMode::Clamp => sk::TileMode::Clamp,
        TileMode::Repeat => sk::TileMode::Repeat,
        TileMode::Mirror => sk::TileMode::Mirror,
        TileMode::Decal => sk::TileMode::Decal,
    }
}

/// Blend mode.
pub fn blend_mode(mode: BlendMode) -> sk::BlendMode {
    match mode {
        BlendMode::Clear => sk::BlendMode::Clear,
        BlendMode::Src => sk::BlendMode::Src,
        BlendMode::Dst => sk::BlendMode::Dst,
        BlendMode::SrcOver => sk::BlendMode::SrcOver,
        BlendMode::DstOver => sk::BlendMode::DstOver,
        BlendMode::SrcIn => sk::BlendMode::SrcIn,
        BlendMode::DstIn => sk::BlendMode::DstIn,
        BlendMode::SrcOut => sk::BlendMode::SrcOut,
        BlendMode::DstOut => sk::BlendMode::DstOut,
        BlendMode::SrcATop => sk::BlendMode::SrcATop,
        BlendMode::DstATop => sk::BlendMode::DstATop,
        BlendMode::Xor => sk::BlendMode::Xor,
        BlendMode::Plus => sk::BlendMode::Plus,
        BlendMode::Modulate => sk::BlendMode::Modulate,
        BlendMode::Screen => sk::BlendMode::Screen,
        BlendMode::Overlay => sk::BlendMode::Overlay,
        BlendMode::Darken => sk::BlendMode::Darken,
        BlendMode::Lighten => sk::BlendMode::Lighten,
        BlendMode::ColorDodge => sk::BlendMode::ColorDodge,
        BlendMode::ColorBurn => sk::BlendMode::ColorBurn,
        BlendMode::HardLight => sk::BlendMode::HardLight,
        BlendMode::SoftLight => sk::BlendMode::SoftLight,
        BlendMode::Difference => sk::BlendMode::Difference,
        BlendMode::Exclusion => sk::BlendMode::Exclusion,
        BlendMode::Multiply => sk::BlendMode::Multiply,
        BlendMode::Hue => sk::BlendMode::Hue,
        BlendMode::Saturation => sk::BlendMode::Saturation,
        BlendMode::Color => sk::BlendMode::Color,
        BlendMode::Luminosity => sk::BlendMode::Luminosity,
    }
}

/// Filter quality.
///
/// Skia replaced the legacy quality levels with explicit sampling options;
/// this follows Skia's own legacy conversion.
pub fn sampling(quality: FilterQuality) -> sk::SamplingOptions {
    use sk::{CubicResampler, FilterMode, MipmapMode, SamplingOptions};

    match quality {
        FilterQuality::None => SamplingOptions::from(FilterMode::Nearest),
        FilterQuality::Low => SamplingOptions::from(FilterMode::Linear),
        FilterQuality::Medium => SamplingOptions::new(FilterMode::Linear, MipmapMode::Nearest),
        FilterQuality::High => SamplingOptions::from(CubicResampler::mitchell()),
    }
}

/// Filter quality for shaders that only take a filter mode.
///
/// Picture shaders have no cubic or mipmap option; every level above
/// `None` samples bilinearly.
pub fn filter_mode(quality: FilterQuality) -> sk::FilterMode {
    match quality {
        FilterQuality::None => sk::FilterMode::Nearest,
        FilterQuality::Low | FilterQuality::Medium | FilterQuality::High => {
            sk::FilterMode::Linear
        }
    }
}

/// Clip operation.
pub fn clip_op(operation: ClipOperation) -> sk::ClipOp {
    match operation {
        ClipOperation::Difference => sk::ClipOp::Difference,
        ClipOperation::Intersect => sk::ClipOp::Intersect,
    }
}

/// Path fill rule.
pub fn fill_type(rule: FillRule) -> sk::PathFillType {
    match rule {
        FillRule::NonZero => sk::PathFillType::Winding,
        FillRule::EvenOdd => sk::PathFillType::EvenOdd,
    }
}

/// Arc size.
pub fn arc_size(size: ArcSize) -> sk::path::ArcSize {
    match size {
        ArcSize::Small => sk::path::ArcSize::Small,
        ArcSize::Large => sk::path::ArcSize::Large,
    }
}

/// Arc sweep direction.
pub fn path_direction(sweep: SweepDirection) -> sk::PathDirection {
    match sweep {
        SweepDirection::Clockwise => sk::PathDirection::CW,
        SweepDirection::CounterClockwise => sk::PathDirection::CCW,
    }
}

/// Color, quantized to 8-bit sRGB.
pub fn color(color: Color) -> sk::Color {
    let rgba = color.to_rgba8();
    sk::Color::from_argb(rgba.a, rgba.r, rgba.g, rgba.b)
}

/// 3x3 matrix, perspective terms included.
pub fn matrix(m: &Matrix) -> sk::Matrix {
    sk::Matrix::new_all(
        m.scale_x, m.skew_x, m.trans_x, m.skew_y, m.scale_y, m.trans_y, m.persp0, m.persp1,
        m.persp2,
    )
}

/// Point.
pub fn point(p: PointF) -> sk::Point {
    sk::Point::new(p.x, p.y)
}

/// Rectangle.
pub fn rect(r: RectF) -> sk::Rect {
    sk::Rect::new(r.x0, r.y0, r.x1, r.y1)
}
