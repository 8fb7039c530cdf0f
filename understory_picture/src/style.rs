// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enumerated paint, text, path, and clip attributes.
//!
//! Every enum lists its variants in `ALL` (declaration order) so backends can
//! test their lookup tables exhaustively. The `Default` of each enum is its
//! first variant, except [`BlendMode`], which defaults to `SrcOver`.

pub use peniko::Fill as FillRule;

/// How geometry is painted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaintStyle {
    /// Fill the interior.
    #[default]
    Fill,
    /// Stroke the outline.
    Stroke,
    /// Fill the interior and stroke the outline.
    StrokeAndFill,
}

impl PaintStyle {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 3] = [Self::Fill, Self::Stroke, Self::StrokeAndFill];
}

/// Shape of stroke endpoints.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrokeCap {
    /// Flat end exactly at the endpoint.
    #[default]
    Butt,
    /// Semicircular end.
    Round,
    /// Square end extending half the stroke width.
    Square,
}

impl StrokeCap {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 3] = [Self::Butt, Self::Round, Self::Square];
}

/// Shape of stroke corners.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrokeJoin {
    /// Sharp corner, limited by the miter limit.
    #[default]
    Miter,
    /// Rounded corner.
    Round,
    /// Beveled corner.
    Bevel,
}

impl StrokeJoin {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 3] = [Self::Miter, Self::Round, Self::Bevel];
}

/// Horizontal text alignment relative to the drawing origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Text starts at the origin.
    #[default]
    Left,
    /// Text is centered on the origin.
    Center,
    /// Text ends at the origin.
    Right,
}

impl TextAlign {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];
}

/// Font weight classes, from `Invisible` (0) to `ExtraBlack` (1000).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Weight 0.
    #[default]
    Invisible,
    /// Weight 100.
    Thin,
    /// Weight 200.
    ExtraLight,
    /// Weight 300.
    Light,
    /// Weight 400.
    Normal,
    /// Weight 500.
    Medium,
    /// Weight 600.
    SemiBold,
    /// Weight 700.
    Bold,
    /// Weight 800.
    ExtraBold,
    /// Weight 900.
    Black,
    /// Weight 1000.
    ExtraBlack,
}

impl FontWeight {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Invisible,
        Self::Thin,
        Self::ExtraLight,
        Self::Light,
        Self::Normal,
        Self::Medium,
        Self::SemiBold,
        Self::Bold,
        Self::ExtraBold,
        Self::Black,
        Self::ExtraBlack,
    ];
}

/// Font width (stretch) classes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWidth {
    /// Width class 1.
    #[default]
    UltraCondensed,
    /// Width class 2.
    ExtraCondensed,
    /// Width class 3.
    Condensed,
    /// Width class 4.
    SemiCondensed,
    /// Width class 5.
    Normal,
    /// Width class 6.
    SemiExpanded,
    /// Width class 7.
    Expanded,
    /// Width class 8.
    ExtraExpanded,
    /// Width class 9.
    UltraExpanded,
}

impl FontWidth {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::UltraCondensed,
        Self::ExtraCondensed,
        Self::Condensed,
        Self::SemiCondensed,
        Self::Normal,
        Self::SemiExpanded,
        Self::Expanded,
        Self::ExtraExpanded,
        Self::UltraExpanded,
    ];
}

/// Font slant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontSlant {
    /// Upright glyphs.
    #[default]
    Upright,
    /// Italic glyphs.
    Italic,
    /// Obliqued upright glyphs.
    Oblique,
}

impl FontSlant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 3] = [Self::Upright, Self::Italic, Self::Oblique];
}

/// How a shader behaves outside of its defined extent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileMode {
    /// Extend the edge color.
    #[default]
    Clamp,
    /// Repeat the content.
    Repeat,
    /// Repeat the content, mirroring every other tile.
    Mirror,
    /// Transparent outside of the extent.
    Decal,
}

impl TileMode {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [Self::Clamp, Self::Repeat, Self::Mirror, Self::Decal];
}

/// Blend mode used to combine source and destination colors.
///
/// This covers the Porter-Duff operators, `Modulate`, and the separable and
/// non-separable blend modes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// `[0, 0]`
    Clear,
    /// `[Sa, Sc]`
    Src,
    /// `[Da, Dc]`
    Dst,
    /// Source over destination; the usual default.
    #[default]
    SrcOver,
    /// Destination over source.
    DstOver,
    /// Source inside destination.
    SrcIn,
    /// Destination inside source.
    DstIn,
    /// Source outside destination.
    SrcOut,
    /// Destination outside source.
    DstOut,
    /// Source atop destination.
    SrcATop,
    /// Destination atop source.
    DstATop,
    /// Source xor destination.
    Xor,
    /// Saturating sum.
    Plus,
    /// Component-wise product.
    Modulate,
    /// Screen.
    Screen,
    /// Overlay.
    Overlay,
    /// Darken.
    Darken,
    /// Lighten.
    Lighten,
    /// Color dodge.
    ColorDodge,
    /// Color burn.
    ColorBurn,
    /// Hard light.
    HardLight,
    /// Soft light.
    SoftLight,
    /// Difference.
    Difference,
    /// Exclusion.
    Exclusion,
    /// Multiply.
    Multiply,
    /// Hue of source with saturation and luminosity of destination.
    Hue,
    /// Saturation of source with hue and luminosity of destination.
    Saturation,
    /// Hue and saturation of source with luminosity of destination.
    Color,
    /// Luminosity of source with hue and saturation of destination.
    Luminosity,
}

impl BlendMode {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 29] = [
        Self::Clear,
        Self::Src,
        Self::Dst,
        Self::SrcOver,
        Self::DstOver,
        Self::SrcIn,
        Self::DstIn,
        Self::SrcOut,
        Self::DstOut,
        Self::SrcATop,
        Self::DstATop,
        Self::Xor,
        Self::Plus,
        Self::Modulate,
        Self::Screen,
        Self::Overlay,
        Self::Darken,
        Self::Lighten,
        Self::ColorDodge,
        Self::ColorBurn,
        Self::HardLight,
        Self::SoftLight,
        Self::Difference,
        Self::Exclusion,
        Self::Multiply,
        Self::Hue,
        Self::Saturation,
        Self::Color,
        Self::Luminosity,
    ];
}

/// Image sampling quality hint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterQuality {
    /// Nearest-neighbor sampling.
    #[default]
    None,
    /// Bilinear sampling.
    Low,
    /// Bilinear sampling with mipmaps.
    Medium,
    /// Bicubic sampling.
    High,
}

impl FilterQuality {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [Self::None, Self::Low, Self::Medium, Self::High];
}

/// How a clip shape combines with the current clip.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClipOperation {
    /// Remove the shape from the current clip.
    #[default]
    Difference,
    /// Intersect the current clip with the shape.
    Intersect,
}

impl ClipOperation {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 2] = [Self::Difference, Self::Intersect];
}

/// Which of the two candidate elliptical arcs an `ArcTo` selects.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ArcSize {
    /// The arc spanning at most 180 degrees.
    #[default]
    Small,
    /// The arc spanning at least 180 degrees.
    Large,
}

impl ArcSize {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 2] = [Self::Small, Self::Large];
}

/// Direction an `ArcTo` sweeps in, in a y-down coordinate system.
///
/// `Clockwise` corresponds to an SVG sweep flag of `1`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SweepDirection {
    /// Increasing angles.
    #[default]
    Clockwise,
    /// Decreasing angles.
    CounterClockwise,
}

impl SweepDirection {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 2] = [Self::Clockwise, Self::CounterClockwise];
}

/// Every fill rule, in declaration order.
pub const FILL_RULES: [FillRule; 2] = [FillRule::NonZero, FillRule::EvenOdd];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_distinct<T: PartialEq>(values: &[T]) -> bool {
        values
            .iter()
            .enumerate()
            .all(|(i, a)| values[i + 1..].iter().all(|b| a != b))
    }

    #[test]
    fn variant_lists_are_distinct() {
        assert!(all_distinct(&PaintStyle::ALL));
        assert!(all_distinct(&StrokeCap::ALL));
        assert!(all_distinct(&StrokeJoin::ALL));
        assert!(all_distinct(&TextAlign::ALL));
        assert!(all_distinct(&FontWeight::ALL));
        assert!(all_distinct(&FontWidth::ALL));
        assert!(all_distinct(&FontSlant::ALL));
        assert!(all_distinct(&TileMode::ALL));
        assert!(all_distinct(&BlendMode::ALL));
        assert!(all_distinct(&FilterQuality::ALL));
        assert!(all_distinct(&ClipOperation::ALL));
        assert!(all_distinct(&ArcSize::ALL));
        assert!(all_distinct(&SweepDirection::ALL));
        assert!(all_distinct(&FILL_RULES));
    }

    #[test]
    fn defaults_are_first_variants() {
        assert_eq!(PaintStyle::default(), PaintStyle::ALL[0]);
        assert_eq!(StrokeCap::default(), StrokeCap::ALL[0]);
        assert_eq!(FontWeight::default(), FontWeight::ALL[0]);
        assert_eq!(ClipOperation::default(), ClipOperation::ALL[0]);
        assert_eq!(FilterQuality::default(), FilterQuality::ALL[0]);
    }
}
