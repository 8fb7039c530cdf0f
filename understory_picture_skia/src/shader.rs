// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! IR shaders to Skia shaders.

use alloc::vec::Vec;

use skia_safe as sk;
use understory_picture::{
    Color, Degradation, Diagnostics, EffectKind, FilterQuality, Matrix, PerlinNoise, PointF,
    Shader, TileMode,
};

use crate::mapping;
use crate::playback::record_picture;

/// Translate a shader.
///
/// `quality` is the filter quality of the paint that owns the shader; it
/// decides how picture shaders sample their tile.
///
/// Returns `None` when the shader cannot be built; the reason is recorded in
/// `diagnostics`. A malformed gradient records
/// [`Degradation::MalformedGradient`] and never reaches Skia.
pub fn to_sk_shader(
    shader: &Shader,
    quality: FilterQuality,
    diagnostics: &mut Diagnostics,
) -> Option<sk::Shader> {
    if !shader.gradient_is_well_formed() {
        diagnostics.record(Degradation::MalformedGradient);
        return None;
    }
    let built = match shader {
        Shader::Color(color) => Some(sk::shaders::color(mapping::color(*color))),
        Shader::LinearGradient {
            start,
            end,
            colors,
            positions,
            mode,
            local_matrix,
        } => linear_gradient(*start, *end, colors, positions, *mode, local_matrix.as_ref()),
        Shader::TwoPointConicalGradient {
            start,
            start_radius,
            end,
            end_radius,
            colors,
            positions,
            mode,
            local_matrix,
        } => two_point_conical_gradient(
            (*start, *start_radius),
            (*end, *end_radius),
            colors,
            positions,
            *mode,
            local_matrix.as_ref(),
        ),
        Shader::Picture {
            picture,
            local_matrix,
            tile,
        } => match record_picture(picture, diagnostics) {
            Ok(picture) => {
                let m = mapping::matrix(local_matrix);
                let tile = mapping::rect(*tile);
                Some(picture.to_shader(
                    (sk::TileMode::Repeat, sk::TileMode::Repeat),
                    mapping::filter_mode(quality),
                    Some(&m),
                    Some(&tile),
                ))
            }
            // Only this shader is lost; the outer picture keeps playing.
            Err(err) => {
                log::warn!("picture shader dropped: {err}");
                None
            }
        },
        Shader::PerlinNoiseFractalNoise(noise) => {
            let (frequency, octaves, seed, tile) = noise_params(noise);
            sk::shaders::fractal_noise(frequency, octaves, seed, tile)
        }
        Shader::PerlinNoiseTurbulence(noise) => {
            let (frequency, octaves, seed, tile) = noise_params(noise);
            sk::shaders::turbulence(frequency, octaves, seed, tile)
        }
    };
    if built.is_none() {
        diagnostics.record(Degradation::Unsupported(EffectKind::Shader));
    }
    built
}

fn colors(colors: &[Color]) -> Vec<sk::Color> {
    colors.iter().map(|c| mapping::color(*c)).collect()
}

fn linear_gradient(
    start: PointF,
    end: PointF,
    stops: &[Color],
    positions: &[f32],
    mode: TileMode,
    local_matrix: Option<&Matrix>,
) -> Option<sk::Shader> {
    let colors = colors(stops);
    let local = local_matrix.map(mapping::matrix);
    sk::Shader::linear_gradient(
        (mapping::point(start), mapping::point(end)),
        colors.as_slice(),
        Some(positions),
        mapping::tile_mode(mode),
        None,
        local.as_ref(),
    )
}

fn two_point_conical_gradient(
    (start, start_radius): (PointF, f32),
    (end, end_radius): (PointF, f32),
    stops: &[Color],
    positions: &[f32],
    mode: TileMode,
    local_matrix: Option<&Matrix>,
) -> Option<sk::Shader> {
    let colors = colors(stops);
    let local = local_matrix.map(mapping::matrix);
    sk::Shader::two_point_conical_gradient(
        mapping::point(start),
        start_radius,
        mapping::point(end),
        end_radius,
        colors.as_slice(),
        Some(positions),
        mapping::tile_mode(mode),
        None,
        local.as_ref(),
    )
}

fn noise_params(noise: &PerlinNoise) -> ((f32, f32), usize, f32, Option<sk::ISize>) {
    let tile = (!noise.tile_size.is_empty())
        .then(|| sk::ISize::new(noise.tile_size.width, noise.tile_size.height));
    (
        (noise.base_frequency_x, noise.base_frequency_y),
        noise.octaves as usize,
        noise.seed,
        tile,
    )
}
