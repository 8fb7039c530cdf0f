// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Playing pictures onto Skia canvases.

use core::fmt;

use skia_safe as sk;
use understory_picture::{
    ClipOperation, Diagnostics, Matrix, Paint, Path, Picture, PictureCanvas, RectF, play,
};

use crate::RenderError;
use crate::mapping;
use crate::paint::to_sk_draw_paint;
use crate::path::to_sk_path;

/// A [`PictureCanvas`] that forwards every command to a Skia canvas.
///
/// Paint translation failures are recorded in the borrowed [`Diagnostics`];
/// the command itself is still issued with whatever part of the paint could
/// be built.
pub struct SkiaCanvas<'a, 'd> {
    canvas: &'a sk::Canvas,
    diagnostics: &'d mut Diagnostics,
}

impl fmt::Debug for SkiaCanvas<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkiaCanvas")
            .field("save_count", &self.canvas.save_count())
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}

impl<'a, 'd> SkiaCanvas<'a, 'd> {
    /// Wrap a Skia canvas.
    pub fn new(canvas: &'a sk::Canvas, diagnostics: &'d mut Diagnostics) -> Self {
        Self {
            canvas,
            diagnostics,
        }
    }
}

impl PictureCanvas for SkiaCanvas<'_, '_> {
    fn clip_path(&mut self, path: &Path, operation: ClipOperation, antialias: bool) {
        self.canvas
            .clip_path(&to_sk_path(path), mapping::clip_op(operation), antialias);
    }

    fn clip_rect(&mut self, rect: RectF, operation: ClipOperation, antialias: bool) {
        self.canvas
            .clip_rect(mapping::rect(rect), mapping::clip_op(operation), antialias);
    }

    fn save(&mut self) {
        self.canvas.save();
    }

    fn save_layer(&mut self, paint: Option<&Paint>) {
        match paint {
            Some(paint) => {
                let translated = to_sk_draw_paint(paint, self.diagnostics);
                let rec = sk::canvas::SaveLayerRec::default().paint(&translated);
                self.canvas.save_layer(&rec);
            }
            None => {
                self.canvas.save_layer(&sk::canvas::SaveLayerRec::default());
            }
        }
    }

    fn restore(&mut self) {
        self.canvas.restore();
    }

    fn set_matrix(&mut self, matrix: &Matrix) {
        // Absolute, not concatenated onto the current matrix.
        self.canvas.reset_matrix();
        self.canvas.concat(&mapping::matrix(matrix));
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        let translated = to_sk_draw_paint(paint, self.diagnostics);
        self.canvas.draw_path(&to_sk_path(path), &translated);
    }
}

/// Record `picture` into a Skia picture bounded by its cull rectangle.
pub fn record_picture(
    picture: &Picture,
    diagnostics: &mut Diagnostics,
) -> Result<sk::Picture, RenderError> {
    let mut recorder = sk::PictureRecorder::new();
    let canvas = recorder.begin_recording(mapping::rect(picture.cull_rect), false);
    play(picture, &mut SkiaCanvas::new(canvas, diagnostics))?;
    recorder
        .finish_recording_as_picture(None)
        .ok_or(RenderError::EmptyRecording)
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_picture::{Color, PlaybackError};

    fn raster(width: i32, height: i32) -> sk::Surface {
        sk::surfaces::raster_n32_premul((width, height)).expect("raster surface")
    }

    #[test]
    fn balanced_picture_leaves_canvas_unchanged() {
        let mut surface = raster(32, 32);
        let canvas = surface.canvas();
        canvas.translate((3.0, 4.0));
        let save_count = canvas.save_count();
        let matrix = canvas.local_to_device_as_3x3();
        let clip = canvas.device_clip_bounds();

        let picture = Picture::new(RectF::new(0.0, 0.0, 32.0, 32.0))
            .save()
            .clip_rect(RectF::new(0.0, 0.0, 10.0, 10.0), ClipOperation::Intersect, true)
            .set_matrix(Matrix::scale(2.0, 2.0))
            .draw_path(
                Path::new().add_rect(RectF::new(0.0, 0.0, 10.0, 10.0)),
                Paint::fill(Color::from_rgb8(255, 0, 0)),
            )
            .restore();
        let mut d = Diagnostics::new();
        play(&picture, &mut SkiaCanvas::new(canvas, &mut d)).expect("balanced picture");

        assert_eq!(canvas.save_count(), save_count);
        assert_eq!(canvas.local_to_device_as_3x3(), matrix);
        assert_eq!(canvas.device_clip_bounds(), clip);
        assert!(d.is_empty());
    }

    #[test]
    fn set_matrix_replaces_the_current_matrix() {
        let mut surface = raster(8, 8);
        let canvas = surface.canvas();
        canvas.translate((5.0, 5.0));
        let mut d = Diagnostics::new();
        SkiaCanvas::new(canvas, &mut d).set_matrix(&Matrix::scale(2.0, 3.0));
        assert_eq!(canvas.local_to_device_as_3x3(), sk::Matrix::scale((2.0, 3.0)));
    }

    #[test]
    fn layers_pop_with_restore() {
        let mut surface = raster(8, 8);
        let canvas = surface.canvas();
        let base = canvas.save_count();
        let picture = Picture::new(RectF::new(0.0, 0.0, 8.0, 8.0))
            .save_layer(Some(Paint::default().with_color(Some(Color::from_rgba8(0, 0, 0, 128)))))
            .save_layer(None)
            .restore()
            .restore();
        let mut d = Diagnostics::new();
        play(&picture, &mut SkiaCanvas::new(canvas, &mut d)).expect("balanced layers");
        assert_eq!(canvas.save_count(), base);
    }

    #[test]
    fn recording_keeps_the_cull_rect() {
        let cull = RectF::new(0.0, 0.0, 40.0, 20.0);
        let picture = Picture::new(cull).draw_path(
            Path::new().add_circle(10.0, 10.0, 5.0),
            Paint::fill(Color::from_rgb8(0, 0, 255)),
        );
        let mut d = Diagnostics::new();
        let recorded = record_picture(&picture, &mut d).expect("recorded");
        assert_eq!(recorded.cull_rect(), mapping::rect(cull));
    }

    #[test]
    fn unbalanced_recording_fails() {
        let picture = Picture::new(RectF::new(0.0, 0.0, 8.0, 8.0)).save();
        let mut d = Diagnostics::new();
        assert_eq!(
            record_picture(&picture, &mut d).err(),
            Some(RenderError::Playback(PlaybackError::UnclosedSave { depth: 1 }))
        );
    }
}
