// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend seam and the generic playback driver.

use crate::geometry::{Matrix, RectF};
use crate::paint::Paint;
use crate::path::Path;
use crate::picture::{Picture, PictureCommand};
use crate::state::{CanvasState, ClipShape, PlaybackError};
use crate::style::ClipOperation;

/// A canvas that pictures can be played onto.
///
/// Each method corresponds to exactly one [`PictureCommand`]. Implementations
/// may assume that calls arrive well nested: [`play`] never forwards a
/// `restore` without a matching `save` or `save_layer`.
pub trait PictureCanvas {
    /// Combine the current clip with a path.
    fn clip_path(&mut self, path: &Path, operation: ClipOperation, antialias: bool);

    /// Combine the current clip with a rectangle.
    fn clip_rect(&mut self, rect: RectF, operation: ClipOperation, antialias: bool);

    /// Push the current matrix and clip.
    fn save(&mut self);

    /// Push the current state and begin an offscreen layer.
    fn save_layer(&mut self, paint: Option<&Paint>);

    /// Pop the most recent save or layer.
    fn restore(&mut self);

    /// Replace the current matrix.
    fn set_matrix(&mut self, matrix: &Matrix);

    /// Draw a path.
    fn draw_path(&mut self, path: &Path, paint: &Paint);
}

/// Play `picture` onto `canvas`, one canvas call per command, in order.
///
/// Every command is first applied to a [`CanvasState`]; a `Restore` with no
/// open frame stops playback with [`PlaybackError::UnbalancedRestore`]
/// before anything is forwarded for it. Saves left open at the end yield
/// [`PlaybackError::UnclosedSave`]. On success the final state is returned;
/// it has an empty stack.
pub fn play<C>(picture: &Picture, canvas: &mut C) -> Result<CanvasState, PlaybackError>
where
    C: PictureCanvas + ?Sized,
{
    let mut state = CanvasState::new();
    for (index, command) in picture.commands.iter().enumerate() {
        match command {
            PictureCommand::ClipPath {
                path,
                operation,
                antialias,
            } => {
                state.clip(ClipShape::Path(path.clone()), *operation, *antialias);
                canvas.clip_path(path, *operation, *antialias);
            }
            PictureCommand::ClipRect {
                rect,
                operation,
                antialias,
            } => {
                state.clip(ClipShape::Rect(*rect), *operation, *antialias);
                canvas.clip_rect(*rect, *operation, *antialias);
            }
            PictureCommand::Save => {
                state.save();
                canvas.save();
            }
            PictureCommand::SaveLayer(paint) => {
                state.save_layer();
                canvas.save_layer(paint.as_ref());
            }
            PictureCommand::Restore => {
                state.restore(index)?;
                canvas.restore();
            }
            PictureCommand::SetMatrix(matrix) => {
                state.set_matrix(*matrix);
                canvas.set_matrix(matrix);
            }
            PictureCommand::DrawPath { path, paint } => canvas.draw_path(path, paint),
        }
    }
    match state.depth() {
        0 => Ok(state),
        depth => Err(PlaybackError::UnclosedSave { depth }),
    }
}
