// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Picture Reference Canvas.
//!
//! This crate provides a small, stateful implementation of
//! [`PictureCanvas`] for **command tracing**.
//!
//! It is intentionally *not* a "reference renderer":
//! - It does **not** rasterize to pixels.
//! - It does **not** establish "golden" rendering behavior across backends.
//! - It is intended primarily for tests and debugging that want to assert on
//!   the commands a canvas receives and the canvas state at the time each
//!   command is applied.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use understory_picture::{
    CanvasState, ClipOperation, ClipShape, Matrix, Paint, Path, Picture, PictureCanvas,
    PictureCommand, PlaybackError, RectF, play,
};

/// Snapshot of the canvas state after a command was applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateSnapshot {
    /// Current matrix.
    pub matrix: Matrix,
    /// Number of clips in effect.
    pub clip_count: usize,
    /// Number of open saves and layers.
    pub save_depth: usize,
}

/// A command received by the canvas and the state right after applying it.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    /// Command as received.
    pub command: PictureCommand,
    /// State after the command.
    pub state: StateSnapshot,
}

/// Tracing implementation of [`PictureCanvas`].
///
/// This canvas:
/// - Tracks the current matrix, clip list, and save stack,
/// - Records an [`Event`] for every call, in order,
/// - Tolerates a `restore` with nothing to restore, counting it instead.
#[derive(Default, Debug)]
pub struct RefCanvas {
    events: Vec<Event>,
    state: CanvasState,
    unbalanced_restores: usize,
}

impl RefCanvas {
    /// Play `picture` onto a fresh canvas.
    pub fn record(picture: &Picture) -> Result<Self, PlaybackError> {
        let mut canvas = Self::default();
        play(picture, &mut canvas)?;
        Ok(canvas)
    }

    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The commands received, in order.
    pub fn commands(&self) -> impl Iterator<Item = &PictureCommand> + '_ {
        self.events.iter().map(|e| &e.command)
    }

    /// Snapshot of the current state.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            matrix: self.state.matrix(),
            clip_count: self.state.clips().len(),
            save_depth: self.state.depth(),
        }
    }

    /// Current tracked state.
    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    /// Number of `restore` calls that had nothing to restore.
    pub fn unbalanced_restores(&self) -> usize {
        self.unbalanced_restores
    }

    /// Clears recorded events but keeps the current state.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn push(&mut self, command: PictureCommand) {
        let state = self.snapshot();
        self.events.push(Event { command, state });
    }
}

impl PictureCanvas for RefCanvas {
    fn clip_path(&mut self, path: &Path, operation: ClipOperation, antialias: bool) {
        self.state.clip(ClipShape::Path(path.clone()), operation, antialias);
        self.push(PictureCommand::ClipPath {
            path: path.clone(),
            operation,
            antialias,
        });
    }

    fn clip_rect(&mut self, rect: RectF, operation: ClipOperation, antialias: bool) {
        self.state.clip(ClipShape::Rect(rect), operation, antialias);
        self.push(PictureCommand::ClipRect {
            rect,
            operation,
            antialias,
        });
    }

    fn save(&mut self) {
        self.state.save();
        self.push(PictureCommand::Save);
    }

    fn save_layer(&mut self, paint: Option<&Paint>) {
        self.state.save_layer();
        self.push(PictureCommand::SaveLayer(paint.cloned()));
    }

    fn restore(&mut self) {
        if self.state.restore(self.events.len()).is_err() {
            self.unbalanced_restores += 1;
        }
        self.push(PictureCommand::Restore);
    }

    fn set_matrix(&mut self, matrix: &Matrix) {
        self.state.set_matrix(*matrix);
        self.push(PictureCommand::SetMatrix(*matrix));
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        self.push(PictureCommand::DrawPath {
            path: path.clone(),
            paint: paint.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_picture::Color;

    fn bounds() -> RectF {
        RectF::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn save_clip_draw_restore_leaves_state_unchanged() {
        let before = RefCanvas::default().snapshot();
        let pic = Picture::new(bounds())
            .save()
            .clip_rect(
                RectF::new(10.0, 10.0, 50.0, 50.0),
                ClipOperation::Intersect,
                true,
            )
            .draw_path(
                Path::new().add_rect(bounds()),
                Paint::fill(Color::from_rgb8(255, 0, 0)),
            )
            .restore();
        let canvas = RefCanvas::record(&pic).expect("balanced picture");

        assert_eq!(canvas.events().len(), 4);
        assert_eq!(canvas.snapshot(), before);
        // The draw saw the clip.
        assert_eq!(canvas.events()[2].state.clip_count, 1);
        assert_eq!(canvas.events()[2].state.save_depth, 1);
    }

    #[test]
    fn commands_are_recorded_verbatim() {
        let pic = Picture::new(bounds())
            .save_layer(Some(Paint::default()))
            .set_matrix(Matrix::scale(2.0, 2.0))
            .restore();
        let canvas = RefCanvas::record(&pic).expect("balanced picture");
        let got: Vec<_> = canvas.commands().cloned().collect();
        assert_eq!(got, pic.commands);
        assert_eq!(canvas.events()[1].state.matrix, Matrix::scale(2.0, 2.0));
        assert!(canvas.snapshot().matrix.is_identity());
    }

    #[test]
    fn direct_restore_underflow_is_counted() {
        let mut canvas = RefCanvas::default();
        canvas.restore();
        canvas.save();
        canvas.restore();
        assert_eq!(canvas.unbalanced_restores(), 1);
        assert_eq!(canvas.snapshot().save_depth, 0);
    }

    #[test]
    fn playback_errors_surface_from_record() {
        let pic = Picture::new(bounds()).restore();
        assert_eq!(
            RefCanvas::record(&pic).map(|c| c.events().len()),
            Err(PlaybackError::UnbalancedRestore { index: 0 })
        );
    }

    #[test]
    fn clear_events_keeps_state() {
        let mut canvas = RefCanvas::default();
        canvas.save();
        canvas.set_matrix(&Matrix::translate(3.0, 4.0));
        canvas.clear_events();
        assert!(canvas.events().is_empty());
        assert_eq!(canvas.snapshot().save_depth, 1);
        assert_eq!(canvas.snapshot().matrix, Matrix::translate(3.0, 4.0));
    }
}
