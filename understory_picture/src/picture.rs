// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pictures: bounded, ordered lists of canvas commands.

use alloc::vec::Vec;

use crate::geometry::{Matrix, RectF};
use crate::paint::Paint;
use crate::path::Path;
use crate::style::ClipOperation;

/// A single canvas command.
#[derive(Clone, Debug, PartialEq)]
pub enum PictureCommand {
    /// Combine the current clip with a path.
    ClipPath {
        /// Clip geometry.
        path: Path,
        /// How the path combines with the current clip.
        operation: ClipOperation,
        /// Whether clip edges are antialiased.
        antialias: bool,
    },
    /// Combine the current clip with a rectangle.
    ClipRect {
        /// Clip rectangle.
        rect: RectF,
        /// How the rectangle combines with the current clip.
        operation: ClipOperation,
        /// Whether clip edges are antialiased.
        antialias: bool,
    },
    /// Push the current matrix and clip.
    Save,
    /// Pop the most recent `Save` or `SaveLayer`.
    Restore,
    /// Replace the current matrix.
    SetMatrix(Matrix),
    /// Push the current state and start an offscreen layer, composited with
    /// the paint (if any) on the matching `Restore`.
    SaveLayer(Option<Paint>),
    /// Draw a path.
    DrawPath {
        /// Geometry to draw.
        path: Path,
        /// Paint to draw with.
        paint: Paint,
    },
}

/// An immutable recording of canvas commands with a cull rectangle.
///
/// `Save`/`SaveLayer` and `Restore` are expected to nest; playback reports
/// mismatches as [`PlaybackError`](crate::PlaybackError)s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Picture {
    /// Bounds of the recorded content.
    pub cull_rect: RectF,
    /// Commands in playback order.
    pub commands: Vec<PictureCommand>,
}

impl Picture {
    /// Create an empty picture with the given cull rect.
    pub const fn new(cull_rect: RectF) -> Self {
        Self {
            cull_rect,
            commands: Vec::new(),
        }
    }

    /// Create a picture from existing commands.
    pub fn from_commands(cull_rect: RectF, commands: Vec<PictureCommand>) -> Self {
        Self {
            cull_rect,
            commands,
        }
    }

    /// Returns `true` if the picture has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Append a command.
    #[must_use]
    pub fn push(mut self, command: PictureCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Append a `ClipPath`.
    #[must_use]
    pub fn clip_path(self, path: Path, operation: ClipOperation, antialias: bool) -> Self {
        self.push(PictureCommand::ClipPath {
            path,
            operation,
            antialias,
        })
    }

    /// Append a `ClipRect`.
    #[must_use]
    pub fn clip_rect(self, rect: RectF, operation: ClipOperation, antialias: bool) -> Self {
        self.push(PictureCommand::ClipRect {
            rect,
            operation,
            antialias,
        })
    }

    /// Append a `Save`.
    #[must_use]
    pub fn save(self) -> Self {
        self.push(PictureCommand::Save)
    }

    /// Append a `SaveLayer`.
    #[must_use]
    pub fn save_layer(self, paint: Option<Paint>) -> Self {
        self.push(PictureCommand::SaveLayer(paint))
    }

    /// Append a `Restore`.
    #[must_use]
    pub fn restore(self) -> Self {
        self.push(PictureCommand::Restore)
    }

    /// Append a `SetMatrix`.
    #[must_use]
    pub fn set_matrix(self, matrix: Matrix) -> Self {
        self.push(PictureCommand::SetMatrix(matrix))
    }

    /// Append a `DrawPath`.
    #[must_use]
    pub fn draw_path(self, path: Path, paint: Paint) -> Self {
        self.push(PictureCommand::DrawPath { path, paint })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_append_in_order() {
        let rect = RectF::new(0.0, 0.0, 10.0, 10.0);
        let pic = Picture::new(rect)
            .save()
            .clip_rect(rect, ClipOperation::Intersect, true)
            .draw_path(Path::new().add_rect(rect), Paint::default())
            .restore();
        assert_eq!(pic.commands.len(), 4);
        assert_eq!(pic.commands[0], PictureCommand::Save);
        assert!(matches!(pic.commands[1], PictureCommand::ClipRect { .. }));
        assert!(matches!(pic.commands[2], PictureCommand::DrawPath { .. }));
        assert_eq!(pic.commands[3], PictureCommand::Restore);
    }
}
