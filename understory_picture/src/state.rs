// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit canvas state machine used to validate playback.
//!
//! [`CanvasState`] tracks what a canvas would track (current matrix, clip
//! list, save stack) without rendering anything. Playback drives it in
//! lockstep with the backend, so a malformed save/restore sequence is
//! reported as a [`PlaybackError`] instead of reaching the backend.

use alloc::vec::Vec;
use core::fmt;

use crate::geometry::{Matrix, RectF};
use crate::path::Path;
use crate::style::ClipOperation;

/// Error raised while playing a picture back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackError {
    /// A `Restore` was issued with no matching `Save` or `SaveLayer`.
    UnbalancedRestore {
        /// Index of the offending command.
        index: usize,
    },
    /// The picture ended with saves still open.
    UnclosedSave {
        /// Number of frames left on the stack.
        depth: usize,
    },
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnbalancedRestore { index } => {
                write!(f, "restore at command {index} has no matching save")
            }
            Self::UnclosedSave { depth } => {
                write!(f, "picture ended with {depth} unclosed save(s)")
            }
        }
    }
}

impl core::error::Error for PlaybackError {}

/// Geometry of a recorded clip.
#[derive(Clone, Debug, PartialEq)]
pub enum ClipShape {
    /// Rectangular clip.
    Rect(RectF),
    /// Path clip.
    Path(Path),
}

/// A clip applied while a given matrix was current.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipRecord {
    /// Clip geometry in local coordinates.
    pub shape: ClipShape,
    /// How the clip combined with the previous clip.
    pub operation: ClipOperation,
    /// Whether clip edges were antialiased.
    pub antialias: bool,
    /// Matrix current when the clip was applied.
    pub matrix: Matrix,
}

/// What pushed a [`Frame`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// A plain `Save`.
    Save,
    /// A `SaveLayer`.
    Layer,
}

/// Saved state restored by the matching `Restore`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// Matrix at the time of the save.
    pub matrix: Matrix,
    /// Number of clips at the time of the save.
    pub clip_depth: usize,
    /// Which command pushed this frame.
    pub kind: FrameKind,
}

/// Current matrix, clip list, and save stack of a canvas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasState {
    matrix: Matrix,
    clips: Vec<ClipRecord>,
    frames: Vec<Frame>,
}

impl CanvasState {
    /// Identity matrix, no clips, empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a plain save frame.
    pub fn save(&mut self) {
        self.push(FrameKind::Save);
    }

    /// Push a layer frame.
    pub fn save_layer(&mut self) {
        self.push(FrameKind::Layer);
    }

    /// Pop the top frame, restoring its matrix and clip list.
    ///
    /// `index` is only used to build the error.
    pub fn restore(&mut self, index: usize) -> Result<FrameKind, PlaybackError> {
        let frame = self
            .frames
            .pop()
            .ok_or(PlaybackError::UnbalancedRestore { index })?;
        self.matrix = frame.matrix;
        self.clips.truncate(frame.clip_depth);
        Ok(frame.kind)
    }

    /// Replace the current matrix.
    pub fn set_matrix(&mut self, matrix: Matrix) {
        self.matrix = matrix;
    }

    /// Append a clip under the current matrix.
    pub fn clip(&mut self, shape: ClipShape, operation: ClipOperation, antialias: bool) {
        self.clips.push(ClipRecord {
            shape,
            operation,
            antialias,
            matrix: self.matrix,
        });
    }

    /// Number of open frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Current matrix.
    pub fn matrix(&self) -> Matrix {
        self.matrix
    }

    /// Clips currently in effect, oldest first.
    pub fn clips(&self) -> &[ClipRecord] {
        &self.clips
    }

    /// Open frames, outermost first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    fn push(&mut self, kind: FrameKind) {
        self.frames.push(Frame {
            matrix: self.matrix,
            clip_depth: self.clips.len(),
            kind,
        });
    }
}
