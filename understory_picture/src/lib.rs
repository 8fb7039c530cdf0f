// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Picture: a backend-agnostic picture IR.
//!
//! A [`Picture`] is an immutable, bounded list of canvas commands (clips,
//! save/restore, matrix changes, layers, and path draws). Paths, paints,
//! shaders, and effects are plain data built once by a producer (an SVG
//! loader, a layout engine, a test) and read by backends.
//!
//! # Position in the stack
//!
//! - **Producers** build [`Picture`] values. Parsing markup is not part of
//!   this crate.
//! - **The IR (this crate)** defines the data model, the [`PictureCanvas`]
//!   seam, and [`play`], which walks a picture against an explicit
//!   [`CanvasState`] and forwards each command to a canvas.
//! - **Backends** implement [`PictureCanvas`]. `understory_picture_skia`
//!   records into a Skia picture; `understory_picture_ref` traces calls for
//!   tests.
//!
//! # Core concepts
//!
//! - **Closed command sets**: [`PathCommand`], [`PictureCommand`],
//!   [`Shader`], [`ColorFilter`], [`ImageFilter`], and [`PathEffect`] are
//!   enums, so a backend that matches exhaustively handles every case.
//! - **Mapping inputs**: small attribute enums such as [`PaintStyle`]
//!   each list their variants in an `ALL` constant for table tests.
//! - **Reference geometry**: [`Path::to_bez_path`] and [`Path::contains`]
//!   interpret a command list with kurbo, independently of any backend.
//! - **Degradation**: backends drop effects they cannot express and record a
//!   [`Degradation`] in [`Diagnostics`] instead of failing.
//!
//! # Example
//!
//! ```
//! use understory_picture::{
//!     play, ClipOperation, Color, Matrix, Paint, Path, Picture, PictureCanvas, RectF,
//! };
//!
//! let bounds = RectF::new(0.0, 0.0, 100.0, 100.0);
//! let teal = Paint::fill(Color::from_rgb8(0, 128, 128));
//! let picture = Picture::new(bounds)
//!     .save()
//!     .clip_rect(RectF::new(10.0, 10.0, 90.0, 90.0), ClipOperation::Intersect, true)
//!     .draw_path(Path::new().add_circle(50.0, 50.0, 40.0), teal)
//!     .restore();
//!
//! struct Count(usize);
//! impl PictureCanvas for Count {
//!     fn clip_path(&mut self, _: &Path, _: ClipOperation, _: bool) { self.0 += 1; }
//!     fn clip_rect(&mut self, _: RectF, _: ClipOperation, _: bool) { self.0 += 1; }
//!     fn save(&mut self) { self.0 += 1; }
//!     fn save_layer(&mut self, _: Option<&Paint>) { self.0 += 1; }
//!     fn restore(&mut self) { self.0 += 1; }
//!     fn set_matrix(&mut self, _: &Matrix) { self.0 += 1; }
//!     fn draw_path(&mut self, _: &Path, _: &Paint) { self.0 += 1; }
//! }
//!
//! let mut canvas = Count(0);
//! let state = play(&picture, &mut canvas).unwrap();
//! assert_eq!(canvas.0, 4);
//! assert_eq!(state.depth(), 0);
//! ```

#![no_std]

extern crate alloc;

mod canvas;
mod diagnostics;
mod effects;
mod geometry;
mod paint;
mod path;
mod picture;
mod shader;
mod state;
mod style;

pub use peniko::Color;

pub use canvas::{PictureCanvas, play};
pub use diagnostics::{Attribute, Degradation, DegradationPolicy, Diagnostics, EffectKind};
pub use effects::{ColorFilter, CropRect, ImageFilter, PathEffect};
pub use geometry::{Affine, Matrix, PointF, RectF, SizeI};
pub use paint::{Paint, Typeface};
pub use path::{CONTAINS_TOLERANCE, Path, PathCommand};
pub use picture::{Picture, PictureCommand};
pub use shader::{PerlinNoise, Shader};
pub use state::{CanvasState, ClipRecord, ClipShape, Frame, FrameKind, PlaybackError};
pub use style::{
    ArcSize, BlendMode, ClipOperation, FILL_RULES, FillRule, FilterQuality, FontSlant, FontWeight,
    FontWidth, PaintStyle, StrokeCap, StrokeJoin, SweepDirection, TextAlign, TileMode,
};
