// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skia backend for the `understory_picture` IR.
//!
//! This crate records an [`understory_picture::Picture`] into an
//! [`sk::Picture`] using the `skia-safe` wrapper crate. Every IR construct
//! has a translator:
//!
//! - [`mapping`]: total lookup tables for attribute enums, matrices, and
//!   colors.
//! - [`path`]: path command lists to `SkPath`.
//! - [`shader`] and [`effects`]: shaders, color filters, image filters, and
//!   path effects. These return `None` when Skia cannot build the object.
//! - [`paint`]: full paints, including font and sampling state.
//! - [`playback`]: a [`PictureCanvas`](understory_picture::PictureCanvas)
//!   over an `SkCanvas`, and recording.
//!
//! Effects that cannot be expressed are dropped and recorded as
//! [`Degradation`]s. The plain [`render`] function tolerates them; a
//! [`Renderer`] configured with [`DegradationPolicy::Deny`] turns the first
//! one into an error.
//!
//! ```no_run
//! use understory_picture::{Color, Paint, Path, Picture, RectF};
//!
//! let picture = Picture::new(RectF::new(0.0, 0.0, 64.0, 64.0)).draw_path(
//!     Path::new().add_circle(32.0, 32.0, 24.0),
//!     Paint::fill(Color::from_rgb8(200, 40, 40)),
//! );
//! let recorded = understory_picture_skia::render(Some(&picture));
//! assert!(recorded.is_some());
//! ```

extern crate alloc;

use core::fmt;

use skia_safe as sk;
use understory_picture::{Degradation, DegradationPolicy, Diagnostics, Picture, PlaybackError};

pub mod effects;
pub mod mapping;
pub mod paint;
pub mod path;
pub mod playback;
pub mod shader;

pub use paint::{SkiaPaint, to_sk_draw_paint, to_sk_paint};
pub use playback::{SkiaCanvas, record_picture};

/// Error returned by [`Renderer::try_render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// The picture's save/restore structure is malformed.
    Playback(PlaybackError),
    /// Skia produced no picture for the recording.
    EmptyRecording,
    /// An effect was dropped while [`DegradationPolicy::Deny`] was in force.
    Degraded(Degradation),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playback(err) => write!(f, "playback failed: {err}"),
            Self::EmptyRecording => f.write_str("skia returned no picture for the recording"),
            Self::Degraded(degradation) => write!(f, "degraded output refused: {degradation}"),
        }
    }
}

impl core::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Playback(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PlaybackError> for RenderError {
    fn from(err: PlaybackError) -> Self {
        Self::Playback(err)
    }
}

/// Renderer configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// What to do when an effect cannot be expressed.
    pub degradation: DegradationPolicy,
}

/// Renders pictures and accumulates diagnostics across calls.
///
/// The diagnostics list grows with every degraded render and is never
/// trimmed automatically. A renderer that lives for many frames should drain
/// it with [`Renderer::take_diagnostics`] once the events have been handled.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    options: RenderOptions,
    diagnostics: Diagnostics,
}

impl Renderer {
    /// Create a renderer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the given options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            diagnostics: Diagnostics::new(),
        }
    }

    /// The options this renderer was created with.
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Render `picture`, logging and discarding any error.
    pub fn render(&mut self, picture: Option<&Picture>) -> Option<sk::Picture> {
        let picture = picture?;
        match self.try_render(picture) {
            Ok(recorded) => Some(recorded),
            Err(err) => {
                log::warn!("picture not rendered: {err}");
                None
            }
        }
    }

    /// Render `picture`.
    ///
    /// Degradations are appended to [`Renderer::diagnostics`] whatever the
    /// policy. Under [`DegradationPolicy::Deny`] the first degradation of
    /// this call is returned as [`RenderError::Degraded`].
    pub fn try_render(&mut self, picture: &Picture) -> Result<sk::Picture, RenderError> {
        let before = self.diagnostics.total();
        let recorded = record_picture(picture, &mut self.diagnostics);
        let fresh = self.diagnostics.events().get(before..).unwrap_or_default();
        for degradation in fresh {
            log::debug!("effect degraded: {degradation}");
        }
        let recorded = recorded?;
        match (self.options.degradation, fresh.first()) {
            (DegradationPolicy::Deny, Some(first)) => Err(RenderError::Degraded(*first)),
            _ => Ok(recorded),
        }
    }

    /// Degradations recorded so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Take the recorded degradations, leaving an empty list.
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        core::mem::take(&mut self.diagnostics)
    }
}

/// Render `picture` into a Skia picture with default options.
///
/// Returns `None` for `None` input and when playback fails; failures are
/// logged at `warn` level. Unsupported effects are dropped silently apart
/// from a `debug` log line.
pub fn render(picture: Option<&Picture>) -> Option<sk::Picture> {
    Renderer::new().render(picture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use understory_picture::{
        Attribute, ClipOperation, Color, ColorFilter, Paint, Path, RectF, TextAlign, Typeface,
    };

    fn square() -> Picture {
        Picture::new(RectF::new(0.0, 0.0, 16.0, 16.0)).draw_path(
            Path::new().add_rect(RectF::new(2.0, 2.0, 14.0, 14.0)),
            Paint::fill(Color::from_rgb8(0, 0, 0)),
        )
    }

    fn degraded() -> Picture {
        Picture::new(RectF::new(0.0, 0.0, 16.0, 16.0)).draw_path(
            Path::new().add_rect(RectF::new(2.0, 2.0, 14.0, 14.0)),
            Paint::fill(Color::from_rgb8(0, 0, 0))
                .with_color_filter(ColorFilter::ColorMatrix { matrix: None }),
        )
    }

    #[test]
    fn absent_picture_renders_nothing() {
        assert!(render(None).is_none());
    }

    #[test]
    fn simple_picture_renders() {
        assert!(render(Some(&square())).is_some());
    }

    #[test]
    fn unbalanced_picture_renders_nothing() {
        let picture = square().restore();
        assert!(render(Some(&picture)).is_none());
        let mut renderer = Renderer::new();
        assert_eq!(
            renderer.try_render(&picture).err(),
            Some(RenderError::Playback(PlaybackError::UnbalancedRestore {
                index: 1
            }))
        );
    }

    #[test]
    fn allow_policy_keeps_degraded_output() {
        let mut renderer = Renderer::new();
        assert!(renderer.try_render(&degraded()).is_ok());
        assert_eq!(
            renderer.diagnostics().events(),
            [Degradation::MissingAttribute(Attribute::ColorMatrix)]
        );
        let taken = renderer.take_diagnostics();
        assert_eq!(taken.total(), 1);
        assert!(renderer.diagnostics().is_empty());
    }

    #[test]
    fn deny_policy_reports_first_degradation() {
        let mut renderer = Renderer::with_options(RenderOptions {
            degradation: DegradationPolicy::Deny,
        });
        assert!(renderer.try_render(&square()).is_ok());
        let err = renderer.try_render(&degraded()).err();
        assert_eq!(
            err,
            Some(RenderError::Degraded(Degradation::MissingAttribute(
                Attribute::ColorMatrix
            )))
        );
        // Earlier degradations do not fail later clean renders.
        assert!(renderer.try_render(&square()).is_ok());
        assert!(renderer.render(Some(&degraded())).is_none());
    }

    #[test]
    fn diagnostics_accumulate_until_taken() {
        let mut renderer = Renderer::new();
        for _ in 0..3 {
            assert!(renderer.render(Some(&degraded())).is_some());
        }
        assert_eq!(renderer.diagnostics().total(), 3);
        assert_eq!(renderer.take_diagnostics().total(), 3);
        assert!(renderer.render(Some(&square())).is_some());
        assert!(renderer.diagnostics().is_empty());
    }

    #[test]
    fn uninstalled_family_does_not_fail_path_draws() {
        let picture = Picture::new(RectF::new(0.0, 0.0, 16.0, 16.0)).draw_path(
            Path::new().add_rect(RectF::new(2.0, 2.0, 14.0, 14.0)),
            Paint::fill(Color::from_rgb8(0, 0, 0)).with_text(
                12.0,
                TextAlign::Left,
                Some(Typeface::new("Understory No Such Family")),
            ),
        );
        let mut renderer = Renderer::with_options(RenderOptions {
            degradation: DegradationPolicy::Deny,
        });
        assert!(renderer.try_render(&picture).is_ok());
        assert!(renderer.diagnostics().is_empty());
    }

    #[test]
    fn errors_display() {
        let err = RenderError::from(PlaybackError::UnclosedSave { depth: 2 });
        assert_eq!(
            err.to_string(),
            "playback failed: picture ended with 2 unclosed save(s)"
        );
        let clip = Picture::new(RectF::new(0.0, 0.0, 4.0, 4.0)).clip_rect(
            RectF::new(0.0, 0.0, 2.0, 2.0),
            ClipOperation::Difference,
            false,
        );
        assert!(render(Some(&clip)).is_some());
    }
}
