// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Degradation diagnostics.
//!
//! Translators never fail on an effect they cannot express; they drop it and
//! record a [`Degradation`] here instead. Callers decide through
//! [`DegradationPolicy`] whether a degraded render is acceptable.

use alloc::vec::Vec;
use core::fmt;

/// Which kind of effect a backend could not build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// A shader.
    Shader,
    /// A color filter.
    ColorFilter,
    /// An image filter.
    ImageFilter,
    /// A path effect.
    PathEffect,
}

/// An optional attribute whose absence forced a fallback.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// The matrix of a color-matrix filter.
    ColorMatrix,
    /// The paint of a paint image filter.
    NestedPaint,
    /// The family name of a typeface.
    TypefaceFamily,
}

/// A single dropped or substituted piece of a picture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Degradation {
    /// The backend rejected an effect and it was omitted.
    Unsupported(EffectKind),
    /// A gradient's stops were inconsistent and the shader was omitted.
    MalformedGradient,
    /// An optional attribute was missing and a default was used.
    MissingAttribute(Attribute),
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(kind) => write!(f, "unsupported {kind:?} omitted"),
            Self::MalformedGradient => f.write_str("malformed gradient stops; shader omitted"),
            Self::MissingAttribute(attr) => write!(f, "missing {attr:?}; default used"),
        }
    }
}

/// Whether degradations are acceptable during a render.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DegradationPolicy {
    /// Drop what cannot be expressed and keep rendering.
    #[default]
    Allow,
    /// Fail the render on the first degradation.
    Deny,
}

/// Ordered log of the degradations seen while translating a picture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    events: Vec<Degradation>,
}

impl Diagnostics {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append a degradation.
    pub fn record(&mut self, degradation: Degradation) {
        self.events.push(degradation);
    }

    /// All degradations in the order they were recorded.
    pub fn events(&self) -> &[Degradation] {
        &self.events
    }

    /// Number of times `degradation` was recorded.
    pub fn count(&self, degradation: Degradation) -> usize {
        self.events.iter().filter(|d| **d == degradation).count()
    }

    /// Total number of recorded degradations.
    pub fn total(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The first recorded degradation, if any.
    pub fn first(&self) -> Option<Degradation> {
        self.events.first().copied()
    }

    /// Forget all recorded degradations.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
