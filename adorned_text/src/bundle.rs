// Copyright 2026 the Adorned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::fmt;

use spanned_text::{Color, FontHandle, Size};

/// Why object-font resolution produced no font.
///
/// A miss is an ordinary value, not an unwind: it is an expected, common case
/// recovered by falling back to the family-name string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FontMiss {
    /// The reference does not denote a font resource.
    Unsupported,
    /// The reference denotes nothing the source knows about.
    NotFound,
}

impl fmt::Display for FontMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Unsupported => "reference is not a font resource",
            Self::NotFound => "font resource not found",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for FontMiss {}

/// The outcome of object-first font resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedFont {
    /// A resolved font handle.
    Handle(FontHandle),
    /// The family-name fallback.
    Family(Arc<str>),
}

/// An externally defined collection of style attributes applied to one
/// segment descriptor in a single batch.
///
/// Each field is resolved independently by the provider; a field the provider
/// could not resolve is `None` and leaves the descriptor's previous value in
/// place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleBundle {
    /// Text color, if the bundle defines one.
    pub color: Option<Color>,
    /// Text size, if the bundle defines one.
    pub size: Option<Size>,
    /// Object-first font resolution outcome, if the bundle defines a font.
    pub font: Option<ResolvedFont>,
}
