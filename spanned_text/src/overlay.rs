// Copyright 2026 the Adorned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

/// A specified text size.
///
/// Relative sizes are resolved by the display layer against whatever base it
/// considers current; this crate carries them through unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Size {
    /// An absolute size in pixels.
    Px(f32),
    /// A size relative to the surrounding font size.
    Em(f32),
    /// A size relative to the root font size.
    Rem(f32),
}

/// A packed 32-bit ARGB color (`0xAARRGGBB`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(
    /// The packed `0xAARRGGBB` value.
    pub u32,
);

impl Color {
    /// The conventional "unset" sentinel (`0`) used by attribute surfaces.
    pub const UNSET: Self = Self(0);

    /// Returns `true` if this is the unset sentinel.
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }
}

/// An opaque, cheaply cloneable handle to a resolved font.
///
/// What a font actually *is* belongs to the embedder; composition only needs
/// identity, so the handle wraps the key it was resolved from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontHandle(Arc<str>);

impl FontHandle {
    /// Creates a handle from the embedder's font key.
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    /// Returns the embedder's font key.
    pub fn key(&self) -> &str {
        &self.0
    }
}

/// A single style declaration within an overlay.
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayDeclaration {
    /// Text size.
    Size(Size),
    /// Bold weight.
    Bold,
    /// Italic slant.
    Italic,
    /// Strikethrough decoration.
    Strikethrough,
    /// Underline decoration.
    Underline,
    /// Text color.
    Color(Color),
    /// A resolved font handle.
    Font(FontHandle),
    /// A font family name, used when no handle was resolved.
    FontFamily(Arc<str>),
}

/// A bundle of span attributes applied uniformly across a run's full extent.
///
/// This is a declaration list: declarations are kept in the order they were
/// pushed. Consumers that collapse duplicates of a property should treat the
/// last declaration as the winner.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleOverlay {
    declarations: Vec<OverlayDeclaration>,
}

impl StyleOverlay {
    /// Creates an empty overlay (no declarations).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the declarations in this overlay, in authoring order.
    #[inline]
    pub fn declarations(&self) -> &[OverlayDeclaration] {
        &self.declarations
    }

    /// Returns `true` if this overlay has no declarations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Appends a declaration to this overlay.
    #[inline]
    pub fn push_declaration(&mut self, declaration: OverlayDeclaration) {
        self.declarations.push(declaration);
    }

    /// Appends an arbitrary declaration.
    #[inline]
    pub fn push(mut self, declaration: OverlayDeclaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Sets the text size.
    #[inline]
    pub fn size(self, value: Size) -> Self {
        self.push(OverlayDeclaration::Size(value))
    }

    /// Sets bold weight.
    #[inline]
    pub fn bold(self) -> Self {
        self.push(OverlayDeclaration::Bold)
    }

    /// Sets italic slant.
    #[inline]
    pub fn italic(self) -> Self {
        self.push(OverlayDeclaration::Italic)
    }

    /// Sets strikethrough decoration.
    #[inline]
    pub fn strikethrough(self) -> Self {
        self.push(OverlayDeclaration::Strikethrough)
    }

    /// Sets underline decoration.
    #[inline]
    pub fn underline(self) -> Self {
        self.push(OverlayDeclaration::Underline)
    }

    /// Sets the text color.
    #[inline]
    pub fn color(self, value: Color) -> Self {
        self.push(OverlayDeclaration::Color(value))
    }

    /// Sets a resolved font handle.
    #[inline]
    pub fn font(self, value: FontHandle) -> Self {
        self.push(OverlayDeclaration::Font(value))
    }

    /// Sets a font family name.
    #[inline]
    pub fn font_family(self, value: impl Into<Arc<str>>) -> Self {
        self.push(OverlayDeclaration::FontFamily(value.into()))
    }
}
