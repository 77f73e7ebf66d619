// Copyright 2026 the Adorned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use bitflags::bitflags;
use spanned_text::{Color, FontHandle, Size, StyleOverlay};

use crate::bundle::{ResolvedFont, StyleBundle};

/// A logical position in the composed text with its own style descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// The leading fragment.
    Start,
    /// The main fragment.
    Middle,
    /// The trailing fragment.
    End,
}

bitflags! {
    /// Weight, slant, and decoration flags, combinable with bitwise OR.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u8 {
        /// Bold weight.
        const BOLD = 1;
        /// Italic slant.
        const ITALIC = 2;
        /// Underline decoration.
        const UNDERLINE = 4;
        /// Strikethrough decoration.
        const STRIKETHROUGH = 8;
    }
}

/// The desired styling for one logical text segment.
///
/// A descriptor with every field at its default produces no overlay. The
/// resolved font handle, when present, wins over the family-name string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentStyle {
    pub(crate) size: Option<Size>,
    pub(crate) flags: StyleFlags,
    pub(crate) color: Color,
    pub(crate) font_family: Option<Arc<str>>,
    pub(crate) font: Option<FontHandle>,
}

impl SegmentStyle {
    /// Returns the text size, if set.
    #[inline]
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Returns the style-flag bitset.
    #[inline]
    pub fn flags(&self) -> StyleFlags {
        self.flags
    }

    /// Returns the text color; [`Color::UNSET`] means no color is set.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the family-name fallback, if set.
    #[inline]
    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    /// Returns the resolved font handle, if set.
    #[inline]
    pub fn font(&self) -> Option<&FontHandle> {
        self.font.as_ref()
    }

    /// Folds all non-default attributes into a single overlay.
    ///
    /// Declarations are pushed in a fixed order (size, bold, italic,
    /// strikethrough, underline, color, font) so equal descriptors always
    /// produce equal overlays. Returns `None` when every field is at its
    /// default.
    pub fn overlay(&self) -> Option<StyleOverlay> {
        let mut overlay = StyleOverlay::new();
        if let Some(size) = self.size {
            overlay = overlay.size(size);
        }
        if self.flags.contains(StyleFlags::BOLD) {
            overlay = overlay.bold();
        }
        if self.flags.contains(StyleFlags::ITALIC) {
            overlay = overlay.italic();
        }
        if self.flags.contains(StyleFlags::STRIKETHROUGH) {
            overlay = overlay.strikethrough();
        }
        if self.flags.contains(StyleFlags::UNDERLINE) {
            overlay = overlay.underline();
        }
        if !self.color.is_unset() {
            overlay = overlay.color(self.color);
        }
        if let Some(font) = &self.font {
            overlay = overlay.font(font.clone());
        } else if let Some(family) = &self.font_family {
            overlay = overlay.font_family(family.clone());
        }
        if overlay.is_empty() { None } else { Some(overlay) }
    }

    /// Stores the outcome of object-first font resolution.
    ///
    /// The family-name fallback is only recorded while no font handle is
    /// held, so a previously resolved handle keeps winning.
    pub(crate) fn apply_resolved_font(&mut self, resolved: &ResolvedFont) {
        match resolved {
            ResolvedFont::Handle(handle) => self.font = Some(handle.clone()),
            ResolvedFont::Family(family) => {
                if self.font.is_none() {
                    self.font_family = Some(family.clone());
                }
            }
        }
    }

    /// Applies every field a bundle resolved; unresolved fields keep their
    /// previous values.
    pub(crate) fn apply_bundle(&mut self, bundle: &StyleBundle) {
        if let Some(color) = bundle.color {
            self.color = color;
        }
        if let Some(size) = bundle.size {
            self.size = Some(size);
        }
        if let Some(resolved) = &bundle.font {
            self.apply_resolved_font(resolved);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanned_text::OverlayDeclaration;

    #[test]
    fn default_descriptor_produces_no_overlay() {
        assert_eq!(SegmentStyle::default().overlay(), None);
    }

    #[test]
    fn declarations_come_out_in_fixed_order() {
        let style = SegmentStyle {
            size: Some(Size::Px(12.0)),
            flags: StyleFlags::BOLD | StyleFlags::UNDERLINE,
            color: Color(0xFF12_3456),
            font_family: Some(Arc::from("serif")),
            font: None,
        };
        let overlay = style.overlay().unwrap();
        assert_eq!(
            overlay.declarations(),
            &[
                OverlayDeclaration::Size(Size::Px(12.0)),
                OverlayDeclaration::Bold,
                OverlayDeclaration::Underline,
                OverlayDeclaration::Color(Color(0xFF12_3456)),
                OverlayDeclaration::FontFamily(Arc::from("serif")),
            ]
        );
    }

    #[test]
    fn bold_italic_combination_is_independent_of_decorations() {
        let style = SegmentStyle {
            flags: StyleFlags::from_bits_truncate(3),
            ..SegmentStyle::default()
        };
        let overlay = style.overlay().unwrap();
        assert_eq!(
            overlay.declarations(),
            &[OverlayDeclaration::Bold, OverlayDeclaration::Italic]
        );
    }

    #[test]
    fn font_handle_wins_over_family_name() {
        let style = SegmentStyle {
            font_family: Some(Arc::from("serif")),
            font: Some(FontHandle::new("fancy")),
            ..SegmentStyle::default()
        };
        let overlay = style.overlay().unwrap();
        assert_eq!(
            overlay.declarations(),
            &[OverlayDeclaration::Font(FontHandle::new("fancy"))]
        );
    }

    #[test]
    fn family_fallback_does_not_displace_a_resolved_handle() {
        let mut style = SegmentStyle::default();
        style.apply_resolved_font(&ResolvedFont::Handle(FontHandle::new("fancy")));
        style.apply_resolved_font(&ResolvedFont::Family(Arc::from("serif")));
        assert_eq!(style.font(), Some(&FontHandle::new("fancy")));
        assert_eq!(style.font_family(), None);
    }
}
