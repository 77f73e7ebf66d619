// Copyright 2026 the Adorned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use spanned_text::{Color, FontHandle, Size, StringId, TextValue};

use crate::adorned::AdornedText;
use crate::bundle::{FontMiss, ResolvedFont, StyleBundle};
use crate::segment::{Segment, StyleFlags};

/// Recognized configuration keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// The leading fragment's text.
    StartText,
    /// The trailing fragment's text.
    EndText,
    /// Text size for the start segment.
    StartTextSize,
    /// Text size for the middle segment.
    MiddleTextSize,
    /// Text size for the end segment.
    EndTextSize,
    /// Style-flag bitset for the start segment.
    StartTextStyle,
    /// Style-flag bitset for the middle segment.
    MiddleTextStyle,
    /// Style-flag bitset for the end segment.
    EndTextStyle,
    /// Text color for the start segment.
    StartTextColor,
    /// Text color for the middle segment.
    MiddleTextColor,
    /// Text color for the end segment.
    EndTextColor,
    /// Font for the start segment, object-first with family-name fallback.
    StartTextFontFamily,
    /// Font for the middle segment, object-first with family-name fallback.
    MiddleTextFontFamily,
    /// Font for the end segment, object-first with family-name fallback.
    EndTextFontFamily,
    /// The delimiter between the leading and main fragments.
    StartDelimiter,
    /// The delimiter between the main and trailing fragments.
    EndDelimiter,
    /// Style bundle for the start segment.
    StartTextAppearance,
    /// Style bundle for the middle segment.
    MiddleTextAppearance,
    /// Style bundle for the end segment.
    EndTextAppearance,
}

impl ConfigKey {
    /// Every recognized key, in the order bulk parsing applies them.
    pub const ALL: [Self; 19] = [
        Self::StartText,
        Self::EndText,
        Self::StartTextSize,
        Self::MiddleTextSize,
        Self::EndTextSize,
        Self::StartTextStyle,
        Self::MiddleTextStyle,
        Self::EndTextStyle,
        Self::StartTextColor,
        Self::MiddleTextColor,
        Self::EndTextColor,
        Self::StartTextFontFamily,
        Self::MiddleTextFontFamily,
        Self::EndTextFontFamily,
        Self::StartDelimiter,
        Self::EndDelimiter,
        Self::StartTextAppearance,
        Self::MiddleTextAppearance,
        Self::EndTextAppearance,
    ];

    /// Returns the segment a per-segment key styles, or `None` for slot keys.
    pub fn segment(self) -> Option<Segment> {
        match self {
            Self::StartTextSize
            | Self::StartTextStyle
            | Self::StartTextColor
            | Self::StartTextFontFamily
            | Self::StartTextAppearance => Some(Segment::Start),
            Self::MiddleTextSize
            | Self::MiddleTextStyle
            | Self::MiddleTextColor
            | Self::MiddleTextFontFamily
            | Self::MiddleTextAppearance => Some(Segment::Middle),
            Self::EndTextSize
            | Self::EndTextStyle
            | Self::EndTextColor
            | Self::EndTextFontFamily
            | Self::EndTextAppearance => Some(Segment::End),
            Self::StartText | Self::EndText | Self::StartDelimiter | Self::EndDelimiter => None,
        }
    }
}

/// An ordered set of typed configuration values.
///
/// This is the seam to the host framework's attribute storage. Getters return
/// `None` (or a [`FontMiss`]) when the key is absent or holds a value of the
/// wrong type; the caller keeps its previous value in that case.
pub trait AttributeSource {
    /// Returns `true` if the source carries a value for `key`.
    fn has(&self, key: ConfigKey) -> bool;

    /// Returns displayable text, possibly a deferred resource reference.
    fn text(&self, key: ConfigKey) -> Option<TextValue>;

    /// Returns a dimension in pixels.
    fn dimension(&self, key: ConfigKey) -> Option<f32>;

    /// Returns a style-flag bitset.
    fn flags(&self, key: ConfigKey) -> Option<StyleFlags>;

    /// Returns a color.
    fn color(&self, key: ConfigKey) -> Option<Color>;

    /// Returns a plain string.
    fn string(&self, key: ConfigKey) -> Option<Arc<str>>;

    /// Attempts object-font resolution for `key`.
    fn font(&self, key: ConfigKey) -> Result<FontHandle, FontMiss>;

    /// Resolves a style bundle reference.
    fn style_bundle(&self, key: ConfigKey) -> Option<StyleBundle>;
}

/// Object-first font resolution with family-name fallback.
///
/// A successful object resolution suppresses the fallback even when a family
/// string is also supplied; a miss falls back to [`AttributeSource::string`].
pub fn resolve_font(source: &impl AttributeSource, key: ConfigKey) -> Option<ResolvedFont> {
    match source.font(key) {
        Ok(handle) => Some(ResolvedFont::Handle(handle)),
        Err(_miss) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(?key, miss = %_miss, "object-font resolution missed, trying family name");
            source.string(key).map(ResolvedFont::Family)
        }
    }
}

/// A typed attribute value held by an [`AttributeList`].
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// Literal displayable text.
    Text(Arc<str>),
    /// A deferred string-resource reference.
    TextResource(StringId),
    /// A dimension in pixels.
    Dimension(f32),
    /// An integer; style-flag bitsets are carried this way.
    Int(u32),
    /// A color.
    Color(Color),
    /// A plain string (family names, delimiters).
    String(Arc<str>),
    /// A resolved font object.
    Font(FontHandle),
    /// A style bundle.
    Bundle(StyleBundle),
}

/// A vec-backed, ordered `(key, value)` attribute source.
///
/// When a key appears more than once, the last pair wins, matching the
/// declaration-list semantics used elsewhere in this workspace.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeList {
    pairs: Vec<(ConfigKey, AttrValue)>,
}

impl AttributeList {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a `(key, value)` pair.
    #[inline]
    pub fn set(&mut self, key: ConfigKey, value: AttrValue) {
        self.pairs.push((key, value));
    }

    /// Appends a `(key, value)` pair, builder style.
    #[inline]
    pub fn with(mut self, key: ConfigKey, value: AttrValue) -> Self {
        self.pairs.push((key, value));
        self
    }

    fn get(&self, key: ConfigKey) -> Option<&AttrValue> {
        self.pairs
            .iter()
            .rev()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, value)| value)
    }
}

impl AttributeSource for AttributeList {
    fn has(&self, key: ConfigKey) -> bool {
        self.get(key).is_some()
    }

    fn text(&self, key: ConfigKey) -> Option<TextValue> {
        match self.get(key)? {
            AttrValue::Text(s) | AttrValue::String(s) => Some(TextValue::literal(s.clone())),
            AttrValue::TextResource(id) => Some(TextValue::resource(*id)),
            _ => None,
        }
    }

    fn dimension(&self, key: ConfigKey) -> Option<f32> {
        match self.get(key)? {
            AttrValue::Dimension(value) => Some(*value),
            _ => None,
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "style flags live in the low byte; higher bits are ignored"
    )]
    fn flags(&self, key: ConfigKey) -> Option<StyleFlags> {
        match self.get(key)? {
            AttrValue::Int(value) => Some(StyleFlags::from_bits_truncate(*value as u8)),
            _ => None,
        }
    }

    fn color(&self, key: ConfigKey) -> Option<Color> {
        match self.get(key)? {
            AttrValue::Color(value) => Some(*value),
            _ => None,
        }
    }

    fn string(&self, key: ConfigKey) -> Option<Arc<str>> {
        match self.get(key)? {
            AttrValue::String(s) | AttrValue::Text(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn font(&self, key: ConfigKey) -> Result<FontHandle, FontMiss> {
        match self.get(key) {
            Some(AttrValue::Font(handle)) => Ok(handle.clone()),
            Some(_) => Err(FontMiss::Unsupported),
            None => Err(FontMiss::NotFound),
        }
    }

    fn style_bundle(&self, key: ConfigKey) -> Option<StyleBundle> {
        match self.get(key)? {
            AttrValue::Bundle(bundle) => Some(bundle.clone()),
            _ => None,
        }
    }
}

/// Applies every present attribute to `target` without recomputing.
///
/// Callers are responsible for recomputing afterwards; the builder does so in
/// `finish`.
pub(crate) fn apply_attributes(target: &mut AdornedText, source: &impl AttributeSource) {
    for key in ConfigKey::ALL {
        if !source.has(key) {
            continue;
        }
        match key {
            ConfigKey::StartText => {
                if let Some(value) = source.text(key) {
                    target.start = Some(value);
                }
            }
            ConfigKey::EndText => {
                if let Some(value) = source.text(key) {
                    target.end = Some(value);
                }
            }
            ConfigKey::StartDelimiter => {
                if let Some(s) = source.string(key) {
                    target.start_delimiter = Some(TextValue::literal(s));
                }
            }
            ConfigKey::EndDelimiter => {
                if let Some(s) = source.string(key) {
                    target.end_delimiter = Some(TextValue::literal(s));
                }
            }
            ConfigKey::StartTextSize | ConfigKey::MiddleTextSize | ConfigKey::EndTextSize => {
                let segment = key.segment().expect("size keys name a segment");
                if let Some(px) = source.dimension(key) {
                    target.segment_style_mut(segment).size = Some(Size::Px(px));
                }
            }
            ConfigKey::StartTextStyle | ConfigKey::MiddleTextStyle | ConfigKey::EndTextStyle => {
                let segment = key.segment().expect("style keys name a segment");
                if let Some(flags) = source.flags(key) {
                    target.segment_style_mut(segment).flags = flags;
                }
            }
            ConfigKey::StartTextColor | ConfigKey::MiddleTextColor | ConfigKey::EndTextColor => {
                let segment = key.segment().expect("color keys name a segment");
                if let Some(color) = source.color(key) {
                    target.segment_style_mut(segment).color = color;
                }
            }
            ConfigKey::StartTextFontFamily
            | ConfigKey::MiddleTextFontFamily
            | ConfigKey::EndTextFontFamily => {
                let segment = key.segment().expect("font keys name a segment");
                if let Some(resolved) = resolve_font(source, key) {
                    target.segment_style_mut(segment).apply_resolved_font(&resolved);
                }
            }
            ConfigKey::StartTextAppearance
            | ConfigKey::MiddleTextAppearance
            | ConfigKey::EndTextAppearance => {
                let segment = key.segment().expect("appearance keys name a segment");
                if let Some(bundle) = source.style_bundle(key) {
                    target.segment_style_mut(segment).apply_bundle(&bundle);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_pair_wins() {
        let attrs = AttributeList::new()
            .with(ConfigKey::StartTextColor, AttrValue::Color(Color(1)))
            .with(ConfigKey::StartTextColor, AttrValue::Color(Color(2)));
        assert_eq!(attrs.color(ConfigKey::StartTextColor), Some(Color(2)));
    }

    #[test]
    fn mistyped_values_read_as_absent() {
        let attrs = AttributeList::new().with(ConfigKey::StartTextSize, AttrValue::Int(3));
        assert!(attrs.has(ConfigKey::StartTextSize));
        assert_eq!(attrs.dimension(ConfigKey::StartTextSize), None);
    }

    #[test]
    fn font_getter_distinguishes_miss_kinds() {
        let attrs = AttributeList::new()
            .with(ConfigKey::StartTextFontFamily, AttrValue::String(Arc::from("serif")));
        assert_eq!(
            attrs.font(ConfigKey::StartTextFontFamily),
            Err(FontMiss::Unsupported)
        );
        assert_eq!(
            attrs.font(ConfigKey::EndTextFontFamily),
            Err(FontMiss::NotFound)
        );

        let attrs = attrs.with(
            ConfigKey::EndTextFontFamily,
            AttrValue::Font(FontHandle::new("fancy")),
        );
        assert_eq!(
            attrs.font(ConfigKey::EndTextFontFamily),
            Ok(FontHandle::new("fancy"))
        );
    }

    #[test]
    fn unsupported_font_reference_falls_back_to_family_name() {
        let attrs = AttributeList::new()
            .with(ConfigKey::StartTextFontFamily, AttrValue::String(Arc::from("serif")));
        assert_eq!(
            resolve_font(&attrs, ConfigKey::StartTextFontFamily),
            Some(ResolvedFont::Family(Arc::from("serif")))
        );
    }

    #[test]
    fn resolved_font_object_suppresses_fallback() {
        let attrs = AttributeList::new().with(
            ConfigKey::StartTextFontFamily,
            AttrValue::Font(FontHandle::new("fancy")),
        );
        assert_eq!(
            resolve_font(&attrs, ConfigKey::StartTextFontFamily),
            Some(ResolvedFont::Handle(FontHandle::new("fancy")))
        );
    }

    #[test]
    fn every_per_segment_key_names_its_segment() {
        for key in ConfigKey::ALL {
            match key {
                ConfigKey::StartText
                | ConfigKey::EndText
                | ConfigKey::StartDelimiter
                | ConfigKey::EndDelimiter => assert_eq!(key.segment(), None),
                _ => assert!(key.segment().is_some(), "{key:?} should name a segment"),
            }
        }
    }
}
