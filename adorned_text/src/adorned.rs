// Copyright 2026 the Adorned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use spanned_text::{
    Color, FontHandle, RenderedText, ResolveContext, Size, TextValue, concatenate_text,
    overlay_style, render,
};

use crate::attrs::{AttributeSource, apply_attributes};
use crate::bundle::StyleBundle;
use crate::segment::{Segment, SegmentStyle, StyleFlags};

/// One of the five optional fragment positions composed into the final text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The leading fragment.
    Start,
    /// The delimiter between the leading and main fragments.
    StartDelimiter,
    /// The main fragment.
    Text,
    /// The delimiter between the main and trailing fragments.
    EndDelimiter,
    /// The trailing fragment.
    End,
}

/// The assembled text state of a decorated-text widget.
///
/// The controller owns five optional fragment slots and three segment style
/// descriptors, and maintains the composed value eagerly: every setter
/// recomputes it synchronously. Use [`AdornedText::builder`] to populate many
/// attributes with a single recompute, and
/// [`AdornedText::apply_style_bundle`] to apply a resolved bundle to one
/// segment with a single recompute.
#[derive(Clone, Debug)]
pub struct AdornedText {
    pub(crate) start: Option<TextValue>,
    pub(crate) start_delimiter: Option<TextValue>,
    pub(crate) text: Option<TextValue>,
    pub(crate) end_delimiter: Option<TextValue>,
    pub(crate) end: Option<TextValue>,
    pub(crate) start_style: SegmentStyle,
    pub(crate) middle_style: SegmentStyle,
    pub(crate) end_style: SegmentStyle,
    composed: Option<TextValue>,
    revision: u64,
    ready: bool,
}

impl Default for AdornedText {
    fn default() -> Self {
        Self::new()
    }
}

impl AdornedText {
    /// Creates an empty, ready controller.
    pub fn new() -> Self {
        Self {
            start: None,
            start_delimiter: None,
            text: None,
            end_delimiter: None,
            end: None,
            start_style: SegmentStyle::default(),
            middle_style: SegmentStyle::default(),
            end_style: SegmentStyle::default(),
            composed: None,
            revision: 0,
            ready: true,
        }
    }

    /// Starts a builder whose setters do not recompute.
    ///
    /// The single recompute happens in [`AdornedTextBuilder::finish`].
    pub fn builder() -> AdornedTextBuilder {
        let mut inner = Self::new();
        inner.ready = false;
        AdornedTextBuilder { inner }
    }

    /// Builds a controller from an attribute source with a single recompute.
    pub fn from_attributes(source: &impl AttributeSource) -> Self {
        let mut builder = Self::builder();
        builder.apply_attributes(source);
        builder.finish()
    }

    /// Stores `value` into `slot` and recomputes.
    pub fn set_slot(&mut self, slot: Slot, value: Option<TextValue>) {
        match slot {
            Slot::Start => self.start = value,
            Slot::StartDelimiter => self.start_delimiter = value,
            Slot::Text => self.text = value,
            Slot::EndDelimiter => self.end_delimiter = value,
            Slot::End => self.end = value,
        }
        self.recompute();
    }

    /// Returns the value currently stored in `slot`.
    pub fn slot(&self, slot: Slot) -> Option<&TextValue> {
        match slot {
            Slot::Start => self.start.as_ref(),
            Slot::StartDelimiter => self.start_delimiter.as_ref(),
            Slot::Text => self.text.as_ref(),
            Slot::EndDelimiter => self.end_delimiter.as_ref(),
            Slot::End => self.end.as_ref(),
        }
    }

    /// Replaces only the main slot with a value derived from `raw`.
    pub fn set_plain_text(&mut self, raw: Option<&str>) {
        self.set_slot(Slot::Text, raw.map(TextValue::literal));
    }

    /// Returns the style descriptor for `segment`.
    pub fn segment_style(&self, segment: Segment) -> &SegmentStyle {
        match segment {
            Segment::Start => &self.start_style,
            Segment::Middle => &self.middle_style,
            Segment::End => &self.end_style,
        }
    }

    pub(crate) fn segment_style_mut(&mut self, segment: Segment) -> &mut SegmentStyle {
        match segment {
            Segment::Start => &mut self.start_style,
            Segment::Middle => &mut self.middle_style,
            Segment::End => &mut self.end_style,
        }
    }

    /// Sets the text size for `segment` and recomputes.
    pub fn set_segment_size(&mut self, segment: Segment, size: Option<Size>) {
        self.segment_style_mut(segment).size = size;
        self.recompute();
    }

    /// Sets the style-flag bitset for `segment` and recomputes.
    pub fn set_segment_flags(&mut self, segment: Segment, flags: StyleFlags) {
        self.segment_style_mut(segment).flags = flags;
        self.recompute();
    }

    /// Sets the text color for `segment` and recomputes.
    ///
    /// [`Color::UNSET`] clears the color.
    pub fn set_segment_color(&mut self, segment: Segment, color: Color) {
        self.segment_style_mut(segment).color = color;
        self.recompute();
    }

    /// Sets the family-name fallback for `segment` and recomputes.
    pub fn set_segment_font_family(&mut self, segment: Segment, family: Option<Arc<str>>) {
        self.segment_style_mut(segment).font_family = family;
        self.recompute();
    }

    /// Sets the resolved font for `segment` and recomputes.
    pub fn set_segment_font(&mut self, segment: Segment, font: Option<FontHandle>) {
        self.segment_style_mut(segment).font = font;
        self.recompute();
    }

    /// Applies a resolved style bundle to `segment` with a single recompute.
    ///
    /// An absent bundle is a no-op: nothing is applied and nothing is
    /// recomputed. Fields the bundle did not resolve keep their previous
    /// values.
    pub fn apply_style_bundle(&mut self, segment: Segment, bundle: Option<&StyleBundle>) {
        let Some(bundle) = bundle else {
            #[cfg(feature = "tracing")]
            tracing::debug!(?segment, "absent style bundle ignored");
            return;
        };
        self.segment_style_mut(segment).apply_bundle(bundle);
        self.recompute();
    }

    /// Returns the composed value, or `None` when every slot is absent.
    pub fn composed(&self) -> Option<&TextValue> {
        self.composed.as_ref()
    }

    /// Renders the composed value against `cx`.
    ///
    /// The composed value is maintained eagerly, so this always reflects the
    /// latest slot and style state.
    pub fn rendered_text(&self, cx: &impl ResolveContext) -> RenderedText {
        render(self.composed.as_ref(), cx)
    }

    /// Renders only the main slot against `cx`.
    pub fn main_text(&self, cx: &impl ResolveContext) -> RenderedText {
        render(self.text.as_ref(), cx)
    }

    /// Returns the number of recomputations performed so far.
    ///
    /// Embedders can compare revisions to detect composed-value changes
    /// without re-rendering.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn recompute(&mut self) {
        if !self.ready {
            return;
        }
        let start = overlay_style(self.start.clone(), self.start_style.overlay());
        let middle = overlay_style(self.text.clone(), self.middle_style.overlay());
        let end = overlay_style(self.end.clone(), self.end_style.overlay());

        let mut composed = concatenate_text(start, self.start_delimiter.clone());
        composed = concatenate_text(composed, middle);
        composed = concatenate_text(composed, self.end_delimiter.clone());
        composed = concatenate_text(composed, end);

        self.composed = composed;
        self.revision += 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(revision = self.revision, "recomputed composed text");
    }
}

/// Populates an [`AdornedText`] without intermediate recomputation.
///
/// Setters mirror the controller's setters. The single recompute happens in
/// [`finish`](Self::finish), which consumes the builder, so the suppressed
/// phase cannot be re-entered.
#[derive(Debug)]
#[must_use]
pub struct AdornedTextBuilder {
    inner: AdornedText,
}

impl AdornedTextBuilder {
    /// Stores `value` into `slot`.
    pub fn set_slot(&mut self, slot: Slot, value: Option<TextValue>) {
        self.inner.set_slot(slot, value);
    }

    /// Replaces only the main slot with a value derived from `raw`.
    pub fn set_plain_text(&mut self, raw: Option<&str>) {
        self.inner.set_plain_text(raw);
    }

    /// Sets the text size for `segment`.
    pub fn set_segment_size(&mut self, segment: Segment, size: Option<Size>) {
        self.inner.set_segment_size(segment, size);
    }

    /// Sets the style-flag bitset for `segment`.
    pub fn set_segment_flags(&mut self, segment: Segment, flags: StyleFlags) {
        self.inner.set_segment_flags(segment, flags);
    }

    /// Sets the text color for `segment`.
    pub fn set_segment_color(&mut self, segment: Segment, color: Color) {
        self.inner.set_segment_color(segment, color);
    }

    /// Sets the family-name fallback for `segment`.
    pub fn set_segment_font_family(&mut self, segment: Segment, family: Option<Arc<str>>) {
        self.inner.set_segment_font_family(segment, family);
    }

    /// Sets the resolved font for `segment`.
    pub fn set_segment_font(&mut self, segment: Segment, font: Option<FontHandle>) {
        self.inner.set_segment_font(segment, font);
    }

    /// Applies a resolved style bundle to `segment`.
    pub fn apply_style_bundle(&mut self, segment: Segment, bundle: Option<&StyleBundle>) {
        self.inner.apply_style_bundle(segment, bundle);
    }

    /// Applies every present attribute from `source`.
    pub fn apply_attributes(&mut self, source: &impl AttributeSource) {
        apply_attributes(&mut self.inner, source);
    }

    /// Finishes initialization and returns the controller.
    ///
    /// This performs exactly one recompute, regardless of how many attributes
    /// were set.
    pub fn finish(mut self) -> AdornedText {
        self.inner.ready = true;
        self.inner.recompute();
        self.inner
    }
}
