// Copyright 2026 the Adorned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use crate::overlay::StyleOverlay;
use crate::source::{ResolveContext, TextSource};
use crate::value::TextValue;

/// A style overlay positioned over a byte range of rendered text.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSpan {
    /// The byte range in the rendered text.
    pub range: Range<usize>,
    /// The overlay applied across that range.
    pub overlay: StyleOverlay,
}

/// The flattened, display-ready form of a [`TextValue`].
///
/// This is what a host widget stores in its display buffer: the concatenated
/// text plus every overlay positioned at byte offsets. Spans are ordered by
/// run, then by overlay order within a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderedText {
    text: String,
    spans: Vec<StyleSpan>,
}

impl RenderedText {
    /// Returns the rendered text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the positioned style spans.
    #[inline]
    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    /// Returns `true` if no text was rendered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the rendered length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }
}

impl fmt::Display for RenderedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Renders `value` against `cx`, resolving deferred resource references.
///
/// An absent value renders to the empty result. A resource reference the
/// context cannot resolve contributes no text; a run that renders empty
/// contributes no spans either.
pub fn render(value: Option<&TextValue>, cx: &impl ResolveContext) -> RenderedText {
    let Some(value) = value else {
        return RenderedText::default();
    };
    let mut text = String::new();
    let mut spans = Vec::new();
    for run in &value.runs {
        let start = text.len();
        match &run.source {
            TextSource::Literal(s) => text.push_str(s),
            TextSource::Resource(id) => {
                if let Some(s) = cx.string(*id) {
                    text.push_str(&s);
                }
            }
        }
        let end = text.len();
        if start == end {
            continue;
        }
        for overlay in &run.overlays {
            spans.push(StyleSpan {
                range: start..end,
                overlay: overlay.clone(),
            });
        }
    }
    RenderedText { text, spans }
}
