// Copyright 2026 the Adorned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use smallvec::{SmallVec, smallvec};

use crate::overlay::StyleOverlay;
use crate::source::{StringId, TextSource};

/// One (source, overlays) unit inside a [`TextValue`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Run {
    pub(crate) source: TextSource,
    pub(crate) overlays: Vec<StyleOverlay>,
}

/// A unit of displayable text carrying zero or more whole-span style overlays.
///
/// A value is a sequence of runs. Concatenation appends run lists, so each
/// operand keeps its own overlays over its own content. Values are cheap to
/// clone: literal content is shared via `Arc<str>`.
///
/// The empty value (no runs) is a concatenation identity and behaves exactly
/// like an absent (`None`) operand.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextValue {
    pub(crate) runs: SmallVec<[Run; 2]>,
}

impl TextValue {
    /// Creates a value from literal text.
    ///
    /// An empty string produces the empty value.
    pub fn literal(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            runs: smallvec![Run {
                source: TextSource::Literal(text),
                overlays: Vec::new(),
            }],
        }
    }

    /// Creates a value that resolves `id` at render time.
    pub fn resource(id: StringId) -> Self {
        Self {
            runs: smallvec![Run {
                source: TextSource::Resource(id),
                overlays: Vec::new(),
            }],
        }
    }

    /// Returns `true` if this value has no runs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// Overlays `style` across the full extent of `base`.
///
/// Returns `base` unchanged when `style` is absent or empty, and absent when
/// `base` is absent: an overlay never manufactures content from nothing. The
/// overlay is appended after any overlays `base` already carries.
pub fn overlay_style(base: Option<TextValue>, style: Option<StyleOverlay>) -> Option<TextValue> {
    let Some(style) = style else {
        return base;
    };
    let mut base = base?;
    if style.is_empty() {
        return Some(base);
    }
    for run in &mut base.runs {
        run.overlays.push(style.clone());
    }
    Some(base)
}

/// Concatenates two optional values.
///
/// Absent and empty operands act as identities. Otherwise the result renders
/// as `a` immediately followed by `b`, with each operand's overlays staying on
/// its own runs; nothing bleeds across the join.
pub fn concatenate_text(a: Option<TextValue>, b: Option<TextValue>) -> Option<TextValue> {
    match (a, b) {
        (None, None) => None,
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (Some(mut a), Some(b)) => {
            a.runs.extend(b.runs);
            Some(a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_literal_is_the_empty_value() {
        assert!(TextValue::literal("").is_empty());
        assert!(!TextValue::literal("a").is_empty());
        assert!(!TextValue::resource(StringId(1)).is_empty());
    }

    #[test]
    fn empty_value_is_concatenation_identity() {
        let x = TextValue::literal("abc");
        assert_eq!(
            concatenate_text(Some(x.clone()), Some(TextValue::literal(""))),
            Some(x.clone())
        );
        assert_eq!(
            concatenate_text(Some(TextValue::literal("")), Some(x.clone())),
            Some(x)
        );
    }

    #[test]
    fn empty_overlay_is_not_attached() {
        let styled = overlay_style(Some(TextValue::literal("abc")), Some(StyleOverlay::new()));
        assert_eq!(styled, Some(TextValue::literal("abc")));
    }
}
