// Copyright 2026 the Adorned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    Color, NoResources, OverlayDeclaration, ResolveContext, Size, StringId, StyleOverlay,
    TextValue, concatenate_text, overlay_style, render,
};

/// Vec-backed resolve context for deferred-reference tests.
struct TestResources(Vec<(StringId, Arc<str>)>);

impl TestResources {
    fn new(entries: &[(u32, &str)]) -> Self {
        Self(
            entries
                .iter()
                .map(|&(id, s)| (StringId(id), Arc::from(s)))
                .collect(),
        )
    }
}

impl ResolveContext for TestResources {
    fn string(&self, id: StringId) -> Option<Arc<str>> {
        self.0
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, value)| value.clone())
    }
}

#[test]
fn absent_operands_are_concatenation_identities() {
    let x = TextValue::literal("abc");
    assert_eq!(concatenate_text(None, None), None);
    assert_eq!(concatenate_text(Some(x.clone()), None), Some(x.clone()));
    assert_eq!(concatenate_text(None, Some(x.clone())), Some(x));
}

#[test]
fn overlay_never_manufactures_content() {
    assert_eq!(overlay_style(None, Some(StyleOverlay::new().bold())), None);
}

#[test]
fn overlay_with_absent_style_is_identity() {
    let x = TextValue::literal("abc");
    assert_eq!(overlay_style(Some(x.clone()), None), Some(x));
}

#[test]
fn overlay_does_not_alter_prior_snapshots() {
    let x = TextValue::literal("abc");
    let before = render(Some(&x), &NoResources);

    let styled = overlay_style(Some(x.clone()), Some(StyleOverlay::new().bold()));
    assert_ne!(styled.as_ref(), Some(&x));

    // Re-rendering the original value yields the original output.
    let after = render(Some(&x), &NoResources);
    assert_eq!(before, after);
    assert!(after.spans().is_empty());
}

#[test]
fn concatenation_keeps_spans_at_original_offsets() {
    let a = overlay_style(
        Some(TextValue::literal("Hi")),
        Some(StyleOverlay::new().bold()),
    );
    let b = overlay_style(
        Some(TextValue::literal("Bye")),
        Some(StyleOverlay::new().color(Color(0xFF00_0000))),
    );
    let joined = concatenate_text(a, b);

    let rendered = render(joined.as_ref(), &NoResources);
    assert_eq!(rendered.as_str(), "HiBye");
    assert_eq!(rendered.spans().len(), 2);
    assert_eq!(rendered.spans()[0].range, 0..2);
    assert_eq!(
        rendered.spans()[0].overlay.declarations(),
        &[OverlayDeclaration::Bold]
    );
    assert_eq!(rendered.spans()[1].range, 2..5);
    assert_eq!(
        rendered.spans()[1].overlay.declarations(),
        &[OverlayDeclaration::Color(Color(0xFF00_0000))]
    );
}

#[test]
fn stacked_overlays_stay_ordered() {
    let styled = overlay_style(
        Some(TextValue::literal("abc")),
        Some(StyleOverlay::new().size(Size::Px(20.0))),
    );
    let styled = overlay_style(styled, Some(StyleOverlay::new().underline()));

    let rendered = render(styled.as_ref(), &NoResources);
    assert_eq!(rendered.spans().len(), 2);
    assert_eq!(
        rendered.spans()[0].overlay.declarations(),
        &[OverlayDeclaration::Size(Size::Px(20.0))]
    );
    assert_eq!(
        rendered.spans()[1].overlay.declarations(),
        &[OverlayDeclaration::Underline]
    );
}

#[test]
fn resources_resolve_at_render_time() {
    let value = concatenate_text(
        Some(TextValue::resource(StringId(7))),
        Some(TextValue::literal("!")),
    );

    let en = TestResources::new(&[(7, "Hello")]);
    let fr = TestResources::new(&[(7, "Bonjour")]);
    assert_eq!(render(value.as_ref(), &en).as_str(), "Hello!");
    assert_eq!(render(value.as_ref(), &fr).as_str(), "Bonjour!");
}

#[test]
fn unresolved_resource_renders_empty() {
    let styled = overlay_style(
        Some(TextValue::resource(StringId(9))),
        Some(StyleOverlay::new().italic()),
    );
    let value = concatenate_text(styled, Some(TextValue::literal("x")));

    let rendered = render(value.as_ref(), &NoResources);
    assert_eq!(rendered.as_str(), "x");
    // The empty run contributes no spans.
    assert!(rendered.spans().is_empty());
}

#[test]
fn absent_value_renders_empty() {
    let rendered = render(None, &NoResources);
    assert!(rendered.is_empty());
    assert_eq!(rendered.len(), 0);
    assert!(rendered.spans().is_empty());
}

#[test]
fn rendered_text_displays_its_content() {
    let value = TextValue::literal("abc");
    let rendered = render(Some(&value), &NoResources);
    assert_eq!(rendered.to_string(), "abc");
    assert_eq!(rendered.len(), 3);
}

#[test]
fn multibyte_content_keeps_byte_offsets() {
    let a = overlay_style(
        Some(TextValue::literal("é")),
        Some(StyleOverlay::new().bold()),
    );
    let joined = concatenate_text(a, Some(TextValue::literal("clair")));

    let rendered = render(joined.as_ref(), &NoResources);
    assert_eq!(rendered.as_str(), "éclair");
    // "é" is two bytes; the span covers exactly the first run.
    assert_eq!(rendered.spans()[0].range, 0..2);
}
