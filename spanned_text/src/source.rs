// Copyright 2026 the Adorned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

/// Identifier for an externally defined string resource.
///
/// The meaning of the identifier belongs to the embedder's [`ResolveContext`];
/// this crate only threads it through to render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StringId(
    /// The embedder-defined resource identifier.
    pub u32,
);

/// The content of a single text run.
///
/// Resource references are deliberately kept unresolved here. Resolution
/// happens in [`render`](crate::render) against a [`ResolveContext`], so the
/// same value can be rendered against different contexts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextSource {
    /// Literal text.
    Literal(Arc<str>),
    /// A deferred string-resource reference.
    Resource(StringId),
}

/// Resolves deferred resource references at render time.
pub trait ResolveContext {
    /// Returns the string for `id`, or `None` if the context has no such
    /// resource.
    fn string(&self, id: StringId) -> Option<Arc<str>>;
}

impl<C: ResolveContext + ?Sized> ResolveContext for &C {
    fn string(&self, id: StringId) -> Option<Arc<str>> {
        (**self).string(id)
    }
}

/// A context with no resources; every lookup misses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoResources;

impl ResolveContext for NoResources {
    fn string(&self, _id: StringId) -> Option<Arc<str>> {
        None
    }
}
