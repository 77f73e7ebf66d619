// Copyright 2026 the Adorned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text values with whole-span style overlays and deferred resource resolution.
//!
//! - [`TextValue`] is a sequence of runs, each pairing a [`TextSource`] with the
//!   overlays applied across that run's full extent.
//! - [`overlay_style`] and [`concatenate_text`] are the two combination
//!   operators. Both are total over optional operands: an absent operand is a
//!   concatenation identity, and an overlay never manufactures content from an
//!   absent base.
//! - [`render`] flattens a value against a [`ResolveContext`], producing the
//!   concatenated string plus every overlay positioned at byte offsets.
//!
//! ## Deferred resolution
//!
//! String-resource references are kept unresolved inside a [`TextValue`] and
//! are only looked up during [`render`]. The same abstract value can therefore
//! be rendered against different contexts.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for
//!   forward compatibility.
//!
//! ## Example
//!
//! ```
//! use spanned_text::{concatenate_text, overlay_style, render};
//! use spanned_text::{NoResources, StyleOverlay, TextValue};
//!
//! let greeting = overlay_style(
//!     Some(TextValue::literal("Hello")),
//!     Some(StyleOverlay::new().bold()),
//! );
//! let combined = concatenate_text(greeting, Some(TextValue::literal(", world")));
//!
//! let rendered = render(combined.as_ref(), &NoResources);
//! assert_eq!(rendered.as_str(), "Hello, world");
//! // The overlay covers only "Hello"; nothing bleeds across the join.
//! assert_eq!(rendered.spans()[0].range, 0..5);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod overlay;
mod render;
mod source;
mod value;

#[cfg(test)]
mod tests;

pub use crate::overlay::{Color, FontHandle, OverlayDeclaration, Size, StyleOverlay};
pub use crate::render::{RenderedText, StyleSpan, render};
pub use crate::source::{NoResources, ResolveContext, StringId, TextSource};
pub use crate::value::{TextValue, concatenate_text, overlay_style};
