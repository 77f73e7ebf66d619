// Copyright 2026 the Adorned Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composite decorated-text state built on [`spanned_text`].
//!
//! An [`AdornedText`] owns up to five optional text fragments (start,
//! start-delimiter, main, end-delimiter, end) and three per-segment style
//! descriptors (start, middle, end). The composed value is always
//!
//! ```text
//! (start ⊕ startStyle) + startDelimiter + (main ⊕ middleStyle) + endDelimiter + (end ⊕ endStyle)
//! ```
//!
//! where `⊕` applies a style overlay and `+` concatenates with absent-operand
//! identity.
//!
//! ## Recomputation
//!
//! The composed value is maintained eagerly: every setter on a ready
//! controller recomputes it synchronously, so [`AdornedText::rendered_text`]
//! can be answered without deferred work. Two paths batch instead of
//! recomputing per attribute:
//!
//! - [`AdornedText::builder`] populates any number of slots and style
//!   attributes with a single recompute in
//!   [`finish`](AdornedTextBuilder::finish). Finishing consumes the builder,
//!   so the suppressed phase cannot be re-entered.
//! - [`AdornedText::apply_style_bundle`] applies a whole [`StyleBundle`] to
//!   one segment with a single recompute.
//!
//! [`AdornedText::revision`] counts recomputations, letting embedders (and
//! tests) observe the batching.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for
//!   forward compatibility.
//! - `tracing`: emits `tracing` events from recompute and resolution-miss
//!   paths.
//!
//! ## Example
//!
//! ```
//! use adorned_text::{AdornedText, NoResources, Segment, Slot, StyleFlags, TextValue};
//!
//! let mut builder = AdornedText::builder();
//! builder.set_slot(Slot::Start, Some(TextValue::literal("Dr.")));
//! builder.set_slot(Slot::StartDelimiter, Some(TextValue::literal(" ")));
//! builder.set_plain_text(Some("Watson"));
//! let mut text = builder.finish();
//!
//! assert_eq!(text.rendered_text(&NoResources).as_str(), "Dr. Watson");
//!
//! text.set_segment_flags(Segment::Start, StyleFlags::BOLD);
//! let rendered = text.rendered_text(&NoResources);
//! assert_eq!(rendered.spans()[0].range, 0..3);
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

mod adorned;
mod attrs;
mod bundle;
mod segment;


pub use crate::adorned::{AdornedText, AdornedTextBuilder, Slot};
pub use crate::attrs::{AttrValue, AttributeList, AttributeSource, ConfigKey, resolve_font};
pub use crate::bundle::{FontMiss, ResolvedFont, StyleBundle};
pub use crate::segment::{Segment, SegmentStyle, StyleFlags};

pub use spanned_text::{
    Color, FontHandle, NoResources, RenderedText, ResolveContext, Size, StringId, StyleOverlay,
    TextValue,
};
