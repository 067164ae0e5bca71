// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Withers Anchor: tolerance-bounded nearest-anchor lookup in normalized space.
//!
//! Illustrations in the atlas mark each anatomical structure with an *anchor*:
//! a point expressed as fractions of the image's intrinsic width and height.
//! A touch, once mapped into the same normalized space, selects the anchor
//! nearest to it, provided that anchor lies strictly within a tolerance radius.
//!
//! - [`resolve`] answers that question for any slice of [`Anchored`] items.
//! - [`AnchorIndex`] keeps anchors with payloads behind a pluggable
//!   [`Backend`], for hosts that want to index once and query many times.
//! - [`Tolerance`] is the clamped radius shared by both.
//!
//! Both paths agree exactly, including ties: equal distances resolve to the
//! earliest anchor in iteration order. Catalogs are expected to space anchors
//! farther apart than the tolerance, so ties only arise in malformed data, but
//! the outcome is still deterministic.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use withers_anchor::{AnchorIndex, Tolerance};
//!
//! // Anchor ids ride along as payloads.
//! let mut idx: AnchorIndex<u32> = AnchorIndex::new();
//! idx.push(Point::new(0.30, 0.42), 101);
//! idx.push(Point::new(0.64, 0.40), 102);
//!
//! let (hit, id) = idx.nearest(Point::new(0.62, 0.41), Tolerance::default()).unwrap();
//! assert_eq!(id, 102);
//! assert_eq!(hit.slot, 1);
//!
//! assert!(idx.nearest(Point::new(0.5, 0.9), Tolerance::default()).is_none());
//! ```
//!
//! ## Choosing a backend
//!
//! - `FlatVec` (default): linear scan with a cheap bounding-square prefilter.
//!   The right choice for per-region catalogs of a few dozen anchors.
//! - `Grid`: uniform grid over normalized space. Queries touch only the cells
//!   under the tolerance square. Worth it for dense, hundreds-strong overlays.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod index;
pub mod resolve;
pub mod types;

pub use backend::Backend;
pub use backends::{FlatVec, Grid};
pub use index::{AnchorIndex, AnchorIndexGeneric};
pub use resolve::{nearest_slot, resolve};
pub use types::{Anchored, Nearest, Tolerance};
