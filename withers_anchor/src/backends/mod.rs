// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different lookup strategies.
//!
//! - `flatvec`: flat vector with a bounding-square scan (small, simple).
//! - `grid`: uniform grid over normalized space; queries visit only the cells
//!   overlapping the tolerance square.
//!
//! Per-illustration catalogs hold tens of anchors, where the flat scan is
//! hard to beat. The grid pays off once a single image carries hundreds.

pub mod flatvec;
pub mod grid;

pub use flatvec::FlatVec;
pub use grid::Grid;
