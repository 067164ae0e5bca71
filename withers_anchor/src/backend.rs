// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for candidate lookup strategies.

use alloc::boxed::Box;
use core::fmt::Debug;

use kurbo::Point;

/// Broad-phase strategy used by [`AnchorIndexGeneric`](crate::AnchorIndexGeneric).
///
/// A backend only narrows the set of slots worth measuring. It may report
/// slots that turn out to be too far away, but it must never omit a slot whose
/// anchor lies within `radius` of the query point. The index performs the
/// exact distance test and the tie-break itself.
pub trait Backend: Debug {
    /// Record the anchor stored at `slot`.
    ///
    /// Slots arrive in ascending order starting at zero, one per anchor; the
    /// index never moves or removes an anchor short of [`Backend::clear`].
    fn insert(&mut self, slot: usize, anchor: Point);

    /// Forget every slot.
    fn clear(&mut self);

    /// Slots whose anchors may lie within `radius` of `pt`.
    fn candidates<'a>(&'a self, pt: Point, radius: f64) -> Box<dyn Iterator<Item = usize> + 'a>;
}
