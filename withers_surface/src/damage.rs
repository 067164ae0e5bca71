// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accumulated redraw requests, drained with `take_damage`.

use alloc::vec::Vec;

use kurbo::Rect;

/// View-space regions that should be repainted.
///
/// `full` is set when everything drawn by the surface may have changed, such
/// as after a rebind or a geometry change; `dirty_rects` covers highlight
/// changes within an otherwise unchanged layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Damage {
    /// The whole view needs repainting.
    pub full: bool,
    /// View-space rectangles that should be repainted.
    pub dirty_rects: Vec<Rect>,
}

impl Damage {
    /// True if nothing needs repainting.
    pub fn is_empty(&self) -> bool {
        !self.full && self.dirty_rects.is_empty()
    }

    /// Returns the union of all damage rects.
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.dirty_rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// Request a full repaint.
    pub fn mark_full(&mut self) {
        self.full = true;
        self.dirty_rects.clear();
    }

    /// Request a repaint of `rect`. Subsumed by a pending full repaint.
    pub fn add_rect(&mut self, rect: Rect) {
        if !self.full {
            self.dirty_rects.push(rect);
        }
    }

    /// Fold `other` into `self`.
    pub fn merge(&mut self, other: Self) {
        if other.full {
            self.mark_full();
        } else {
            for r in other.dirty_rects {
                self.add_rect(r);
            }
        }
    }
}
