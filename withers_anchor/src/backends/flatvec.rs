// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; good for tiny sets.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;

use crate::backend::Backend;

/// Flat vector backend with linear scans.
#[derive(Clone, Default)]
pub struct FlatVec {
    entries: Vec<Point>,
}

impl Debug for FlatVec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatVec")
            .field("slots", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Backend for FlatVec {
    fn insert(&mut self, slot: usize, anchor: Point) {
        debug_assert_eq!(slot, self.entries.len(), "slots are appended in order");
        self.entries.push(anchor);
    }
    fn clear(&mut self) {
        self.entries.clear();
    }
    fn candidates<'a>(&'a self, pt: Point, radius: f64) -> Box<dyn Iterator<Item = usize> + 'a> {
        let (x0, x1) = (pt.x - radius, pt.x + radius);
        let (y0, y1) = (pt.y - radius, pt.y + radius);
        Box::new(
            self.entries
                .iter()
                .enumerate()
                .filter(move |(_, a)| a.x >= x0 && a.x <= x1 && a.y >= y0 && a.y <= y1)
                .map(|(i, _)| i),
        )
    }
}
