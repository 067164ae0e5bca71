// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid backend over normalized space.

use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;

use crate::backend::Backend;

/// Uniform grid backend.
///
/// Buckets anchors into square cells of side `cell`. A query visits the cells
/// covered by the square of half-size `radius` around the query point and
/// reports their slots in ascending order. Anchors outside [0,1]² are still
/// bucketed; cells are keyed by signed indices.
#[derive(Clone)]
pub struct Grid {
    cell: f64,
    len: usize,
    cells: BTreeMap<(i64, i64), Vec<usize>>,
}

impl Grid {
    /// Cell size used by [`Grid::default`]: a 10×10 grid over the unit square.
    pub const DEFAULT_CELL: f64 = 0.1;

    /// Create a grid backend with the given cell size.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not a positive, finite number.
    pub fn new(cell: f64) -> Self {
        assert!(
            cell.is_finite() && cell > 0.0,
            "grid cell size must be positive and finite"
        );
        Self {
            cell,
            len: 0,
            cells: BTreeMap::new(),
        }
    }

    /// Returns the cell size.
    pub fn cell(&self) -> f64 {
        self.cell
    }

    #[inline]
    fn floor_to_i64(v: f64) -> i64 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Cell indices saturate for absurd coordinates; the query stays correct."
        )]
        let i = v as i64;
        if (i as f64) > v { i.saturating_sub(1) } else { i }
    }

    fn key_for(&self, x: f64, y: f64) -> (i64, i64) {
        (
            Self::floor_to_i64(x / self.cell),
            Self::floor_to_i64(y / self.cell),
        )
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CELL)
    }
}

impl Backend for Grid {
    fn insert(&mut self, slot: usize, anchor: Point) {
        debug_assert_eq!(slot, self.len, "slots are appended in order");
        self.len += 1;
        let key = self.key_for(anchor.x, anchor.y);
        self.cells.entry(key).or_default().push(slot);
    }
    fn clear(&mut self) {
        self.len = 0;
        self.cells.clear();
    }
    fn candidates<'a>(&'a self, pt: Point, radius: f64) -> Box<dyn Iterator<Item = usize> + 'a> {
        let (minx, miny) = self.key_for(pt.x - radius, pt.y - radius);
        let (maxx, maxy) = self.key_for(pt.x + radius, pt.y + radius);
        let mut set = BTreeSet::new();
        let columns = u64::try_from(maxx.saturating_sub(minx)).unwrap_or(0);
        if columns >= self.cells.len() as u64 {
            // Wider than the populated grid: cheaper to walk every cell.
            for (&(cx, cy), slots) in &self.cells {
                if (minx..=maxx).contains(&cx) && (miny..=maxy).contains(&cy) {
                    set.extend(slots.iter().copied());
                }
            }
            return Box::new(set.into_iter());
        }
        for cx in minx..=maxx {
            for (_, slots) in self.cells.range((cx, miny)..=(cx, maxy)) {
                set.extend(slots.iter().copied());
            }
        }
        Box::new(set.into_iter())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Grid")
            .field("cell", &self.cell)
            .field("slots", &self.len)
            .field("cells", &self.cells.len())
            .finish_non_exhaustive()
    }
}
