// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `AnchorIndex` API and generic implementation over a pluggable backend.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;

use crate::backend::Backend;
use crate::backends::{FlatVec, Grid};
use crate::types::{Nearest, Tolerance};

#[derive(Clone, Debug)]
struct Entry<P> {
    anchor: Point,
    payload: P,
}

/// An ordered set of anchors with payloads, parameterized by a lookup backend.
///
/// Slots are assigned in insertion order starting at zero and are what the
/// tie-break compares: on equal distance the lower slot wins, exactly as
/// [`resolve`](crate::resolve) prefers the earlier element of a slice.
#[derive(Clone, Debug)]
pub struct AnchorIndexGeneric<P: Copy + Debug, B: Backend> {
    entries: Vec<Entry<P>>,
    backend: B,
}

impl<P, B> AnchorIndexGeneric<P, B>
where
    P: Copy + Debug,
    B: Backend + Default,
{
    /// Create an empty index using the backend's default constructor.
    pub fn new() -> Self {
        Self::with_backend(B::default())
    }
}

impl<P, B> Default for AnchorIndexGeneric<P, B>
where
    P: Copy + Debug,
    B: Backend + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P, B> AnchorIndexGeneric<P, B>
where
    P: Copy + Debug,
    B: Backend,
{
    /// Create an empty index over an explicitly configured backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            entries: Vec::new(),
            backend,
        }
    }

    /// Reserve space for at least `n` more anchors.
    pub fn reserve(&mut self, n: usize) {
        self.entries.reserve(n);
    }

    /// Append an anchor with payload. Returns its slot.
    pub fn push(&mut self, anchor: Point, payload: P) -> usize {
        let slot = self.entries.len();
        self.entries.push(Entry { anchor, payload });
        self.backend.insert(slot, anchor);
        slot
    }

    /// Remove every anchor.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.backend.clear();
    }

    /// Number of anchors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the index holds no anchors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anchor and payload stored at `slot`.
    pub fn get(&self, slot: usize) -> Option<(Point, P)> {
        self.entries.get(slot).map(|e| (e.anchor, e.payload))
    }

    /// Iterate `(slot, anchor, payload)` in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Point, P)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (i, e.anchor, e.payload))
    }

    /// The nearest anchor strictly within `tolerance` of `pt`, with its payload.
    pub fn nearest(&self, pt: Point, tolerance: Tolerance) -> Option<(Nearest, P)> {
        if self.entries.is_empty() {
            return None;
        }
        let mut best: Option<Nearest> = None;
        for candidate in self.measure(pt, tolerance) {
            match best {
                Some(b) if !candidate.beats(&b) => {}
                _ => best = Some(candidate),
            }
        }
        best.map(|n| (n, self.entries[n.slot].payload))
    }

    /// Every anchor strictly within `tolerance` of `pt`, best first.
    pub fn within(&self, pt: Point, tolerance: Tolerance) -> Vec<(Nearest, P)> {
        if self.entries.is_empty() {
            return Vec::new();
        }
        let mut out: Vec<Nearest> = self.measure(pt, tolerance).collect();
        out.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(core::cmp::Ordering::Equal)
                .then(a.slot.cmp(&b.slot))
        });
        out.into_iter()
            .map(|n| (n, self.entries[n.slot].payload))
            .collect()
    }

    fn measure(&self, pt: Point, tolerance: Tolerance) -> impl Iterator<Item = Nearest> + '_ {
        self.backend
            .candidates(pt, tolerance.get())
            .filter_map(move |slot| {
                let e = self.entries.get(slot)?;
                let distance = pt.distance(e.anchor);
                tolerance
                    .admits(distance)
                    .then_some(Nearest { slot, distance })
            })
    }
}

impl<P, B> FromIterator<(Point, P)> for AnchorIndexGeneric<P, B>
where
    P: Copy + Debug,
    B: Backend + Default,
{
    fn from_iter<I: IntoIterator<Item = (Point, P)>>(iter: I) -> Self {
        let mut idx = Self::new();
        for (anchor, payload) in iter {
            idx.push(anchor, payload);
        }
        idx
    }
}

/// Default index using a flat vector backend.
pub type AnchorIndex<P> = AnchorIndexGeneric<P, FlatVec>;

impl<P: Copy + Debug> AnchorIndex<P> {
    /// Create a grid-backed index with the given cell size in normalized units.
    pub fn with_uniform_grid(cell: f64) -> AnchorIndexGeneric<P, Grid> {
        AnchorIndexGeneric::with_backend(Grid::new(cell))
    }
}
