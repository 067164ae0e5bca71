// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slice-based nearest-anchor resolution.

use kurbo::Point;

use crate::types::{Anchored, Nearest, Tolerance};

/// Find the entity whose anchor is nearest to `point`, if it lies strictly
/// within `tolerance`.
///
/// Distances are Euclidean in normalized space. Among entities within the
/// radius the closest wins; equal distances resolve to the first one in
/// `entities` order. Returns `None` for an empty slice or when nothing is
/// close enough.
///
/// ```
/// use kurbo::Point;
/// use withers_anchor::{Tolerance, resolve};
///
/// let anchors = [Point::new(0.5, 0.5), Point::new(0.9, 0.1)];
/// let hit = resolve(Point::new(0.52, 0.49), &anchors, Tolerance::default());
/// assert_eq!(hit, Some(&anchors[0]));
/// assert!(resolve(Point::new(0.7, 0.7), &anchors, Tolerance::default()).is_none());
/// ```
pub fn resolve<E: Anchored>(point: Point, entities: &[E], tolerance: Tolerance) -> Option<&E> {
    let nearest = nearest_slot(point, entities, tolerance)?;
    entities.get(nearest.slot)
}

/// Like [`resolve`], but reports the winner's position and distance.
pub fn nearest_slot<E: Anchored>(
    point: Point,
    entities: &[E],
    tolerance: Tolerance,
) -> Option<Nearest> {
    if entities.is_empty() {
        return None;
    }
    let mut best: Option<Nearest> = None;
    for (slot, entity) in entities.iter().enumerate() {
        let candidate = Nearest {
            slot,
            distance: point.distance(entity.anchor()),
        };
        if !tolerance.admits(candidate.distance) {
            continue;
        }
        match best {
            Some(b) if !candidate.beats(&b) => {}
            _ => best = Some(candidate),
        }
    }
    best
}
