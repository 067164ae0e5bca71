// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry helpers.

use kurbo::{Affine, Point, Rect};

/// Conservative axis-aligned bounds of `rect` after `affine`.
///
/// Exact for scale/translate transforms; encloses the rotated or sheared
/// quad otherwise.
pub(crate) fn transform_rect_bbox(affine: Affine, rect: Rect) -> Rect {
    let corners = [
        affine * Point::new(rect.x0, rect.y0),
        affine * Point::new(rect.x1, rect.y0),
        affine * Point::new(rect.x0, rect.y1),
        affine * Point::new(rect.x1, rect.y1),
    ];
    let mut out = Rect::from_points(corners[0], corners[0]);
    for p in &corners[1..] {
        out = out.union_pt(*p);
    }
    out
}
