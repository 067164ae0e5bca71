// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The image→view display transform and its inverse.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::types::{EdgePolicy, ScaleMode};
use crate::util::transform_rect_bbox;

/// Forward mapping from intrinsic image pixels to view pixels, with a cached inverse.
///
/// A `DisplayTransform` only exists for usable geometry: positive, finite
/// image and view sizes and an invertible matrix. Everything that can fail
/// does so in [`DisplayTransform::compute`], so the mapping methods are total.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DisplayTransform {
    image: Size,
    forward: Affine,
    inverse: Affine,
}

impl DisplayTransform {
    /// Lay out an image of intrinsic size `image` inside a view of size `view`.
    ///
    /// Returns `None` if either size is empty or non-finite, or if the
    /// resulting matrix cannot be inverted.
    pub fn compute(image: Size, view: Size, mode: ScaleMode) -> Option<Self> {
        if !is_usable(image) || !is_usable(view) {
            return None;
        }
        let sx = view.width / image.width;
        let sy = view.height / image.height;
        let forward = match mode {
            ScaleMode::FitCenter => centered(image, view, sx.min(sy)),
            ScaleMode::CenterCrop => centered(image, view, sx.max(sy)),
            ScaleMode::Center => centered(image, view, 1.0),
            ScaleMode::FitXY => Affine::scale_non_uniform(sx, sy),
            ScaleMode::Matrix(m) => m,
        };
        Self::from_matrix(image, forward)
    }

    /// Wrap an explicit image→view matrix.
    ///
    /// Returns `None` if `image` is empty or non-finite or `forward` is singular.
    pub fn from_matrix(image: Size, forward: Affine) -> Option<Self> {
        if !is_usable(image) || !forward.is_finite() {
            return None;
        }
        let det = forward.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inverse = forward.inverse();
        if !inverse.is_finite() {
            return None;
        }
        Some(Self {
            image,
            forward,
            inverse,
        })
    }

    /// Intrinsic image size in pixels.
    pub fn image_size(&self) -> Size {
        self.image
    }

    /// Image→view matrix.
    pub fn forward(&self) -> Affine {
        self.forward
    }

    /// View→image matrix.
    pub fn inverse(&self) -> Affine {
        self.inverse
    }

    /// Map a view-space point to normalized image space, then apply `policy`.
    pub fn screen_to_normalized(&self, screen: Point, policy: EdgePolicy) -> Option<Point> {
        let img = self.inverse * screen;
        policy.apply(Point::new(img.x / self.image.width, img.y / self.image.height))
    }

    /// Map a normalized image point to view space.
    ///
    /// Inputs outside [0,1]² are mapped as-is.
    pub fn normalized_to_screen(&self, n: Point) -> Point {
        self.forward * Point::new(n.x * self.image.width, n.y * self.image.height)
    }

    /// Axis-aligned bounds of the displayed image in view space.
    pub fn image_bounds(&self) -> Rect {
        transform_rect_bbox(self.forward, self.image.to_rect())
    }

    /// View-space vectors covered by one normalized unit along x and along y.
    ///
    /// Useful for drawing a normalized tolerance radius, which becomes an
    /// ellipse on screen whenever the display scales the axes differently.
    pub fn normalized_extent(&self) -> (Vec2, Vec2) {
        let origin = self.forward * Point::ZERO;
        let ex = self.forward * Point::new(self.image.width, 0.0) - origin;
        let ey = self.forward * Point::new(0.0, self.image.height) - origin;
        (ex, ey)
    }
}

fn is_usable(s: Size) -> bool {
    s.width.is_finite() && s.height.is_finite() && s.width > 0.0 && s.height > 0.0
}

/// Uniform `scale`, centered in the view.
fn centered(image: Size, view: Size, scale: f64) -> Affine {
    let dx = (view.width - image.width * scale) * 0.5;
    let dy = (view.height - image.height * scale) * 0.5;
    Affine::scale(scale).then_translate(Vec2::new(dx, dy))
}
