// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: how an image sits in its view, and what to do with taps that miss it.

use kurbo::{Affine, Point};

/// How the source image is placed inside the view bounds.
///
/// The names follow the usual mobile image-view vocabulary.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleMode {
    /// Uniformly scale to fit inside the view and center; may letterbox.
    #[default]
    FitCenter,
    /// Uniformly scale to cover the view and center; may crop.
    CenterCrop,
    /// No scaling; center the image at its intrinsic size.
    Center,
    /// Stretch each axis independently to fill the view exactly.
    FitXY,
    /// Host-supplied image→view matrix, for example after pinch-zoom.
    Matrix(Affine),
}

/// What [`screen_to_normalized`](crate::DisplayTransform::screen_to_normalized)
/// does with taps that land outside the image, such as in letterbox padding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgePolicy {
    /// Taps outside [0,1]² normalize to `None`.
    #[default]
    Reject,
    /// Taps outside [0,1]² are clamped onto the nearest image edge, so anchors
    /// on the border stay reachable from the padding.
    Clamp,
}

/// Rounding slack around the unit square accepted by [`EdgePolicy::Reject`].
const EDGE_SLACK: f64 = 1e-9;

impl EdgePolicy {
    /// Apply the policy to a normalized point.
    ///
    /// Non-finite input is always rejected. Points within a rounding slack of
    /// the unit square are snapped onto it under either policy.
    ///
    /// ```
    /// use kurbo::Point;
    /// use withers_fit::EdgePolicy;
    ///
    /// let outside = Point::new(1.2, 0.5);
    /// assert_eq!(EdgePolicy::Reject.apply(outside), None);
    /// assert_eq!(EdgePolicy::Clamp.apply(outside), Some(Point::new(1.0, 0.5)));
    /// ```
    pub fn apply(self, n: Point) -> Option<Point> {
        if !n.is_finite() {
            return None;
        }
        let inside = (-EDGE_SLACK..=1.0 + EDGE_SLACK).contains(&n.x)
            && (-EDGE_SLACK..=1.0 + EDGE_SLACK).contains(&n.y);
        match self {
            Self::Reject if !inside => None,
            Self::Reject | Self::Clamp => {
                Some(Point::new(n.x.clamp(0.0, 1.0), n.y.clamp(0.0, 1.0)))
            }
        }
    }
}
