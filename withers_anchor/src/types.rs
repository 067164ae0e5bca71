// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: anchored items, the tolerance radius, and nearest-match records.

use kurbo::Point;

/// Something with a canonical touch target in normalized image space.
///
/// Anchors are expressed as fractions of the source illustration's intrinsic
/// width and height, so `(0.0, 0.0)` is the top-left corner of the image and
/// `(1.0, 1.0)` the bottom-right, independent of device or render size.
pub trait Anchored {
    /// Returns the normalized anchor point.
    fn anchor(&self) -> Point;
}

impl Anchored for Point {
    #[inline]
    fn anchor(&self) -> Point {
        *self
    }
}

impl<T: Anchored + ?Sized> Anchored for &T {
    #[inline]
    fn anchor(&self) -> Point {
        (**self).anchor()
    }
}

/// Maximum normalized distance at which a touch still counts as "on" an anchor.
///
/// Values are clamped into [`Tolerance::MIN`]..=[`Tolerance::MAX`] on
/// construction so a misconfigured host can neither make hotspots untappable
/// nor let one anchor swallow most of the illustration.
///
/// ```
/// use withers_anchor::Tolerance;
///
/// assert_eq!(Tolerance::default().get(), 0.06);
/// assert_eq!(Tolerance::new(0.5).get(), Tolerance::MAX);
/// assert_eq!(Tolerance::new(0.0).get(), Tolerance::MIN);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "f64", into = "f64")
)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Smallest accepted radius.
    pub const MIN: f64 = 0.02;
    /// Largest accepted radius.
    pub const MAX: f64 = 0.30;
    /// Radius used when the host does not configure one.
    pub const DEFAULT: Self = Self(0.06);

    /// Create a tolerance, clamping `radius` into the accepted range.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is NaN. That is a caller bug, not a data condition.
    pub fn new(radius: f64) -> Self {
        assert!(!radius.is_nan(), "tolerance radius must not be NaN");
        Self(radius.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the radius in normalized units.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// True if a candidate at `distance` lies strictly inside the radius.
    #[inline]
    pub fn admits(self, distance: f64) -> bool {
        distance < self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f64> for Tolerance {
    fn from(radius: f64) -> Self {
        Self::new(radius)
    }
}

impl From<Tolerance> for f64 {
    fn from(t: Tolerance) -> Self {
        t.0
    }
}

/// The winning candidate of a nearest-anchor query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Nearest {
    /// Position of the winner in iteration (insertion) order.
    pub slot: usize,
    /// Euclidean distance from the query point, in normalized units.
    pub distance: f64,
}

impl Nearest {
    /// Ordering used to pick a winner: smaller distance first, then the
    /// earlier slot. Equal distances therefore resolve to whichever candidate
    /// came first in iteration order.
    pub fn beats(&self, other: &Self) -> bool {
        self.distance < other.distance
            || (self.distance == other.distance && self.slot < other.slot)
    }
}
