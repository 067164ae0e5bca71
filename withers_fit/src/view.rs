// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image view state: image, view size, scale mode, and the derived transform.

use kurbo::{Point, Size};

use crate::transform::DisplayTransform;
use crate::types::{EdgePolicy, ScaleMode};

/// The geometry half of an image view.
///
/// Holds what the host layout reports (intrinsic image size, view size, scale
/// mode) and keeps the derived [`DisplayTransform`] current. Every setter
/// recomputes the transform immediately, so queries never observe a stale
/// layout. When the geometry is unusable the transform is absent and every
/// mapping returns `None`.
#[derive(Clone, Debug, Default)]
pub struct ImageView {
    image: Option<Size>,
    view: Size,
    mode: ScaleMode,
    edge_policy: EdgePolicy,
    transform: Option<DisplayTransform>,
}

impl ImageView {
    /// Create a view of the given size with no image.
    pub fn new(view: Size) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    /// Builder-style [`ImageView::set_image`].
    #[must_use]
    pub fn with_image(mut self, image: Size) -> Self {
        self.set_image(Some(image));
        self
    }

    /// Builder-style [`ImageView::set_scale_mode`].
    #[must_use]
    pub fn with_scale_mode(mut self, mode: ScaleMode) -> Self {
        self.set_scale_mode(mode);
        self
    }

    /// Builder-style [`ImageView::set_edge_policy`].
    #[must_use]
    pub fn with_edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    /// Set or clear the intrinsic image size.
    pub fn set_image(&mut self, image: Option<Size>) {
        self.image = image;
        self.relayout();
    }

    /// Update the view size after a layout pass or resize.
    pub fn set_view_size(&mut self, view: Size) {
        self.view = view;
        self.relayout();
    }

    /// Change how the image is placed in the view.
    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.mode = mode;
        self.relayout();
    }

    /// Change the out-of-image tap policy.
    pub fn set_edge_policy(&mut self, policy: EdgePolicy) {
        self.edge_policy = policy;
    }

    /// Intrinsic image size, if an image is set.
    pub fn image(&self) -> Option<Size> {
        self.image
    }

    /// Current view size.
    pub fn view_size(&self) -> Size {
        self.view
    }

    /// Current scale mode.
    pub fn scale_mode(&self) -> ScaleMode {
        self.mode
    }

    /// Current edge policy.
    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// The current display transform, if the geometry is usable.
    pub fn transform(&self) -> Option<&DisplayTransform> {
        self.transform.as_ref()
    }

    /// Map a view-local tap to normalized image space under the edge policy.
    ///
    /// Returns `None` with no image, degenerate geometry, or (with
    /// [`EdgePolicy::Reject`]) a tap outside the image.
    pub fn screen_to_normalized(&self, screen: Point) -> Option<Point> {
        self.transform?.screen_to_normalized(screen, self.edge_policy)
    }

    /// Map a normalized image point to view-local pixels.
    pub fn normalized_to_screen(&self, n: Point) -> Option<Point> {
        Some(self.transform?.normalized_to_screen(n))
    }

    fn relayout(&mut self) {
        self.transform = self
            .image
            .and_then(|image| DisplayTransform::compute(image, self.view, self.mode));
    }
}
