// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Withers Fit: where an illustration lands inside its view, and back again.
//!
//! Anatomical illustrations are authored at a fixed intrinsic resolution and
//! displayed in views of whatever size the device offers. Hotspots are stored
//! in *normalized* image space (fractions of the intrinsic width and height),
//! so every tap must be carried through the inverse of the display transform
//! before it can be compared with an anchor.
//!
//! - [`ScaleMode`] names how the image is placed: fit-center (the default),
//!   center-crop, center, fit-xy, or an explicit matrix.
//! - [`DisplayTransform`] is the resulting image→view affine and its inverse.
//!   It only exists for usable geometry, so its mapping methods are total.
//! - [`ImageView`] holds the host-reported layout and recomputes the
//!   transform whenever the image, view size, or scale mode changes.
//! - [`EdgePolicy`] decides what happens to taps in letterbox padding.
//!
//! ## Not a layout engine
//!
//! This crate does not measure or arrange views. Upstream code reports the
//! view size after each layout pass and this crate derives the mapping.
//!
//! ## Edge taps
//!
//! With [`EdgePolicy::Reject`] (the default) a tap outside the displayed
//! image normalizes to `None`. [`EdgePolicy::Clamp`] instead snaps it onto the
//! nearest image edge, which keeps border anchors reachable from the padding
//! at the cost of accepting taps that visibly miss the picture.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use withers_fit::{ImageView, ScaleMode};
//!
//! // A 1000×800 plate shown at half size.
//! let view = ImageView::new(Size::new(500.0, 400.0))
//!     .with_image(Size::new(1000.0, 800.0))
//!     .with_scale_mode(ScaleMode::FitCenter);
//!
//! let n = view.screen_to_normalized(Point::new(250.0, 200.0)).unwrap();
//! assert!((n.x - 0.5).abs() < 1e-9 && (n.y - 0.5).abs() < 1e-9);
//!
//! let back = view.normalized_to_screen(n).unwrap();
//! assert!((back.x - 250.0).abs() < 1e-9 && (back.y - 200.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod transform;
mod types;
mod util;
mod view;

pub use transform::DisplayTransform;
pub use types::{EdgePolicy, ScaleMode};
pub use view::ImageView;
