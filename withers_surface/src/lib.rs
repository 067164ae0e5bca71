// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Withers Surface: the touch surface of an anatomical illustration.
//!
//! An [`InteractionSurface`] owns the entities bound for one illustration and
//! a selection callback. Each touch sample goes through the surface's
//! [`ImageView`](withers_fit::ImageView) into normalized space, then through a
//! tolerance-bounded nearest-anchor lookup from [`withers_anchor`].
//!
//! ## Gesture lifecycle
//!
//! ```text
//! Idle ──down──▶ TrackingDown ──up, match──▶ FeedbackShowing ──timer──▶ Idle
//!                TrackingDown ──up, miss───▶ Idle
//!                TrackingDown ──cancel─────▶ Idle
//! ```
//!
//! - Down resolves a candidate (possibly none) for the pressed highlight.
//! - Move keeps or re-resolves the candidate, per [`MovePolicy`].
//! - Up resolves at the up position. A match runs the callback exactly once,
//!   synchronously, then shows a highlight for
//!   [`SurfaceConfig::feedback_duration_ms`].
//! - Cancel drops the gesture without calling back.
//! - A down while the highlight is showing cancels its timer and starts over.
//!
//! Samples that do not fit the current state (an up with no down, say) are
//! ignored. Geometry problems are never errors: without an image or with a
//! degenerate layout every touch simply misses.
//!
//! ## Time and redraws
//!
//! The surface never reads a clock. Samples carry the host's monotonic time,
//! and [`InteractionSurface::advance`] expires the highlight. At most one
//! expiry is ever pending. Visual changes accumulate as [`Damage`], drained
//! with [`InteractionSurface::take_damage`].
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Size;
//! use withers_surface::{
//!     AnatomicalEntity, InteractionSurface, SurfaceConfig, TouchEvent, TouchOutcome,
//! };
//!
//! let mut surface: InteractionSurface = InteractionSurface::new(SurfaceConfig::default());
//! surface.set_image(Some(Size::new(1000.0, 800.0)));
//! surface.set_view_size(Size::new(500.0, 400.0));
//! surface.bind(
//!     vec![AnatomicalEntity::new(1, "Longissimus dorsi", 0.5, 0.5)],
//!     |e| println!("selected {}", e.name),
//! );
//!
//! let t = Duration::from_millis(0);
//! surface.handle_touch(TouchEvent::down((250.0, 200.0), t));
//! let out = surface.handle_touch(TouchEvent::up((250.0, 200.0), t));
//! assert_eq!(out, TouchOutcome::Selected(0));
//!
//! // 40px to the right is 0.08 in normalized units: outside the default 0.06.
//! surface.handle_touch(TouchEvent::down((290.0, 200.0), t));
//! let out = surface.handle_touch(TouchEvent::up((290.0, 200.0), t));
//! assert_eq!(out, TouchOutcome::Missed);
//! ```
//!
//! ## Debug overlay
//!
//! With the `debug_overlay` feature, `debug::DebugOverlay` wraps a surface to
//! draw anchors and tolerance rings, mark misses, and log through `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod damage;
mod surface;
mod timer;
mod types;

#[cfg(feature = "debug_overlay")]
pub mod debug;

pub use config::{MovePolicy, SurfaceConfig};
pub use damage::Damage;
pub use surface::{Highlight, InteractionSurface};
pub use timer::FeedbackTimer;
pub use types::{
    AnatomicalEntity, GestureState, HighlightKind, TouchEvent, TouchOutcome, TouchPhase,
};
