// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Developer overlay wrapping an [`InteractionSurface`].
//!
//! The overlay is a decorator: it forwards every operation to the wrapped
//! surface, logs what happened through `tracing` at `debug` level, and
//! produces [`OverlayPrimitive`]s for a renderer to draw on top of the
//! illustration. The surface itself knows nothing about it.
//!
//! When [`OverlayConfig::enabled`] is set, a touch-up that matches nothing
//! leaves a miss marker for [`OverlayConfig::miss_feedback_duration_ms`] so the
//! developer can see where the tap landed relative to the anchors.
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Size;
//! use withers_surface::debug::{DebugOverlay, OverlayConfig, OverlayPrimitive};
//! use withers_surface::{AnatomicalEntity, InteractionSurface, SurfaceConfig, TouchEvent};
//!
//! let mut surface: InteractionSurface = InteractionSurface::new(SurfaceConfig::default());
//! surface.set_image(Some(Size::new(1000.0, 800.0)));
//! surface.set_view_size(Size::new(500.0, 400.0));
//!
//! let mut overlay = DebugOverlay::new(surface, OverlayConfig::default().with_enabled(true));
//! overlay.bind(vec![AnatomicalEntity::new(1, "Splenius", 0.5, 0.5)], |_| {});
//!
//! let t = Duration::from_millis(0);
//! overlay.handle_touch(TouchEvent::down((40.0, 40.0), t));
//! overlay.handle_touch(TouchEvent::up((40.0, 40.0), t));
//! assert!(overlay
//!     .primitives()
//!     .iter()
//!     .any(|p| matches!(p, OverlayPrimitive::Miss(_))));
//! ```

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Ellipse, Point, Rect, Size};
use tracing::debug;
use withers_anchor::{Anchored, Backend, FlatVec};

use crate::damage::Damage;
use crate::surface::InteractionSurface;
use crate::timer::FeedbackTimer;
use crate::types::{AnatomicalEntity, TouchEvent, TouchOutcome, TouchPhase};

bitflags::bitflags! {
    /// Which overlay layers to emit.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct OverlayLayers: u8 {
        /// Outline of the displayed image in view space.
        const IMAGE_BOUNDS = 0b0000_0001;
        /// A dot at every bound anchor.
        const ANCHORS      = 0b0000_0010;
        /// The tolerance ring around every bound anchor.
        const TOLERANCE    = 0b0000_0100;
        /// The last touch position and any miss marker.
        const TOUCHES      = 0b0000_1000;
    }
}

impl Default for OverlayLayers {
    fn default() -> Self {
        Self::all()
    }
}

/// Overlay settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct OverlayConfig {
    /// Draw the overlay and record miss markers.
    pub enabled: bool,
    /// How long a miss marker stays up.
    pub miss_feedback_duration_ms: u64,
    /// Layers to emit.
    pub layers: OverlayLayers,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            miss_feedback_duration_ms: 2_000,
            layers: OverlayLayers::all(),
        }
    }
}

impl OverlayConfig {
    /// Turn the overlay on or off.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set how long miss markers stay up, in milliseconds.
    #[must_use]
    pub fn with_miss_feedback_duration_ms(mut self, ms: u64) -> Self {
        self.miss_feedback_duration_ms = ms;
        self
    }

    /// Restrict the emitted layers.
    #[must_use]
    pub fn with_layers(mut self, layers: OverlayLayers) -> Self {
        self.layers = layers;
        self
    }

    /// Miss marker lifetime.
    pub fn miss_feedback_duration(&self) -> Duration {
        Duration::from_millis(self.miss_feedback_duration_ms)
    }
}

/// Something for the renderer to draw, in view space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OverlayPrimitive {
    /// Bounds of the displayed image.
    ImageBounds(Rect),
    /// A bound anchor.
    Anchor {
        /// Index of the entity in the bound list.
        index: usize,
        /// Anchor position.
        center: Point,
    },
    /// The tolerance ring around an anchor.
    ToleranceRing {
        /// Index of the entity in the bound list.
        index: usize,
        /// The ring.
        ellipse: Ellipse,
    },
    /// Where the last applied touch sample landed.
    Touch(Point),
    /// Where the last unmatched touch-up landed.
    Miss(Point),
}

/// An [`InteractionSurface`] with a developer overlay on top.
#[derive(Debug)]
pub struct DebugOverlay<E = AnatomicalEntity, B: Backend = FlatVec> {
    surface: InteractionSurface<E, B>,
    config: OverlayConfig,
    last_touch: Option<Point>,
    miss: Option<Point>,
    miss_timer: FeedbackTimer,
    damage: Damage,
}

impl<E: Anchored, B: Backend> DebugOverlay<E, B> {
    /// Wrap `surface`.
    pub fn new(surface: InteractionSurface<E, B>, config: OverlayConfig) -> Self {
        Self {
            surface,
            config,
            last_touch: None,
            miss: None,
            miss_timer: FeedbackTimer::new(),
            damage: Damage::default(),
        }
    }

    /// Overlay settings.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Replace the overlay settings. Toggling the overlay off drops any miss marker.
    pub fn set_config(&mut self, config: OverlayConfig) {
        if config != self.config {
            self.damage.mark_full();
        }
        if !config.enabled {
            self.clear_markers();
        }
        debug!(enabled = config.enabled, layers = config.layers.bits(), "overlay config");
        self.config = config;
    }

    /// The wrapped surface.
    pub fn surface(&self) -> &InteractionSurface<E, B> {
        &self.surface
    }

    /// Mutable access to the wrapped surface, for geometry and config changes.
    pub fn surface_mut(&mut self) -> &mut InteractionSurface<E, B> {
        &mut self.surface
    }

    /// Unwrap, discarding the overlay state.
    pub fn into_inner(self) -> InteractionSurface<E, B> {
        self.surface
    }

    /// Forward to [`InteractionSurface::bind`].
    pub fn bind<I, F>(&mut self, entities: I, on_select: F)
    where
        I: IntoIterator<Item = E>,
        F: FnMut(&E) + 'static,
    {
        self.surface.bind(entities, on_select);
        self.clear_markers();
        debug!(entities = self.surface.entities().len(), "bind");
    }

    /// Forward to [`InteractionSurface::unbind`].
    pub fn unbind(&mut self) {
        self.surface.unbind();
        self.clear_markers();
        debug!("unbind");
    }

    /// Forward to [`InteractionSurface::handle_touch`], logging the outcome and
    /// recording a miss marker when enabled.
    pub fn handle_touch(&mut self, event: TouchEvent) -> TouchOutcome {
        let outcome = self.surface.handle_touch(event);
        let normalized = self.surface.view().screen_to_normalized(event.position);
        debug!(
            phase = ?event.phase,
            x = event.position.x,
            y = event.position.y,
            ?normalized,
            ?outcome,
            "touch"
        );
        if outcome == TouchOutcome::Ignored || !self.config.enabled {
            return outcome;
        }
        if event.phase == TouchPhase::Down {
            self.miss = None;
            self.miss_timer.cancel();
        }
        self.last_touch = Some(event.position);
        if outcome == TouchOutcome::Missed {
            self.miss = Some(event.position);
            self.miss_timer
                .schedule(event.time, self.config.miss_feedback_duration());
        }
        self.damage.mark_full();
        outcome
    }

    /// Advance host time for both the surface highlight and the miss marker.
    ///
    /// Returns `true` if either expired.
    pub fn advance(&mut self, now: Duration) -> bool {
        let feedback = self.surface.advance(now);
        if feedback {
            debug!(?now, "feedback expired");
        }
        let miss = self.miss_timer.fire_if_due(now);
        if miss {
            debug!(?now, "miss marker expired");
            self.miss = None;
            self.damage.mark_full();
        }
        feedback || miss
    }

    /// The miss marker position, while one is showing.
    pub fn miss_marker(&self) -> Option<Point> {
        self.miss
    }

    /// Overlay primitives for the enabled layers. Empty when disabled.
    pub fn primitives(&self) -> Vec<OverlayPrimitive> {
        let mut out = Vec::new();
        if !self.config.enabled {
            return out;
        }
        let layers = self.config.layers;
        let view = self.surface.view();
        if layers.contains(OverlayLayers::IMAGE_BOUNDS) {
            if let Some(t) = view.transform() {
                out.push(OverlayPrimitive::ImageBounds(t.image_bounds()));
            }
        }
        for (index, e) in self.surface.entities().iter().enumerate() {
            let anchor = e.anchor();
            if layers.contains(OverlayLayers::ANCHORS) {
                if let Some(center) = view.normalized_to_screen(anchor) {
                    out.push(OverlayPrimitive::Anchor { index, center });
                }
            }
            if layers.contains(OverlayLayers::TOLERANCE) {
                if let Some(ellipse) = self.surface.tolerance_ellipse(anchor) {
                    out.push(OverlayPrimitive::ToleranceRing { index, ellipse });
                }
            }
        }
        if layers.contains(OverlayLayers::TOUCHES) {
            out.extend(self.last_touch.map(OverlayPrimitive::Touch));
            out.extend(self.miss.map(OverlayPrimitive::Miss));
        }
        out
    }

    /// Drain redraw requests from the surface and the overlay together.
    pub fn take_damage(&mut self) -> Damage {
        let mut damage = self.surface.take_damage();
        damage.merge(core::mem::take(&mut self.damage));
        damage
    }

    /// Forward to [`InteractionSurface::set_view_size`].
    pub fn set_view_size(&mut self, size: Size) {
        self.surface.set_view_size(size);
        debug!(width = size.width, height = size.height, "view size");
    }

    fn clear_markers(&mut self) {
        if self.last_touch.is_some() || self.miss.is_some() {
            self.damage.mark_full();
        }
        self.last_touch = None;
        self.miss = None;
        self.miss_timer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SurfaceConfig;
    use alloc::vec;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn overlay(config: OverlayConfig) -> DebugOverlay {
        let mut s: InteractionSurface = InteractionSurface::new(SurfaceConfig::default());
        s.set_image(Some(Size::new(1000.0, 800.0)));
        s.set_view_size(Size::new(500.0, 400.0));
        let mut o = DebugOverlay::new(s, config);
        o.bind(
            vec![
                AnatomicalEntity::new(1, "Triceps", 0.5, 0.5),
                AnatomicalEntity::new(2, "Deltoid", 0.2, 0.8),
            ],
            |_| {},
        );
        o
    }

    fn tap(o: &mut DebugOverlay, at: (f64, f64), t: u64) -> TouchOutcome {
        o.handle_touch(TouchEvent::down(at, ms(t)));
        o.handle_touch(TouchEvent::up(at, ms(t)))
    }

    #[test]
    fn miss_marker_lives_for_its_duration() {
        let mut o = overlay(OverlayConfig::default().with_enabled(true));
        assert_eq!(tap(&mut o, (400.0, 50.0), 100), TouchOutcome::Missed);
        assert_eq!(o.miss_marker(), Some(Point::new(400.0, 50.0)));
        assert!(!o.advance(ms(2_099)));
        assert!(o.advance(ms(2_100)));
        assert_eq!(o.miss_marker(), None);
    }

    #[test]
    fn new_touch_replaces_miss_marker() {
        let mut o = overlay(OverlayConfig::default().with_enabled(true));
        tap(&mut o, (400.0, 50.0), 0);
        assert_eq!(tap(&mut o, (250.0, 200.0), 500), TouchOutcome::Selected(0));
        assert_eq!(o.miss_marker(), None);
        // The surface highlight expires on its own schedule.
        assert!(o.advance(ms(1_000)));
        assert!(!o.advance(ms(3_000)));
    }

    #[test]
    fn disabled_overlay_is_transparent() {
        let mut o = overlay(OverlayConfig::default());
        assert_eq!(tap(&mut o, (400.0, 50.0), 0), TouchOutcome::Missed);
        assert_eq!(o.miss_marker(), None);
        assert!(o.primitives().is_empty());
        assert_eq!(tap(&mut o, (250.0, 200.0), 10), TouchOutcome::Selected(0));
    }

    #[test]
    fn primitives_follow_layers() {
        let mut o = overlay(OverlayConfig::default().with_enabled(true));
        tap(&mut o, (400.0, 50.0), 0);
        let all = o.primitives();
        assert_eq!(
            all[0],
            OverlayPrimitive::ImageBounds(Rect::new(0.0, 0.0, 500.0, 400.0))
        );
        assert!(all.contains(&OverlayPrimitive::Anchor {
            index: 1,
            center: Point::new(100.0, 320.0),
        }));
        assert_eq!(
            all.iter()
                .filter(|p| matches!(p, OverlayPrimitive::ToleranceRing { .. }))
                .count(),
            2
        );
        assert!(all.contains(&OverlayPrimitive::Miss(Point::new(400.0, 50.0))));

        o.set_config(
            OverlayConfig::default()
                .with_enabled(true)
                .with_layers(OverlayLayers::ANCHORS),
        );
        let anchors = o.primitives();
        assert_eq!(anchors.len(), 2);
        assert!(
            anchors
                .iter()
                .all(|p| matches!(p, OverlayPrimitive::Anchor { .. }))
        );
    }

    #[test]
    fn rebind_clears_markers_and_damages() {
        let mut o = overlay(OverlayConfig::default().with_enabled(true));
        tap(&mut o, (400.0, 50.0), 0);
        let _ = o.take_damage();
        o.bind(vec![], |_| {});
        assert_eq!(o.miss_marker(), None);
        assert!(o.take_damage().full);
        assert!(!o.advance(ms(10_000)));
    }
}
