// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction surface: entity binding, gesture state machine, and feedback.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use kurbo::{Ellipse, Point, Shape, Size};
use withers_anchor::{AnchorIndexGeneric, Anchored, Backend, FlatVec};
use withers_fit::{EdgePolicy, ImageView, ScaleMode};

use crate::config::{MovePolicy, SurfaceConfig};
use crate::damage::Damage;
use crate::timer::FeedbackTimer;
use crate::types::{
    AnatomicalEntity, GestureState, HighlightKind, TouchEvent, TouchOutcome, TouchPhase,
};

type SelectFn<E> = Box<dyn FnMut(&E)>;

/// A highlight the renderer should draw, in view space.
#[derive(Debug)]
pub struct Highlight<'a, E> {
    /// Index of the entity in the bound list.
    pub index: usize,
    /// The highlighted entity.
    pub entity: &'a E,
    /// Whether the finger is still down or the selection is confirmed.
    pub kind: HighlightKind,
    /// The tolerance ring around the entity's anchor.
    pub ellipse: Ellipse,
}

/// Binds a list of entities and a selection callback to a touchable image view.
///
/// Taps are normalized through the view's [`ImageView`], resolved against the
/// bound anchors, and reported through the callback, which runs exactly once
/// per touch-up that lands on an entity. Geometry problems (no image, empty
/// view, singular matrix) and empty bindings make every touch a miss.
///
/// Time is injected: touch samples carry the host clock, and the host calls
/// [`InteractionSurface::advance`] to expire the selection highlight.
///
/// The candidate backend `B` is the broad phase used for lookups; see
/// [`withers_anchor`] for the trade-offs.
pub struct InteractionSurface<E = AnatomicalEntity, B: Backend = FlatVec> {
    config: SurfaceConfig,
    view: ImageView,
    entities: Vec<E>,
    index: AnchorIndexGeneric<usize, B>,
    on_select: Option<SelectFn<E>>,
    state: GestureState,
    candidate: Option<usize>,
    feedback: Option<usize>,
    timer: FeedbackTimer,
    damage: Damage,
}

impl<E, B: Backend> fmt::Debug for InteractionSurface<E, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionSurface")
            .field("config", &self.config)
            .field("view", &self.view)
            .field("entities", &self.entities.len())
            .field("bound", &self.on_select.is_some())
            .field("state", &self.state)
            .field("candidate", &self.candidate)
            .field("feedback", &self.feedback)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

impl<E: Anchored> InteractionSurface<E, FlatVec> {
    /// Create an unbound surface with the default flat backend.
    pub fn new(config: SurfaceConfig) -> Self {
        Self::with_backend(config, FlatVec::default())
    }
}

impl<E: Anchored> Default for InteractionSurface<E, FlatVec> {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}

impl<E: Anchored, B: Backend> InteractionSurface<E, B> {
    /// Create an unbound surface over an explicitly configured backend.
    pub fn with_backend(config: SurfaceConfig, backend: B) -> Self {
        Self {
            config,
            view: ImageView::default().with_edge_policy(config.edge_policy),
            entities: Vec::new(),
            index: AnchorIndexGeneric::with_backend(backend),
            on_select: None,
            state: GestureState::Idle,
            candidate: None,
            feedback: None,
            timer: FeedbackTimer::new(),
            damage: Damage::default(),
        }
    }

    // --- configuration and geometry ---

    /// Current configuration.
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Takes effect from the next sample. A pending highlight keeps its
    /// deadline.
    pub fn set_config(&mut self, config: SurfaceConfig) {
        if config.touch_tolerance != self.config.touch_tolerance {
            self.damage.mark_full();
        }
        self.view.set_edge_policy(config.edge_policy);
        self.config = config;
    }

    /// The image view geometry.
    pub fn view(&self) -> &ImageView {
        &self.view
    }

    /// Set or clear the intrinsic size of the displayed illustration.
    pub fn set_image(&mut self, image: Option<Size>) {
        self.view.set_image(image);
        self.damage.mark_full();
    }

    /// Report the view size after layout.
    pub fn set_view_size(&mut self, size: Size) {
        self.view.set_view_size(size);
        self.damage.mark_full();
    }

    /// Change how the illustration is placed in the view.
    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.view.set_scale_mode(mode);
        self.damage.mark_full();
    }

    /// Change the out-of-image tap policy.
    pub fn set_edge_policy(&mut self, policy: EdgePolicy) {
        self.config.edge_policy = policy;
        self.view.set_edge_policy(policy);
    }

    // --- binding ---

    /// Replace the bound entities and selection callback.
    ///
    /// Any gesture in progress and any visible highlight are dropped, so no
    /// state can refer to an entity from the previous list.
    pub fn bind<I, F>(&mut self, entities: I, on_select: F)
    where
        I: IntoIterator<Item = E>,
        F: FnMut(&E) + 'static,
    {
        self.reset_gesture();
        self.entities.clear();
        self.entities.extend(entities);
        self.index.clear();
        self.index.reserve(self.entities.len());
        for (i, e) in self.entities.iter().enumerate() {
            self.index.push(e.anchor(), i);
        }
        self.on_select = Some(Box::new(on_select));
        self.damage.mark_full();
    }

    /// Drop entities, callback, gesture state, and any pending timer.
    ///
    /// Safe to call at any time and any number of times.
    pub fn unbind(&mut self) {
        let live = self.on_select.is_some()
            || !self.entities.is_empty()
            || self.state != GestureState::Idle;
        self.reset_gesture();
        self.entities.clear();
        self.index.clear();
        self.on_select = None;
        if live {
            self.damage.mark_full();
        }
    }

    /// True while a callback is bound.
    pub fn is_bound(&self) -> bool {
        self.on_select.is_some()
    }

    /// The bound entities, in binding order.
    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    // --- queries ---

    /// The entity nearest to the normalized point `(nx, ny)` within tolerance.
    ///
    /// Pure: no state changes and no callback.
    pub fn entity_at(&self, nx: f64, ny: f64) -> Option<&E> {
        self.nearest(Point::new(nx, ny)).and_then(|i| self.entities.get(i))
    }

    /// The entity under a view-space point, going through the display transform.
    pub fn entity_at_screen(&self, screen: Point) -> Option<&E> {
        self.resolve_screen(screen).and_then(|i| self.entities.get(i))
    }

    /// Current gesture state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Entity under the finger while tracking.
    pub fn candidate(&self) -> Option<&E> {
        match self.state {
            GestureState::TrackingDown => self.candidate.and_then(|i| self.entities.get(i)),
            _ => None,
        }
    }

    /// When the selection highlight will expire, if one is showing.
    pub fn feedback_deadline(&self) -> Option<Duration> {
        self.timer.deadline()
    }

    // --- events ---

    /// Feed one touch sample through the gesture state machine.
    ///
    /// On a touch-up that resolves to an entity the selection callback runs
    /// synchronously before this returns. Selection resolves at the up
    /// position regardless of [`MovePolicy`], which only affects the
    /// candidate shown while the finger is down.
    pub fn handle_touch(&mut self, event: TouchEvent) -> TouchOutcome {
        match (event.phase, self.state) {
            (TouchPhase::Down, _) => {
                self.damage_highlight();
                self.timer.cancel();
                self.feedback = None;
                self.candidate = self.resolve_screen(event.position);
                self.state = GestureState::TrackingDown;
                self.damage_highlight();
                TouchOutcome::Tracking {
                    candidate: self.candidate,
                }
            }
            (TouchPhase::Move, GestureState::TrackingDown) => {
                if self.config.move_policy == MovePolicy::Reresolve {
                    let next = self.resolve_screen(event.position);
                    if next != self.candidate {
                        self.damage_highlight();
                        self.candidate = next;
                        self.damage_highlight();
                    }
                }
                TouchOutcome::Tracking {
                    candidate: self.candidate,
                }
            }
            (TouchPhase::Up, GestureState::TrackingDown) => {
                self.damage_highlight();
                self.candidate = None;
                self.state = GestureState::Idle;
                let Some(hit) = self.resolve_screen(event.position) else {
                    return TouchOutcome::Missed;
                };
                if let (Some(on_select), Some(entity)) =
                    (self.on_select.as_mut(), self.entities.get(hit))
                {
                    on_select(entity);
                }
                if self.config.show_touch_feedback {
                    self.feedback = Some(hit);
                    self.timer.schedule(event.time, self.config.feedback_duration());
                    self.state = GestureState::FeedbackShowing;
                    self.damage_highlight();
                }
                TouchOutcome::Selected(hit)
            }
            (TouchPhase::Cancel, GestureState::TrackingDown) => {
                self.damage_highlight();
                self.candidate = None;
                self.state = GestureState::Idle;
                TouchOutcome::Cancelled
            }
            _ => TouchOutcome::Ignored,
        }
    }

    /// Advance host time. Returns `true` if the selection highlight expired.
    pub fn advance(&mut self, now: Duration) -> bool {
        if self.state != GestureState::FeedbackShowing || !self.timer.fire_if_due(now) {
            return false;
        }
        self.damage_highlight();
        self.feedback = None;
        self.state = GestureState::Idle;
        true
    }

    // --- rendering hooks ---

    /// The highlight to draw for the current state, if any.
    pub fn highlight(&self) -> Option<Highlight<'_, E>> {
        let (index, kind) = match self.state {
            GestureState::Idle => return None,
            GestureState::TrackingDown => (self.candidate?, HighlightKind::Pressed),
            GestureState::FeedbackShowing => (self.feedback?, HighlightKind::Confirmed),
        };
        let entity = self.entities.get(index)?;
        let ellipse = self.tolerance_ellipse(entity.anchor())?;
        Some(Highlight {
            index,
            entity,
            kind,
            ellipse,
        })
    }

    /// The tolerance radius around a normalized `anchor`, in view space.
    ///
    /// A circle in normalized space becomes an ellipse on screen when the
    /// display scales the axes differently. Under a skewing matrix the result
    /// is the axis-aligned approximation along the image's x direction.
    pub fn tolerance_ellipse(&self, anchor: Point) -> Option<Ellipse> {
        let t = self.view.transform()?;
        let (ex, ey) = t.normalized_extent();
        let r = self.config.touch_tolerance.get();
        Some(Ellipse::new(
            t.normalized_to_screen(anchor),
            (ex.hypot() * r, ey.hypot() * r),
            ex.atan2(),
        ))
    }

    /// Drain accumulated redraw requests.
    pub fn take_damage(&mut self) -> Damage {
        core::mem::take(&mut self.damage)
    }

    // --- internals ---

    fn nearest(&self, n: Point) -> Option<usize> {
        self.index
            .nearest(n, self.config.touch_tolerance)
            .map(|(_, i)| i)
    }

    fn resolve_screen(&self, screen: Point) -> Option<usize> {
        if self.entities.is_empty() {
            return None;
        }
        self.nearest(self.view.screen_to_normalized(screen)?)
    }

    fn reset_gesture(&mut self) {
        self.timer.cancel();
        self.state = GestureState::Idle;
        self.candidate = None;
        self.feedback = None;
    }

    fn damage_highlight(&mut self) {
        if let Some(rect) = self.highlight().map(|h| h.ellipse.bounding_box()) {
            self.damage.add_rect(rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;
    use withers_anchor::Grid;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    type Log = Rc<RefCell<Vec<u32>>>;

    fn recorder() -> (Log, impl FnMut(&AnatomicalEntity) + 'static) {
        let log: Log = Rc::default();
        let sink = log.clone();
        (log, move |e: &AnatomicalEntity| sink.borrow_mut().push(e.id))
    }

    // 1000×800 plate at half scale in a 500×400 view.
    fn plate(config: SurfaceConfig) -> InteractionSurface {
        let mut s = InteractionSurface::new(config);
        s.set_image(Some(Size::new(1000.0, 800.0)));
        s.set_view_size(Size::new(500.0, 400.0));
        s
    }

    fn e1() -> Vec<AnatomicalEntity> {
        vec![AnatomicalEntity::new(1, "Gluteus medius", 0.5, 0.5)]
    }

    fn tap(s: &mut InteractionSurface, at: (f64, f64), t: u64) -> TouchOutcome {
        s.handle_touch(TouchEvent::down(at, ms(t)));
        s.handle_touch(TouchEvent::up(at, ms(t + 50)))
    }

    #[test]
    fn center_tap_selects_entity() {
        let mut s = plate(SurfaceConfig::default());
        let (log, cb) = recorder();
        s.bind(e1(), cb);
        assert_eq!(tap(&mut s, (250.0, 200.0), 0), TouchOutcome::Selected(0));
        assert_eq!(*log.borrow(), [1]);
        assert_eq!(s.state(), GestureState::FeedbackShowing);
    }

    #[test]
    fn tap_beyond_tolerance_misses() {
        let mut s = plate(SurfaceConfig::default());
        let (log, cb) = recorder();
        s.bind(e1(), cb);
        assert_eq!(tap(&mut s, (290.0, 200.0), 0), TouchOutcome::Missed);
        assert!(log.borrow().is_empty());
        assert_eq!(s.state(), GestureState::Idle);
        assert!(s.entity_at(0.58, 0.5).is_none());
        assert_eq!(s.entity_at(0.5, 0.5).map(|e| e.id), Some(1));
    }

    #[test]
    fn equidistant_anchors_always_pick_first() {
        let mut s = plate(SurfaceConfig::default());
        s.bind(
            vec![
                AnatomicalEntity::new(1, "E1", 0.30, 0.30),
                AnatomicalEntity::new(2, "E2", 0.32, 0.30),
            ],
            |_| {},
        );
        for _ in 0..10 {
            assert_eq!(s.entity_at(0.31, 0.30).map(|e| e.id), Some(1));
        }
    }

    #[test]
    fn cancel_never_selects() {
        let mut s = plate(SurfaceConfig::default());
        let (log, cb) = recorder();
        s.bind(e1(), cb);
        s.handle_touch(TouchEvent::down((250.0, 200.0), ms(0)));
        assert_eq!(s.candidate().map(|e| e.id), Some(1));
        assert_eq!(
            s.handle_touch(TouchEvent::cancel((250.0, 200.0), ms(10))),
            TouchOutcome::Cancelled
        );
        assert!(log.borrow().is_empty());
        assert_eq!(s.state(), GestureState::Idle);
        assert!(s.highlight().is_none());
    }

    #[test]
    fn rebinding_does_not_duplicate_callbacks() {
        let mut s = plate(SurfaceConfig::default());
        let log: Log = Rc::default();
        for _ in 0..2 {
            let sink = log.clone();
            s.bind(e1(), move |e: &AnatomicalEntity| sink.borrow_mut().push(e.id));
        }
        tap(&mut s, (250.0, 200.0), 0);
        assert_eq!(*log.borrow(), [1]);
    }

    #[test]
    fn rebinding_clears_gesture_and_feedback() {
        let mut s = plate(SurfaceConfig::default());
        s.bind(e1(), |_| {});
        tap(&mut s, (250.0, 200.0), 0);
        assert!(s.feedback_deadline().is_some());
        s.bind(e1(), |_| {});
        assert_eq!(s.state(), GestureState::Idle);
        assert!(s.feedback_deadline().is_none());
        assert!(s.highlight().is_none());

        s.handle_touch(TouchEvent::down((250.0, 200.0), ms(100)));
        s.bind(vec![], |_| {});
        assert_eq!(
            s.handle_touch(TouchEvent::up((250.0, 200.0), ms(150))),
            TouchOutcome::Ignored
        );
    }

    #[test]
    fn feedback_expires_after_duration() {
        let mut s = plate(SurfaceConfig::default());
        s.bind(e1(), |_| {});
        tap(&mut s, (250.0, 200.0), 1_000);
        assert_eq!(s.feedback_deadline(), Some(ms(1_550)));
        assert!(!s.advance(ms(1_549)));
        assert_eq!(
            s.highlight().map(|h| h.kind),
            Some(HighlightKind::Confirmed)
        );
        assert!(s.advance(ms(1_550)));
        assert_eq!(s.state(), GestureState::Idle);
        assert!(s.highlight().is_none());
        assert!(!s.advance(ms(5_000)));
    }

    #[test]
    fn down_during_feedback_cancels_timer() {
        let mut s = plate(SurfaceConfig::default());
        s.bind(e1(), |_| {});
        tap(&mut s, (250.0, 200.0), 0);
        s.handle_touch(TouchEvent::down((10.0, 10.0), ms(200)));
        assert_eq!(s.state(), GestureState::TrackingDown);
        assert!(s.feedback_deadline().is_none());
        assert!(!s.advance(ms(10_000)));
        assert_eq!(s.state(), GestureState::TrackingDown);
    }

    #[test]
    fn no_feedback_returns_straight_to_idle() {
        let mut s = plate(SurfaceConfig::default().with_touch_feedback(false));
        let (log, cb) = recorder();
        s.bind(e1(), cb);
        assert_eq!(tap(&mut s, (250.0, 200.0), 0), TouchOutcome::Selected(0));
        assert_eq!(*log.borrow(), [1]);
        assert_eq!(s.state(), GestureState::Idle);
        assert!(s.feedback_deadline().is_none());
    }

    #[test]
    fn hold_keeps_down_candidate_but_selects_at_up() {
        let mut s = plate(SurfaceConfig::default());
        let (log, cb) = recorder();
        s.bind(e1(), cb);
        s.handle_touch(TouchEvent::down((250.0, 200.0), ms(0)));
        assert_eq!(
            s.handle_touch(TouchEvent::moved((100.0, 100.0), ms(10))),
            TouchOutcome::Tracking { candidate: Some(0) }
        );
        assert_eq!(
            s.handle_touch(TouchEvent::up((100.0, 100.0), ms(20))),
            TouchOutcome::Missed
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn reresolve_follows_the_finger() {
        let mut s = plate(SurfaceConfig::default().with_move_policy(MovePolicy::Reresolve));
        let (log, cb) = recorder();
        s.bind(e1(), cb);
        assert_eq!(
            s.handle_touch(TouchEvent::down((100.0, 100.0), ms(0))),
            TouchOutcome::Tracking { candidate: None }
        );
        assert_eq!(
            s.handle_touch(TouchEvent::moved((252.0, 201.0), ms(10))),
            TouchOutcome::Tracking { candidate: Some(0) }
        );
        assert_eq!(s.highlight().map(|h| h.kind), Some(HighlightKind::Pressed));
        assert_eq!(
            s.handle_touch(TouchEvent::up((252.0, 201.0), ms(20))),
            TouchOutcome::Selected(0)
        );
        assert_eq!(*log.borrow(), [1]);
    }

    #[test]
    fn samples_without_down_are_ignored() {
        let mut s = plate(SurfaceConfig::default());
        let (log, cb) = recorder();
        s.bind(e1(), cb);
        for ev in [
            TouchEvent::moved((250.0, 200.0), ms(0)),
            TouchEvent::up((250.0, 200.0), ms(1)),
            TouchEvent::cancel((250.0, 200.0), ms(2)),
        ] {
            assert_eq!(s.handle_touch(ev), TouchOutcome::Ignored);
        }
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn missing_image_absorbs_touches() {
        let mut s: InteractionSurface = InteractionSurface::new(SurfaceConfig::default());
        s.set_view_size(Size::new(500.0, 400.0));
        let (log, cb) = recorder();
        s.bind(e1(), cb);
        assert_eq!(tap(&mut s, (250.0, 200.0), 0), TouchOutcome::Missed);
        assert!(s.entity_at_screen(Point::new(250.0, 200.0)).is_none());
        // Pure normalized queries do not need geometry.
        assert!(s.entity_at(0.5, 0.5).is_some());

        s.set_image(Some(Size::new(1000.0, 800.0)));
        s.set_view_size(Size::ZERO);
        assert_eq!(tap(&mut s, (0.0, 0.0), 100), TouchOutcome::Missed);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn unbind_is_idempotent_mid_gesture() {
        let mut s = plate(SurfaceConfig::default());
        let (log, cb) = recorder();
        s.bind(e1(), cb);
        s.handle_touch(TouchEvent::down((250.0, 200.0), ms(0)));
        s.unbind();
        s.unbind();
        assert!(!s.is_bound());
        assert!(s.entities().is_empty());
        assert_eq!(s.state(), GestureState::Idle);
        assert_eq!(
            s.handle_touch(TouchEvent::up((250.0, 200.0), ms(10))),
            TouchOutcome::Ignored
        );
        assert_eq!(tap(&mut s, (250.0, 200.0), 20), TouchOutcome::Missed);
        assert!(log.borrow().is_empty());
        let _ = s.take_damage();
        s.unbind();
        assert!(s.take_damage().is_empty());
    }

    #[test]
    fn highlight_ring_scales_with_display() {
        let mut s = plate(SurfaceConfig::default());
        s.bind(e1(), |_| {});
        s.handle_touch(TouchEvent::down((250.0, 200.0), ms(0)));
        let h = s.highlight().unwrap();
        assert_eq!(h.index, 0);
        assert_eq!(h.entity.id, 1);
        assert!((h.ellipse.center() - Point::new(250.0, 200.0)).hypot() < 1e-9);
        let r = h.ellipse.radii();
        assert!((r.x - 30.0).abs() < 1e-9 && (r.y - 24.0).abs() < 1e-9);
        assert!(h.ellipse.rotation().abs() < 1e-12);
    }

    #[test]
    fn damage_tracks_highlight_changes() {
        let mut s = plate(SurfaceConfig::default());
        s.bind(e1(), |_| {});
        assert!(s.take_damage().full);
        s.handle_touch(TouchEvent::down((250.0, 200.0), ms(0)));
        let d = s.take_damage();
        assert!(!d.full);
        let ring = d.union_rect().unwrap();
        assert!(ring.contains(Point::new(250.0, 200.0)));
        assert!((ring.width() - 60.0).abs() < 1e-6);
        s.handle_touch(TouchEvent::up((250.0, 200.0), ms(10)));
        assert!(!s.take_damage().is_empty());
        s.advance(ms(1_000));
        assert!(!s.take_damage().is_empty());
        assert!(s.take_damage().is_empty());
    }

    #[test]
    fn grid_backend_matches_flat() {
        let entities: Vec<_> = (0..40_u32)
            .map(|i| {
                let f = f64::from(i);
                AnatomicalEntity::new(i, "m", (f * 0.37) % 1.0, (f * 0.61) % 1.0)
            })
            .collect();
        let mut flat = plate(SurfaceConfig::default());
        flat.bind(entities.clone(), |_| {});
        let mut grid = InteractionSurface::with_backend(SurfaceConfig::default(), Grid::new(0.08));
        grid.set_image(Some(Size::new(1000.0, 800.0)));
        grid.set_view_size(Size::new(500.0, 400.0));
        grid.bind(entities, |_| {});
        for qy in 0..=25 {
            for qx in 0..=25 {
                let (nx, ny) = (f64::from(qx) / 25.0, f64::from(qy) / 25.0);
                assert_eq!(
                    flat.entity_at(nx, ny).map(|e| e.id),
                    grid.entity_at(nx, ny).map(|e| e.id)
                );
            }
        }
    }

    #[test]
    fn grid_lookup_far_outside_is_a_miss() {
        let mut s = InteractionSurface::with_backend(SurfaceConfig::default(), Grid::default());
        s.bind(vec![AnatomicalEntity::new(1, "Centre", 0.5, 0.5)], |_| {});
        assert!(s.entity_at(-1e19, 0.5).is_none());
        assert!(s.entity_at(0.5, f64::NEG_INFINITY).is_none());
        assert!(s.entity_at(f64::MIN, f64::MIN).is_none());
        assert_eq!(s.entity_at(0.5, 0.5).map(|e| e.id), Some(1));
    }

    #[test]
    fn edge_policy_governs_letterbox_taps() {
        // Square plate in a wide view: 100px bands left and right.
        let mut s: InteractionSurface = InteractionSurface::new(SurfaceConfig::default());
        s.set_image(Some(Size::new(100.0, 100.0)));
        s.set_view_size(Size::new(300.0, 100.0));
        s.bind(vec![AnatomicalEntity::new(9, "Edge", 0.0, 0.5)], |_| {});
        assert_eq!(tap(&mut s, (95.0, 50.0), 0), TouchOutcome::Missed);
        s.set_edge_policy(EdgePolicy::Clamp);
        assert_eq!(tap(&mut s, (95.0, 50.0), 100), TouchOutcome::Selected(0));
        assert_eq!(s.config().edge_policy, EdgePolicy::Clamp);
    }
}
