// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: anatomical entities, touch samples, gesture states, and outcomes.

use alloc::string::String;
use core::time::Duration;

use kurbo::Point;
use withers_anchor::Anchored;

/// An anatomical structure with a normalized touch anchor.
///
/// Supplied read-only by the data catalog, one ordered list per region. The
/// anchor is expected to lie in [0,1]²; the surface does not enforce this, the
/// catalog loader does.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnatomicalEntity {
    /// Identifier, unique within a region.
    pub id: u32,
    /// Display label.
    pub name: String,
    /// Anchor x as a fraction of the illustration's intrinsic width.
    pub anchor_x: f64,
    /// Anchor y as a fraction of the illustration's intrinsic height.
    pub anchor_y: f64,
}

impl AnatomicalEntity {
    /// Create an entity.
    pub fn new(id: u32, name: impl Into<String>, anchor_x: f64, anchor_y: f64) -> Self {
        Self {
            id,
            name: name.into(),
            anchor_x,
            anchor_y,
        }
    }
}

impl Anchored for AnatomicalEntity {
    fn anchor(&self) -> Point {
        Point::new(self.anchor_x, self.anchor_y)
    }
}

/// Phase of a touch sample within a gesture stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Finger went down; starts a gesture.
    Down,
    /// Finger moved while down.
    Move,
    /// Finger lifted; ends the gesture and may select.
    Up,
    /// The host aborted the gesture.
    Cancel,
}

/// A single touch sample as delivered by the host event pump.
///
/// Samples of one gesture arrive strictly in order (down, any moves, then up
/// or cancel). Only one gesture stream is tracked at a time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Gesture phase.
    pub phase: TouchPhase,
    /// Position in view-local pixels.
    pub position: Point,
    /// Host monotonic clock, measured from an arbitrary epoch.
    pub time: Duration,
}

impl TouchEvent {
    /// Create a sample.
    pub fn new(phase: TouchPhase, position: impl Into<Point>, time: Duration) -> Self {
        Self {
            phase,
            position: position.into(),
            time,
        }
    }

    /// A [`TouchPhase::Down`] sample.
    pub fn down(position: impl Into<Point>, time: Duration) -> Self {
        Self::new(TouchPhase::Down, position, time)
    }

    /// A [`TouchPhase::Move`] sample.
    pub fn moved(position: impl Into<Point>, time: Duration) -> Self {
        Self::new(TouchPhase::Move, position, time)
    }

    /// A [`TouchPhase::Up`] sample.
    pub fn up(position: impl Into<Point>, time: Duration) -> Self {
        Self::new(TouchPhase::Up, position, time)
    }

    /// A [`TouchPhase::Cancel`] sample.
    pub fn cancel(position: impl Into<Point>, time: Duration) -> Self {
        Self::new(TouchPhase::Cancel, position, time)
    }
}

/// Where the surface is in its gesture lifecycle.
///
/// `Idle` is both the initial and the resting state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// No gesture in progress and no feedback visible.
    #[default]
    Idle,
    /// A touch is down; a candidate (possibly none) is held for feedback.
    TrackingDown,
    /// A selection just happened; its highlight is visible until the timer fires.
    FeedbackShowing,
}

/// What a call to [`handle_touch`](crate::InteractionSurface::handle_touch) did.
///
/// Entity references are indices into the currently bound list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchOutcome {
    /// The sample did not apply in the current state (for example a move with
    /// no touch down) and was dropped.
    Ignored,
    /// A gesture is being tracked; `candidate` is the entity under the finger.
    Tracking {
        /// Index of the candidate entity, if any.
        candidate: Option<usize>,
    },
    /// Touch-up landed on an entity; the selection callback has run.
    Selected(usize),
    /// Touch-up landed on nothing.
    Missed,
    /// The gesture was cancelled.
    Cancelled,
}

/// Which part of the lifecycle a [`Highlight`](crate::Highlight) belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    /// The finger is down over the entity.
    Pressed,
    /// The entity was just selected.
    Confirmed,
}
