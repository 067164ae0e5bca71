// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface configuration.

use core::time::Duration;

use withers_anchor::Tolerance;
use withers_fit::EdgePolicy;

/// What a touch-move does to the held candidate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovePolicy {
    /// Keep the candidate found at touch-down. Selection still resolves at
    /// the touch-up position.
    #[default]
    Hold,
    /// Re-resolve the candidate at every move, so sliding onto an anchor
    /// highlights it before release.
    Reresolve,
}

/// Tunables for an [`InteractionSurface`](crate::InteractionSurface).
///
/// ```
/// use withers_surface::{MovePolicy, SurfaceConfig};
///
/// let cfg = SurfaceConfig::default()
///     .with_touch_tolerance(0.5)
///     .with_move_policy(MovePolicy::Reresolve);
/// // Clamped to the accepted range.
/// assert_eq!(cfg.touch_tolerance.get(), 0.30);
/// assert_eq!(cfg.feedback_duration_ms, 500);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SurfaceConfig {
    /// Match radius in normalized units, clamped to [0.02, 0.30].
    pub touch_tolerance: Tolerance,
    /// Whether a selection leaves a timed highlight behind.
    pub show_touch_feedback: bool,
    /// How long the selection highlight stays up.
    pub feedback_duration_ms: u64,
    /// Candidate handling during touch-move.
    pub move_policy: MovePolicy,
    /// Handling of taps outside the displayed image.
    pub edge_policy: EdgePolicy,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            touch_tolerance: Tolerance::DEFAULT,
            show_touch_feedback: true,
            feedback_duration_ms: 500,
            move_policy: MovePolicy::Hold,
            edge_policy: EdgePolicy::Reject,
        }
    }
}

impl SurfaceConfig {
    /// Set the match radius; clamped into the accepted range.
    #[must_use]
    pub fn with_touch_tolerance(mut self, radius: f64) -> Self {
        self.touch_tolerance = Tolerance::new(radius);
        self
    }

    /// Enable or disable the selection highlight.
    #[must_use]
    pub fn with_touch_feedback(mut self, show: bool) -> Self {
        self.show_touch_feedback = show;
        self
    }

    /// Set the selection highlight duration in milliseconds.
    #[must_use]
    pub fn with_feedback_duration_ms(mut self, ms: u64) -> Self {
        self.feedback_duration_ms = ms;
        self
    }

    /// Set the touch-move policy.
    #[must_use]
    pub fn with_move_policy(mut self, policy: MovePolicy) -> Self {
        self.move_policy = policy;
        self
    }

    /// Set the out-of-image tap policy.
    #[must_use]
    pub fn with_edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    /// Selection highlight duration.
    pub fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.feedback_duration_ms)
    }
}
