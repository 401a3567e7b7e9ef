// SPDX-License-Identifier: MPL-2.0
//! Staggered entrance animation for the thumbnail grid.
//!
//! The reveal runs once per component lifetime: the first activation of
//! the gallery screen starts it, and the guard keeps later activations
//! (screen toggles) from replaying it. Each thumbnail gets the same tween
//! delayed by its index.

use crate::animation::{back_out, Tween, BACK_OVERSHOOT};
use std::time::{Duration, Instant};

/// Duration of a single thumbnail's entrance tween.
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);
/// Extra start delay added per thumbnail index.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// State of the one-shot entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealAnimation {
    started: Option<Instant>,
    completed: bool,
    count: usize,
}

impl RevealAnimation {
    /// Creates the animation for `count` thumbnails. When `enabled` is
    /// false (user preference) the reveal is considered already done and
    /// thumbnails appear at full opacity immediately.
    #[must_use]
    pub fn new(count: usize, enabled: bool) -> Self {
        Self {
            started: None,
            completed: !enabled || count == 0,
            count,
        }
    }

    /// Starts the reveal if it has never run. Later calls are no-ops;
    /// this is the once-only guard.
    pub fn activate(&mut self, now: Instant) {
        if self.completed || self.started.is_some() {
            return;
        }
        self.started = Some(now);
    }

    /// Whether the reveal has been triggered at least once.
    #[must_use]
    pub fn has_run(&self) -> bool {
        self.completed || self.started.is_some()
    }

    /// Whether any thumbnail tween is still in flight at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.started {
            Some(_) if self.completed => false,
            Some(started) => !self.last_tween(started).is_finished(now),
            None => false,
        }
    }

    /// Marks the reveal completed once the last thumbnail has landed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(started) = self.started {
            if self.last_tween(started).is_finished(now) {
                self.completed = true;
            }
        }
    }

    /// Eased progress for thumbnail `index` at `now`: `0.0` before the
    /// reveal starts, the back ease-out curve while running (may
    /// overshoot `1.0`), and exactly `1.0` afterwards.
    #[must_use]
    pub fn progress(&self, index: usize, now: Instant) -> f32 {
        if self.completed {
            return 1.0;
        }
        match self.started {
            Some(started) => {
                let tween = self.tween_for(started, index);
                back_out(tween.progress(now), BACK_OVERSHOOT)
            }
            None => 0.0,
        }
    }

    fn tween_for(&self, started: Instant, index: usize) -> Tween {
        let delay = REVEAL_STAGGER
            .checked_mul(index as u32)
            .unwrap_or(Duration::ZERO);
        Tween::new(started, REVEAL_DURATION).with_delay(delay)
    }

    fn last_tween(&self, started: Instant) -> Tween {
        self.tween_for(started, self.count.saturating_sub(1))
    }
}
