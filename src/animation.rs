// SPDX-License-Identifier: MPL-2.0
//! Declarative animation tweens for the gallery.
//!
//! A [`Tween`] is a fire-and-forget value: it records when it started and
//! derives its progress from the clock passed in by the caller (the tick
//! subscription forwards `Instant`s from the runtime). Nothing is awaited;
//! when every tween reports finished the tick subscription is dropped.

use std::time::{Duration, Instant};

/// Overshoot factor for [`back_out`], matching the entrance curve of the
/// thumbnail reveal.
pub const BACK_OVERSHOOT: f32 = 1.7;

/// A time-based tween over `[0, 1]` with an optional start delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tween {
    started: Instant,
    delay: Duration,
    duration: Duration,
}

impl Tween {
    /// Creates a tween starting at `now` and running for `duration`.
    #[must_use]
    pub fn new(now: Instant, duration: Duration) -> Self {
        Self {
            started: now,
            delay: Duration::ZERO,
            duration,
        }
    }

    /// Delays the start of the tween. Progress stays at `0.0` until the
    /// delay has elapsed.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Restarts the tween from `now`, keeping delay and duration.
    pub fn restart(&mut self, now: Instant) {
        self.started = now;
    }

    /// Linear progress in `[0, 1]` at instant `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed <= self.delay {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let active = elapsed - self.delay;
        (active.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the tween has reached its end at instant `now`.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.delay + self.duration
    }
}

/// Cubic ease-out: fast start, gentle landing. Used for the lightbox
/// fade/scale-in.
#[must_use]
pub fn cubic_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Back ease-out with overshoot `s`: the value passes its target and
/// settles back. Used for the thumbnail entrance.
#[must_use]
pub fn back_out(t: f32, s: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) - 1.0;
    1.0 + (s + 1.0) * t.powi(3) + s * t.powi(2)
}

/// Linear interpolation between `a` and `b` by eased factor `t`.
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
