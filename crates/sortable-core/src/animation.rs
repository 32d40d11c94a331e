#![forbid(unsafe_code)]

//! Easing functions and the settle-phase timer.
//!
//! Time-based primitives for the animated snap after a drop. The engine
//! holds no wall clock: everything advances through explicit
//! `tick(dt: Duration)` calls driven by the host's frame callback.

use std::time::Duration;

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Cubic ease-out (slower end than quadratic). Default for the item
/// reposition transition; close to the original library's
/// `cubic-bezier(0.2, 1, 0.1, 1)` curve.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Grace period added on top of the transition duration before the
/// settle timer force-completes a drop on its own.
pub const SETTLE_GRACE: Duration = Duration::from_millis(100);

/// Two-phase completion timer for the settle phase between a drop input
/// and the session resetting to idle.
///
/// The host signals visual completion through [`SettleTimer::complete`];
/// if that signal never arrives, the timer elapses on its own at
/// `transition duration + SETTLE_GRACE`. Both paths are kept on purpose:
/// the timeout guarantees a session can never stay stuck in a non-idle
/// state.
#[derive(Debug, Clone, Copy)]
pub struct SettleTimer {
    elapsed: Duration,
    deadline: Duration,
    completed: bool,
}

impl SettleTimer {
    /// Arm a settle timer for the given transition duration.
    #[must_use]
    pub fn new(transition_duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            deadline: transition_duration.saturating_add(SETTLE_GRACE),
            completed: false,
        }
    }

    /// Advance the fallback clock.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Record the host's explicit "visual settle complete" signal.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Whether the settle phase is over (either path).
    #[must_use]
    pub fn is_elapsed(&self) -> bool {
        self.completed || self.elapsed >= self.deadline
    }
}
