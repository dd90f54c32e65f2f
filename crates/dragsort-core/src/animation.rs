#![forbid(unsafe_code)]

//! Time-based tweening for reflow animations.
//!
//! A [`Tween`] interpolates a scalar from one value to another over a fixed
//! duration. It holds no clock: callers pass the elapsed time (or an instant)
//! when sampling, so the interpolation is pure and deterministic under test.
//!
//! # Invariants
//!
//! 1. `sample(Duration::ZERO)` returns `from`; any elapsed time at or beyond
//!    the duration returns exactly `to`.
//! 2. [`Tween::retarget`] starts a new segment from the value sampled at the
//!    retarget instant, so motion is continuous when the target changes
//!    mid-flight.
//! 3. Easing functions map `[0, 1]` onto `[0, 1]` with `f(0) = 0` and
//!    `f(1) = 1`.
//!
//! # Failure Modes
//!
//! - Zero duration: the tween is complete immediately and samples to `to`.
//! - Instants earlier than the segment start sample as `from`.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use web_time::Instant;

/// An easing curve over normalized time.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing.
#[must_use]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in.
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Named easing curve, for configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// The function implementing this curve.
    #[must_use]
    pub fn function(self) -> EasingFn {
        match self {
            Self::Linear => linear,
            Self::EaseIn => ease_in,
            Self::EaseOut => ease_out,
            Self::EaseInOut => ease_in_out,
        }
    }
}

/// A scalar interpolation segment anchored at an instant.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: EasingFn,
}

impl Tween {
    /// A tween resting at `value`: complete, with `from == to`.
    #[must_use]
    pub fn at_rest(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started_at: now,
            duration: Duration::ZERO,
            easing: linear,
        }
    }

    /// A tween from `from` to `to` starting at `now`.
    #[must_use]
    pub fn new(from: f32, to: f32, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at: now,
            duration,
            easing: ease_out,
        }
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Start value of the current segment.
    #[must_use]
    pub const fn from(&self) -> f32 {
        self.from
    }

    /// Target value of the current segment.
    #[must_use]
    pub const fn to(&self) -> f32 {
        self.to
    }

    /// Normalized, un-eased progress for `elapsed` time into the segment.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Value at `elapsed` time into the segment.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> f32 {
        let t = self.progress(elapsed);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * (self.easing)(t)
    }

    /// Value at instant `now`.
    #[must_use]
    pub fn sample_at(&self, now: Instant) -> f32 {
        self.sample(now.saturating_duration_since(self.started_at))
    }

    /// Whether the segment has reached its target at `now`.
    #[must_use]
    pub fn is_complete_at(&self, now: Instant) -> bool {
        self.progress(now.saturating_duration_since(self.started_at)) >= 1.0
    }

    /// Begin a new segment toward `to`, starting from the value at `now`.
    ///
    /// Retargeting to the current target is a no-op so repeated identical
    /// requests do not restart the curve.
    pub fn retarget(&mut self, to: f32, now: Instant, duration: Duration) {
        if to == self.to {
            return;
        }
        let current = self.sample_at(now);
        self.from = current;
        self.to = to;
        self.started_at = now;
        self.duration = duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_50: Duration = Duration::from_millis(50);
    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn easing_endpoints() {
        for f in [linear, ease_in, ease_out, ease_in_out] {
            assert_eq!(f(0.0), 0.0);
            assert!((f(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn easing_clamps_input() {
        assert_eq!(ease_out(-1.0), 0.0);
        assert_eq!(ease_in(2.0), 1.0);
    }

    #[test]
    fn named_easing_resolves() {
        assert_eq!((Easing::Linear.function())(0.25), 0.25);
        assert_eq!(Easing::default(), Easing::EaseOut);
    }

    #[test]
    fn linear_tween_midpoint() {
        let t0 = Instant::now();
        let tween = Tween::new(0.0, 48.0, t0, MS_100).easing(linear);
        assert_eq!(tween.sample(Duration::ZERO), 0.0);
        assert!((tween.sample(MS_50) - 24.0).abs() < 1e-4);
        assert_eq!(tween.sample(MS_100), 48.0);
        assert_eq!(tween.sample(Duration::from_secs(5)), 48.0);
    }

    #[test]
    fn zero_duration_is_complete() {
        let t0 = Instant::now();
        let tween = Tween::new(3.0, 9.0, t0, Duration::ZERO);
        assert!(tween.is_complete_at(t0));
        assert_eq!(tween.sample_at(t0), 9.0);
    }

    #[test]
    fn at_rest_tween() {
        let t0 = Instant::now();
        let tween = Tween::at_rest(5.0, t0);
        assert!(tween.is_complete_at(t0));
        assert_eq!(tween.sample_at(t0 + MS_50), 5.0);
    }

    #[test]
    fn retarget_continues_from_current_value() {
        let t0 = Instant::now();
        let mut tween = Tween::new(0.0, 100.0, t0, MS_100).easing(linear);
        tween.retarget(0.0, t0 + MS_50, MS_100);
        assert!((tween.from() - 50.0).abs() < 1e-3);
        assert_eq!(tween.to(), 0.0);
        assert!(!tween.is_complete_at(t0 + MS_100));
        assert_eq!(tween.sample_at(t0 + MS_50 + MS_100), 0.0);
    }

    #[test]
    fn retarget_same_target_is_noop() {
        let t0 = Instant::now();
        let mut tween = Tween::new(0.0, 10.0, t0, MS_100);
        tween.retarget(10.0, t0 + MS_50, MS_100);
        assert_eq!(tween.from(), 0.0);
        assert!(tween.is_complete_at(t0 + MS_100));
    }

    #[test]
    fn instant_before_start_samples_from() {
        let t0 = Instant::now();
        let tween = Tween::new(1.0, 2.0, t0 + MS_50, MS_100);
        assert_eq!(tween.sample_at(t0), 1.0);
    }
}
