#![forbid(unsafe_code)]

//! Edge auto-scroll while dragging.
//!
//! When the pointer sits within the edge band of the viewport along the main
//! axis, the container scrolls a fixed step per elapsed interval. Steps are
//! driven by [`crate::ReorderController::tick`]; this module only decides
//! direction, cadence, and clamping.

use tracing::debug;
use web_time::{Duration, Instant};

use dragsort_core::logging::TARGET_AUTOSCROLL;

/// Scroll direction along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Toward the content start (scroll position decreases).
    Backward,
    /// Toward the content end (scroll position increases).
    Forward,
}

impl ScrollDirection {
    /// Signed unit for scroll deltas.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Backward => -1.0,
            Self::Forward => 1.0,
        }
    }
}

/// Direction implied by a pointer at `pointer` along the main axis of a
/// viewport `length` long, or `None` outside both edge bands.
///
/// Pointers beyond the viewport keep scrolling in the direction of the edge
/// they crossed.
#[must_use]
pub fn edge_direction(pointer: f32, length: f32, band: f32) -> Option<ScrollDirection> {
    if band <= 0.0 || length <= 0.0 {
        return None;
    }
    if pointer < band {
        Some(ScrollDirection::Backward)
    } else if pointer > length - band {
        Some(ScrollDirection::Forward)
    } else {
        None
    }
}

/// Delta that moves `position` by at most `delta` while staying inside
/// `[0, extent]`.
#[must_use]
pub fn clamped_step(position: f32, extent: f32, delta: f32) -> f32 {
    let extent = extent.max(0.0);
    (position + delta).clamp(0.0, extent) - position
}

/// Auto-scroll cadence for one drag.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoScroll {
    active: Option<Active>,
}

#[derive(Debug, Clone, Copy)]
struct Active {
    direction: ScrollDirection,
    last_step: Instant,
}

impl AutoScroll {
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    #[must_use]
    pub fn direction(&self) -> Option<ScrollDirection> {
        self.active.map(|a| a.direction)
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Start, redirect, or stop scrolling. Starting or reversing resets the
    /// cadence so the first step lands one interval after `now`.
    pub fn set_direction(&mut self, direction: Option<ScrollDirection>, now: Instant) {
        match (self.active, direction) {
            (Some(active), Some(dir)) if active.direction == dir => {}
            (_, Some(dir)) => {
                debug!(target: TARGET_AUTOSCROLL, direction = ?dir, "auto-scroll start");
                self.active = Some(Active {
                    direction: dir,
                    last_step: now,
                });
            }
            (Some(_), None) => {
                debug!(target: TARGET_AUTOSCROLL, "auto-scroll stop");
                self.active = None;
            }
            (None, None) => {}
        }
    }

    pub fn stop(&mut self) {
        if self.active.take().is_some() {
            debug!(target: TARGET_AUTOSCROLL, "auto-scroll stop");
        }
    }

    /// Number of whole intervals elapsed since the last step, consuming them.
    #[must_use]
    pub fn due_steps(&mut self, now: Instant, interval: Duration) -> u32 {
        let Some(active) = self.active.as_mut() else {
            return 0;
        };
        if interval.is_zero() {
            return 0;
        }
        let elapsed = now.saturating_duration_since(active.last_step);
        let steps = u32::try_from(elapsed.as_nanos() / interval.as_nanos()).unwrap_or(u32::MAX);
        active.last_step += interval * steps;
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(16);

    #[test]
    fn edge_bands() {
        assert_eq!(edge_direction(10.0, 400.0, 40.0), Some(ScrollDirection::Backward));
        assert_eq!(edge_direction(-30.0, 400.0, 40.0), Some(ScrollDirection::Backward));
        assert_eq!(edge_direction(200.0, 400.0, 40.0), None);
        assert_eq!(edge_direction(40.0, 400.0, 40.0), None);
        assert_eq!(edge_direction(395.0, 400.0, 40.0), Some(ScrollDirection::Forward));
        assert_eq!(edge_direction(900.0, 400.0, 40.0), Some(ScrollDirection::Forward));
        assert_eq!(edge_direction(5.0, 400.0, 0.0), None);
    }

    #[test]
    fn step_is_clamped() {
        assert_eq!(clamped_step(0.0, 100.0, -8.0), 0.0);
        assert_eq!(clamped_step(4.0, 100.0, -8.0), -4.0);
        assert_eq!(clamped_step(96.0, 100.0, 8.0), 4.0);
        assert_eq!(clamped_step(50.0, 100.0, 8.0), 8.0);
        assert_eq!(clamped_step(0.0, 0.0, 8.0), 0.0);
    }

    #[test]
    fn cadence_counts_whole_intervals() {
        let now = Instant::now();
        let mut scroll = AutoScroll::new();
        assert_eq!(scroll.due_steps(now + INTERVAL, INTERVAL), 0);
        scroll.set_direction(Some(ScrollDirection::Forward), now);
        assert_eq!(scroll.due_steps(now + Duration::from_millis(10), INTERVAL), 0);
        assert_eq!(scroll.due_steps(now + Duration::from_millis(16), INTERVAL), 1);
        assert_eq!(scroll.due_steps(now + Duration::from_millis(50), INTERVAL), 2);
        assert_eq!(scroll.due_steps(now + Duration::from_millis(60), INTERVAL), 0);
    }

    #[test]
    fn same_direction_keeps_cadence() {
        let now = Instant::now();
        let mut scroll = AutoScroll::new();
        scroll.set_direction(Some(ScrollDirection::Backward), now);
        scroll.set_direction(Some(ScrollDirection::Backward), now + Duration::from_millis(10));
        assert_eq!(scroll.due_steps(now + INTERVAL, INTERVAL), 1);
    }

    #[test]
    fn stop_clears_direction() {
        let now = Instant::now();
        let mut scroll = AutoScroll::new();
        scroll.set_direction(Some(ScrollDirection::Forward), now);
        assert!(scroll.is_active());
        scroll.set_direction(None, now);
        assert_eq!(scroll.direction(), None);
        assert_eq!(scroll.due_steps(now + INTERVAL * 4, INTERVAL), 0);
    }
}
