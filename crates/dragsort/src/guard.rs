#![forbid(unsafe_code)]

//! Time-window guards around presses and drag ends.

use dragsort_core::PointerKind;
use web_time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
struct LastPress {
    pointer_id: u32,
    kind: PointerKind,
    at: Instant,
}

/// Remembers the last accepted press and the last drag end.
#[derive(Debug, Clone, Copy, Default)]
pub struct PressGuard {
    last_press: Option<LastPress>,
    last_drag_end: Option<Instant>,
}

impl PressGuard {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_press: None,
            last_drag_end: None,
        }
    }

    /// Accept a press at `now` unless the same pointer had a press accepted
    /// less than `window` earlier. Presses from another pointer are always
    /// admitted. Rejected presses do not extend the window.
    pub fn admit_press(
        &mut self,
        pointer_id: u32,
        kind: PointerKind,
        now: Instant,
        window: Duration,
    ) -> bool {
        if let Some(last) = self.last_press
            && last.pointer_id == pointer_id
            && last.kind == kind
            && now.saturating_duration_since(last.at) < window
        {
            return false;
        }
        self.last_press = Some(LastPress {
            pointer_id,
            kind,
            at: now,
        });
        true
    }

    pub fn record_drag_end(&mut self, now: Instant) {
        self.last_drag_end = Some(now);
    }

    /// Whether a click at `now` falls within `window` of the last drag end.
    #[must_use]
    pub fn suppresses_click(&self, now: Instant, window: Duration) -> bool {
        self.last_drag_end
            .is_some_and(|end| now.saturating_duration_since(end) < window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    const MOUSE: PointerKind = PointerKind::Mouse;

    #[test]
    fn second_press_inside_window_is_rejected() {
        let now = Instant::now();
        let mut guard = PressGuard::new();
        assert!(guard.admit_press(1, MOUSE, now, WINDOW));
        assert!(!guard.admit_press(1, MOUSE, now + Duration::from_millis(299), WINDOW));
        assert!(guard.admit_press(1, MOUSE, now + WINDOW, WINDOW));
    }

    #[test]
    fn rejected_press_does_not_extend_window() {
        let now = Instant::now();
        let mut guard = PressGuard::new();
        assert!(guard.admit_press(1, MOUSE, now, WINDOW));
        assert!(!guard.admit_press(1, MOUSE, now + Duration::from_millis(200), WINDOW));
        assert!(guard.admit_press(1, MOUSE, now + Duration::from_millis(350), WINDOW));
    }

    #[test]
    fn other_pointer_is_admitted_inside_window() {
        let now = Instant::now();
        let mut guard = PressGuard::new();
        assert!(guard.admit_press(1, MOUSE, now, WINDOW));
        assert!(guard.admit_press(2, PointerKind::Touch, now + Duration::from_millis(150), WINDOW));
        // The window now belongs to pointer 2.
        assert!(guard.admit_press(1, MOUSE, now + Duration::from_millis(200), WINDOW));
        assert!(!guard.admit_press(1, MOUSE, now + Duration::from_millis(250), WINDOW));
    }

    #[test]
    fn same_id_with_different_kind_is_a_different_pointer() {
        let now = Instant::now();
        let mut guard = PressGuard::new();
        assert!(guard.admit_press(1, MOUSE, now, WINDOW));
        assert!(guard.admit_press(1, PointerKind::Pen, now + Duration::from_millis(10), WINDOW));
    }

    #[test]
    fn click_suppression_window() {
        let now = Instant::now();
        let window = Duration::from_millis(200);
        let mut guard = PressGuard::new();
        assert!(!guard.suppresses_click(now, window));
        guard.record_drag_end(now);
        assert!(guard.suppresses_click(now + Duration::from_millis(150), window));
        assert!(!guard.suppresses_click(now + window, window));
    }
}
