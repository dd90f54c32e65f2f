#![forbid(unsafe_code)]

//! Canonical pointer input types.
//!
//! These mirror the shape of browser pointer events closely enough for a host
//! adapter to forward them one-to-one, while staying free of any DOM types.
//! Positions are viewport-relative (see [`crate::geometry`]).
//!
//! # Design Notes
//!
//! - `pointer_id` is host-assigned and only compared for equality.
//! - `button` is `None` for move and cancel events, matching pointer-event
//!   semantics where the pressed button is only meaningful on down/up.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// The device class that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

impl PointerKind {
    /// Whether this is a touch contact.
    #[must_use]
    pub const fn is_touch(self) -> bool {
        matches!(self, Self::Touch)
    }
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerButton {
    /// Left mouse button, pen tip, or touch contact.
    Primary,
    /// Wheel/middle button.
    Auxiliary,
    /// Right mouse button or pen barrel button.
    Secondary,
    Back,
    Forward,
}

/// Lifecycle phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub pointer_id: u32,
    pub kind: PointerKind,
    pub button: Option<PointerButton>,
    /// Viewport-relative position.
    pub position: Point,
}

impl PointerEvent {
    /// Create an event with no button.
    #[must_use]
    pub const fn new(
        phase: PointerPhase,
        pointer_id: u32,
        kind: PointerKind,
        position: Point,
    ) -> Self {
        Self {
            phase,
            pointer_id,
            kind,
            button: None,
            position,
        }
    }

    /// Set the button (builder style).
    #[must_use]
    pub const fn with_button(mut self, button: PointerButton) -> Self {
        self.button = Some(button);
        self
    }

    /// Primary-button press at `position`.
    #[must_use]
    pub const fn down(pointer_id: u32, kind: PointerKind, position: Point) -> Self {
        Self::new(PointerPhase::Down, pointer_id, kind, position)
            .with_button(PointerButton::Primary)
    }

    /// Move at `position`.
    #[must_use]
    pub const fn moved(pointer_id: u32, kind: PointerKind, position: Point) -> Self {
        Self::new(PointerPhase::Move, pointer_id, kind, position)
    }

    /// Primary-button release at `position`.
    #[must_use]
    pub const fn up(pointer_id: u32, kind: PointerKind, position: Point) -> Self {
        Self::new(PointerPhase::Up, pointer_id, kind, position).with_button(PointerButton::Primary)
    }

    /// Host-initiated cancellation at `position`.
    #[must_use]
    pub const fn cancel(pointer_id: u32, kind: PointerKind, position: Point) -> Self {
        Self::new(PointerPhase::Cancel, pointer_id, kind, position)
    }

    /// Whether this event may begin a reorder gesture: a primary mouse button,
    /// any pen contact, or any touch contact.
    #[must_use]
    pub fn can_begin_gesture(&self) -> bool {
        match self.kind {
            PointerKind::Mouse => self.button == Some(PointerButton::Primary),
            PointerKind::Pen | PointerKind::Touch => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_needs_primary_button() {
        let p = Point::new(1.0, 2.0);
        assert!(PointerEvent::down(1, PointerKind::Mouse, p).can_begin_gesture());
        let right = PointerEvent::new(PointerPhase::Down, 1, PointerKind::Mouse, p)
            .with_button(PointerButton::Secondary);
        assert!(!right.can_begin_gesture());
        let none = PointerEvent::new(PointerPhase::Down, 1, PointerKind::Mouse, p);
        assert!(!none.can_begin_gesture());
    }

    #[test]
    fn pen_and_touch_accept_any_button() {
        let p = Point::ORIGIN;
        let pen = PointerEvent::new(PointerPhase::Down, 2, PointerKind::Pen, p)
            .with_button(PointerButton::Secondary);
        assert!(pen.can_begin_gesture());
        let touch = PointerEvent::new(PointerPhase::Down, 3, PointerKind::Touch, p);
        assert!(touch.can_begin_gesture());
    }

    #[test]
    fn constructors_set_phase() {
        let p = Point::ORIGIN;
        assert_eq!(PointerEvent::moved(1, PointerKind::Pen, p).phase, PointerPhase::Move);
        assert_eq!(PointerEvent::up(1, PointerKind::Pen, p).phase, PointerPhase::Up);
        assert_eq!(PointerEvent::cancel(1, PointerKind::Pen, p).button, None);
        assert!(PointerKind::Touch.is_touch());
        assert!(!PointerKind::Mouse.is_touch());
    }
}
