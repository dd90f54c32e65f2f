#![forbid(unsafe_code)]

//! Structured records returned by every controller input.
//!
//! Hosts can ignore these entirely; they exist so tests and diagnostics can
//! see *why* an input did or did not change the gesture without scraping
//! logs.

use dragsort_core::Offset;

/// Observable lifecycle phase of the controller.
///
/// ```text
/// Idle -> Pressed -> Dragging -> Committing -> Idle
///            \           \-----> Cancelled --> Idle
///             \--> Idle (click or touch scroll)
/// ```
///
/// `Committing` and `Cancelled` are transient: the controller passes
/// through them and settles in `Idle` before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Pressed,
    Dragging,
    Committing,
    Cancelled,
}

/// Which input produced a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputPhase {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerCancel,
    LostPointerCapture,
    Tick,
    Cancel,
}

/// How a press became a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragTrigger {
    /// Travel beyond the drag threshold.
    Motion,
    /// The long-press delay elapsed.
    LongPress,
}

/// Why a gesture was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelReason {
    /// The host reported pointer-cancel for the tracked pointer.
    PointerCancel,
    /// Another pointer-down arrived while the gesture was active.
    SupersededByPointerDown,
    /// The host re-rendered with a different number of items.
    ItemCountChanged { expected: usize, actual: usize },
    /// Item bounds could not be measured when the drag started.
    MissingBounds,
    /// The host called [`crate::ReorderController::cancel`].
    Programmatic,
}

/// Why an input was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoredReason {
    /// The host's `can_drag()` returned false.
    DragDisabled,
    /// Not a primary mouse button, pen, or touch contact.
    PointerNotAccepted,
    /// Same pointer pressed again within the double-press window.
    DoublePress,
    /// The press did not land on any item.
    NoItemUnderPointer,
    /// No gesture is active.
    NoActiveGesture,
    /// The event belongs to a pointer other than the tracked one.
    PointerMismatch,
    /// The press has not travelled far enough to start a drag.
    BelowThreshold,
}

/// One observable consequence of an input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReorderEffect {
    /// A press was registered on item `index`.
    Pressed { index: usize },
    /// A press was released before becoming a drag.
    Clicked { index: usize },
    /// A touch press moved before the long press and was left to the host
    /// as a scroll.
    ReleasedToScroll { index: usize },
    DragStarted { index: usize, trigger: DragTrigger },
    /// The dragged item moved; `index_changed` reports a reflow.
    DragMoved { index: usize, index_changed: bool },
    /// The container auto-scrolled by `delta` during a drag.
    AutoScrolled { delta: Offset },
    /// Pointer released after a drag. `from == to` means no reorder.
    Committed { from: usize, to: usize },
    Cancelled { reason: CancelReason, drag_started: bool },
    /// The surface revoked pointer capture.
    CaptureLost { pointer_id: u32 },
}

/// Record of one controller input.
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderDispatch {
    pub input: InputPhase,
    pub from: GesturePhase,
    pub to: GesturePhase,
    pub effects: Vec<ReorderEffect>,
    pub ignored: Option<IgnoredReason>,
}

impl ReorderDispatch {
    pub(crate) fn new(input: InputPhase, from: GesturePhase) -> Self {
        Self {
            input,
            from,
            to: from,
            effects: Vec::new(),
            ignored: None,
        }
    }

    /// Whether the input was dropped without any effect.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.ignored.is_some() && self.effects.is_empty()
    }

    /// Whether any effect matches `predicate`.
    #[must_use]
    pub fn has_effect(&self, predicate: impl Fn(&ReorderEffect) -> bool) -> bool {
        self.effects.iter().any(predicate)
    }

    /// The committed reorder, if this dispatch committed one that changes
    /// the order.
    #[must_use]
    pub fn committed_move(&self) -> Option<(usize, usize)> {
        self.effects.iter().find_map(|effect| match *effect {
            ReorderEffect::Committed { from, to } if from != to => Some((from, to)),
            _ => None,
        })
    }
}
