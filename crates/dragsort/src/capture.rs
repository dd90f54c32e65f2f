#![forbid(unsafe_code)]

//! Pointer-capture bookkeeping for the dragged item.
//!
//! Capture is requested when a drag starts and released exactly once when
//! it ends. If the surface revokes capture first, teardown must not release
//! it again.

use tracing::{debug, warn};

use dragsort_core::logging::TARGET_CAPTURE;

use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureState {
    /// The surface granted capture.
    Held,
    /// The surface refused capture; the drag proceeds without it.
    Refused,
    /// The surface revoked capture.
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveCapture {
    pointer_id: u32,
    index: usize,
    state: CaptureState,
}

/// Tracks the capture for the current drag, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerCapture {
    active: Option<ActiveCapture>,
}

impl PointerCapture {
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Pointer whose capture is tracked.
    #[must_use]
    pub fn pointer_id(&self) -> Option<u32> {
        self.active.map(|a| a.pointer_id)
    }

    /// Whether capture is currently held.
    #[must_use]
    pub fn is_held(&self) -> bool {
        matches!(
            self.active,
            Some(ActiveCapture {
                state: CaptureState::Held,
                ..
            })
        )
    }

    /// Whether the surface revoked the tracked capture.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        matches!(
            self.active,
            Some(ActiveCapture {
                state: CaptureState::Lost,
                ..
            })
        )
    }

    /// Route `pointer_id` to item `index`. A surface refusal is logged and
    /// tolerated.
    pub fn acquire<S: Surface + ?Sized>(&mut self, surface: &mut S, index: usize, pointer_id: u32) {
        if self.active.is_some() {
            self.release(surface);
        }
        let state = match surface.set_pointer_capture(index, pointer_id) {
            Ok(()) => {
                debug!(target: TARGET_CAPTURE, pointer_id, index, "capture acquired");
                CaptureState::Held
            }
            Err(err) => {
                warn!(target: TARGET_CAPTURE, pointer_id, index, %err, "capture refused");
                CaptureState::Refused
            }
        };
        self.active = Some(ActiveCapture {
            pointer_id,
            index,
            state,
        });
    }

    /// Record that the surface revoked capture for `pointer_id`. Returns
    /// whether it matched the tracked capture.
    pub fn mark_lost(&mut self, pointer_id: u32) -> bool {
        match self.active.as_mut() {
            Some(active) if active.pointer_id == pointer_id => {
                debug!(target: TARGET_CAPTURE, pointer_id, index = active.index, "capture lost");
                active.state = CaptureState::Lost;
                true
            }
            _ => false,
        }
    }

    /// Release the tracked capture if it is still held. Calling this again,
    /// or after the capture was lost, does nothing.
    pub fn release<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let Some(active) = self.active.take() else {
            return;
        };
        if active.state != CaptureState::Held {
            return;
        }
        match surface.release_pointer_capture(active.pointer_id) {
            Ok(()) => {
                debug!(target: TARGET_CAPTURE, pointer_id = active.pointer_id, "capture released");
            }
            Err(err) => {
                warn!(
                    target: TARGET_CAPTURE,
                    pointer_id = active.pointer_id,
                    %err,
                    "capture release failed"
                );
            }
        }
    }
}
