#![forbid(unsafe_code)]

//! Owner callbacks.
//!
//! The host owns the backing sequence and is the only place reordering is
//! persisted. Every notification has a no-op default except
//! [`ReorderHost::move_element`].
//!
//! Coordinates passed to callbacks are the viewport-relative pointer position
//! of the event that caused them.

/// Callbacks from the controller to the list owner.
pub trait ReorderHost {
    /// Apply a reorder to the backing sequence. Called once per committed
    /// drag, only when `from != to`.
    fn move_element(&mut self, from: usize, to: usize);

    /// A drag started on item `start_index`.
    fn on_drag_start(&mut self, _start_index: usize, _x: f32, _y: f32) {}

    /// The pointer moved during a drag; `current_index` is the live
    /// insertion target.
    fn on_drag_move(&mut self, _current_index: usize, _x: f32, _y: f32) {}

    /// A drag finished with a pointer release, whether or not it moved.
    fn on_drag_end(&mut self, _from: usize, _to: usize, _x: f32, _y: f32) {}

    /// A started drag was cancelled.
    fn on_drag_cancel(&mut self, _x: f32, _y: f32) {}

    /// A drag started through a long press on item `index`.
    fn on_long_press(&mut self, _index: usize) {}

    /// Whether pointer-downs may start gestures right now.
    fn can_drag(&self) -> bool {
        true
    }

    /// Item to bring into view on request. Advisory only.
    fn default_selected_index(&self) -> Option<usize> {
        None
    }
}

impl<H: ReorderHost + ?Sized> ReorderHost for &mut H {
    fn move_element(&mut self, from: usize, to: usize) {
        (**self).move_element(from, to);
    }

    fn on_drag_start(&mut self, start_index: usize, x: f32, y: f32) {
        (**self).on_drag_start(start_index, x, y);
    }

    fn on_drag_move(&mut self, current_index: usize, x: f32, y: f32) {
        (**self).on_drag_move(current_index, x, y);
    }

    fn on_drag_end(&mut self, from: usize, to: usize, x: f32, y: f32) {
        (**self).on_drag_end(from, to, x, y);
    }

    fn on_drag_cancel(&mut self, x: f32, y: f32) {
        (**self).on_drag_cancel(x, y);
    }

    fn on_long_press(&mut self, index: usize) {
        (**self).on_long_press(index);
    }

    fn can_drag(&self) -> bool {
        (**self).can_drag()
    }

    fn default_selected_index(&self) -> Option<usize> {
        (**self).default_selected_index()
    }
}
