#![forbid(unsafe_code)]

//! A host that keeps a real backing sequence and records every callback.

use dragsort::ReorderHost;
use dragsort_core::move_item;

/// One callback received from the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCall {
    DragStart { index: usize, x: f32, y: f32 },
    DragMove { index: usize, x: f32, y: f32 },
    DragEnd { from: usize, to: usize, x: f32, y: f32 },
    DragCancel { x: f32, y: f32 },
    LongPress { index: usize },
    Move { from: usize, to: usize },
}

impl HostCall {
    /// Short name for assertions on call order.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DragStart { .. } => "drag_start",
            Self::DragMove { .. } => "drag_move",
            Self::DragEnd { .. } => "drag_end",
            Self::DragCancel { .. } => "drag_cancel",
            Self::LongPress { .. } => "long_press",
            Self::Move { .. } => "move",
        }
    }
}

/// Backing sequence `0..count` plus a callback log.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    items: Vec<usize>,
    calls: Vec<HostCall>,
    can_drag: bool,
    selected: Option<usize>,
}

impl RecordingHost {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            items: (0..count).collect(),
            calls: Vec::new(),
            can_drag: true,
            selected: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    #[must_use]
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Callback names in order, skipping drag moves.
    #[must_use]
    pub fn lifecycle(&self) -> Vec<&'static str> {
        self.calls
            .iter()
            .filter(|call| !matches!(call, HostCall::DragMove { .. }))
            .map(HostCall::name)
            .collect()
    }

    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.calls.iter().filter(|call| call.name() == name).count()
    }

    /// Every committed `(from, to)` pair.
    #[must_use]
    pub fn moves(&self) -> Vec<(usize, usize)> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                HostCall::Move { from, to } => Some((from, to)),
                _ => None,
            })
            .collect()
    }

    pub fn set_can_drag(&mut self, can_drag: bool) {
        self.can_drag = can_drag;
    }

    pub fn set_selected(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl ReorderHost for RecordingHost {
    fn move_element(&mut self, from: usize, to: usize) {
        if !move_item(&mut self.items, from, to) {
            tracing::warn!(from, to, len = self.items.len(), "move_element out of bounds");
        }
        self.calls.push(HostCall::Move { from, to });
    }

    fn on_drag_start(&mut self, index: usize, x: f32, y: f32) {
        self.calls.push(HostCall::DragStart { index, x, y });
    }

    fn on_drag_move(&mut self, index: usize, x: f32, y: f32) {
        self.calls.push(HostCall::DragMove { index, x, y });
    }

    fn on_drag_end(&mut self, from: usize, to: usize, x: f32, y: f32) {
        self.calls.push(HostCall::DragEnd { from, to, x, y });
    }

    fn on_drag_cancel(&mut self, x: f32, y: f32) {
        self.calls.push(HostCall::DragCancel { x, y });
    }

    fn on_long_press(&mut self, index: usize) {
        self.calls.push(HostCall::LongPress { index });
    }

    fn can_drag(&self) -> bool {
        self.can_drag
    }

    fn default_selected_index(&self) -> Option<usize> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn move_element_reorders_backing_items() {
        let mut host = RecordingHost::new(5);
        host.move_element(2, 0);
        assert_eq!(host.items(), &[2, 0, 1, 3, 4]);
        assert_eq!(host.moves(), vec![(2, 0)]);
    }

    #[test]
    fn lifecycle_skips_moves() {
        let mut host = RecordingHost::new(3);
        host.on_drag_start(1, 0.0, 0.0);
        host.on_drag_move(1, 0.0, 10.0);
        host.on_drag_cancel(0.0, 10.0);
        assert_eq!(host.lifecycle(), vec!["drag_start", "drag_cancel"]);
        assert_eq!(host.count("drag_move"), 1);
    }

    #[test]
    fn clear_calls_keeps_item_order() {
        let mut host = RecordingHost::new(3);
        host.move_element(0, 2);
        host.on_drag_end(0, 2, 0.0, 0.0);
        host.clear_calls();
        assert!(host.calls().is_empty());
        assert_eq!(host.items(), &[1, 2, 0]);
    }
}
