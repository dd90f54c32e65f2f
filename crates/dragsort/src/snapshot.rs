#![forbid(unsafe_code)]

//! Item bounds captured at drag start, and the insertion-index mapping.
//!
//! The snapshot is read-only for the whole drag and is the only basis for
//! index computation. Live positions are animating and would feed back into
//! the index, making it oscillate at boundaries.

use dragsort_core::{Axis, Point, Rect};

use crate::surface::Surface;

/// Original layout bounds of every item, in sequence order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundsSnapshot {
    axis: Axis,
    bounds: Vec<Rect>,
}

impl BoundsSnapshot {
    /// Wrap already-measured bounds.
    #[must_use]
    pub fn from_rects(axis: Axis, bounds: Vec<Rect>) -> Self {
        Self { axis, bounds }
    }

    /// Measure every item on `surface`. Returns `None` if any item cannot be
    /// measured.
    #[must_use]
    pub fn capture<S: Surface + ?Sized>(surface: &S, axis: Axis) -> Option<Self> {
        let bounds = (0..surface.item_count())
            .map(|i| surface.item_bounds(i))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { axis, bounds })
    }

    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Rect> {
        self.bounds.get(index).copied()
    }

    #[must_use]
    pub fn rects(&self) -> &[Rect] {
        &self.bounds
    }

    /// Item containing `point` (content coordinates).
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.bounds.iter().position(|r| r.contains(point))
    }

    /// Insertion index for a dragged item whose center sits at `center` along
    /// the main axis.
    ///
    /// Returns the first item whose trailing edge lies beyond `center`, so an
    /// item whose span contains the center wins and a gap resolves to the
    /// item after it. Past the last item the last index is returned. The
    /// result is non-decreasing in `center`.
    #[must_use]
    pub fn insertion_index(&self, center: f32) -> usize {
        self.bounds
            .iter()
            .position(|r| r.main_end(self.axis) > center)
            .unwrap_or_else(|| self.bounds.len().saturating_sub(1))
    }

    /// Space item `index` occupies in the stack: its extent plus the gap to
    /// the following item (or the preceding one for the last item).
    #[must_use]
    pub fn slot_extent(&self, index: usize) -> f32 {
        let Some(rect) = self.get(index) else {
            return 0.0;
        };
        let axis = self.axis;
        let gap = if let Some(next) = self.get(index + 1) {
            next.main_start(axis) - rect.main_end(axis)
        } else if let Some(prev) = index.checked_sub(1).and_then(|i| self.get(i)) {
            rect.main_start(axis) - prev.main_end(axis)
        } else {
            0.0
        };
        rect.main_extent(axis) + gap.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(count: usize, extent: f32, gap: f32) -> BoundsSnapshot {
        let rects = (0..count)
            .map(|i| Rect::new(0.0, i as f32 * (extent + gap), 200.0, extent))
            .collect();
        BoundsSnapshot::from_rects(Axis::Vertical, rects)
    }

    #[test]
    fn index_within_spans() {
        let snap = stack(5, 48.0, 0.0);
        assert_eq!(snap.insertion_index(0.0), 0);
        assert_eq!(snap.insertion_index(40.0), 0);
        assert_eq!(snap.insertion_index(48.0), 1);
        assert_eq!(snap.insertion_index(120.0), 2);
        assert_eq!(snap.insertion_index(239.0), 4);
    }

    #[test]
    fn index_clamps_outside_list() {
        let snap = stack(5, 48.0, 0.0);
        assert_eq!(snap.insertion_index(-100.0), 0);
        assert_eq!(snap.insertion_index(10_000.0), 4);
    }

    #[test]
    fn gap_resolves_to_following_item() {
        let snap = stack(3, 40.0, 10.0);
        // Item 0 spans [0, 40), gap [40, 50), item 1 spans [50, 90).
        assert_eq!(snap.insertion_index(45.0), 1);
    }

    #[test]
    fn empty_snapshot_maps_to_zero() {
        let snap = BoundsSnapshot::from_rects(Axis::Vertical, Vec::new());
        assert_eq!(snap.insertion_index(10.0), 0);
        assert!(snap.is_empty());
    }

    #[test]
    fn horizontal_axis_uses_x() {
        let rects = (0..4)
            .map(|i| Rect::new(i as f32 * 30.0, 0.0, 30.0, 80.0))
            .collect();
        let snap = BoundsSnapshot::from_rects(Axis::Horizontal, rects);
        assert_eq!(snap.insertion_index(65.0), 2);
        assert_eq!(snap.slot_extent(1), 30.0);
    }

    #[test]
    fn slot_extent_includes_gap() {
        let snap = stack(3, 40.0, 10.0);
        assert_eq!(snap.slot_extent(0), 50.0);
        assert_eq!(snap.slot_extent(2), 50.0);
        assert_eq!(snap.slot_extent(9), 0.0);
        assert_eq!(stack(1, 40.0, 10.0).slot_extent(0), 40.0);
    }

    #[test]
    fn hit_test_finds_item() {
        let snap = stack(5, 48.0, 0.0);
        assert_eq!(snap.hit_test(Point::new(10.0, 120.0)), Some(2));
        assert_eq!(snap.hit_test(Point::new(10.0, 500.0)), None);
        assert_eq!(snap.hit_test(Point::new(250.0, 10.0)), None);
    }
}
