#![forbid(unsafe_code)]

//! In-memory list surface.
//!
//! Items are stacked along the axis with a fixed gap, starting at content
//! origin. The cross extent is shared by every item. Scrolling clamps to the
//! content like a real container.

use dragsort::{Axis, CaptureError, Offset, Rect, Size, Surface};

/// Record of a capture request made by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureCall {
    Set { index: usize, pointer_id: u32 },
    Release { pointer_id: u32 },
}

/// A `scroll_by` call as the controller issued it, before the surface
/// clamped it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    /// Main-axis scroll position when the request arrived.
    pub from: f32,
    /// Requested main-axis delta.
    pub delta: f32,
}

/// A list of stacked items with a scrollable viewport.
#[derive(Debug, Clone)]
pub struct MockSurface {
    axis: Axis,
    extents: Vec<f32>,
    cross: f32,
    gap: f32,
    viewport_len: f32,
    scroll: f32,
    offsets: Vec<Offset>,
    lifted: Option<usize>,
    captured: Option<u32>,
    capture_calls: Vec<CaptureCall>,
    scroll_requests: Vec<ScrollRequest>,
    refuse_capture: bool,
    hidden: Vec<usize>,
}

impl MockSurface {
    /// `count` items of equal `extent` in a viewport `viewport_len` long.
    #[must_use]
    pub fn uniform(count: usize, extent: f32, viewport_len: f32) -> Self {
        Self::with_extents(vec![extent; count], viewport_len)
    }

    #[must_use]
    pub fn with_extents(extents: Vec<f32>, viewport_len: f32) -> Self {
        let count = extents.len();
        Self {
            axis: Axis::Vertical,
            extents,
            cross: 200.0,
            gap: 0.0,
            viewport_len,
            scroll: 0.0,
            offsets: vec![Offset::ZERO; count],
            lifted: None,
            captured: None,
            capture_calls: Vec::new(),
            scroll_requests: Vec::new(),
            refuse_capture: false,
            hidden: Vec::new(),
        }
    }

    #[must_use]
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub fn refusing_capture(mut self) -> Self {
        self.refuse_capture = true;
        self
    }

    /// Simulate a re-render with `count` items. New items copy the last
    /// extent.
    pub fn set_count(&mut self, count: usize) {
        let fill = self.extents.last().copied().unwrap_or(0.0);
        self.extents.resize(count, fill);
        self.offsets.resize(count, Offset::ZERO);
    }

    /// Make `item_bounds(index)` return `None`.
    pub fn hide_bounds(&mut self, index: usize) {
        self.hidden.push(index);
    }

    pub fn set_scroll(&mut self, position: f32) {
        self.scroll = position.clamp(0.0, self.max_scroll());
    }

    #[must_use]
    pub fn scroll_position(&self) -> f32 {
        self.scroll
    }

    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        (self.content_len() - self.viewport_len).max(0.0)
    }

    #[must_use]
    pub fn offset(&self, index: usize) -> Offset {
        self.offsets.get(index).copied().unwrap_or(Offset::ZERO)
    }

    /// Main-axis offset of item `index`.
    #[must_use]
    pub fn main_offset(&self, index: usize) -> f32 {
        self.axis.of_offset(self.offset(index))
    }

    #[must_use]
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    #[must_use]
    pub fn lifted(&self) -> Option<usize> {
        self.lifted
    }

    #[must_use]
    pub fn captured_pointer(&self) -> Option<u32> {
        self.captured
    }

    #[must_use]
    pub fn capture_calls(&self) -> &[CaptureCall] {
        &self.capture_calls
    }

    /// Every `scroll_by` call, unclamped.
    #[must_use]
    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_requests
    }

    /// Revoke capture as a browser would on `lostpointercapture`.
    pub fn revoke_capture(&mut self) -> Option<u32> {
        self.captured.take()
    }

    fn content_len(&self) -> f32 {
        let items: f32 = self.extents.iter().sum();
        let gaps = self.gap * self.extents.len().saturating_sub(1) as f32;
        items + gaps
    }

    fn main_start(&self, index: usize) -> f32 {
        self.extents[..index].iter().sum::<f32>() + self.gap * index as f32
    }

    fn rect(&self, main: f32, main_len: f32, cross: f32, cross_len: f32) -> Rect {
        match self.axis {
            Axis::Vertical => Rect::new(cross, main, cross_len, main_len),
            Axis::Horizontal => Rect::new(main, cross, main_len, cross_len),
        }
    }
}

impl Surface for MockSurface {
    fn item_count(&self) -> usize {
        self.extents.len()
    }

    fn item_bounds(&self, index: usize) -> Option<Rect> {
        if index >= self.extents.len() || self.hidden.contains(&index) {
            return None;
        }
        Some(self.rect(self.main_start(index), self.extents[index], 0.0, self.cross))
    }

    fn set_item_offset(&mut self, index: usize, offset: Offset) {
        if let Some(slot) = self.offsets.get_mut(index) {
            *slot = offset;
        }
    }

    fn set_item_lifted(&mut self, index: usize, lifted: bool) {
        if lifted {
            self.lifted = Some(index);
        } else if self.lifted == Some(index) {
            self.lifted = None;
        }
    }

    fn viewport(&self) -> Rect {
        self.rect(self.scroll, self.viewport_len, 0.0, self.cross)
    }

    fn content_size(&self) -> Size {
        match self.axis {
            Axis::Vertical => Size::new(self.cross, self.content_len()),
            Axis::Horizontal => Size::new(self.content_len(), self.cross),
        }
    }

    fn scroll_by(&mut self, delta: Offset) -> Offset {
        let before = self.scroll;
        self.scroll_requests.push(ScrollRequest {
            from: before,
            delta: self.axis.of_offset(delta),
        });
        self.set_scroll(before + self.axis.of_offset(delta));
        self.axis.offset(self.scroll - before)
    }

    fn set_pointer_capture(&mut self, index: usize, pointer_id: u32) -> Result<(), CaptureError> {
        if self.refuse_capture {
            return Err(CaptureError::Unavailable { index, pointer_id });
        }
        self.capture_calls.push(CaptureCall::Set { index, pointer_id });
        self.captured = Some(pointer_id);
        Ok(())
    }

    fn release_pointer_capture(&mut self, pointer_id: u32) -> Result<(), CaptureError> {
        self.capture_calls.push(CaptureCall::Release { pointer_id });
        match self.captured {
            Some(id) if id == pointer_id => {
                self.captured = None;
                Ok(())
            }
            _ => Err(CaptureError::NotCaptured { pointer_id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_bounds_with_gap() {
        let surface = MockSurface::uniform(3, 40.0, 100.0).gap(10.0);
        assert_eq!(surface.item_bounds(1), Some(Rect::new(0.0, 50.0, 200.0, 40.0)));
        assert_eq!(surface.content_size(), Size::new(200.0, 140.0));
        assert_eq!(surface.item_bounds(3), None);
    }

    #[test]
    fn horizontal_layout_swaps_axes() {
        let surface = MockSurface::uniform(2, 30.0, 50.0).axis(Axis::Horizontal);
        assert_eq!(surface.item_bounds(1), Some(Rect::new(30.0, 0.0, 30.0, 200.0)));
        assert_eq!(surface.viewport(), Rect::new(0.0, 0.0, 50.0, 200.0));
    }

    #[test]
    fn scroll_is_clamped() {
        let mut surface = MockSurface::uniform(10, 50.0, 200.0);
        assert_eq!(surface.scroll_by(Offset::new(0.0, -5.0)), Offset::ZERO);
        assert_eq!(surface.scroll_by(Offset::new(0.0, 1000.0)), Offset::new(0.0, 300.0));
        assert_eq!(surface.scroll_position(), 300.0);
        assert_eq!(
            surface.scroll_requests(),
            &[
                ScrollRequest {
                    from: 0.0,
                    delta: -5.0
                },
                ScrollRequest {
                    from: 0.0,
                    delta: 1000.0
                },
            ]
        );
        assert_eq!(surface.viewport().y, 300.0);
    }

    #[test]
    fn hidden_bounds_are_missing() {
        let mut surface = MockSurface::uniform(3, 40.0, 100.0);
        surface.hide_bounds(2);
        assert_eq!(surface.item_bounds(2), None);
    }

    #[test]
    fn release_of_unknown_pointer_errors() {
        let mut surface = MockSurface::uniform(1, 40.0, 100.0);
        assert_eq!(
            surface.release_pointer_capture(4),
            Err(CaptureError::NotCaptured { pointer_id: 4 })
        );
    }
}
