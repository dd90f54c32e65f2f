#![forbid(unsafe_code)]

//! Host surface capability.
//!
//! A [`Surface`] is whatever the UI toolkit renders the list into. The
//! controller only needs to measure items, displace them, scroll the
//! container, and route pointer capture; everything else stays in the host.
//!
//! # Coordinate spaces
//!
//! - [`Surface::item_bounds`] and [`Surface::viewport`] use *content*
//!   coordinates: the scrollable content's top-left is the origin and the
//!   values do not change when the container scrolls.
//! - Pointer events passed to the controller are *viewport* coordinates:
//!   relative to the visible top-left, so `content = viewport + scroll`.

use dragsort_core::{Offset, Rect, Size};

use crate::error::CaptureError;

/// Measurement, displacement, scrolling, and pointer capture for a list.
pub trait Surface {
    /// Number of items currently rendered.
    fn item_count(&self) -> usize;

    /// Layout bounds of item `index` in content coordinates, ignoring any
    /// offset applied through [`Surface::set_item_offset`].
    fn item_bounds(&self, index: usize) -> Option<Rect>;

    /// Displace item `index` from its layout position.
    fn set_item_offset(&mut self, index: usize, offset: Offset);

    /// Mark item `index` as the lifted (dragged) item, or clear the mark.
    ///
    /// Hosts typically raise the item's stacking order and disable its
    /// transition while lifted.
    fn set_item_lifted(&mut self, _index: usize, _lifted: bool) {}

    /// Visible region in content coordinates. Its origin is the scroll
    /// position.
    fn viewport(&self) -> Rect;

    /// Full size of the scrollable content.
    fn content_size(&self) -> Size;

    /// Scroll by `delta`, returning the delta actually applied.
    fn scroll_by(&mut self, delta: Offset) -> Offset;

    /// Route further events for `pointer_id` to item `index`.
    fn set_pointer_capture(&mut self, index: usize, pointer_id: u32) -> Result<(), CaptureError>;

    /// Stop routing events for `pointer_id`.
    fn release_pointer_capture(&mut self, pointer_id: u32) -> Result<(), CaptureError>;
}

/// Largest scroll position along each axis: `content - viewport`, floored
/// at zero.
#[must_use]
pub fn scroll_extent<S: Surface + ?Sized>(surface: &S) -> Size {
    let content = surface.content_size();
    let viewport = surface.viewport();
    Size::new(
        (content.width - viewport.width).max(0.0),
        (content.height - viewport.height).max(0.0),
    )
}

/// Content bounds as a rectangle at the origin.
#[must_use]
pub fn content_bounds<S: Surface + ?Sized>(surface: &S) -> Rect {
    Rect::from_size(surface.content_size())
}
