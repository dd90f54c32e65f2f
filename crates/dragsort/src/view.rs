#![forbid(unsafe_code)]

//! Minimal scroll to reveal an item.

use dragsort_core::{Axis, Rect};

/// Main-axis scroll delta that brings `target` fully into `viewport`,
/// moving as little as possible. Items larger than the viewport align to
/// its leading edge. The resulting scroll position stays in `[0, extent]`.
#[must_use]
pub fn reveal_delta(target: &Rect, viewport: &Rect, extent: f32, axis: Axis) -> f32 {
    let start = target.main_start(axis);
    let end = target.main_end(axis);
    let view_start = viewport.main_start(axis);
    let view_end = viewport.main_end(axis);

    let delta = if start < view_start || target.main_extent(axis) > viewport.main_extent(axis) {
        start - view_start
    } else if end > view_end {
        end - view_end
    } else {
        0.0
    };
    (view_start + delta).clamp(0.0, extent.max(0.0)) - view_start
}
