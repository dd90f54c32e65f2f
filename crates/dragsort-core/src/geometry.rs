#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are logical pixels as `f32`. Item rectangles live in container
//! *content* coordinates (independent of scrolling); pointer positions live in
//! *viewport* coordinates (relative to the visible top-left of the container).
//! [`Axis`] selects the list's main axis so every list computation can be
//! written once for vertical and horizontal lists.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Main axis of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    /// Items stack top-to-bottom.
    #[default]
    Vertical,
    /// Items stack left-to-right.
    Horizontal,
}

impl Axis {
    /// The perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Component of `point` along this axis.
    #[inline]
    #[must_use]
    pub const fn of_point(self, point: Point) -> f32 {
        match self {
            Self::Vertical => point.y,
            Self::Horizontal => point.x,
        }
    }

    /// Component of `offset` along this axis.
    #[inline]
    #[must_use]
    pub const fn of_offset(self, offset: Offset) -> f32 {
        match self {
            Self::Vertical => offset.dy,
            Self::Horizontal => offset.dx,
        }
    }

    /// Component of `size` along this axis.
    #[inline]
    #[must_use]
    pub const fn of_size(self, size: Size) -> f32 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }

    /// An offset of `amount` along this axis and zero across it.
    #[inline]
    #[must_use]
    pub const fn offset(self, amount: f32) -> Offset {
        match self {
            Self::Vertical => Offset::new(0.0, amount),
            Self::Horizontal => Offset::new(amount, 0.0),
        }
    }
}

/// A 2D position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to `self`.
    #[must_use]
    pub fn delta_from(self, origin: Self) -> Offset {
        Offset::new(self.x - origin.x, self.y - origin.y)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        self.delta_from(other).length()
    }

    /// Translate by an offset.
    #[must_use]
    pub fn translate(self, offset: Offset) -> Self {
        Self::new(self.x + offset.dx, self.y + offset.dy)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A 2D displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new offset.
    #[must_use]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f32 {
        self.dx.hypot(self.dy)
    }

    /// Whether both components are exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

impl std::ops::Neg for Offset {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }
}

impl std::ops::Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

/// A 2D extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A rectangle for item bounds, viewports, and hit testing.
///
/// Right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f32,
    /// Top edge (inclusive).
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin with the given size.
    #[inline]
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Translate by an offset.
    #[must_use]
    pub fn translate(&self, offset: Offset) -> Rect {
        Rect::new(self.x + offset.dx, self.y + offset.dy, self.width, self.height)
    }

    /// Leading edge along `axis` (top or left).
    #[inline]
    #[must_use]
    pub fn main_start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }

    /// Trailing edge along `axis` (bottom or right, exclusive).
    #[inline]
    #[must_use]
    pub fn main_end(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.bottom(),
            Axis::Horizontal => self.right(),
        }
    }

    /// Extent along `axis` (height or width).
    #[inline]
    #[must_use]
    pub fn main_extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }

    /// Smallest offset that keeps `self.translate(offset)` inside `bounds`.
    ///
    /// When `self` is larger than `bounds` along an axis, the leading edges
    /// are aligned on that axis.
    #[must_use]
    pub fn clamp_offset_within(&self, offset: Offset, bounds: &Rect) -> Offset {
        fn clamp_axis(start: f32, extent: f32, delta: f32, lo: f32, hi: f32) -> f32 {
            let min = lo - start;
            let max = (hi - extent - start).max(min);
            delta.clamp(min, max)
        }
        Offset::new(
            clamp_axis(self.x, self.width, offset.dx, bounds.x, bounds.right()),
            clamp_axis(self.y, self.height, offset.dy, bounds.y, bounds.bottom()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_and_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Point::new(25.0, 40.0));
        assert_eq!(r.main_start(Axis::Vertical), 20.0);
        assert_eq!(r.main_end(Axis::Horizontal), 40.0);
        assert_eq!(r.main_extent(Axis::Horizontal), 30.0);
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(9.9, 9.9)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
        assert!(!r.contains(Point::new(5.0, 10.0)));
    }

    #[test]
    fn empty_rect() {
        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn clamp_offset_keeps_rect_inside() {
        let item = Rect::new(0.0, 96.0, 100.0, 48.0);
        let bounds = Rect::new(0.0, 0.0, 100.0, 240.0);

        let up = item.clamp_offset_within(Offset::new(0.0, -500.0), &bounds);
        assert_eq!(up, Offset::new(0.0, -96.0));

        let down = item.clamp_offset_within(Offset::new(0.0, 500.0), &bounds);
        assert_eq!(down, Offset::new(0.0, 96.0));

        let sideways = item.clamp_offset_within(Offset::new(12.0, 10.0), &bounds);
        assert_eq!(sideways, Offset::new(0.0, 10.0));
    }

    #[test]
    fn clamp_offset_oversized_rect_aligns_leading_edge() {
        let item = Rect::new(5.0, 0.0, 200.0, 10.0);
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let clamped = item.clamp_offset_within(Offset::new(30.0, 0.0), &bounds);
        assert_eq!(clamped.dx, -5.0);
    }

    #[test]
    fn axis_projection() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(Axis::Vertical.of_point(p), 7.0);
        assert_eq!(Axis::Horizontal.of_point(p), 3.0);
        assert_eq!(Axis::Vertical.offset(4.0), Offset::new(0.0, 4.0));
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
    }

    #[test]
    fn point_delta_and_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(b.delta_from(a), Offset::new(3.0, 4.0));
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.translate(Offset::new(1.0, 2.0)), Point::new(1.0, 2.0));
    }
}
