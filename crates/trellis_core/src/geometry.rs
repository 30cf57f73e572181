//! Integer pixel geometry.
//!
//! Every widget position is a `Point`. The offset handed to a widget at call
//! time is added to its own position to get the absolute draw position, so
//! `Point` addition is the operation everything else leans on.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Sentinel returned for the position of a pointer button that is up.
pub const VOID_POINT: Point = Point::new(-1, -1);

/// 2D point or offset in pixels.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Point {
    /// X component
    pub x: i32,
    /// Y component
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true if both components are zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Returns true if this is the void sentinel.
    #[must_use]
    pub const fn is_void(self) -> bool {
        self.x == VOID_POINT.x && self.y == VOID_POINT.y
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Width and height in pixels.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Size {
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Size {
    /// Zero-sized.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new size.
    #[must_use]
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Shrinks both dimensions by `amount` on each side, saturating at zero.
    #[must_use]
    pub fn inset(self, amount: i32) -> Self {
        Self::new((self.w - amount * 2).max(0), (self.h - amount * 2).max(0))
    }

    /// Returns the offset that centers `inner` inside this size.
    #[must_use]
    pub const fn center(self, inner: Self) -> Point {
        Point::new((self.w - inner.w) / 2, (self.h - inner.h) / 2)
    }
}

/// Axis along which something is laid out or moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

impl Orientation {
    /// Component of `p` along this axis.
    #[must_use]
    pub const fn along(self, p: Point) -> i32 {
        match self {
            Self::Vertical => p.y,
            Self::Horizontal => p.x,
        }
    }

    /// Extent of `size` along this axis.
    #[must_use]
    pub const fn extent(self, size: Size) -> i32 {
        match self {
            Self::Vertical => size.h,
            Self::Horizontal => size.w,
        }
    }

    /// Offset of `distance` along this axis.
    #[must_use]
    pub const fn offset(self, distance: i32) -> Point {
        match self {
            Self::Vertical => Point::new(0, distance),
            Self::Horizontal => Point::new(distance, 0),
        }
    }

    /// Replaces the extent of `size` along this axis.
    #[must_use]
    pub const fn with_extent(self, size: Size, extent: i32) -> Size {
        match self {
            Self::Vertical => Size::new(size.w, extent),
            Self::Horizontal => Size::new(extent, size.h),
        }
    }
}

/// A rectangle in screen coordinates.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Rect {
    /// X position (left edge).
    pub x: i32,
    /// Y position (top edge).
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Creates a rectangle from position and size.
    #[must_use]
    pub const fn from_pos_size(pos: Point, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.w, size.h)
    }

    /// Returns the top-left corner.
    #[must_use]
    pub const fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// Returns the right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Returns the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Returns true if the point is inside the rectangle.
    ///
    /// The void sentinel is never inside a rectangle that starts at or
    /// after the origin.
    #[must_use]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Returns the rectangle moved by `offset`.
    #[must_use]
    pub const fn translate(&self, offset: Point) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    /// Shrinks the rectangle by the given amount on all sides.
    #[must_use]
    pub fn shrink(&self, amount: i32) -> Self {
        let size = self.size().inset(amount);
        Self::new(self.x + amount, self.y + amount, size.w, size.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10, 20, 100, 50);

        assert!(rect.contains(Point::new(50, 30)));
        assert!(rect.contains(Point::new(10, 20)));
        assert!(!rect.contains(Point::new(110, 30)));
        assert!(!rect.contains(Point::new(5, 30)));
        assert!(!rect.contains(Point::new(50, 80)));
    }

    #[test]
    fn test_void_point_outside_screen_rects() {
        let rect = Rect::new(0, 0, 640, 480);
        assert!(!rect.contains(VOID_POINT));
        assert!(VOID_POINT.is_void());
    }

    #[test]
    fn test_shrink_saturates() {
        let rect = Rect::new(0, 0, 4, 30).shrink(3);
        assert_eq!(rect, Rect::new(3, 3, 0, 24));
    }

    #[test]
    fn test_center() {
        let outer = Size::new(100, 40);
        assert_eq!(outer.center(Size::new(20, 10)), Point::new(40, 15));
    }

    #[test]
    fn test_orientation_axes() {
        let size = Size::new(20, 100);
        assert_eq!(Orientation::Vertical.extent(size), 100);
        assert_eq!(Orientation::Horizontal.extent(size), 20);
        assert_eq!(Orientation::Vertical.offset(7), Point::new(0, 7));
        assert_eq!(Orientation::Horizontal.with_extent(size, 5), Size::new(5, 100));
        assert_eq!(Orientation::Horizontal.along(Point::new(3, 9)), 3);
    }

    #[test]
    fn test_point_ops() {
        let mut p = Point::new(3, 4) + Point::new(1, 1) - Point::new(2, 2);
        assert_eq!(p, Point::new(2, 3));
        p += Point::new(-2, -3);
        assert!(p.is_zero());
    }
}
