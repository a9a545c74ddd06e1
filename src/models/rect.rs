use serde::{Deserialize, Serialize};

/// A pointer position in virtual-screen coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned screen rectangle (top-left corner plus size)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScreenRectangle {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ScreenRectangle {
    /// Create a new rectangle from its top-left corner and size
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Canonical rectangle spanned by two corner points, in any drag direction
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: a.x.abs_diff(b.x),
            height: a.y.abs_diff(b.y),
        }
    }

    /// A zero-width or zero-height rectangle selects nothing
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge, clamped to the i32 coordinate space
    pub fn x2(&self) -> i32 {
        clamp_to_i32(self.right())
    }

    /// Exclusive bottom edge, clamped to the i32 coordinate space
    pub fn y2(&self) -> i32 {
        clamp_to_i32(self.bottom())
    }

    fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Overlapping part of two rectangles, `None` when they do not overlap
    pub fn intersection(&self, other: &ScreenRectangle) -> Option<ScreenRectangle> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 <= x1 as i64 || y2 <= y1 as i64 {
            return None;
        }

        // Bounded by the narrower input, so both fit in u32
        Some(Self::new(x1, y1, (x2 - x1 as i64) as u32, (y2 - y1 as i64) as u32))
    }

    /// Smallest rectangle covering both
    ///
    /// `None` when the covering rectangle would reach past the i32
    /// coordinate space.
    pub fn checked_union(&self, other: &ScreenRectangle) -> Option<ScreenRectangle> {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());

        if x2 > i32::MAX as i64 || y2 > i32::MAX as i64 {
            return None;
        }

        Some(Self::new(
            x1,
            y1,
            u32::try_from(x2 - x1 as i64).ok()?,
            u32::try_from(y2 - y1 as i64).ok()?,
        ))
    }

    /// The same rectangle expressed relative to `origin`
    pub fn offset_from(&self, origin: Point) -> ScreenRectangle {
        Self::new(
            self.x.saturating_sub(origin.x),
            self.y.saturating_sub(origin.y),
            self.width,
            self.height,
        )
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

fn clamp_to_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
