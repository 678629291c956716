//! Geometry primitives: [`Point`] and [`Range`].
//!
//! `x` is the column and `y` is the row. Rows grow downwards, so the
//! top-left cell of a grid is `(0, 0)`.

use std::fmt;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point from a column and a row.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create a point from `(row, col)` order.
    #[inline]
    pub const fn at(row: i32, col: i32) -> Self {
        Self { x: col, y: row }
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn col(self) -> i32 {
        self.x
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four cardinal neighbours (up, right, down, left).
    ///
    /// Coordinates wrap at the `i32` limits; a wrapped point is never inside
    /// a grid, so bounds filtering discards it.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        let (x, y) = (self.x, self.y);
        [
            Self::new(x, y.wrapping_sub(1)),
            Self::new(x.wrapping_add(1), y),
            Self::new(x, y.wrapping_add(1)),
            Self::new(x.wrapping_sub(1), y),
        ]
    }

    /// All eight neighbours, clockwise starting from up. Wraps like
    /// [`neighbors_4`](Self::neighbors_4).
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        let (l, r) = (self.x.wrapping_sub(1), self.x.wrapping_add(1));
        let (u, d) = (self.y.wrapping_sub(1), self.y.wrapping_add(1));
        [
            Self::new(self.x, u),
            Self::new(r, u),
            Self::new(r, self.y),
            Self::new(r, d),
            Self::new(self.x, d),
            Self::new(l, d),
            Self::new(l, self.y),
            Self::new(l, u),
        ]
    }

    /// Whether `other` is one of the eight cells surrounding `self`
    /// (cardinal-only when `allow_diagonal` is false).
    #[inline]
    pub fn is_adjacent(self, other: Point, allow_diagonal: bool) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        match (dx, dy) {
            (0, 1) | (1, 0) => true,
            (1, 1) => allow_diagonal,
            _ => false,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Reduces the range to **relative** row `y` (0 = first row of the range).
    ///
    /// Returns an empty range if `y` is out of bounds.
    #[inline]
    pub fn line(self, y: i32) -> Self {
        if self.contains(self.min.shift(0, y)) {
            Self {
                min: Point::new(self.min.x, self.min.y + y),
                max: Point::new(self.max.x, self.min.y + y + 1),
            }
        } else {
            Self::default()
        }
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.x - self.cur.x) as usize;
        let remaining_rows = (self.range.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}
