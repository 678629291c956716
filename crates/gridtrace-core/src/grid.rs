//! The [`Grid`] type: a fixed-size rectangular lattice of [`Cell`]s.
//!
//! Storage is a single row-major `Vec<Cell>` owned by the grid. Cloning a
//! `Grid` copies the storage, so a clone can be searched independently of
//! the original.

use std::fmt;

use crate::cell::{Cell, CellView};
use crate::error::GridError;
use crate::geom::{Point, Range};

/// A `width × height` grid of cells with optional start/end markers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Option<Point>,
    end: Option<Point>,
}

impl Grid {
    /// Create an open grid of the given dimensions.
    ///
    /// Fails with [`GridError::InvalidDimensions`] if either dimension is
    /// smaller than 1, or if the cell count does not fit in an `i32`.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        let len = match width.checked_mul(height) {
            Some(n) if width >= 1 && height >= 1 => n as usize,
            _ => {
                log::trace!("rejecting grid dimensions {width}x{height}");
                return Err(GridError::InvalidDimensions { width, height });
            }
        };
        Ok(Self {
            cells: vec![Cell::OPEN; len],
            bounds: Range::new(0, 0, width, height),
            start: None,
            end: None,
        })
    }

    /// Parse a grid from rows of text: `#` is a wall, `S` and `E` set the
    /// start and end markers, anything else is open.
    ///
    /// All lines must have the same length.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.lines().map(str::trim_end).filter(|l| !l.is_empty()).collect();
        let height = lines.len() as i32;
        let width = lines.first().map_or(0, |l| l.chars().count()) as i32;
        if lines.iter().any(|l| l.chars().count() as i32 != width) {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let mut grid = Self::new(width, height)?;
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    '#' => grid.set_wall(p, true)?,
                    'S' => grid.set_start(p)?,
                    'E' => grid.set_end(p)?,
                    _ => {}
                }
            }
        }
        Ok(grid)
    }

    /// The bounding range of the grid, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a constructed grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width() as usize + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    fn check(&self, p: Point) -> Result<usize, GridError> {
        self.idx(p).ok_or(GridError::OutOfBounds {
            point: p,
            width: self.width(),
            height: self.height(),
        })
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.idx(p).map(|i| &mut self.cells[i])
    }

    /// Access by flat index. Panics if `idx >= len()`.
    #[inline]
    pub fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Mutable access by flat index. Panics if `idx >= len()`.
    #[inline]
    pub fn cell_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// Whether `p` is a wall. Out-of-range points count as walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.at(p).is_none_or(|c| c.wall)
    }

    /// Whether `p` is in bounds and open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        !self.is_wall(p)
    }

    /// Set or clear the wall at `p`.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<(), GridError> {
        let i = self.check(p)?;
        self.cells[i].wall = wall;
        Ok(())
    }

    /// Turn every cell into a wall and clear all search state.
    pub fn fill_walls(&mut self) {
        self.cells.fill(Cell::WALL);
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.wall).count()
    }

    // -----------------------------------------------------------------------
    // Markers
    // -----------------------------------------------------------------------

    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        self.check(p)?;
        self.start = Some(p);
        Ok(())
    }

    pub fn set_end(&mut self, p: Point) -> Result<(), GridError> {
        self.check(p)?;
        self.end = Some(p);
        Ok(())
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Remove both start and end markers.
    pub fn clear_markers(&mut self) {
        self.start = None;
        self.end = None;
    }

    // -----------------------------------------------------------------------
    // Search support
    // -----------------------------------------------------------------------

    /// Clear visited, distance, heuristic, f-score, back-pointer and path
    /// state. Walls and start/end markers are kept.
    pub fn reset(&mut self) {
        for c in &mut self.cells {
            c.reset();
        }
    }

    /// Append the in-bounds, non-wall neighbours of `p` into `buf`.
    ///
    /// Cardinal order is up, right, down, left; with `allow_diagonal` the
    /// eight neighbours are enumerated clockwise from up. Diagonal moves are
    /// allowed even when both orthogonal cells are walls.
    pub fn neighbors_into(&self, p: Point, allow_diagonal: bool, buf: &mut Vec<Point>) {
        buf.clear();
        if allow_diagonal {
            buf.extend(p.neighbors_8().into_iter().filter(|&n| self.is_open(n)));
        } else {
            buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_open(n)));
        }
    }

    /// The in-bounds, non-wall neighbours of `p`.
    pub fn neighbors(&self, p: Point, allow_diagonal: bool) -> Vec<Point> {
        let mut buf = Vec::with_capacity(8);
        self.neighbors_into(p, allow_diagonal, &mut buf);
        buf
    }

    /// Follow `previous` back-pointers from `p` to the root of its search
    /// tree. The returned path runs root first. Empty if `p` is out of range.
    pub fn path_to(&self, p: Point) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = self.idx(p);
        while let Some(i) = cur {
            path.push(self.point(i));
            // A forest has at most len() nodes on any root path.
            if path.len() > self.cells.len() {
                break;
            }
            cur = self.cells[i].previous;
        }
        path.reverse();
        path
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    /// Row-major snapshot of the replayable state of every cell.
    pub fn views(&self) -> Vec<CellView> {
        self.cells.iter().map(Cell::view).collect()
    }

    /// Row-major iterator over `(Point, &Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            let line = self.bounds.line(y);
            for p in line {
                let glyph = match (self.start, self.end) {
                    (Some(s), _) if s == p => 'S',
                    (_, Some(e)) if e == p => 'E',
                    _ => self.cells[self.point_idx(p)].view().glyph(),
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid {
    #[inline]
    fn point_idx(&self, p: Point) -> usize {
        p.y as usize * self.width() as usize + p.x as usize
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, &Cell)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: crate::geom::RangeIter,
}

impl<'a> Iterator for GridIter<'a> {
    type Item = (Point, &'a Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        Some((p, &self.grid.cells[self.grid.point_idx(p)]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for GridIter<'_> {}
