//! The [`Cell`] type: per-cell wall flag and search bookkeeping.

/// One addressable unit of a [`Grid`](crate::Grid).
///
/// `previous` is a flat index into the owning grid's storage, never an owning
/// reference; the set of back-pointers written by one search is a forest
/// rooted at the search origin.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub wall: bool,
    pub distance: f64,
    pub heuristic: f64,
    pub f_score: f64,
    pub visited: bool,
    pub on_path: bool,
    pub previous: Option<usize>,
}

impl Cell {
    /// An open cell with fresh search state.
    pub const OPEN: Self = Self {
        wall: false,
        distance: f64::INFINITY,
        heuristic: 0.0,
        f_score: f64::INFINITY,
        visited: false,
        on_path: false,
        previous: None,
    };

    /// A wall cell with fresh search state.
    pub const WALL: Self = Self {
        wall: true,
        ..Self::OPEN
    };

    /// Clear search state, keeping the wall flag.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self {
            wall: self.wall,
            ..Self::OPEN
        };
    }

    /// The replayable part of the cell.
    #[inline]
    pub fn view(&self) -> CellView {
        CellView {
            wall: self.wall,
            visited: self.visited,
            on_path: self.on_path,
        }
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::OPEN
    }
}

/// The attributes a [`StepTrace`](crate::StepTrace) can reproduce: what a
/// presentation layer draws for a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellView {
    pub wall: bool,
    pub visited: bool,
    pub on_path: bool,
}

impl CellView {
    /// ASCII glyph used by the grid's `Display` impl.
    pub fn glyph(self) -> char {
        if self.wall {
            '#'
        } else if self.on_path {
            '*'
        } else if self.visited {
            'o'
        } else {
            '.'
        }
    }
}
