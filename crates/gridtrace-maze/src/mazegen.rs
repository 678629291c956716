//! Maze generation over an odd lattice.
//!
//! Rooms sit on odd coordinates; the cell between two rooms two apart is
//! the wall separating them. Generation starts from a grid of solid wall and
//! carves a spanning tree of rooms, so the result is a perfect maze: exactly
//! one simple path joins any two rooms.

use std::fmt;
use std::str::FromStr;

use gridtrace_core::{Grid, GridError, Point, StepTrace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{backtrack, prim};

/// The room every generator starts carving from.
pub const START_ROOM: Point = Point::new(1, 1);

/// The interchangeable maze generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MazeAlgorithm {
    /// Depth-first carving: long, winding corridors.
    RecursiveBacktracking,
    /// Randomized Prim's: short dead ends, lots of branching.
    RandomizedPrim,
}

impl MazeAlgorithm {
    pub const ALL: [MazeAlgorithm; 2] = [Self::RecursiveBacktracking, Self::RandomizedPrim];

    pub fn name(self) -> &'static str {
        match self {
            Self::RecursiveBacktracking => "recursive-backtracking",
            Self::RandomizedPrim => "randomized-prim",
        }
    }
}

impl fmt::Display for MazeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MazeAlgorithm {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive-backtracking" | "backtracking" | "dfs" => Ok(Self::RecursiveBacktracking),
            "randomized-prim" | "prim" => Ok(Self::RandomizedPrim),
            _ => Err(GridError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A generated maze and the trace that carved it.
///
/// Replaying `trace` onto a grid of the same size filled with walls
/// reproduces `grid`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeResult {
    pub grid: Grid,
    pub trace: StepTrace,
}

impl MazeResult {
    /// The top-left room.
    pub fn entrance(&self) -> Point {
        START_ROOM
    }

    /// The bottom-right room.
    pub fn exit(&self) -> Point {
        Point::new(self.grid.width() - 2, self.grid.height() - 2)
    }
}

/// Map generator state: the grid being carved and the random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new MazeGen over `grid`.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Carve a fresh maze into the grid, replacing its previous contents.
    pub fn generate(&mut self, algorithm: MazeAlgorithm) -> Result<StepTrace, GridError> {
        generate(&mut self.grid, algorithm, &mut self.rng)
    }

    /// Give back the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl MazeGen<StdRng> {
    /// A generator with a seeded standard RNG, for reproducible mazes.
    pub fn seeded(grid: Grid, seed: u64) -> Self {
        Self::with_grid(grid, StdRng::seed_from_u64(seed))
    }
}

/// Fill `grid` with walls and carve a maze into it with `algorithm`,
/// drawing every random choice from `rng`. Start and end markers are
/// cleared.
///
/// Fails with [`GridError::InvalidDimensions`] unless both dimensions are
/// odd and at least 3.
pub fn generate<R: Rng>(
    grid: &mut Grid,
    algorithm: MazeAlgorithm,
    rng: &mut R,
) -> Result<StepTrace, GridError> {
    check_lattice(grid.width(), grid.height())?;
    grid.fill_walls();
    grid.clear_markers();
    let trace = match algorithm {
        MazeAlgorithm::RecursiveBacktracking => backtrack::carve(grid, rng),
        MazeAlgorithm::RandomizedPrim => prim::carve(grid, rng),
    };
    log::debug!(
        "{algorithm} maze {}x{}: carved {} cells",
        grid.width(),
        grid.height(),
        trace.len()
    );
    Ok(trace)
}

/// Generate a `width × height` maze from `seed`. The same arguments always
/// produce the same grid and trace.
pub fn generate_maze(
    width: i32,
    height: i32,
    algorithm: MazeAlgorithm,
    seed: u64,
) -> Result<MazeResult, GridError> {
    check_lattice(width, height)?;
    let mut generator = MazeGen::seeded(Grid::new(width, height)?, seed);
    let trace = generator.generate(algorithm)?;
    Ok(MazeResult {
        grid: generator.into_grid(),
        trace,
    })
}

/// Iterate over the rooms of a `width × height` lattice, row-major.
pub fn rooms(width: i32, height: i32) -> impl Iterator<Item = Point> {
    (1..height - 1)
        .step_by(2)
        .flat_map(move |y| (1..width - 1).step_by(2).map(move |x| Point::new(x, y)))
}

fn check_lattice(width: i32, height: i32) -> Result<(), GridError> {
    if width < 3 || height < 3 || width % 2 == 0 || height % 2 == 0 {
        log::trace!("rejecting maze dimensions {width}x{height}");
        return Err(GridError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// The rooms two cells away from `p` (up, right, down, left) that lie
/// inside `grid`.
pub(crate) fn room_neighbors(grid: &Grid, p: Point) -> impl Iterator<Item = Point> + '_ {
    [(0, -2), (2, 0), (0, 2), (-2, 0)]
        .into_iter()
        .map(move |(dx, dy)| p.shift(dx, dy))
        .filter(|&n| grid.contains(n))
}

/// The wall cell between two rooms two apart.
#[inline]
pub(crate) fn between(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2, (a.y + b.y) / 2)
}
