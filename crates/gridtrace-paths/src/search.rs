//! The search entry points and their configuration.

use std::fmt;
use std::str::FromStr;

use gridtrace_core::{Grid, GridError, Point, StepTrace};

use crate::PathFinder;
use crate::distance::{euclidean, manhattan, step_cost};
use crate::traits::{AstarPather, Pather, WeightedPather};

/// The interchangeable search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::AStar];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::Bfs),
            "dfs" | "depth-first" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(GridError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Search configuration.
///
/// Also the default [`AstarPather`]: cardinal moves cost 1, diagonal moves
/// cost √2, and the heuristic is Manhattan distance without diagonals or
/// Euclidean distance with them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    pub allow_diagonal: bool,
}

impl SearchOptions {
    /// Set whether diagonal moves are allowed (builder).
    pub const fn with_diagonal(mut self, allow: bool) -> Self {
        self.allow_diagonal = allow;
        self
    }
}

impl Pather for SearchOptions {
    fn neighbors(&self, grid: &Grid, p: Point, buf: &mut Vec<Point>) {
        grid.neighbors_into(p, self.allow_diagonal, buf);
    }
}

impl WeightedPather for SearchOptions {
    fn cost(&self, from: Point, to: Point) -> f64 {
        step_cost(from, to)
    }
}

impl AstarPather for SearchOptions {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        if self.allow_diagonal {
            euclidean(from, to)
        } else {
            f64::from(manhattan(from, to))
        }
    }
}

/// The outcome of a search.
///
/// An empty `path` means the end is unreachable from the start; it is not an
/// error. Otherwise the path runs from start to end inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub visited_order: Vec<Point>,
    pub path: Vec<Point>,
}

impl SearchResult {
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Search `grid` from `start` to `end` with the chosen algorithm.
///
/// The grid is reset first, then mutated in place; its final state matches
/// what replaying the returned trace onto a reset copy produces.
///
/// Fails with [`GridError::InvalidEndpoint`] when `start` or `end` is out of
/// bounds or on a wall.
pub fn search(
    grid: &mut Grid,
    start: Point,
    end: Point,
    algorithm: Algorithm,
    options: SearchOptions,
) -> Result<(SearchResult, StepTrace), GridError> {
    PathFinder::new().search(grid, start, end, algorithm, &options)
}

/// Like [`search`], between the grid's own start and end markers.
pub fn search_markers(
    grid: &mut Grid,
    algorithm: Algorithm,
    options: SearchOptions,
) -> Result<(SearchResult, StepTrace), GridError> {
    let start = grid.start().ok_or(GridError::MissingEndpoint("start"))?;
    let end = grid.end().ok_or(GridError::MissingEndpoint("end"))?;
    search(grid, start, end, algorithm, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtrace_core::EndpointReason;

    #[test]
    fn algorithm_names_round_trip() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.name().parse::<Algorithm>(), Ok(algo));
            assert_eq!(algo.to_string(), algo.name());
        }
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(
            "greedy".parse::<Algorithm>(),
            Err(GridError::UnknownAlgorithm("greedy".into()))
        );
    }

    #[test]
    fn options_heuristics() {
        let card = SearchOptions::default();
        let diag = card.with_diagonal(true);
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(card.estimate(a, b), 7.0);
        assert_eq!(diag.estimate(a, b), 5.0);
        assert_eq!(card.cost(a, Point::new(1, 0)), 1.0);
    }

    #[test]
    fn invalid_endpoints_are_errors() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_wall(Point::new(1, 1), true).unwrap();
        for algo in Algorithm::ALL {
            let err = search(
                &mut g,
                Point::new(1, 1),
                Point::new(2, 2),
                algo,
                SearchOptions::default(),
            )
            .unwrap_err();
            assert_eq!(
                err,
                GridError::InvalidEndpoint {
                    point: Point::new(1, 1),
                    reason: EndpointReason::Wall
                }
            );
            let err = search(
                &mut g,
                Point::new(0, 0),
                Point::new(3, 0),
                algo,
                SearchOptions::default(),
            )
            .unwrap_err();
            assert_eq!(
                err,
                GridError::InvalidEndpoint {
                    point: Point::new(3, 0),
                    reason: EndpointReason::OutOfBounds
                }
            );
        }
    }

    #[test]
    fn markers_drive_search() {
        let mut g = Grid::from_ascii("S..\n.#.\n..E").unwrap();
        let (res, _) = search_markers(&mut g, Algorithm::Bfs, SearchOptions::default()).unwrap();
        assert_eq!(res.path.len(), 5);
        assert_eq!(res.path.first(), Some(&Point::new(0, 0)));
        assert_eq!(res.path.last(), Some(&Point::new(2, 2)));

        let mut g = Grid::new(2, 2).unwrap();
        assert_eq!(
            search_markers(&mut g, Algorithm::Bfs, SearchOptions::default()).unwrap_err(),
            GridError::MissingEndpoint("start")
        );
    }
}
