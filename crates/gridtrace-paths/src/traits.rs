use gridtrace_core::{Grid, Point};

/// Minimal pathfinding interface: neighbour enumeration over a grid.
pub trait Pather {
    /// Write the neighbours of `p` into `buf`, replacing its contents.
    fn neighbors(&self, grid: &Grid, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> f64;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> f64;
}
