//! Pathfinding algorithms over a [`gridtrace_core::Grid`].
//!
//! Four interchangeable searches, each producing a [`SearchResult`] and a
//! replayable [`StepTrace`](gridtrace_core::StepTrace):
//!
//! - **BFS** shortest path by edge count ([`PathFinder::bfs`])
//! - **DFS** any path, for contrast ([`PathFinder::dfs`])
//! - **Dijkstra** shortest weighted path ([`PathFinder::dijkstra`])
//! - **A\*** shortest weighted path guided by a heuristic ([`PathFinder::astar`])
//!
//! [`search`] is the one-shot entry point; a [`PathFinder`] keeps its
//! scratch buffers between runs.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`SearchOptions`] implements all three for plain grids.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod pathfinder;
mod search;
mod traits;

pub use distance::{chebyshev, euclidean, manhattan, path_cost, step_cost};
pub use pathfinder::PathFinder;
pub use search::{Algorithm, SearchOptions, SearchResult, search, search_markers};
pub use traits::{AstarPather, Pather, WeightedPather};
