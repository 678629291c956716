//! Maze generation for gridtrace grids.
//!
//! Two randomized spanning-tree carvers over an odd lattice:
//!
//! - **Recursive backtracking** (explicit stack, long corridors)
//! - **Randomized Prim's** (random frontier, short dead ends)
//!
//! The random source is always injected, so a seeded RNG reproduces the same
//! maze and [`StepTrace`](gridtrace_core::StepTrace).

mod backtrack;
pub mod mazegen;
mod prim;

pub use mazegen::{MazeAlgorithm, MazeGen, MazeResult, START_ROOM, generate, generate_maze, rooms};
