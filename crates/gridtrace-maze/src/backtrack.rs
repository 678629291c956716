//! Recursive-backtracking carver, driven by an explicit stack.

use gridtrace_core::{Grid, StepTrace, TraceRecorder};
use rand::Rng;

use crate::mazegen::{START_ROOM, between, room_neighbors};

/// Carve a depth-first spanning tree of rooms into an all-wall `grid`.
///
/// The stack holds the current carving path. At each step the top room
/// picks a uniformly random uncarved room two cells away, opens the wall in
/// between and the room itself, and pushes it; a room with no uncarved
/// neighbours is popped.
pub(crate) fn carve<R: Rng>(grid: &mut Grid, rng: &mut R) -> StepTrace {
    let mut rec = TraceRecorder::new();
    rec.open_wall(grid, START_ROOM);

    let mut stack = vec![START_ROOM];
    let mut options = Vec::with_capacity(4);

    while let Some(&current) = stack.last() {
        options.clear();
        options.extend(room_neighbors(grid, current).filter(|&n| grid.is_wall(n)));
        if options.is_empty() {
            stack.pop();
            continue;
        }
        let next = options[rng.random_range(0..options.len())];
        rec.open_wall(grid, between(current, next));
        rec.open_wall(grid, next);
        stack.push(next);
    }

    rec.finish()
}
