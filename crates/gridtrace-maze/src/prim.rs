//! Randomized Prim's carver.

use gridtrace_core::{Grid, Point, StepTrace, TraceRecorder};
use rand::Rng;

use crate::mazegen::{START_ROOM, between, room_neighbors};

/// Carve a Prim's-style spanning tree of rooms into an all-wall `grid`.
///
/// The frontier holds uncarved rooms next to the carved region. Each step
/// removes a uniformly random frontier room, joins it to a uniformly random
/// carved neighbour room, and adds its own uncarved neighbours.
pub(crate) fn carve<R: Rng>(grid: &mut Grid, rng: &mut R) -> StepTrace {
    let mut rec = TraceRecorder::new();
    let mut frontier = Vec::new();
    let mut in_frontier = vec![false; grid.len()];

    rec.open_wall(grid, START_ROOM);
    extend_frontier(grid, START_ROOM, &mut frontier, &mut in_frontier);

    let mut carved = Vec::with_capacity(4);
    while !frontier.is_empty() {
        let room = frontier.swap_remove(rng.random_range(0..frontier.len()));

        carved.clear();
        carved.extend(room_neighbors(grid, room).filter(|&n| grid.is_open(n)));
        // Every frontier room was added by a carved neighbour.
        if carved.is_empty() {
            continue;
        }
        let from = carved[rng.random_range(0..carved.len())];
        rec.open_wall(grid, between(from, room));
        rec.open_wall(grid, room);
        extend_frontier(grid, room, &mut frontier, &mut in_frontier);
    }

    rec.finish()
}

fn extend_frontier(
    grid: &Grid,
    room: Point,
    frontier: &mut Vec<Point>,
    in_frontier: &mut [bool],
) {
    for n in room_neighbors(grid, room) {
        let Some(i) = grid.idx(n) else {
            continue;
        };
        if grid.cell(i).wall && !in_frontier[i] {
            in_frontier[i] = true;
            frontier.push(n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_room_is_carved_once() {
        let mut g = Grid::new(11, 11).unwrap();
        g.fill_walls();
        let trace = carve(&mut g, &mut StdRng::seed_from_u64(21));
        assert_eq!(trace.len(), 2 * 25 - 1);
        for y in (1..10).step_by(2) {
            for x in (1..10).step_by(2) {
                assert!(g.is_open(Point::new(x, y)));
            }
        }
    }

    #[test]
    fn frontier_ignores_carved_and_duplicate_rooms() {
        let mut g = Grid::new(5, 5).unwrap();
        g.fill_walls();
        g.set_wall(Point::new(3, 1), false).unwrap();
        let mut frontier = Vec::new();
        let mut flags = vec![false; g.len()];
        extend_frontier(&g, Point::new(1, 1), &mut frontier, &mut flags);
        extend_frontier(&g, Point::new(1, 1), &mut frontier, &mut flags);
        assert_eq!(frontier, vec![Point::new(1, 3)]);
    }
}
