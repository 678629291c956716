use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use gridtrace_core::{EndpointReason, Grid, GridError, Point, StepTrace, TraceRecorder};

use crate::search::{Algorithm, SearchResult};
use crate::traits::AstarPather;

// ---------------------------------------------------------------------------
// Internal node reference for Dijkstra / A* priority queues
// ---------------------------------------------------------------------------

/// Reference into the grid, ordered by `f` then by discovery order, for use
/// in `BinaryHeap`.
///
/// Ordering on `seq` makes the heap pop the earliest-discovered cell among
/// those with minimal `f`, the same cell a linear scan over the frontier in
/// insertion order would pick.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

/// Sentinel for "not yet discovered" in the discovery-order table.
const UNSEEN: u64 = u64::MAX;

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Runs searches over a [`Grid`], reusing its scratch buffers between runs
/// so that repeated queries incur no allocations after warm-up.
///
/// Per-cell search state (distance, heuristic, f-score, back-pointer) lives
/// in the grid itself; the finder only keeps frontier structures.
#[derive(Debug, Default)]
pub struct PathFinder {
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) stack: Vec<(usize, Option<usize>)>,
    pub(crate) order: Vec<u64>,
    pub(crate) next_seq: u64,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathFinder {
    pub fn new() -> Self {
        Self {
            nbuf: Vec::with_capacity(8),
            ..Self::default()
        }
    }

    /// Run `algorithm` from `start` to `end`.
    ///
    /// `pather` supplies neighbours, step costs and (for A*) the heuristic.
    pub fn search<P: AstarPather>(
        &mut self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        algorithm: Algorithm,
        pather: &P,
    ) -> Result<(SearchResult, StepTrace), GridError> {
        let out = match algorithm {
            Algorithm::Bfs => self.bfs(grid, pather, start, end),
            Algorithm::Dfs => self.dfs(grid, pather, start, end),
            Algorithm::Dijkstra => self.dijkstra(grid, pather, start, end),
            Algorithm::AStar => self.astar(grid, pather, start, end),
        }?;
        log::debug!(
            "{algorithm} {start} -> {end}: visited {} cells, path length {}",
            out.0.visited_order.len(),
            out.0.path.len()
        );
        Ok(out)
    }

    // -----------------------------------------------------------------------
    // Shared run plumbing
    // -----------------------------------------------------------------------

    /// Validate both endpoints and reset all run state. Returns the flat
    /// indices of `start` and `end`.
    pub(crate) fn begin(
        &mut self,
        grid: &mut Grid,
        start: Point,
        end: Point,
    ) -> Result<(usize, usize), GridError> {
        let si = endpoint(grid, start)?;
        let ei = endpoint(grid, end)?;
        grid.reset();
        self.open.clear();
        self.queue.clear();
        self.stack.clear();
        self.order.clear();
        self.order.resize(grid.len(), UNSEEN);
        self.next_seq = 0;
        Ok((si, ei))
    }

    /// Push `idx` onto the priority queue with priority `f`, keeping the
    /// discovery order it was first pushed with.
    pub(crate) fn push_open(&mut self, idx: usize, f: f64) {
        if self.order[idx] == UNSEEN {
            self.order[idx] = self.next_seq;
            self.next_seq += 1;
        }
        self.open.push(NodeRef {
            idx,
            f,
            seq: self.order[idx],
        });
    }

    /// Reconstruct the path (if the end was reached), record `MarkPath`
    /// events for it, and freeze the trace.
    pub(crate) fn finish(
        grid: &mut Grid,
        mut rec: TraceRecorder,
        end: Point,
        found: bool,
    ) -> (SearchResult, StepTrace) {
        let path = if found { grid.path_to(end) } else { Vec::new() };
        for &p in &path {
            rec.mark_path(grid, p);
        }
        let trace = rec.finish();
        let visited_order = trace.visits().collect();
        (SearchResult { visited_order, path }, trace)
    }
}

fn endpoint(grid: &Grid, p: Point) -> Result<usize, GridError> {
    let Some(i) = grid.idx(p) else {
        log::trace!("search endpoint {p} is out of bounds");
        return Err(GridError::InvalidEndpoint {
            point: p,
            reason: EndpointReason::OutOfBounds,
        });
    };
    if grid.cell(i).wall {
        log::trace!("search endpoint {p} is a wall");
        return Err(GridError::InvalidEndpoint {
            point: p,
            reason: EndpointReason::Wall,
        });
    }
    Ok(i)
}
