use gridtrace_core::{Grid, GridError, Point, StepTrace, TraceRecorder};

use crate::PathFinder;
use crate::search::SearchResult;
use crate::traits::AstarPather;

impl PathFinder {
    /// Compute the shortest path from `start` to `end` using A*.
    ///
    /// The open set is ordered by `f_score = distance + heuristic`, ties
    /// going to the cell discovered first; finalised cells form the closed
    /// set and are never reopened. With an admissible, consistent heuristic
    /// the path is optimal.
    pub fn astar<P: AstarPather>(
        &mut self,
        grid: &mut Grid,
        pather: &P,
        start: Point,
        end: Point,
    ) -> Result<(SearchResult, StepTrace), GridError> {
        let (si, ei) = self.begin(grid, start, end)?;
        let mut rec = TraceRecorder::new();

        // Initialise the start node.
        let h = pather.estimate(start, end);
        {
            let s = grid.cell_mut(si);
            s.distance = 0.0;
            s.heuristic = h;
            s.f_score = h;
        }
        self.push_open(si, h);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(current) = self.open.pop() {
            let ci = current.idx;
            // Closed already; this is a stale entry.
            if grid.cell(ci).visited {
                continue;
            }
            let cp = grid.point(ci);
            rec.visit(grid, cp);
            if ci == ei {
                found = true;
                break;
            }

            let current_g = grid.cell(ci).distance;
            pather.neighbors(grid, cp, &mut nbuf);
            for &np in nbuf.iter() {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(cp, np);
                let n = grid.cell_mut(ni);
                if n.visited || tentative_g >= n.distance {
                    continue;
                }
                n.distance = tentative_g;
                n.heuristic = pather.estimate(np, end);
                n.f_score = tentative_g + n.heuristic;
                n.previous = Some(ci);
                let f = n.f_score;
                self.push_open(ni, f);
            }
        }

        self.nbuf = nbuf;
        Ok(Self::finish(grid, rec, end, found))
    }
}
