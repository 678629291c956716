use gridtrace_core::{Grid, GridError, Point, StepTrace, TraceRecorder};

use crate::PathFinder;
use crate::search::SearchResult;
use crate::traits::Pather;

impl PathFinder {
    /// Breadth-first search from `start` to `end`.
    ///
    /// Cells are marked visited when enqueued, so each cell enters the queue
    /// at most once. The search stops the first time `end` is dequeued; the
    /// path is shortest by edge count.
    pub fn bfs<P: Pather>(
        &mut self,
        grid: &mut Grid,
        pather: &P,
        start: Point,
        end: Point,
    ) -> Result<(SearchResult, StepTrace), GridError> {
        let (si, ei) = self.begin(grid, start, end)?;
        let mut rec = TraceRecorder::new();

        grid.cell_mut(si).distance = 0.0;
        rec.visit(grid, start);
        self.queue.push_back(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = self.queue.pop_front() {
            if ci == ei {
                found = true;
                break;
            }
            let cp = grid.point(ci);
            let next_dist = grid.cell(ci).distance + 1.0;

            pather.neighbors(grid, cp, &mut nbuf);
            for &np in nbuf.iter() {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                let n = grid.cell_mut(ni);
                if n.visited {
                    continue;
                }
                n.distance = next_dist;
                n.previous = Some(ci);
                rec.visit(grid, np);
                self.queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        Ok(Self::finish(grid, rec, end, found))
    }
}
