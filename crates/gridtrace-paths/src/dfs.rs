use gridtrace_core::{Grid, GridError, Point, StepTrace, TraceRecorder};

use crate::PathFinder;
use crate::search::SearchResult;
use crate::traits::Pather;

impl PathFinder {
    /// Depth-first search from `start` to `end`.
    ///
    /// Uses an explicit LIFO stack of `(cell, parent)` pairs and marks cells
    /// visited when popped; a cell pushed more than once is expanded only
    /// the first time. Finds *a* path, not necessarily a short one.
    pub fn dfs<P: Pather>(
        &mut self,
        grid: &mut Grid,
        pather: &P,
        start: Point,
        end: Point,
    ) -> Result<(SearchResult, StepTrace), GridError> {
        let (si, ei) = self.begin(grid, start, end)?;
        let mut rec = TraceRecorder::new();

        self.stack.push((si, None));

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some((ci, parent)) = self.stack.pop() {
            if grid.cell(ci).visited {
                continue;
            }
            let depth = parent.map_or(0.0, |pi| grid.cell(pi).distance + 1.0);
            let c = grid.cell_mut(ci);
            c.distance = depth;
            c.previous = parent;

            let cp = grid.point(ci);
            rec.visit(grid, cp);
            if ci == ei {
                found = true;
                break;
            }

            pather.neighbors(grid, cp, &mut nbuf);
            for &np in nbuf.iter() {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                if !grid.cell(ni).visited {
                    self.stack.push((ni, Some(ci)));
                }
            }
        }

        self.nbuf = nbuf;
        Ok(Self::finish(grid, rec, end, found))
    }
}
