use gridtrace_core::{Grid, GridError, Point, StepTrace, TraceRecorder};

use crate::PathFinder;
use crate::search::SearchResult;
use crate::traits::WeightedPather;

impl PathFinder {
    /// Dijkstra's shortest-path search from `start` to `end`.
    ///
    /// Repeatedly finalises the unvisited frontier cell with the smallest
    /// `distance`, breaking ties in favour of the cell discovered first, and
    /// relaxes its neighbours. Stops once `end` is finalised.
    pub fn dijkstra<P: WeightedPather>(
        &mut self,
        grid: &mut Grid,
        pather: &P,
        start: Point,
        end: Point,
    ) -> Result<(SearchResult, StepTrace), GridError> {
        let (si, ei) = self.begin(grid, start, end)?;
        let mut rec = TraceRecorder::new();

        {
            let s = grid.cell_mut(si);
            s.distance = 0.0;
            s.f_score = 0.0;
        }
        self.push_open(si, 0.0);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(current) = self.open.pop() {
            let ci = current.idx;
            // Skip stale entries.
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
                let tentative = current_g + pather.cost(cp, np);
                let n = grid.cell_mut(ni);
                if n.visited || tentative >= n.distance {
                    continue;
                }
                n.distance = tentative;
                n.f_score = tentative;
                n.previous = Some(ci);
                self.push_open(ni, tentative);
            }
        }

        self.nbuf = nbuf;
        Ok(Self::finish(grid, rec, end, found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchOptions;
    use crate::distance::path_cost;

    #[test]
    fn dijkstra_diagonal_uses_euclidean_steps() {
        let mut g = Grid::new(4, 4).unwrap();
        let mut pf = PathFinder::new();
        let opts = SearchOptions::default().with_diagonal(true);
        let (res, _) = pf
            .dijkstra(&mut g, &opts, Point::new(0, 0), Point::new(3, 3))
            .unwrap();
        assert_eq!(res.path.len(), 4);
        let expected = 3.0 * std::f64::consts::SQRT_2;
        assert!((path_cost(&res.path) - expected).abs() < 1e-9);
        assert!((g.at(Point::new(3, 3)).unwrap().distance - expected).abs() < 1e-9);
    }

    #[test]
    fn dijkstra_ties_follow_discovery_order() {
        // Both (1,0) and (0,1) sit at distance 1; (1,0) is discovered first
        // (right comes before down) and is finalised first.
        let mut g = Grid::new(2, 2).unwrap();
        let mut pf = PathFinder::new();
        let (res, _) = pf
            .dijkstra(&mut g, &SearchOptions::default(), Point::new(0, 0), Point::new(1, 1))
            .unwrap();
        assert_eq!(
            res.visited_order,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1)
            ]
        );
        assert_eq!(
            res.path,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn dijkstra_goes_around_walls() {
        let mut g = Grid::from_ascii(
            "\
.....
.###.
.#...
.#.#.
...#.",
        )
        .unwrap();
        let mut pf = PathFinder::new();
        let (res, _) = pf
            .dijkstra(&mut g, &SearchOptions::default(), Point::new(2, 2), Point::new(0, 4))
            .unwrap();
        // (2,2) -> (2,3) -> (2,4) -> (1,4) -> (0,4)
        assert_eq!(res.path.len(), 5);
        for w in res.path.windows(2) {
            assert!(w[0].is_adjacent(w[1], false));
            assert!(g.is_open(w[1]));
        }
    }
}
