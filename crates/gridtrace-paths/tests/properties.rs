use std::collections::{HashSet, VecDeque};

use gridtrace_core::{Grid, Point};
use gridtrace_paths::{Algorithm, SearchOptions, SearchResult, path_cost, search};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CARDINAL: SearchOptions = SearchOptions {
    allow_diagonal: false,
};

fn run(
    grid: &Grid,
    start: Point,
    end: Point,
    algo: Algorithm,
    opts: SearchOptions,
) -> SearchResult {
    let mut g = grid.clone();
    search(&mut g, start, end, algo, opts).unwrap().0
}

/// A random grid with roughly `density` walls and open corners.
fn random_grid(rng: &mut StdRng, w: i32, h: i32, density: f64) -> Grid {
    let mut g = Grid::new(w, h).unwrap();
    for p in g.bounds() {
        if rng.random_bool(density) {
            g.set_wall(p, true).unwrap();
        }
    }
    g.set_wall(Point::new(0, 0), false).unwrap();
    g.set_wall(Point::new(w - 1, h - 1), false).unwrap();
    g
}

/// Flood fill of the open cells reachable from `start`.
fn component(grid: &Grid, start: Point, allow_diagonal: bool) -> HashSet<Point> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        for n in grid.neighbors(p, allow_diagonal) {
            if seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    seen
}

fn assert_valid_path(grid: &Grid, res: &SearchResult, start: Point, end: Point, diag: bool) {
    assert_eq!(res.path.first(), Some(&start));
    assert_eq!(res.path.last(), Some(&end));
    for w in res.path.windows(2) {
        assert!(w[0].is_adjacent(w[1], diag), "{} -> {} in\n{grid}", w[0], w[1]);
        assert!(grid.is_open(w[1]));
    }
    let visited: HashSet<_> = res.visited_order.iter().copied().collect();
    assert!(res.path.iter().all(|p| visited.contains(p)));
}

#[test]
fn scenario_open_grid() {
    let g = Grid::new(5, 5).unwrap();
    let (s, e) = (Point::at(0, 0), Point::at(4, 4));
    for algo in [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar] {
        let res = run(&g, s, e, algo, CARDINAL);
        assert_eq!(res.path.len(), 9, "{algo}");
        assert_valid_path(&g, &res, s, e, false);
    }
}

#[test]
fn scenario_wall_row_blocks_everything() {
    let mut g = Grid::new(5, 5).unwrap();
    for col in 0..5 {
        g.set_wall(Point::at(2, col), true).unwrap();
    }
    let (s, e) = (Point::at(0, 0), Point::at(4, 4));
    let upper: HashSet<Point> = (0..2)
        .flat_map(|row| (0..5).map(move |col| Point::at(row, col)))
        .collect();
    for algo in Algorithm::ALL {
        let res = run(&g, s, e, algo, CARDINAL);
        assert!(res.path.is_empty(), "{algo}");
        assert_eq!(res.visited_order.len(), 10, "{algo}");
        let visited: HashSet<_> = res.visited_order.into_iter().collect();
        assert_eq!(visited, upper, "{algo}");
    }
}

#[test]
fn optimal_algorithms_agree_on_length() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..60 {
        let g = random_grid(&mut rng, 12, 9, 0.3);
        let (s, e) = (Point::new(0, 0), Point::new(11, 8));
        let bfs = run(&g, s, e, Algorithm::Bfs, CARDINAL);
        let dij = run(&g, s, e, Algorithm::Dijkstra, CARDINAL);
        let ast = run(&g, s, e, Algorithm::AStar, CARDINAL);
        assert_eq!(bfs.path.len(), dij.path.len(), "\n{g}");
        assert_eq!(bfs.path.len(), ast.path.len(), "\n{g}");
        if bfs.found() {
            assert_valid_path(&g, &bfs, s, e, false);
            assert_valid_path(&g, &dij, s, e, false);
            assert_valid_path(&g, &ast, s, e, false);
        }
    }
}

#[test]
fn weighted_algorithms_agree_on_cost_with_diagonals() {
    let diag = CARDINAL.with_diagonal(true);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..60 {
        let g = random_grid(&mut rng, 10, 10, 0.35);
        let (s, e) = (Point::new(0, 0), Point::new(9, 9));
        let dij = run(&g, s, e, Algorithm::Dijkstra, diag);
        let ast = run(&g, s, e, Algorithm::AStar, diag);
        assert_eq!(dij.found(), ast.found());
        if dij.found() {
            assert!((path_cost(&dij.path) - path_cost(&ast.path)).abs() < 1e-9, "\n{g}");
            assert_valid_path(&g, &ast, s, e, true);
            let bfs = run(&g, s, e, Algorithm::Bfs, diag);
            assert!(path_cost(&dij.path) <= path_cost(&bfs.path) + 1e-9);
        }
    }
}

#[test]
fn dfs_is_valid_but_not_optimal() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..40 {
        let g = random_grid(&mut rng, 8, 8, 0.25);
        let (s, e) = (Point::new(0, 0), Point::new(7, 7));
        let dfs = run(&g, s, e, Algorithm::Dfs, CARDINAL);
        let bfs = run(&g, s, e, Algorithm::Bfs, CARDINAL);
        assert_eq!(dfs.found(), bfs.found());
        if dfs.found() {
            assert_valid_path(&g, &dfs, s, e, false);
            assert!(dfs.path.len() >= bfs.path.len());
        }
    }

    let g = Grid::new(3, 3).unwrap();
    let (s, e) = (Point::new(0, 0), Point::new(1, 0));
    let dfs = run(&g, s, e, Algorithm::Dfs, CARDINAL);
    let bfs = run(&g, s, e, Algorithm::Bfs, CARDINAL);
    assert!(dfs.path.len() > bfs.path.len());
}

#[test]
fn astar_explores_no_more_than_dijkstra() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..60 {
        let g = random_grid(&mut rng, 15, 15, 0.25);
        let (s, e) = (Point::new(0, 0), Point::new(14, 14));
        let dij = run(&g, s, e, Algorithm::Dijkstra, CARDINAL);
        let ast = run(&g, s, e, Algorithm::AStar, CARDINAL);
        assert!(ast.visited_order.len() <= dij.visited_order.len(), "\n{g}");
    }
}

#[test]
fn unreachable_end_visits_exactly_the_start_component() {
    let mut g = Grid::new(9, 9).unwrap();
    // Closed box around the end.
    for i in 5..9 {
        g.set_wall(Point::new(i, 5), true).unwrap();
        g.set_wall(Point::new(5, i), true).unwrap();
    }
    let (s, e) = (Point::new(1, 1), Point::new(7, 7));
    // Every step changes each coordinate by at most one, so the box is
    // closed for diagonal moves too.
    for diag in [false, true] {
        let opts = CARDINAL.with_diagonal(diag);
        let expected = component(&g, s, diag);
        for algo in Algorithm::ALL {
            let res = run(&g, s, e, algo, opts);
            assert!(res.path.is_empty(), "{algo} diag={diag}");
            let visited: HashSet<_> = res.visited_order.iter().copied().collect();
            assert_eq!(visited.len(), res.visited_order.len(), "{algo} revisited a cell");
            assert_eq!(visited, expected, "{algo} diag={diag}");
        }
    }
}

#[test]
fn replaying_a_search_reproduces_the_grid() {
    let mut rng = StdRng::seed_from_u64(19);
    let base = random_grid(&mut rng, 10, 10, 0.3);
    for algo in Algorithm::ALL {
        for diag in [false, true] {
            let mut g = base.clone();
            let (_, trace) = search(
                &mut g,
                Point::new(0, 0),
                Point::new(9, 9),
                algo,
                CARDINAL.with_diagonal(diag),
            )
            .unwrap();
            let mut fresh = base.clone();
            fresh.reset();
            trace.apply_all(&mut fresh);
            assert_eq!(fresh.views(), g.views(), "{algo} diag={diag}");
        }
    }
}

#[test]
fn path_marks_follow_visits() {
    let g = Grid::new(6, 4).unwrap();
    for algo in Algorithm::ALL {
        let mut work = g.clone();
        let (res, trace) = search(
            &mut work,
            Point::new(0, 3),
            Point::new(5, 0),
            algo,
            CARDINAL,
        )
        .unwrap();
        let mut visited = HashSet::new();
        for event in &trace {
            match *event {
                gridtrace_core::StepEvent::Visit(p) => assert!(visited.insert(p)),
                gridtrace_core::StepEvent::MarkPath(p) => assert!(visited.contains(&p)),
                gridtrace_core::StepEvent::OpenWall(_) => panic!("search opened a wall"),
            }
        }
        assert_eq!(trace.path_marks().collect::<Vec<_>>(), res.path);
    }
}
