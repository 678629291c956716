use gridtrace_core::Grid;
use gridtrace_maze::{MazeAlgorithm, generate_maze};
use gridtrace_paths::{Algorithm, SearchOptions, search};

#[test]
fn fixed_seed_backtracking_maze_is_stable() {
    let a = generate_maze(7, 7, MazeAlgorithm::RecursiveBacktracking, 42).unwrap();
    let b = generate_maze(7, 7, MazeAlgorithm::RecursiveBacktracking, 42).unwrap();
    assert_eq!(a.grid.to_string(), b.grid.to_string());
    assert_eq!(a.trace, b.trace);
}

#[test]
fn every_search_finds_the_unique_route() {
    for algo in MazeAlgorithm::ALL {
        for seed in [1, 2, 3] {
            let maze = generate_maze(25, 17, algo, seed).unwrap();
            let (start, end) = (maze.entrance(), maze.exit());

            let mut paths = Vec::new();
            for search_algo in Algorithm::ALL {
                let mut grid: Grid = maze.grid.clone();
                let (res, _) =
                    search(&mut grid, start, end, search_algo, SearchOptions::default()).unwrap();
                assert!(res.found(), "{search_algo} on {algo} seed {seed}\n{}", maze.grid);
                paths.push(res.path);
            }
            // A perfect maze has exactly one simple path, so even DFS finds it.
            assert!(paths.windows(2).all(|w| w[0] == w[1]));
        }
    }
}

#[test]
fn searching_a_maze_keeps_its_walls() {
    let maze = generate_maze(15, 15, MazeAlgorithm::RandomizedPrim, 8).unwrap();
    let mut grid = maze.grid.clone();
    let walls = grid.wall_count();
    search(
        &mut grid,
        maze.entrance(),
        maze.exit(),
        Algorithm::AStar,
        SearchOptions::default(),
    )
    .unwrap();
    assert_eq!(grid.wall_count(), walls);
    grid.reset();
    assert_eq!(grid.views().iter().filter(|v| v.visited).count(), 0);
}
