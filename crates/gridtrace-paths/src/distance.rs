use gridtrace_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy)
}

/// Cost of a single move between adjacent cells: 1 for a cardinal step,
/// √2 for a diagonal one.
#[inline]
pub fn step_cost(from: Point, to: Point) -> f64 {
    if from.x != to.x && from.y != to.y {
        std::f64::consts::SQRT_2
    } else {
        1.0
    }
}

/// Geometric length of a path made of adjacent steps.
pub fn path_cost(path: &[Point]) -> f64 {
    path.windows(2).map(|w| step_cost(w[0], w[1])).sum()
}
