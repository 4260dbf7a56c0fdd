//! Distance estimates between grid cells.

use gridstep_core::Point;

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Strategy for estimating the remaining cost between two cells.
///
/// The solver depends only on this single-method capability, so alternative
/// estimates can be swapped in without touching the search logic. For
/// optimal paths the estimate must never exceed the true remaining cost.
pub trait Heuristic {
    /// Estimate the cost of moving from `a` to `b`.
    fn estimate(&self, a: Point, b: Point) -> i32;
}

/// [`chebyshev`] as a strategy. Admissible and consistent for unit-cost
/// 8-directional movement, where a diagonal step costs the same as an
/// orthogonal one. The solver's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chebyshev;

impl Heuristic for Chebyshev {
    #[inline]
    fn estimate(&self, a: Point, b: Point) -> i32 {
        chebyshev(a, b)
    }
}

/// [`manhattan`] as a strategy. Overestimates under diagonal movement, so
/// paths may come out suboptimal; suited to 4-directional models.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, a: Point, b: Point) -> i32 {
        manhattan(a, b)
    }
}
