//! **gridstep-paths** — incremental A* search over walled grids.
//!
//! The search is stepped rather than run to completion: after
//! [`Solver::initialize`], each [`Solver::step`] performs exactly one A*
//! iteration and leaves the open set, closed set, and best-path-so-far in a
//! fully settled state a caller can read between steps. This supports
//! progressive consumption — an external scheduler decides how many steps
//! to batch per frame and renders the solver state in between.
//!
//! Movement is 8-directional with uniform unit cost; diagonal legality
//! (no corner-cutting) is baked into the grid's neighbour snapshots by
//! [`gridstep_core::Grid::add_neighbours`]. The default estimate is
//! [`Chebyshev`] distance, the exact lower bound for this movement model;
//! the solver is generic over the [`Heuristic`] strategy.

mod heuristic;
mod solver;

pub use heuristic::{Chebyshev, Heuristic, Manhattan, chebyshev, manhattan};
pub use solver::{Solver, Status};
