//! **gridstep-core** — the walled-grid maze model.
//!
//! Provides the domain types the incremental A* solver in `gridstep-paths`
//! operates on:
//!
//! - [`Point`] — 2D integer coordinates (screen orientation, Y grows down)
//! - [`Cell`] — one grid position with its search scores and wall flag
//! - [`Grid`] — dense cell storage with random wall generation and
//!   corner-cutting-aware neighbour snapshots

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use geom::Point;
pub use grid::{DEFAULT_WALL_PROB, Grid};
