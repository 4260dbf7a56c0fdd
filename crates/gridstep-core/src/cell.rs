//! A single maze cell.

use crate::geom::Point;

/// One grid position together with its mutable search state.
///
/// Cells are owned exclusively by a [`Grid`](crate::Grid) and refer to each
/// other by flat index into the grid's cell storage, never by pointer. The
/// solver owns `f`/`g`/`h`/`parent`: they are zeroed by
/// `Solver::initialize` and only meaningful for cells the search has
/// touched, at which point `f == g + h` holds.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    /// Grid position.
    pub pos: Point,
    /// Expansion priority, `g + h`. Lower is better.
    pub f: i32,
    /// Exact cost from the start along the best known path.
    pub g: i32,
    /// Heuristic estimate of the remaining cost to the goal.
    pub h: i32,
    /// Flat index of the predecessor on the best known path. `None` until
    /// the search reaches this cell, and always `None` for the start.
    pub parent: Option<usize>,
    /// Walls are never traversed and never entered diagonally past.
    pub is_wall: bool,
    /// Movement-legal neighbours as flat indices, in the order
    /// [`Grid::add_neighbours`](crate::Grid::add_neighbours) builds them.
    /// A snapshot: wall edits after the build are not reflected.
    pub neighbours: Vec<usize>,
}

impl Cell {
    /// Create a free cell at `pos` with zeroed search state.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }

    /// Zero the scores and drop the parent link ahead of a fresh search.
    pub fn reset_search_state(&mut self) {
        self.f = 0;
        self.g = 0;
        self.h = 0;
        self.parent = None;
    }
}
