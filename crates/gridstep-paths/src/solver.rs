//! The incremental A* solver.

use gridstep_core::{Grid, Point};

use crate::heuristic::{Chebyshev, Heuristic};

/// Where the search currently stands.
///
/// `Unsolvable` is a normal terminal outcome, not an error: the open set
/// ran dry before the goal was reached. Callers distinguish the two
/// terminal states through this enum rather than by probing
/// [`Solver::current`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// No search has been seeded yet.
    Uninitialized,
    /// The frontier is live; further [`Solver::step`] calls make progress.
    Running,
    /// The goal was expanded; [`Solver::current_path`] holds the full path.
    Solved,
    /// The open set emptied without reaching the goal.
    Unsolvable,
}

impl Status {
    /// Whether the search has finished, one way or the other.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Solved | Status::Unsolvable)
    }
}

/// Per-cell search membership, indexed by flat cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Membership {
    Unvisited,
    Open,
    Closed,
}

/// Incremental A* over a [`Grid`], generic over the [`Heuristic`] strategy.
///
/// The solver holds no cells of its own: it references the grid's cells by
/// flat index, and the grid is lent back in for every call. One iteration
/// of the classic loop runs per [`step`](Solver::step); between calls the
/// open set, closed set, and best-path-so-far are fully settled and safe to
/// read, which is what makes animated consumption possible.
///
/// A solver instance drives one search at a time over the grid it was
/// initialised with. Concurrent solves need independent grid/solver pairs.
#[derive(Debug)]
pub struct Solver<H = Chebyshev> {
    heuristic: H,
    goal: Point,
    end: usize,
    columns: usize,
    status: Status,
    current: Option<usize>,
    /// Frontier, insertion-ordered. A cell appears at most once.
    open: Vec<usize>,
    /// Fully expanded cells, in expansion order. Cells never leave.
    closed: Vec<usize>,
    /// Parent-chain from the last expanded cell back to the start.
    path: Vec<usize>,
    membership: Vec<Membership>,
    nbuf: Vec<usize>,
}

impl Default for Solver<Chebyshev> {
    fn default() -> Self {
        Self::new(Chebyshev)
    }
}

impl<H: Heuristic> Solver<H> {
    /// Create an uninitialised solver using the given estimate strategy.
    pub fn new(heuristic: H) -> Self {
        Self {
            heuristic,
            goal: Point::ZERO,
            end: 0,
            columns: 0,
            status: Status::Uninitialized,
            current: None,
            open: Vec::new(),
            closed: Vec::new(),
            path: Vec::new(),
            membership: Vec::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Seed a fresh search from `start` to `end`.
    ///
    /// Every cell in the grid has its scores and parent link reset, not
    /// just cells a previous search touched, so re-initialising mid-search
    /// can never leak stale state. The start cell gets its initial scores
    /// and becomes the sole member of the open set.
    ///
    /// Panics if `start` or `end` lies outside the grid.
    pub fn initialize(&mut self, grid: &mut Grid, start: Point, end: Point) {
        let Some(start_idx) = grid.idx(start) else {
            panic!("start out of grid bounds: {start}");
        };
        let Some(end_idx) = grid.idx(end) else {
            panic!("end out of grid bounds: {end}");
        };

        for i in 0..grid.len() {
            grid.at_mut(i).reset_search_state();
        }

        self.goal = end;
        self.end = end_idx;
        self.columns = grid.columns() as usize;
        self.current = None;
        self.open.clear();
        self.closed.clear();
        self.path.clear();
        self.membership.clear();
        self.membership.resize(grid.len(), Membership::Unvisited);

        let h = self.heuristic.estimate(start, end);
        let s = grid.at_mut(start_idx);
        s.g = 0;
        s.h = h;
        s.f = s.g + s.h;
        self.open.push(start_idx);
        self.membership[start_idx] = Membership::Open;
        self.status = Status::Running;

        log::debug!("search initialised: {start} -> {end}");
    }

    /// Advance the search by one iteration and report where it stands.
    ///
    /// Terminal statuses are sticky: stepping a finished solver returns the
    /// same status and changes nothing, so a scheduler that overshoots is
    /// harmless. `grid` must be the grid this solver was initialised with.
    pub fn step(&mut self, grid: &mut Grid) -> Status {
        if self.status.is_terminal() {
            return self.status;
        }

        if self.open.is_empty() {
            self.current = None;
            self.status = Status::Unsolvable;
            log::debug!(
                "open set exhausted after {} expansions, no path to {}",
                self.closed.len(),
                self.goal
            );
            return self.status;
        }
        debug_assert_eq!(self.membership.len(), grid.len());

        // First lowest f wins. The open list keeps insertion order (removal
        // below is a shift-remove), so equal scores resolve to the
        // earliest-discovered cell.
        let mut lowest = 0;
        for i in 1..self.open.len() {
            if grid.at(self.open[i]).f < grid.at(self.open[lowest]).f {
                lowest = i;
            }
        }
        let ci = self.open[lowest];
        self.current = Some(ci);

        if ci == self.end {
            self.reconstruct(grid, ci);
            self.status = Status::Solved;
            log::debug!(
                "goal {} reached, path length {}",
                self.goal,
                self.path.len()
            );
            return self.status;
        }

        self.open.remove(lowest);
        self.membership[ci] = Membership::Closed;
        self.closed.push(ci);

        let current_g = grid.at(ci).g;
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        nbuf.extend_from_slice(&grid.at(ci).neighbours);

        for &ni in &nbuf {
            if self.membership[ni] == Membership::Closed || grid.at(ni).is_wall {
                continue;
            }
            // Uniform unit cost, diagonal steps included.
            let tentative_g = current_g + 1;
            match self.membership[ni] {
                // Already on the frontier: only a strictly better route
                // wins; a tie leaves the neighbour untouched.
                Membership::Open if tentative_g >= grid.at(ni).g => continue,
                Membership::Open => {}
                _ => {
                    self.open.push(ni);
                    self.membership[ni] = Membership::Open;
                }
            }
            let h = self.heuristic.estimate(grid.at(ni).pos, self.goal);
            let n = grid.at_mut(ni);
            n.g = tentative_g;
            n.h = h;
            n.f = tentative_g + h;
            n.parent = Some(ci);
        }

        self.nbuf = nbuf;
        self.reconstruct(grid, ci);
        self.status
    }

    /// Rebuild `path` by walking parent links from `from` back to the cell
    /// with no parent (the start). Front is `from`, back is the start.
    fn reconstruct(&mut self, grid: &Grid, from: usize) {
        self.path.clear();
        self.path.push(from);
        let mut t = from;
        while let Some(p) = grid.at(t).parent {
            self.path.push(p);
            t = p;
        }
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.columns) as i32, (idx / self.columns) as i32)
    }

    /// Where the search currently stands.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The most recently expanded cell. `None` before the first step and
    /// after an `Unsolvable` termination.
    pub fn current(&self) -> Option<Point> {
        self.current.map(|i| self.point(i))
    }

    /// The frontier, in discovery order.
    pub fn open_set(&self) -> impl Iterator<Item = Point> + '_ {
        self.open.iter().map(|&i| self.point(i))
    }

    /// Fully expanded cells, in expansion order.
    pub fn closed_set(&self) -> impl Iterator<Item = Point> + '_ {
        self.closed.iter().map(|&i| self.point(i))
    }

    /// Best path so far, from the current cell back to the start. After a
    /// `Solved` termination this is the final path; after `Unsolvable` it
    /// is the stale preview from the last expansion.
    pub fn current_path(&self) -> impl Iterator<Item = Point> + '_ {
        self.path.iter().map(|&i| self.point(i))
    }
}
