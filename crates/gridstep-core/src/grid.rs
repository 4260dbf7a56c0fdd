//! A fixed-size 2D grid of maze cells.

use rand::{Rng, RngExt};

use crate::cell::Cell;
use crate::geom::Point;

/// Wall probability used by the reference configuration.
pub const DEFAULT_WALL_PROB: f64 = 0.3;

/// A `columns × rows` grid owning its cells in a dense row-major vector.
///
/// The shape is fixed at construction. Walls may be edited afterwards, but
/// the per-cell neighbour lists are a snapshot: call [`Grid::add_neighbours`]
/// after any wall change that should affect traversal.
#[derive(Debug, Clone)]
pub struct Grid {
    columns: i32,
    rows: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-free grid. Panics if either dimension is not positive.
    pub fn new(columns: i32, rows: i32) -> Self {
        assert!(
            columns > 0 && rows > 0,
            "grid dimensions must be positive, got {columns}x{rows}"
        );
        let mut cells = Vec::with_capacity((columns * rows) as usize);
        for y in 0..rows {
            for x in 0..columns {
                cells.push(Cell::new(Point::new(x, y)));
            }
        }
        Self {
            columns,
            rows,
            cells,
        }
    }

    /// Create a grid where each cell is independently a wall with
    /// probability `wall_prob`, drawn from `rng`.
    ///
    /// Neighbour lists are not built here: callers usually want to force a
    /// few cells free (start and end) before calling
    /// [`add_neighbours`](Grid::add_neighbours).
    pub fn random<R: Rng>(columns: i32, rows: i32, wall_prob: f64, rng: &mut R) -> Self {
        let mut grid = Self::new(columns, rows);
        for cell in &mut grid.cells {
            cell.is_wall = rng.random_bool(wall_prob);
        }
        grid
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Total cell count, `columns * rows`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: dimensions are positive by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.columns && p.y >= 0 && p.y < self.rows
    }

    /// Whether `p` is inside the grid and not a wall. Out-of-bounds points
    /// are not free, which terminates corner-cutting checks at the edges.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| !self.cells[i].is_wall)
    }

    /// Convert a point to a flat index, or `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.columns + p.x) as usize)
    }

    /// Convert a flat index back to a point.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.columns as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The cell at `p`. Out-of-bounds access is a caller bug and panics.
    #[inline]
    pub fn cell(&self, p: Point) -> &Cell {
        match self.idx(p) {
            Some(i) => &self.cells[i],
            None => panic!("cell access out of bounds: {p}"),
        }
    }

    /// Mutable access to the cell at `p`. Panics out of bounds.
    #[inline]
    pub fn cell_mut(&mut self, p: Point) -> &mut Cell {
        match self.idx(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("cell access out of bounds: {p}"),
        }
    }

    /// The cell at a flat index.
    #[inline]
    pub fn at(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Mutable access to the cell at a flat index.
    #[inline]
    pub fn at_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// Set the wall flag at `p`. Takes effect on traversal only after the
    /// next [`add_neighbours`](Grid::add_neighbours).
    pub fn set_wall(&mut self, p: Point, wall: bool) {
        self.cell_mut(p).is_wall = wall;
    }

    /// Clear and rebuild every cell's neighbour list.
    ///
    /// Orthogonal neighbours (right, left, down, up) are included whenever
    /// in bounds regardless of walls; the solver filters walls at traversal
    /// time. A diagonal neighbour is included only when both orthogonal
    /// cells framing it are free, so a diagonal move never cuts the corner
    /// between two walls. Diagonals follow the orthogonals in the order
    /// top-left, top-right, bottom-left, bottom-right.
    pub fn add_neighbours(&mut self) {
        const ORTHO: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        const DIAG: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

        for i in 0..self.cells.len() {
            let p = self.point(i);
            let mut list = std::mem::take(&mut self.cells[i].neighbours);
            list.clear();

            for (dx, dy) in ORTHO {
                if let Some(ni) = self.idx(p.shift(dx, dy)) {
                    list.push(ni);
                }
            }
            for (dx, dy) in DIAG {
                if let Some(ni) = self.idx(p.shift(dx, dy)) {
                    if self.is_free(p.shift(dx, 0)) && self.is_free(p.shift(0, dy)) {
                        list.push(ni);
                    }
                }
            }

            self.cells[i].neighbours = list;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pts(grid: &Grid, indices: &[usize]) -> Vec<Point> {
        indices.iter().map(|&i| grid.point(i)).collect()
    }

    #[test]
    fn dimensions_and_coordinates() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.len(), 12);
        for y in 0..3 {
            for x in 0..4 {
                let p = Point::new(x, y);
                assert_eq!(grid.cell(p).pos, p);
                assert_eq!(grid.point(grid.idx(p).unwrap()), p);
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn cell_access_out_of_bounds_panics() {
        let grid = Grid::new(4, 3);
        grid.cell(Point::new(4, 0));
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn zero_dimension_panics() {
        Grid::new(0, 5);
    }

    #[test]
    fn bounds_and_freedom() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.contains(Point::new(2, 2)));
        assert!(!grid.contains(Point::new(-1, 0)));
        assert!(!grid.contains(Point::new(0, 3)));

        assert!(grid.is_free(Point::new(1, 1)));
        grid.set_wall(Point::new(1, 1), true);
        assert!(!grid.is_free(Point::new(1, 1)));
        // Out of bounds is never free.
        assert!(!grid.is_free(Point::new(3, 1)));
    }

    #[test]
    fn neighbour_order_interior_cell() {
        let mut grid = Grid::new(3, 3);
        grid.add_neighbours();
        let center = grid.cell(Point::new(1, 1));
        assert_eq!(
            pts(&grid, &center.neighbours),
            vec![
                Point::new(2, 1), // right
                Point::new(0, 1), // left
                Point::new(1, 2), // down
                Point::new(1, 0), // up
                Point::new(0, 0), // top-left
                Point::new(2, 0), // top-right
                Point::new(0, 2), // bottom-left
                Point::new(2, 2), // bottom-right
            ]
        );
    }

    #[test]
    fn corner_cell_has_clipped_neighbours() {
        let mut grid = Grid::new(3, 3);
        grid.add_neighbours();
        let origin = grid.cell(Point::ZERO);
        assert_eq!(
            pts(&grid, &origin.neighbours),
            vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn orthogonal_walls_stay_in_neighbour_lists() {
        let mut grid = Grid::new(3, 3);
        grid.set_wall(Point::new(2, 1), true);
        grid.add_neighbours();
        // Wall filtering is the solver's job, not the snapshot's.
        let center = grid.cell(Point::new(1, 1));
        assert!(center.neighbours.contains(&grid.idx(Point::new(2, 1)).unwrap()));
    }

    #[test]
    fn walls_block_corner_cutting() {
        let mut grid = Grid::new(3, 3);
        // Wall above the center blocks both upper diagonals from (1,1).
        grid.set_wall(Point::new(1, 0), true);
        grid.add_neighbours();

        let center = grid.cell(Point::new(1, 1));
        let neighbours = pts(&grid, &center.neighbours);
        assert!(!neighbours.contains(&Point::new(0, 0)));
        assert!(!neighbours.contains(&Point::new(2, 0)));
        // Lower diagonals are unaffected.
        assert!(neighbours.contains(&Point::new(0, 2)));
        assert!(neighbours.contains(&Point::new(2, 2)));
    }

    #[test]
    fn no_corner_cutting_anywhere_random_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::random(12, 9, DEFAULT_WALL_PROB, &mut rng);
        grid.add_neighbours();

        for i in 0..grid.len() {
            let p = grid.point(i);
            for &ni in &grid.at(i).neighbours {
                let n = grid.point(ni);
                let d = n - p;
                if d.x != 0 && d.y != 0 {
                    assert!(grid.is_free(p.shift(d.x, 0)), "corner cut at {p} -> {n}");
                    assert!(grid.is_free(p.shift(0, d.y)), "corner cut at {p} -> {n}");
                }
            }
        }
    }

    #[test]
    fn rebuild_reflects_wall_edits() {
        let mut grid = Grid::new(3, 3);
        grid.add_neighbours();
        let tl = grid.idx(Point::ZERO).unwrap();
        assert!(grid.cell(Point::new(1, 1)).neighbours.contains(&tl));

        grid.set_wall(Point::new(1, 0), true);
        // Snapshot is stale until rebuilt.
        assert!(grid.cell(Point::new(1, 1)).neighbours.contains(&tl));
        grid.add_neighbours();
        assert!(!grid.cell(Point::new(1, 1)).neighbours.contains(&tl));
    }

    #[test]
    fn random_walls_are_reproducible_per_seed() {
        let walls = |seed: u64| -> Vec<bool> {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = Grid::random(10, 10, DEFAULT_WALL_PROB, &mut rng);
            (0..grid.len()).map(|i| grid.at(i).is_wall).collect()
        };
        assert_eq!(walls(42), walls(42));
        assert_ne!(walls(42), walls(43));
    }

    #[test]
    fn wall_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let open = Grid::random(8, 8, 0.0, &mut rng);
        assert!((0..open.len()).all(|i| !open.at(i).is_wall));
        let solid = Grid::random(8, 8, 1.0, &mut rng);
        assert!((0..solid.len()).all(|i| solid.at(i).is_wall));
    }
}
