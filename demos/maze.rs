//! Animated maze solve in the terminal.
//!
//! Builds a randomly walled grid, then batches a few solver steps per tick
//! and redraws, so the frontier and the best-path-so-far can be watched
//! growing. All pacing lives here; the solver itself is pull-only.

use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use gridstep_core::{DEFAULT_WALL_PROB, Grid, Point};
use gridstep_paths::{Solver, Status};

const COLUMNS: i32 = 48;
const ROWS: i32 = 24;
const STEPS_PER_TICK: usize = 5;
const TICK: Duration = Duration::from_millis(100);

fn main() {
    let mut rng = rand::rng();
    let mut grid = Grid::random(COLUMNS, ROWS, DEFAULT_WALL_PROB, &mut rng);

    let start = Point::new(0, 0);
    let end = Point::new(COLUMNS - 1, ROWS - 1);
    grid.set_wall(start, false);
    grid.set_wall(end, false);
    grid.add_neighbours();

    let mut solver = Solver::default();
    solver.initialize(&mut grid, start, end);

    loop {
        let mut status = solver.status();
        for _ in 0..STEPS_PER_TICK {
            status = solver.step(&mut grid);
            if status.is_terminal() {
                break;
            }
        }

        draw(&grid, &solver, start, end);

        match status {
            Status::Solved => {
                println!("solved: path length {}", solver.current_path().count());
                break;
            }
            Status::Unsolvable => {
                println!(
                    "no path ({} cells explored)",
                    solver.closed_set().count()
                );
                break;
            }
            _ => thread::sleep(TICK),
        }
    }
}

fn draw(grid: &Grid, solver: &Solver, start: Point, end: Point) {
    let open: HashSet<Point> = solver.open_set().collect();
    let closed: HashSet<Point> = solver.closed_set().collect();
    let path: HashSet<Point> = solver.current_path().collect();

    // Clear screen, cursor home.
    print!("\x1b[2J\x1b[H");
    for y in 0..grid.rows() {
        let mut line = String::with_capacity(grid.columns() as usize);
        for x in 0..grid.columns() {
            let p = Point::new(x, y);
            let ch = if p == start {
                'S'
            } else if p == end {
                'E'
            } else if grid.cell(p).is_wall {
                '#'
            } else if path.contains(&p) {
                '@'
            } else if open.contains(&p) {
                'o'
            } else if closed.contains(&p) {
                '.'
            } else {
                ' '
            };
            line.push(ch);
        }
        println!("{line}");
    }
}
