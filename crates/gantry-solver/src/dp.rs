// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Dynamic-Programming Solver
//!
//! The polynomial-time strategy. A table holds, per cell, the best crane
//! count of any valid monotone path from the origin to that cell, or
//! `None` if no such path exists (a building, or a cell walled off by
//! buildings). Each cell depends only on its top and left neighbors, so one
//! row-major sweep fills the table, and the layout matches the grid's own
//! flattened row-major storage, so the sweep walks memory linearly.
//!
//! The optimal path is reconstructed by backtracking: starting from the
//! bottom-right cell (or, when that cell is unreachable, from the
//! row-major-first cell holding the table's global maximum), walk to
//! whichever backward neighbor holds the larger count, preferring the left
//! neighbor on ties (an arbitrary but fixed convention that makes the
//! reconstructed path deterministic), and replay the reversed step record
//! forwards.
//!
//! Equivalent in crane count to the exhaustive solver on every instance,
//! in `O(rows * columns)` time and space instead of exponential time.
//!
//! ## Usage
//!
//! ```rust
//! use gantry_model::grid::{CellKind, Grid};
//! use gantry_solver::dp::DynProgSolver;
//!
//! let grid = Grid::from_rows(&[
//!     vec![CellKind::Empty, CellKind::Building],
//!     vec![CellKind::Crane, CellKind::Empty],
//! ]);
//!
//! let outcome = DynProgSolver::new().solve::<u32>(&grid);
//! assert!(outcome.is_complete());
//! assert_eq!(outcome.solution().total_cranes(), 1);
//! ```

use gantry_model::grid::{CellKind, Grid};
use gantry_model::path::Path;
use gantry_model::position::{Position, Step};
use gantry_search::{
    monitor::{NoOpMonitor, SearchMonitor},
    num::CountNumeric,
    result::{PathSolution, SolverOutcome, SolverResult, TerminationReason},
    stats::SolverStatistics,
};
use std::time::Instant;

/// The dynamic-programming solver for the crane unloading problem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DynProgSolver;

impl DynProgSolver {
    /// Creates a new dynamic-programming solver instance.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Solves the given grid without observation hooks.
    #[inline]
    pub fn solve<'g, T>(&self, grid: &'g Grid) -> SolverOutcome<'g, T>
    where
        T: CountNumeric,
    {
        self.solve_with_monitor(grid, &mut NoOpMonitor::new())
    }

    /// Solves the given grid, reporting progress to `monitor`.
    pub fn solve_with_monitor<'g, T, M>(
        &self,
        grid: &'g Grid,
        monitor: &mut M,
    ) -> SolverOutcome<'g, T>
    where
        T: CountNumeric,
        M: SearchMonitor<T>,
    {
        debug_assert!(
            grid.cell(Position::origin()).is_passable(),
            "called `DynProgSolver::solve` on a grid whose start cell is a building"
        );

        let start = Instant::now();
        let mut stats = SolverStatistics::default();

        monitor.on_enter_search(grid);

        let best = Self::fill_table::<T>(grid, &mut stats);
        let target = Self::backtrace_target(grid, &best);
        let path = Self::backtrace(grid, &best, target);

        let solution = PathSolution::from_path(path);
        debug_assert_eq!(
            Some(solution.total_cranes()),
            best[grid.flat_index(target)],
            "reconstructed path disagrees with the table value at its target"
        );

        stats.improvements = 1;
        monitor.on_improvement(&solution, &stats);

        stats.solve_duration = start.elapsed();
        monitor.on_exit_search(&stats);

        let result = if solution.is_complete() {
            SolverResult::Complete(solution)
        } else {
            SolverResult::Partial(solution)
        };

        SolverOutcome::new(result, TerminationReason::TableFilled, stats)
    }

    /// Fills the best-reachable-count table in row-major order.
    ///
    /// `best[grid.flat_index(p)]` is `Some(count)` iff some valid monotone
    /// path from the origin reaches `p`, where `count` is the largest crane
    /// count among those paths; `None` marks unreachable cells.
    fn fill_table<T>(grid: &Grid, stats: &mut SolverStatistics) -> Vec<Option<T>>
    where
        T: CountNumeric,
    {
        let mut best: Vec<Option<T>> = vec![None; grid.num_cells()];

        for row in 0..grid.rows() {
            for col in 0..grid.columns() {
                let position = Position::new(row, col);
                let kind = grid.cell(position);

                let value = if !kind.is_passable() {
                    None
                } else {
                    let own = Self::crane_bonus::<T>(kind);
                    if position.is_origin() {
                        Some(own)
                    } else {
                        let from_above = position
                            .above()
                            .and_then(|p| best[grid.flat_index(p)])
                            .map(|count| count + own);
                        let from_left = position
                            .left()
                            .and_then(|p| best[grid.flat_index(p)])
                            .map(|count| count + own);

                        match (from_above, from_left) {
                            (Some(above), Some(left)) => Some(above.max(left)),
                            (source, None) | (None, source) => source,
                        }
                    }
                };

                best[grid.flat_index(position)] = value;
                stats.cells_filled += 1;
            }
        }

        best
    }

    /// Picks the cell to reconstruct from: the bottom-right corner when it
    /// is reachable, otherwise the row-major-first cell holding the
    /// table's global maximum (the best-effort fallback).
    fn backtrace_target<T>(grid: &Grid, best: &[Option<T>]) -> Position
    where
        T: CountNumeric,
    {
        let corner = grid.bottom_right();
        if best[grid.flat_index(corner)].is_some() {
            return corner;
        }

        let mut target = Position::origin();
        let mut target_count = T::zero();
        for row in 0..grid.rows() {
            for col in 0..grid.columns() {
                let position = Position::new(row, col);
                if let Some(count) = best[grid.flat_index(position)] {
                    // Strict comparison keeps the first maximum in
                    // row-major order. The origin is scanned first, so
                    // the zero-initialized running maximum never hides a
                    // reachable cell.
                    if count > target_count {
                        target = position;
                        target_count = count;
                    }
                }
            }
        }
        target
    }

    /// Walks backward from `target` to the origin along the steepest table
    /// values, then replays the reversed step record into a fresh path.
    fn backtrace<'g, T>(grid: &'g Grid, best: &[Option<T>], target: Position) -> Path<'g>
    where
        T: CountNumeric,
    {
        let mut reversed: Vec<Step> = Vec::with_capacity(target.step_count());
        let mut position = target;

        while !position.is_origin() {
            let left = position
                .left()
                .and_then(|p| best[grid.flat_index(p)].map(|count| (p, count)));
            let above = position
                .above()
                .and_then(|p| best[grid.flat_index(p)].map(|count| (p, count)));

            let (previous, step) = match (left, above) {
                // Prefer the left neighbor on ties.
                (Some((lp, lc)), Some((_, ac))) if lc >= ac => (lp, Step::East),
                (_, Some((ap, _))) => (ap, Step::South),
                (Some((lp, _)), None) => (lp, Step::East),
                (None, None) => {
                    unreachable!("a reachable non-origin cell always has a reachable predecessor")
                }
            };

            reversed.push(step);
            position = previous;
        }

        let mut path = Path::new(grid);
        for &step in reversed.iter().rev() {
            path.add_step(step);
        }
        path
    }

    #[inline]
    fn crane_bonus<T>(kind: CellKind) -> T
    where
        T: CountNumeric,
    {
        if kind == CellKind::Crane {
            T::one()
        } else {
            T::zero()
        }
    }
}

impl std::fmt::Display for DynProgSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DynProgSolver")
    }
}

#[cfg(test)]
mod tests {
    use super::DynProgSolver;
    use crate::exhaustive::ExhaustiveSolver;
    use gantry_model::grid::{CellKind, Grid};
    use gantry_model::loading::GridLoader;
    use gantry_model::path::Path;
    use gantry_model::position::Step;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn load(text: &str) -> Grid {
        GridLoader::new().load_from_str(text).expect("test grid")
    }

    fn random_grid(rng: &mut StdRng, rows: usize, columns: usize) -> Grid {
        let mut cells = Vec::with_capacity(rows * columns);
        for _ in 0..rows * columns {
            cells.push(match rng.gen_range(0..10) {
                0..=5 => CellKind::Empty,
                6..=7 => CellKind::Crane,
                _ => CellKind::Building,
            });
        }
        // The solvers assume an open start cell.
        if cells[0] == CellKind::Building {
            cells[0] = CellKind::Empty;
        }
        Grid::new(rows, columns, cells)
    }

    #[test]
    fn test_single_crane_cell() {
        let grid = Grid::filled(1, 1, CellKind::Crane);
        let outcome = DynProgSolver::new().solve::<u32>(&grid);

        assert!(outcome.is_complete());
        assert_eq!(outcome.solution().total_cranes(), 1);
        assert!(outcome.solution().path().steps().is_empty());
        assert_eq!(outcome.statistics().cells_filled, 1);
    }

    #[test]
    fn test_anti_diagonal_cranes_cap_the_count_at_one() {
        // A monotone path visits exactly one cell per anti-diagonal, so
        // cranes at (0, 1) and (1, 0) can never both be collected.
        let grid = load("2 2  . C  C .");
        let outcome = DynProgSolver::new().solve::<u32>(&grid);

        assert!(outcome.is_complete());
        assert_eq!(outcome.solution().total_cranes(), 1);
    }

    #[test]
    fn test_main_diagonal_cranes_are_both_collected() {
        let grid = load("2 2  C .  . C");
        let outcome = DynProgSolver::new().solve::<u32>(&grid);

        assert!(outcome.is_complete());
        assert_eq!(outcome.solution().total_cranes(), 2);
    }

    #[test]
    fn test_routes_around_building() {
        let grid = load("2 2  . X  C .");
        let outcome = DynProgSolver::new().solve::<u32>(&grid);

        assert!(outcome.is_complete());
        assert_eq!(outcome.solution().total_cranes(), 1);
        assert_eq!(
            outcome.solution().path().steps(),
            &[Step::South, Step::East]
        );
    }

    #[test]
    fn test_blocked_corner_falls_back_to_best_partial() {
        let grid = load("2 2  C .  . X");
        let outcome = DynProgSolver::new().solve::<u32>(&grid);

        assert!(outcome.is_partial());
        assert_eq!(outcome.solution().total_cranes(), 1);
    }

    #[test]
    fn test_walled_off_region_is_unreachable() {
        // The crane behind the wall must not be counted.
        let grid = load(
            "3 3
             . X C
             . X X
             . . .",
        );
        let outcome = DynProgSolver::new().solve::<u32>(&grid);

        assert!(outcome.is_complete());
        assert_eq!(outcome.solution().total_cranes(), 0);
    }

    #[test]
    fn test_left_preference_on_ties() {
        // Both routes across the empty 2x2 grid are optimal. Preferring
        // the left neighbor while walking backward makes East the *last*
        // step, so the reconstructed route is deterministically
        // south-then-east.
        let grid = Grid::filled(2, 2, CellKind::Empty);
        let outcome = DynProgSolver::new().solve::<u32>(&grid);

        assert_eq!(
            outcome.solution().path().steps(),
            &[Step::South, Step::East]
        );
    }

    #[test]
    fn test_replayed_steps_stay_valid() {
        let mut rng = StdRng::seed_from_u64(0x9aa1);
        for _ in 0..50 {
            let rows = rng.gen_range(1..=8);
            let columns = rng.gen_range(1..=8);
            let grid = random_grid(&mut rng, rows, columns);
            let outcome = DynProgSolver::new().solve::<u32>(&grid);

            // `add_step` asserts validity, so a full replay proves the
            // output path never leaves the grid or enters a building.
            let mut replay = Path::new(&grid);
            for &step in outcome.solution().path().steps() {
                replay.add_step(step);
            }
            assert_eq!(replay.position(), outcome.solution().path().position());
            assert_eq!(replay.len(), replay.position().step_count());
        }
    }

    #[test]
    fn test_matches_exhaustive_oracle_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(0x51eb);
        for _ in 0..100 {
            let rows = rng.gen_range(1..=5);
            let columns = rng.gen_range(1..=5);
            let grid = random_grid(&mut rng, rows, columns);

            let dp = DynProgSolver::new().solve::<u32>(&grid);
            let oracle = ExhaustiveSolver::new().solve::<u32>(&grid);

            assert_eq!(
                dp.solution().total_cranes(),
                oracle.solution().total_cranes(),
                "solvers disagree on:\n{}",
                grid
            );
            assert_eq!(dp.is_complete(), oracle.is_complete());
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        let mut rng = StdRng::seed_from_u64(0xd0c4);
        let grid = random_grid(&mut rng, 6, 6);

        let first = DynProgSolver::new().solve::<u32>(&grid);
        let second = DynProgSolver::new().solve::<u32>(&grid);
        assert_eq!(first.solution(), second.solution());
    }

    #[test]
    fn test_narrow_counter_type() {
        let grid = load("1 3  C C C");
        let outcome = DynProgSolver::new().solve::<u8>(&grid);
        assert_eq!(outcome.solution().total_cranes(), 3u8);
    }
}
