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

//! # Exhaustive Enumeration Solver
//!
//! Enumerates every sequence over the two-symbol step alphabet up to the
//! full corner-to-corner length and keeps the best valid candidate. A full
//! path across a `rows x columns` grid takes exactly
//! `max_steps = rows + columns - 2` steps, so a candidate of length `s` is
//! encoded as the low `s` bits of a `u64` pattern: bit `k` clear means
//! step `k` goes east, bit `k` set means it goes south. The mapping is an
//! arbitrary but fixed convention; together with the incumbent's ranking
//! (corner-reaching paths first, then crane count, strictly greater only)
//! it makes the returned path deterministic.
//!
//! Candidates are replayed one validated step at a time and discarded the
//! moment any prefix leaves the grid or hits a building, so invalid
//! patterns cost only their shortest invalid prefix. Complexity is still
//! `O(2^max_steps * max_steps)`; this solver is a reference oracle for
//! small instances, not a practical strategy. The `max_steps < 64`
//! precondition (the pattern must fit one machine word) is asserted
//! eagerly.
//!
//! ## Usage
//!
//! ```rust
//! use gantry_model::grid::{CellKind, Grid};
//! use gantry_solver::exhaustive::ExhaustiveSolver;
//!
//! let grid = Grid::from_rows(&[
//!     vec![CellKind::Crane, CellKind::Empty],
//!     vec![CellKind::Empty, CellKind::Crane],
//! ]);
//!
//! let outcome = ExhaustiveSolver::new().solve::<u32>(&grid);
//! assert!(outcome.is_complete());
//! assert_eq!(outcome.solution().total_cranes(), 2);
//! ```

use gantry_model::grid::Grid;
use gantry_model::path::Path;
use gantry_model::position::Step;
use gantry_search::{
    incumbent::Incumbent,
    monitor::{NoOpMonitor, SearchMonitor},
    num::CountNumeric,
    result::{PathSolution, SolverOutcome, SolverResult, TerminationReason},
    stats::SolverStatistics,
};
use std::time::Instant;

/// The brute-force solver for the crane unloading problem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    /// Creates a new exhaustive solver instance.
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
    ///
    /// # Panics
    ///
    /// Panics if `grid.rows() + grid.columns() - 2 >= 64`: the instance is
    /// not solvable by single-word pattern enumeration, which is caller
    /// misuse rather than a recoverable condition.
    pub fn solve_with_monitor<'g, T, M>(
        &self,
        grid: &'g Grid,
        monitor: &mut M,
    ) -> SolverOutcome<'g, T>
    where
        T: CountNumeric,
        M: SearchMonitor<T>,
    {
        // Grid dimensions are structurally >= 1, so max_steps never
        // underflows.
        let max_steps = grid.rows() + grid.columns() - 2;
        assert!(
            max_steps < 64,
            "called `ExhaustiveSolver::solve` on a {}x{} grid: a full path takes {} steps, but patterns are limited to 63",
            grid.rows(),
            grid.columns(),
            max_steps
        );

        let start = Instant::now();
        let mut stats = SolverStatistics::default();
        let mut incumbent: Incumbent<'g, T> = Incumbent::new();

        monitor.on_enter_search(grid);

        for steps in 0..=max_steps {
            let pattern_count = 1u64 << steps;
            'candidates: for pattern in 0..pattern_count {
                stats.candidates_examined += 1;

                let mut path = Path::new(grid);
                for bit in 0..steps {
                    let step = if (pattern >> bit) & 1 == 1 {
                        Step::South
                    } else {
                        Step::East
                    };
                    if !path.is_step_valid(step) {
                        stats.candidates_pruned += 1;
                        monitor.on_candidate(&stats);
                        continue 'candidates;
                    }
                    path.add_step(step);
                }

                if incumbent.try_install(PathSolution::from_path(path)) {
                    stats.improvements += 1;
                    // The install above guarantees a present incumbent.
                    monitor.on_improvement(incumbent.best().unwrap(), &stats);
                }
                monitor.on_candidate(&stats);
            }
        }

        stats.solve_duration = start.elapsed();
        monitor.on_exit_search(&stats);

        // The zero-step candidate is always valid, so the incumbent is
        // never empty at this point.
        let best = incumbent
            .into_best()
            .expect("the empty path is always installed as the first candidate");
        let result = if best.is_complete() {
            SolverResult::Complete(best)
        } else {
            SolverResult::Partial(best)
        };

        SolverOutcome::new(result, TerminationReason::Exhausted, stats)
    }
}

impl std::fmt::Display for ExhaustiveSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ExhaustiveSolver")
    }
}

#[cfg(test)]
mod tests {
    use super::ExhaustiveSolver;
    use gantry_model::grid::{CellKind, Grid};
    use gantry_model::loading::GridLoader;
    use gantry_model::position::Step;
    use gantry_search::monitor::NoOpMonitor;

    fn load(text: &str) -> Grid {
        GridLoader::new().load_from_str(text).expect("test grid")
    }

    #[test]
    fn test_single_crane_cell() {
        let grid = Grid::filled(1, 1, CellKind::Crane);
        let outcome = ExhaustiveSolver::new().solve::<u32>(&grid);

        assert!(outcome.is_complete());
        assert_eq!(outcome.solution().total_cranes(), 1);
        assert!(outcome.solution().path().steps().is_empty());
    }

    #[test]
    fn test_anti_diagonal_cranes_cap_the_count_at_one() {
        // A monotone path visits exactly one cell per anti-diagonal, so
        // cranes at (0, 1) and (1, 0) can never both be collected.
        let grid = load("2 2  . C  C .");
        let outcome = ExhaustiveSolver::new().solve::<u32>(&grid);

        assert!(outcome.is_complete());
        assert_eq!(outcome.solution().total_cranes(), 1);
    }

    #[test]
    fn test_main_diagonal_cranes_are_both_collected() {
        let grid = load("2 2  C .  . C");
        let outcome = ExhaustiveSolver::new().solve::<u32>(&grid);

        assert!(outcome.is_complete());
        assert_eq!(outcome.solution().total_cranes(), 2);
    }

    #[test]
    fn test_routes_around_building() {
        let grid = load("2 2  . X  C .");
        let outcome = ExhaustiveSolver::new().solve::<u32>(&grid);

        assert!(outcome.is_complete());
        assert_eq!(outcome.solution().total_cranes(), 1);
        assert_eq!(
            outcome.solution().path().steps(),
            &[Step::South, Step::East]
        );
    }

    #[test]
    fn test_blocked_corner_yields_partial_best_effort() {
        let grid = load("2 2  C .  . X");
        let outcome = ExhaustiveSolver::new().solve::<u32>(&grid);

        assert!(outcome.is_partial());
        assert_eq!(outcome.solution().total_cranes(), 1);
    }

    #[test]
    fn test_deterministic_path_choice() {
        // Two optimal routes exist; the all-east-first enumeration order
        // plus the strictly-better install policy must always pick the
        // same one.
        let grid = load("3 3  . C .  C . C  . C .");
        let first = ExhaustiveSolver::new().solve::<u32>(&grid);
        let second = ExhaustiveSolver::new().solve::<u32>(&grid);

        assert_eq!(
            first.solution().path().steps(),
            second.solution().path().steps()
        );
    }

    #[test]
    fn test_statistics_account_for_every_pattern() {
        let grid = Grid::filled(2, 2, CellKind::Empty);
        let outcome = ExhaustiveSolver::new().solve::<u32>(&grid);

        // max_steps = 2: 1 + 2 + 4 patterns.
        assert_eq!(outcome.statistics().candidates_examined, 7);
        assert!(outcome.statistics().candidates_pruned > 0);
    }

    #[test]
    fn test_monitor_variant_matches_plain_solve() {
        let grid = load("2 3  . C .  C . C");
        let plain = ExhaustiveSolver::new().solve::<u32>(&grid);
        let monitored =
            ExhaustiveSolver::new().solve_with_monitor::<u32, _>(&grid, &mut NoOpMonitor::new());

        assert_eq!(plain.solution(), monitored.solution());
    }

    #[test]
    #[should_panic(expected = "patterns are limited to 63")]
    fn test_oversized_grid_is_rejected() {
        let grid = Grid::filled(33, 33, CellKind::Empty);
        let _ = ExhaustiveSolver::new().solve::<u32>(&grid);
    }
}
