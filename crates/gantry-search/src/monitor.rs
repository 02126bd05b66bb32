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

//! # Search Monitors
//!
//! Pluggable observation hooks for the solvers. Diagnostic output is not
//! part of the solver contract (the solvers themselves never print), so
//! anything a caller wants to see while a search runs goes through a
//! monitor instead.
//!
//! ## Implementations
//!
//! - `NoOpMonitor`: ignores every event; the default, optimizes away
//!   entirely.
//! - `LogMonitor`: prints a progress table to stdout, throttled by a wall
//!   clock interval and a candidate-count mask so the exhaustive solver's
//!   hot loop only rarely touches the clock.

use crate::num::CountNumeric;
use crate::result::PathSolution;
use crate::stats::SolverStatistics;
use gantry_model::grid::Grid;
use std::time::{Duration, Instant};

/// Observation hooks invoked by the solvers during a run.
///
/// All hooks have empty default bodies, so implementors override only what
/// they care about.
pub trait SearchMonitor<T> {
    /// Called once before the search starts.
    fn on_enter_search(&mut self, _grid: &Grid) {}

    /// Called after each candidate has been examined. For the exhaustive
    /// solver this fires once per enumerated step pattern; throttle here if
    /// the work per event is not trivial.
    fn on_candidate(&mut self, _stats: &SolverStatistics) {}

    /// Called whenever a candidate improves on the best known path.
    fn on_improvement(&mut self, _solution: &PathSolution<'_, T>, _stats: &SolverStatistics) {}

    /// Called once after the search has finished.
    fn on_exit_search(&mut self, _stats: &SolverStatistics) {}
}

/// A monitor that ignores every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpMonitor;

impl NoOpMonitor {
    /// Creates a new no-op monitor.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> SearchMonitor<T> for NoOpMonitor {}

/// A monitor that prints a progress table to stdout.
///
/// Progress lines are emitted at most once per `log_interval`, and the
/// clock is consulted only when the examined-candidate count masked by
/// `clock_check_mask` is zero, keeping the overhead in tight enumeration
/// loops negligible.
#[derive(Debug, Clone)]
pub struct LogMonitor<T> {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_total: Option<T>,
}

impl<T> LogMonitor<T>
where
    T: CountNumeric,
{
    /// Creates a new log monitor with the given throttle parameters.
    /// `clock_check_mask` should be a power of two minus one.
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            best_total: None,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<14} | {:<14} | {:<12} | {:<11}",
            "Elapsed", "Candidates", "Pruned", "Best Cranes", "Improvements"
        );
        println!("{}", "-".repeat(71));
    }

    #[inline(always)]
    fn log_line(&mut self, stats: &SolverStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let best_str = match &self.best_total {
            Some(total) => format!("{}", total),
            None => "-".to_string(),
        };

        println!(
            "{:<9} | {:<14} | {:<14} | {:<12} | {:<11}",
            format!("{:.1}s", elapsed),
            stats.candidates_examined,
            stats.candidates_pruned,
            best_str,
            stats.improvements
        );

        self.last_log_time = now;
    }
}

impl<T> Default for LogMonitor<T>
where
    T: CountNumeric,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<T> std::fmt::Display for LogMonitor<T>
where
    T: CountNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> SearchMonitor<T> for LogMonitor<T>
where
    T: CountNumeric,
{
    fn on_enter_search(&mut self, grid: &Grid) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_total = None; // Reset
        println!("Searching {:?}", grid);
        self.print_header();
    }

    fn on_candidate(&mut self, stats: &SolverStatistics) {
        if (stats.candidates_examined & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(stats);
        }
    }

    fn on_improvement(&mut self, solution: &PathSolution<'_, T>, stats: &SolverStatistics) {
        self.best_total = Some(solution.total_cranes());
        self.log_line(stats);
    }

    fn on_exit_search(&mut self, stats: &SolverStatistics) {
        self.log_line(stats);
        print!("{}", stats);
    }
}

#[cfg(test)]
mod tests {
    use super::{LogMonitor, NoOpMonitor, SearchMonitor};
    use crate::result::PathSolution;
    use crate::stats::SolverStatistics;
    use gantry_model::grid::{CellKind, Grid};
    use gantry_model::path::Path;
    use std::time::Duration;

    #[test]
    fn test_noop_monitor_accepts_all_events() {
        let grid = Grid::filled(1, 1, CellKind::Crane);
        let solution: PathSolution<'_, u32> = PathSolution::from_path(Path::new(&grid));
        let stats = SolverStatistics::default();

        let mut monitor = NoOpMonitor::new();
        SearchMonitor::<u32>::on_enter_search(&mut monitor, &grid);
        SearchMonitor::<u32>::on_candidate(&mut monitor, &stats);
        monitor.on_improvement(&solution, &stats);
        SearchMonitor::<u32>::on_exit_search(&mut monitor, &stats);
    }

    #[test]
    fn test_log_monitor_tracks_best() {
        let grid = Grid::filled(1, 1, CellKind::Crane);
        let solution: PathSolution<'_, u32> = PathSolution::from_path(Path::new(&grid));
        let stats = SolverStatistics::default();

        let mut monitor: LogMonitor<u32> = LogMonitor::new(Duration::from_secs(3600), u64::MAX);
        monitor.on_enter_search(&grid);
        monitor.on_improvement(&solution, &stats);
        assert_eq!(monitor.best_total, Some(1));
    }
}
