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

//! Statistics collected while a solver runs. The fields are public: the
//! solvers increment them in place during the search and stamp the duration
//! at the end, while monitors read them live through the observation hooks.

/// Statistics collected during a solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverStatistics {
    /// Candidate step sequences examined (exhaustive solver only).
    pub candidates_examined: u64,
    /// Candidates discarded at the first invalid prefix step.
    pub candidates_pruned: u64,
    /// Number of times a candidate improved on the best known path.
    pub improvements: u64,
    /// Table cells filled (dynamic-programming solver only).
    pub cells_filled: u64,
    /// Total duration of the solve.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solver Statistics:")?;
        writeln!(f, "  Candidates Examined: {}", self.candidates_examined)?;
        writeln!(f, "  Candidates Pruned: {}", self.candidates_pruned)?;
        writeln!(f, "  Improvements: {}", self.improvements)?;
        writeln!(f, "  Table Cells Filled: {}", self.cells_filled)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SolverStatistics`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverStatisticsBuilder {
    statistics: SolverStatistics,
}

impl SolverStatisticsBuilder {
    /// Creates a new builder with all counters at zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of candidates examined.
    #[inline]
    pub fn candidates_examined(mut self, candidates_examined: u64) -> Self {
        self.statistics.candidates_examined = candidates_examined;
        self
    }

    /// Sets the number of candidates pruned.
    #[inline]
    pub fn candidates_pruned(mut self, candidates_pruned: u64) -> Self {
        self.statistics.candidates_pruned = candidates_pruned;
        self
    }

    /// Sets the number of improvements.
    #[inline]
    pub fn improvements(mut self, improvements: u64) -> Self {
        self.statistics.improvements = improvements;
        self
    }

    /// Sets the number of table cells filled.
    #[inline]
    pub fn cells_filled(mut self, cells_filled: u64) -> Self {
        self.statistics.cells_filled = cells_filled;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.statistics.solve_duration = solve_duration;
        self
    }

    /// Builds the `SolverStatistics` instance.
    #[inline]
    pub fn build(self) -> SolverStatistics {
        self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::{SolverStatistics, SolverStatisticsBuilder};
    use std::time::Duration;

    #[test]
    fn test_default_is_zeroed() {
        let stats = SolverStatistics::default();
        assert_eq!(stats.candidates_examined, 0);
        assert_eq!(stats.candidates_pruned, 0);
        assert_eq!(stats.improvements, 0);
        assert_eq!(stats.cells_filled, 0);
        assert_eq!(stats.solve_duration, Duration::ZERO);
    }

    #[test]
    fn test_builder() {
        let stats = SolverStatisticsBuilder::new()
            .candidates_examined(128)
            .candidates_pruned(32)
            .improvements(3)
            .solve_duration(Duration::from_millis(5))
            .build();

        assert_eq!(stats.candidates_examined, 128);
        assert_eq!(stats.candidates_pruned, 32);
        assert_eq!(stats.improvements, 3);
        assert_eq!(stats.cells_filled, 0);
        assert_eq!(stats.solve_duration, Duration::from_millis(5));
    }

    #[test]
    fn test_display_mentions_counters() {
        let stats = SolverStatisticsBuilder::new().cells_filled(42).build();
        let rendered = format!("{}", stats);
        assert!(rendered.contains("Table Cells Filled: 42"));
    }
}
