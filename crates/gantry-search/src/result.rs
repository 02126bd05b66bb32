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

//! # Solver Results and Outcomes
//!
//! The output contract shared by both solvers: a `PathSolution` pairs a
//! path with its crane count, `SolverResult` records whether that path
//! reaches the bottom-right corner, and `SolverOutcome` bundles the result
//! with the termination reason and the statistics of the run.
//!
//! An unreachable bottom-right corner is a *policy case*, not an error:
//! the solvers fall back to the best path they can certify and report it as
//! `Partial`. Callers that require a corner-to-corner path check
//! `is_complete` on the outcome.

use crate::num::CountNumeric;
use crate::stats::SolverStatistics;
use gantry_model::path::Path;

/// A path together with its crane count.
///
/// The count is stored rather than recomputed so that outcome inspection is
/// free; the constructor verifies it against the path in debug builds.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PathSolution<'g, T> {
    total_cranes: T,
    path: Path<'g>,
}

impl<'g, T> PathSolution<'g, T>
where
    T: CountNumeric,
{
    /// Constructs a new `PathSolution`.
    #[inline]
    pub fn new(total_cranes: T, path: Path<'g>) -> Self {
        debug_assert_eq!(
            total_cranes,
            path.total_cranes::<T>(),
            "called `PathSolution::new` with a crane count that does not match the path"
        );

        Self { total_cranes, path }
    }

    /// Builds a solution from a path, computing its crane count.
    #[inline]
    pub fn from_path(path: Path<'g>) -> Self {
        Self {
            total_cranes: path.total_cranes(),
            path,
        }
    }

    /// The number of cranes the path visits.
    #[inline]
    pub fn total_cranes(&self) -> T {
        self.total_cranes
    }

    /// The path itself.
    #[inline]
    pub fn path(&self) -> &Path<'g> {
        &self.path
    }

    /// Consumes the solution, returning the path.
    #[inline]
    pub fn into_path(self) -> Path<'g> {
        self.path
    }

    /// Returns `true` if the path stands on the bottom-right corner.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.path.is_complete()
    }
}

impl<T> std::fmt::Display for PathSolution<'_, T>
where
    T: CountNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PathSolution(cranes: {}, steps: {})",
            self.total_cranes,
            self.path.steps().len()
        )
    }
}

/// The classification of a solver's best path.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SolverResult<'g, T> {
    /// The path reaches the bottom-right corner and maximizes the crane
    /// count among all reachable corner-to-corner paths.
    Complete(PathSolution<'g, T>),
    /// No corner-to-corner path exists; this is the best-effort path to the
    /// most rewarding reachable cell.
    Partial(PathSolution<'g, T>),
}

impl<'g, T> SolverResult<'g, T> {
    /// The solution, regardless of classification.
    #[inline]
    pub fn solution(&self) -> &PathSolution<'g, T> {
        match self {
            Self::Complete(solution) | Self::Partial(solution) => solution,
        }
    }

    /// Consumes the result, returning the solution.
    #[inline]
    pub fn into_solution(self) -> PathSolution<'g, T> {
        match self {
            Self::Complete(solution) | Self::Partial(solution) => solution,
        }
    }
}

impl<T> std::fmt::Display for SolverResult<'_, T>
where
    T: CountNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complete(solution) => write!(f, "Complete(cranes={})", solution.total_cranes()),
            Self::Partial(solution) => write!(f, "Partial(cranes={})", solution.total_cranes()),
        }
    }
}

/// Why a solver stopped. Both strategies run to natural completion (there
/// are no time or node limits), so the reason records which kind of
/// completion occurred.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TerminationReason {
    /// Every candidate step sequence up to the maximum length was
    /// enumerated.
    Exhausted,
    /// The dynamic-programming table was filled and backtraced.
    TableFilled,
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted => write!(f, "Enumeration Exhausted"),
            Self::TableFilled => write!(f, "Table Filled"),
        }
    }
}

/// The full outcome of a solver invocation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SolverOutcome<'g, T> {
    result: SolverResult<'g, T>,
    reason: TerminationReason,
    statistics: SolverStatistics,
}

impl<'g, T> SolverOutcome<'g, T> {
    /// Constructs a new `SolverOutcome`.
    #[inline]
    pub fn new(
        result: SolverResult<'g, T>,
        reason: TerminationReason,
        statistics: SolverStatistics,
    ) -> Self {
        Self {
            result,
            reason,
            statistics,
        }
    }

    /// The classified result.
    #[inline]
    pub fn result(&self) -> &SolverResult<'g, T> {
        &self.result
    }

    /// The reason the solver stopped.
    #[inline]
    pub fn reason(&self) -> TerminationReason {
        self.reason
    }

    /// The statistics of the run.
    #[inline]
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// The best solution found, regardless of classification.
    #[inline]
    pub fn solution(&self) -> &PathSolution<'g, T> {
        self.result.solution()
    }

    /// Consumes the outcome, returning the best solution.
    #[inline]
    pub fn into_solution(self) -> PathSolution<'g, T> {
        self.result.into_solution()
    }

    /// Returns `true` if the best path reaches the bottom-right corner.
    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self.result, SolverResult::Complete(_))
    }

    /// Returns `true` if only a best-effort partial path exists.
    #[inline]
    pub fn is_partial(&self) -> bool {
        matches!(self.result, SolverResult::Partial(_))
    }
}

impl<T> std::fmt::Display for SolverOutcome<'_, T>
where
    T: CountNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.result, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::{PathSolution, SolverOutcome, SolverResult, TerminationReason};
    use crate::stats::SolverStatistics;
    use gantry_model::grid::{CellKind, Grid};
    use gantry_model::path::Path;
    use gantry_model::position::Step;

    fn one_crane_grid() -> Grid {
        Grid::from_rows(&[vec![CellKind::Crane, CellKind::Empty]])
    }

    #[test]
    fn test_from_path_counts_cranes() {
        let grid = one_crane_grid();
        let solution: PathSolution<'_, u32> = PathSolution::from_path(Path::new(&grid));
        assert_eq!(solution.total_cranes(), 1);
        assert!(!solution.is_complete());
    }

    #[test]
    fn test_result_classification() {
        let grid = one_crane_grid();
        let mut path = Path::new(&grid);
        path.add_step(Step::East);
        let solution: PathSolution<'_, u32> = PathSolution::from_path(path);
        assert!(solution.is_complete());

        let result = SolverResult::Complete(solution);
        assert_eq!(format!("{}", result), "Complete(cranes=1)");
        assert_eq!(result.solution().total_cranes(), 1);
    }

    #[test]
    fn test_outcome_helpers() {
        let grid = one_crane_grid();
        let solution: PathSolution<'_, u32> = PathSolution::from_path(Path::new(&grid));
        let outcome = SolverOutcome::new(
            SolverResult::Partial(solution),
            TerminationReason::Exhausted,
            SolverStatistics::default(),
        );

        assert!(outcome.is_partial());
        assert!(!outcome.is_complete());
        assert_eq!(outcome.reason(), TerminationReason::Exhausted);
        assert_eq!(
            format!("{}", outcome),
            "Partial(cranes=1) (Enumeration Exhausted)"
        );
    }
}
