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

//! # Incumbent (Best Path Holder)
//!
//! A container for the best path discovered so far during search.
//! Candidates are ranked by completeness first and crane count second: a
//! path that reaches the bottom-right corner always outranks one that does
//! not, because a stranded prefix is only ever acceptable when no
//! corner-to-corner path exists at all. Within the same rank the install
//! policy is *strictly better only*: a candidate tying the incumbent's
//! crane count is rejected, so among equally good paths the earliest one
//! found wins. This pins enumeration order down to a deterministic result:
//! run the same solver on the same grid twice and the returned path is
//! identical, not merely equally good.
//!
//! Both solvers are pure, single-threaded functions of an immutable grid,
//! so the holder is a plain value with no interior locking.
//!
//! ## Usage
//!
//! ```rust
//! use gantry_model::grid::{CellKind, Grid};
//! use gantry_model::path::Path;
//! use gantry_search::incumbent::Incumbent;
//! use gantry_search::result::PathSolution;
//!
//! let grid = Grid::from_rows(&[vec![CellKind::Crane, CellKind::Crane]]);
//!
//! let mut incumbent: Incumbent<'_, u32> = Incumbent::new();
//! assert!(incumbent.try_install(PathSolution::from_path(Path::new(&grid))));
//! // Same crane count: rejected, the earlier find stays.
//! assert!(!incumbent.try_install(PathSolution::from_path(Path::new(&grid))));
//! ```

use crate::num::CountNumeric;
use crate::result::PathSolution;

/// A holder for the best (incumbent) path found during search.
#[derive(Debug, Clone)]
pub struct Incumbent<'g, T> {
    best: Option<PathSolution<'g, T>>,
}

impl<T> Default for Incumbent<'_, T>
where
    T: CountNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'g, T> Incumbent<'g, T>
where
    T: CountNumeric,
{
    /// Creates a new incumbent holder with no path installed.
    #[inline]
    pub fn new() -> Self {
        Self { best: None }
    }

    /// Returns the best solution installed so far, if any.
    #[inline]
    pub fn best(&self) -> Option<&PathSolution<'g, T>> {
        self.best.as_ref()
    }

    /// Returns the crane count of the incumbent, if any.
    #[inline]
    pub fn best_total(&self) -> Option<T> {
        self.best.as_ref().map(PathSolution::total_cranes)
    }

    /// Consumes the holder, returning the best solution if any.
    #[inline]
    pub fn into_best(self) -> Option<PathSolution<'g, T>> {
        self.best
    }

    /// Attempts to install `candidate` as the new incumbent.
    ///
    /// Candidates are ranked by `(reaches the corner, crane count)` in
    /// lexicographic order, and only a *strictly* greater rank installs;
    /// on ties the earlier find is kept. Returns `true` if the candidate
    /// was installed.
    #[inline]
    pub fn try_install(&mut self, candidate: PathSolution<'g, T>) -> bool {
        let install = match &self.best {
            None => true,
            Some(current) => {
                (candidate.is_complete(), candidate.total_cranes())
                    > (current.is_complete(), current.total_cranes())
            }
        };

        if install {
            self.best = Some(candidate);
        }
        install
    }
}

impl<T> std::fmt::Display for Incumbent<'_, T>
where
    T: CountNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.best_total() {
            Some(total) => write!(f, "Incumbent(best: {})", total),
            None => write!(f, "Incumbent(best: none)"),
        }
    }
}
