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

//! # Monotone Paths
//!
//! The shared output value of both solvers: an append-only sequence of
//! east/south steps anchored at the top-left corner, together with the
//! position it currently stands on. A path borrows its grid for its whole
//! life, so every validity question can be answered locally and the grid is
//! guaranteed not to change underneath it.
//!
//! ## Invariants
//!
//! - The position never leaves the grid bounds.
//! - The position never stands on a building.
//! - The number of recorded steps always equals `row + col` of the current
//!   position.
//!
//! All three are maintained by construction: a path starts empty at the
//! origin, and the only mutation is `add_step`, which insists on
//! `is_step_valid`. Steps are never removed.
//!
//! ## Usage
//!
//! ```rust
//! use gantry_model::grid::{CellKind, Grid};
//! use gantry_model::path::Path;
//! use gantry_model::position::Step;
//!
//! let grid = Grid::from_rows(&[
//!     vec![CellKind::Empty, CellKind::Crane],
//!     vec![CellKind::Crane, CellKind::Empty],
//! ]);
//!
//! let mut path = Path::new(&grid);
//! assert!(path.is_step_valid(Step::East));
//! path.add_step(Step::East);
//! path.add_step(Step::South);
//! assert!(path.is_complete());
//! assert_eq!(path.total_cranes::<u32>(), 1);
//! ```

use crate::grid::{CellKind, Grid};
use crate::position::{Position, Step};
use num_traits::{PrimInt, Unsigned};
use smallvec::SmallVec;

/// Inline step capacity before a path spills to the heap. Instances small
/// enough for exhaustive search have at most `rows + columns - 2 < 64`
/// steps, so most paths never allocate.
const INLINE_STEPS: usize = 16;

/// An append-only monotone path across a dockyard grid.
///
/// Created empty at the origin, grown one validated step at a time. The
/// path is *complete* once it stands on the bottom-right corner.
#[derive(Clone, PartialEq, Eq)]
pub struct Path<'g> {
    grid: &'g Grid,
    steps: SmallVec<[Step; INLINE_STEPS]>,
    position: Position,
}

impl<'g> Path<'g> {
    /// Creates an empty path standing on the origin of `grid`.
    #[inline]
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            steps: SmallVec::new(),
            position: Position::origin(),
        }
    }

    /// Returns the grid this path travels across.
    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Returns the cell the path currently stands on.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Read-only view of the steps taken so far, in travel order.
    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the number of steps taken so far.
    ///
    /// By the path invariants this always equals
    /// `position().row() + position().col()`.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if no step has been taken yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns `true` if the path stands on the bottom-right corner.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.position == self.grid.bottom_right()
    }

    /// Returns `true` iff taking `step` from the current position stays in
    /// bounds and does not land on a building.
    #[inline]
    pub fn is_step_valid(&self, step: Step) -> bool {
        let next = self.position.stepped(step);
        self.grid.in_bounds(next) && self.grid.cell(next).is_passable()
    }

    /// Appends `step` and advances the position.
    ///
    /// # Panics
    ///
    /// Panics if `is_step_valid(step)` does not hold. Candidate generation
    /// must check first and prune; an unchecked append is caller misuse,
    /// not a recoverable condition.
    #[inline]
    pub fn add_step(&mut self, step: Step) {
        assert!(
            self.is_step_valid(step),
            "called `Path::add_step` with an invalid step: {} from {} on a {}x{} grid",
            step,
            self.position,
            self.grid.rows(),
            self.grid.columns()
        );

        self.steps.push(step);
        self.position = self.position.stepped(step);
    }

    /// The number of crane cells visited from the origin to the current
    /// position, inclusive.
    ///
    /// A monotone path never revisits a cell, so this is a plain sum over
    /// the visited cells; no deduplication is needed. Recomputed on demand,
    /// generic over the unsigned counter type so callers can match the
    /// width of their own bookkeeping.
    pub fn total_cranes<T>(&self) -> T
    where
        T: PrimInt + Unsigned,
    {
        let mut total = T::zero();
        for position in self.visited() {
            if self.grid.cell(position) == CellKind::Crane {
                total = total + T::one();
            }
        }
        total
    }

    /// Iterates over the visited cells from the origin to the current
    /// position, inclusive, in travel order.
    pub fn visited(&self) -> impl Iterator<Item = Position> + '_ {
        let mut position = Position::origin();
        std::iter::once(position).chain(self.steps.iter().map(move |&step| {
            position = position.stepped(step);
            position
        }))
    }
}

impl std::fmt::Debug for Path<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Path(steps: {}, position: {})",
            self.steps.len(),
            self.position
        )
    }
}

/// Renders the grid with every visited cell overlaid as `*`; cranes and
/// buildings keep their own symbols so collected cranes stay visible.
impl std::fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut on_path = vec![false; self.grid.num_cells()];
        for position in self.visited() {
            on_path[self.grid.flat_index(position)] = true;
        }

        for row in 0..self.grid.rows() {
            for col in 0..self.grid.columns() {
                let position = Position::new(row, col);
                let kind = self.grid.cell(position);
                let symbol = if on_path[self.grid.flat_index(position)]
                    && kind == CellKind::Empty
                {
                    '*'
                } else {
                    kind.symbol()
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
