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

//! # Grid Coordinates and Step Directions
//!
//! The coordinate vocabulary shared by the grid, the path, and the solvers.
//! A `Position` names a cell by `(row, column)`; a `Step` is one move of a
//! monotone path. Keeping both in one value type (instead of passing raw
//! `usize` pairs around) prevents the classic row/column swap bug at the
//! type level, with zero runtime overhead.
//!
//! ## Highlights
//!
//! - `Step` is the complete two-symbol move alphabet: `East` (column + 1)
//!   and `South` (row + 1).
//! - `Position::stepped` advances without bounds knowledge; bounds are the
//!   grid's concern.
//! - `left` / `above` return `Option<Position>` and are the backward
//!   counterparts used during path reconstruction.
//!
//! ## Usage
//!
//! ```rust
//! use gantry_model::position::{Position, Step};
//!
//! let origin = Position::origin();
//! let p = origin.stepped(Step::East).stepped(Step::South);
//! assert_eq!((p.row(), p.col()), (1, 1));
//! assert_eq!(p.step_count(), 2);
//! assert_eq!(p.left(), Some(Position::new(1, 0)));
//! ```

/// A single move of a monotone path across the dockyard grid.
///
/// Monotone paths only ever advance toward the bottom-right corner, so these
/// two variants are the complete move alphabet.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Step {
    /// Advance one column to the right (column + 1).
    East,
    /// Advance one row downwards (row + 1).
    South,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::East => write!(f, "East"),
            Step::South => write!(f, "South"),
        }
    }
}

/// A cell coordinate on the dockyard grid.
///
/// Rows grow downwards, columns grow to the right; `(0, 0)` is the top-left
/// corner where every path starts. A `Position` knows nothing about grid
/// bounds; `Grid::in_bounds` decides whether a position actually exists.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a new position at the given row and column.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The top-left corner `(0, 0)`, the start of every monotone path.
    #[inline]
    pub const fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Returns the row of this position.
    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this position.
    #[inline]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Returns `true` if this is the top-left corner.
    #[inline]
    pub const fn is_origin(&self) -> bool {
        self.row == 0 && self.col == 0
    }

    /// The position reached by taking `step` from here.
    ///
    /// This is a pure coordinate operation; it does not know about grid
    /// bounds or buildings. Validity is checked by `Path::is_step_valid`.
    #[inline]
    pub const fn stepped(&self, step: Step) -> Self {
        match step {
            Step::East => Self::new(self.row, self.col + 1),
            Step::South => Self::new(self.row + 1, self.col),
        }
    }

    /// The number of steps any monotone path needs to reach this position
    /// from the origin: `row + col`.
    #[inline]
    pub const fn step_count(&self) -> usize {
        self.row + self.col
    }

    /// The western neighbor, or `None` in the leftmost column.
    #[inline]
    pub const fn left(&self) -> Option<Self> {
        if self.col == 0 {
            None
        } else {
            Some(Self::new(self.row, self.col - 1))
        }
    }

    /// The northern neighbor, or `None` in the topmost row.
    #[inline]
    pub const fn above(&self) -> Option<Self> {
        if self.row == 0 {
            None
        } else {
            Some(Self::new(self.row - 1, self.col))
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::{Position, Step};

    #[test]
    fn test_origin() {
        let origin = Position::origin();
        assert_eq!(origin, Position::new(0, 0));
        assert!(origin.is_origin());
        assert_eq!(origin.step_count(), 0);
    }

    #[test]
    fn test_stepped() {
        let p = Position::origin().stepped(Step::East);
        assert_eq!((p.row(), p.col()), (0, 1));

        let p = p.stepped(Step::South).stepped(Step::South);
        assert_eq!((p.row(), p.col()), (2, 1));
        assert_eq!(p.step_count(), 3);
    }

    #[test]
    fn test_backward_neighbors() {
        let origin = Position::origin();
        assert_eq!(origin.left(), None);
        assert_eq!(origin.above(), None);

        let p = Position::new(2, 3);
        assert_eq!(p.left(), Some(Position::new(2, 2)));
        assert_eq!(p.above(), Some(Position::new(1, 3)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Step::East), "East");
        assert_eq!(format!("{}", Step::South), "South");
        assert_eq!(format!("{}", Position::new(1, 4)), "(1, 4)");
    }
}
