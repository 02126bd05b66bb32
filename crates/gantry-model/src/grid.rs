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

//! # The Dockyard Grid
//!
//! An immutable `rows x columns` matrix of cell kinds describing one problem
//! instance. Cells are stored in a single flattened vector in row-major
//! order, so the dynamic-programming forward pass (which fills the table in
//! exactly that order) walks memory linearly.
//!
//! ## Motivation
//!
//! Both solvers are pure functions of the grid: once constructed, a `Grid`
//! is never mutated, which makes sharing it between solver invocations (or,
//! later, between per-diagonal worker threads) trivially safe. Constructors
//! validate eagerly so a malformed instance fails at the construction site
//! rather than deep inside a search.
//!
//! ## Usage
//!
//! ```rust
//! use gantry_model::grid::{CellKind, Grid};
//! use gantry_model::position::Position;
//!
//! let grid = Grid::from_rows(&[
//!     vec![CellKind::Empty, CellKind::Crane],
//!     vec![CellKind::Building, CellKind::Empty],
//! ]);
//! assert_eq!(grid.rows(), 2);
//! assert_eq!(grid.cell(Position::new(0, 1)), CellKind::Crane);
//! assert_eq!(grid.bottom_right(), Position::new(1, 1));
//! ```

use crate::position::Position;

/// The kind of a single dockyard cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CellKind {
    /// Open ground; passable, worth nothing.
    Empty,
    /// A shipping crane; passable, worth one unit of cargo.
    Crane,
    /// A building; impassable.
    Building,
}

impl CellKind {
    /// The single-character rendering of this cell kind, as used by the
    /// text instance format and by `Grid`'s `Display` implementation.
    #[inline]
    pub const fn symbol(&self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Crane => 'C',
            CellKind::Building => 'X',
        }
    }

    /// Parses a cell kind from its single-character rendering.
    /// Returns `None` for characters outside the cell alphabet.
    #[inline]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(CellKind::Empty),
            'C' => Some(CellKind::Crane),
            'X' => Some(CellKind::Building),
            _ => None,
        }
    }

    /// Returns `true` if a path may stand on this cell.
    #[inline]
    pub const fn is_passable(&self) -> bool {
        !matches!(self, CellKind::Building)
    }
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An immutable dockyard grid.
///
/// Cells are stored flattened in row-major order: the cell at `(r, c)` lives
/// at index `r * columns + c`. Dimensions are validated at construction and
/// are always at least `1 x 1`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Constructs a grid from its dimensions and flattened row-major cells.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or if `cells.len()` does not equal
    /// `rows * columns`.
    pub fn new(rows: usize, columns: usize, cells: Vec<CellKind>) -> Self {
        assert!(
            rows > 0 && columns > 0,
            "called `Grid::new` with empty dimensions: rows = {}, columns = {}",
            rows,
            columns
        );
        assert_eq!(
            cells.len(),
            rows * columns,
            "called `Grid::new` with inconsistent cell count: expected {} cells for a {}x{} grid but got {}",
            rows * columns,
            rows,
            columns,
            cells.len()
        );

        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Constructs a grid from a slice of equally long rows.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty, the first row is empty, or any row has a
    /// different length than the first.
    pub fn from_rows(rows: &[Vec<CellKind>]) -> Self {
        assert!(!rows.is_empty(), "called `Grid::from_rows` with no rows");
        let columns = rows[0].len();
        for (index, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                columns,
                "called `Grid::from_rows` with ragged rows: row 0 has {} columns but row {} has {}",
                columns,
                index,
                row.len()
            );
        }

        let cells = rows.iter().flatten().copied().collect();
        Self::new(rows.len(), columns, cells)
    }

    /// Constructs a grid with every cell set to `kind`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn filled(rows: usize, columns: usize, kind: CellKind) -> Self {
        assert!(
            rows > 0 && columns > 0,
            "called `Grid::filled` with empty dimensions: rows = {}, columns = {}",
            rows,
            columns
        );
        Self::new(rows, columns, vec![kind; rows * columns])
    }

    /// Returns the number of rows. Always at least 1.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns. Always at least 1.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the total number of cells, `rows * columns`.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if `position` names an existing cell.
    #[inline]
    pub fn in_bounds(&self, position: Position) -> bool {
        position.row() < self.rows && position.col() < self.columns
    }

    /// The bottom-right corner, the goal of every complete path.
    #[inline]
    pub fn bottom_right(&self) -> Position {
        Position::new(self.rows - 1, self.columns - 1)
    }

    /// The flattened row-major index of `position`.
    ///
    /// Useful for callers maintaining their own per-cell tables (such as
    /// the dynamic-programming solver) in the same layout as the grid.
    #[inline]
    pub fn flat_index(&self, position: Position) -> usize {
        debug_assert!(
            self.in_bounds(position),
            "called `Grid::flat_index` with position out of bounds: the grid is {}x{} but the position is {}",
            self.rows,
            self.columns,
            position
        );

        position.row() * self.columns + position.col()
    }

    /// Returns the kind of the cell at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    #[inline]
    pub fn cell(&self, position: Position) -> CellKind {
        debug_assert!(
            self.in_bounds(position),
            "called `Grid::cell` with position out of bounds: the grid is {}x{} but the position is {}",
            self.rows,
            self.columns,
            position
        );

        self.cells[position.row() * self.columns + position.col()]
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.columns {
                write!(f, "{}", self.cell(Position::new(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Grid({}x{})", self.rows, self.columns)
    }
}
