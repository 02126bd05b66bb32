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

//! # Problem Instance Loader
//!
//! Turns whitespace-delimited text streams into validated `Grid` instances.
//!
//! The format is deliberately simple: two positive integers `rows` and
//! `columns`, followed by `rows * columns` single-character cell tokens in
//! row-major order (`.` empty, `C` crane, `X` building). Tokens may be
//! separated by any whitespace, and `#` introduces a comment that runs to
//! the end of its line.
//!
//! The `GridLoader` emphasizes clarity and robustness. An optional
//! feasibility check rejects instances whose start cell is a building:
//! such an instance has no valid path at all, and rejecting it at load time
//! produces a descriptive error instead of a violated solver precondition
//! later. The loader accepts any `BufRead`, a file path, or a string slice,
//! making it convenient to integrate with benchmarks, tests, and tooling.
//!
//! Loading is the only recoverable-error surface of the workspace: inside
//! the solvers every internally generated candidate is pruned rather than
//! errored, and only caller misuse trips an assertion.
//!
//! ## Usage
//!
//! ```rust
//! use gantry_model::loading::GridLoader;
//!
//! let text = "
//!     ## a 2x3 yard with one blocked lane
//!     2 3
//!     . C .
//!     X . C
//! ";
//! let grid = GridLoader::new().load_from_str(text).unwrap();
//! assert_eq!(grid.rows(), 2);
//! assert_eq!(grid.columns(), 3);
//! ```

use crate::grid::{CellKind, Grid};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// The error type for the instance loading process.
#[derive(Debug)]
pub enum GridLoadError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input stream ended before all expected tokens were read.
    UnexpectedEof,
    /// A token could not be parsed into the expected value.
    Parse(ParseTokenError),
    /// The grid dimensions are invalid (both must be > 0).
    InvalidDimensions,
    /// The instance is unsolvable based on the loader configuration.
    Feasibility(FeasibilityError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// What the loader expected at this point (e.g., "row count" or
    /// "cell symbol").
    pub expected: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as {}",
            self.token, self.expected
        )
    }
}

impl std::error::Error for ParseTokenError {}

/// Details about a logical feasibility violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeasibilityError {
    /// The start cell (0, 0) is a building, so no path exists.
    StartBlocked,
}

impl std::fmt::Display for FeasibilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartBlocked => {
                write!(f, "The start cell (0, 0) is a building; no path can exist")
            }
        }
    }
}

impl std::error::Error for FeasibilityError {}

impl std::fmt::Display for GridLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "Unexpected end of input while parsing instance"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::InvalidDimensions => {
                write!(f, "Grid dimensions must be positive integers")
            }
            Self::Feasibility(e) => write!(f, "Infeasible instance: {}", e),
        }
    }
}

impl std::error::Error for GridLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Feasibility(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GridLoadError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ParseTokenError> for GridLoadError {
    fn from(value: ParseTokenError) -> Self {
        Self::Parse(value)
    }
}

/// A configurable loader for dockyard instances.
///
/// By default the loader rejects instances whose start cell is a building
/// (`check_start_open = true`); callers that want to inspect such instances
/// anyway can switch the check off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLoader {
    check_start_open: bool,
}

impl Default for GridLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl GridLoader {
    /// Creates a loader with the start-cell feasibility check enabled.
    #[inline]
    pub fn new() -> Self {
        Self {
            check_start_open: true,
        }
    }

    /// Enables or disables the start-cell feasibility check.
    #[inline]
    pub fn check_start_open(mut self, check: bool) -> Self {
        self.check_start_open = check;
        self
    }

    /// Loads an instance from a file path.
    pub fn load_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Grid, GridLoadError> {
        let file = File::open(path)?;
        self.load_from_reader(BufReader::new(file))
    }

    /// Loads an instance from a string slice.
    pub fn load_from_str(&self, input: &str) -> Result<Grid, GridLoadError> {
        self.load_from_reader(input.as_bytes())
    }

    /// Loads an instance from any buffered reader.
    pub fn load_from_reader<R: BufRead>(&self, reader: R) -> Result<Grid, GridLoadError> {
        let mut tokens = Tokenizer::new(reader);

        let rows = Self::parse_dimension(tokens.next_token()?)?;
        let columns = Self::parse_dimension(tokens.next_token()?)?;

        let mut cells = Vec::with_capacity(rows * columns);
        for _ in 0..rows * columns {
            let token = tokens.next_token()?;
            cells.push(Self::parse_cell(&token)?);
        }

        let grid = Grid::new(rows, columns, cells);
        if self.check_start_open && !grid.cell(crate::position::Position::origin()).is_passable() {
            return Err(GridLoadError::Feasibility(FeasibilityError::StartBlocked));
        }

        Ok(grid)
    }

    fn parse_dimension(token: String) -> Result<usize, GridLoadError> {
        let value: usize = token.parse().map_err(|_| ParseTokenError {
            token,
            expected: "a grid dimension",
        })?;
        if value == 0 {
            return Err(GridLoadError::InvalidDimensions);
        }
        Ok(value)
    }

    fn parse_cell(token: &str) -> Result<CellKind, GridLoadError> {
        let mut chars = token.chars();
        let (symbol, rest) = (chars.next(), chars.next());
        match (symbol, rest) {
            (Some(symbol), None) => CellKind::from_symbol(symbol).ok_or_else(|| {
                GridLoadError::Parse(ParseTokenError {
                    token: token.to_string(),
                    expected: "a cell symbol ('.', 'C' or 'X')",
                })
            }),
            _ => Err(GridLoadError::Parse(ParseTokenError {
                token: token.to_string(),
                expected: "a cell symbol ('.', 'C' or 'X')",
            })),
        }
    }
}

/// Whitespace tokenizer over a buffered reader. Strips `#` comments to the
/// end of the line.
struct Tokenizer<R> {
    reader: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokenizer<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, GridLoadError> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(GridLoadError::UnexpectedEof);
            }

            let content = line.split('#').next().unwrap_or("");
            // Reversed so `pop` hands tokens out in line order.
            self.pending
                .extend(content.split_whitespace().rev().map(str::to_string));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FeasibilityError, GridLoadError, GridLoader};
    use crate::grid::CellKind;
    use crate::position::Position;

    #[test]
    fn test_load_simple_instance() {
        let grid = GridLoader::new()
            .load_from_str("2 2  . C  C .")
            .expect("instance should load");

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.cell(Position::new(0, 1)), CellKind::Crane);
        assert_eq!(grid.cell(Position::new(1, 1)), CellKind::Empty);
    }

    #[test]
    fn test_load_with_comments_and_layout() {
        let text = "
            # dockyard with a blocked middle lane
            3 3
            . C .
            X X .   # the lane
            C . .
        ";
        let grid = GridLoader::new().load_from_str(text).unwrap();
        assert_eq!(grid.cell(Position::new(1, 0)), CellKind::Building);
        assert_eq!(grid.cell(Position::new(2, 0)), CellKind::Crane);
    }

    #[test]
    fn test_truncated_input() {
        let result = GridLoader::new().load_from_str("2 2 . C");
        assert!(matches!(result, Err(GridLoadError::UnexpectedEof)));
    }

    #[test]
    fn test_unknown_cell_symbol() {
        let result = GridLoader::new().load_from_str("1 2 . Q");
        assert!(matches!(result, Err(GridLoadError::Parse(_))));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let result = GridLoader::new().load_from_str("0 4");
        assert!(matches!(result, Err(GridLoadError::InvalidDimensions)));
    }

    #[test]
    fn test_blocked_start_rejected_by_default() {
        let result = GridLoader::new().load_from_str("1 2 X .");
        assert!(matches!(
            result,
            Err(GridLoadError::Feasibility(FeasibilityError::StartBlocked))
        ));
    }

    #[test]
    fn test_blocked_start_accepted_when_check_disabled() {
        let grid = GridLoader::new()
            .check_start_open(false)
            .load_from_str("1 2 X .")
            .unwrap();
        assert_eq!(grid.cell(Position::origin()), CellKind::Building);
    }
}
