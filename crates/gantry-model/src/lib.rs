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

//! # Gantry Model
//!
//! **The Core Domain Model for the Gantry Crane-Unloading Solvers.**
//!
//! This crate defines the fundamental data structures used to represent the
//! **crane unloading problem**: a dockyard is a rectangular grid of cells,
//! some holding shipping cranes and some blocked by buildings, and a cargo
//! truck must travel from the top-left corner to the bottom-right corner
//! moving only east or south, visiting as many cranes as possible along the
//! way. It serves as the data interchange layer between the problem
//! definition (user input) and the solving engines (`gantry_solver`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **solving**:
//!
//! * **`position`**: Grid coordinates and the two-symbol step alphabet of
//!   monotone paths.
//! * **`grid`**: The immutable `Grid` (flattened row-major layout, optimized
//!   for solving) together with its cell alphabet.
//! * **`path`**: The append-only monotone `Path`, the output format of every
//!   solver.
//! * **`loading`**: Turns whitespace-delimited text streams into validated
//!   `Grid` instances.
//!
//! ## Design Philosophy
//!
//! 1.  **Immutability**: A `Grid` never changes after construction. Paths
//!     borrow their grid and only ever grow by one validated step at a time.
//! 2.  **Memory Layout**: Cells are stored in a single flattened vector in
//!     row-major order to maximize cache locality during the row-major
//!     dynamic-programming fill.
//! 3.  **Fail-Fast**: Constructors validate inputs eagerly so the solvers
//!     never encounter an invalid state.

pub mod grid;
pub mod loading;
pub mod path;
pub mod position;
