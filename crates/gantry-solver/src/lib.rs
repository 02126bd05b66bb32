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

//! # Gantry Solver
//!
//! The two solving strategies for the crane unloading problem. Both consume
//! an immutable `Grid`, maximize the number of crane cells visited by a
//! monotone top-left-to-bottom-right path, and return the same
//! `SolverOutcome` shape; neither calls the other.
//!
//! ## Modules
//!
//! - `exhaustive`: Enumerates every candidate step sequence up to the
//!   maximum length. Exponential; usable only on small instances, where it
//!   serves as the reference oracle for the dynamic-programming solver.
//! - `dp`: Fills a best-reachable-count table cell by cell and backtraces
//!   the optimal path. Linear in the number of cells; the solver to use in
//!   practice.
//!
//! Both solvers treat precondition violations (an over-large instance for
//! the exhaustive strategy) as fatal assertions, never as recoverable
//! errors: internally generated candidates are pruned, and only caller
//! misuse can trip an assert. An instance whose bottom-right corner is
//! unreachable yields a best-effort `Partial` outcome instead of an error.

pub mod dp;
pub mod exhaustive;
