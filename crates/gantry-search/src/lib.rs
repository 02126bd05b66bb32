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

//! # Gantry Search
//!
//! Shared infrastructure for the crane-unloading solvers. Both solving
//! strategies, exhaustive enumeration and dynamic programming, consume the
//! same grid model and produce the same outcome shape; this crate holds
//! everything they have in common so the solver crate contains nothing but
//! the two algorithms themselves.
//!
//! ## Modules
//!
//! - `num`: The `CountNumeric` trait alias bundling the bounds a crane
//!   counter type must satisfy.
//! - `incumbent`: Best-path-so-far holder with a strictly-better install
//!   policy that pins down tie-breaking.
//! - `result`: `PathSolution`, `SolverResult`, `TerminationReason`, and the
//!   `SolverOutcome` bundle returned by every solver.
//! - `stats`: Counters collected during a solve, with a builder.
//! - `monitor`: Pluggable observation hooks (`NoOpMonitor`, `LogMonitor`);
//!   the solvers themselves never print.

pub mod incumbent;
pub mod monitor;
pub mod num;
pub mod result;
pub mod stats;
