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

//! # Counter Numeric Trait
//!
//! Unified numeric bounds for crane counters. Crane counts are
//! cardinalities (the number of crane cells a path visits), so the alias
//! requires unsigned primitive integers. Unreachability in the
//! dynamic-programming table is expressed with `Option`, never with a
//! negative sentinel, which is why no signed bound appears here.
//!
//! Keeping the counter generic lets the table of a large instance use a
//! narrow type (`u8` or `u16`) to halve or quarter its memory footprint
//! without touching solver code. `Send + Sync` keep solver outcomes
//! shareable should the table fill ever be parallelized per grid diagonal;
//! the grid itself is immutable, so nothing else stands in the way.

use num_traits::{PrimInt, Unsigned};
use std::hash::Hash;

/// A trait alias for numeric types usable as crane counters.
///
/// These are the unsigned primitive integer types `u8`, `u16`, `u32`,
/// `u64`, and `usize`. Pick a type wide enough for the instance: a counter
/// can reach at most `rows * columns`, one per cell.
pub trait CountNumeric:
    PrimInt + Unsigned + std::fmt::Debug + std::fmt::Display + Hash + Send + Sync
{
}

impl<T> CountNumeric for T where
    T: PrimInt + Unsigned + std::fmt::Debug + std::fmt::Display + Hash + Send + Sync
{
}

#[cfg(test)]
mod tests {
    use super::CountNumeric;

    fn assert_count_numeric<T: CountNumeric>() {}

    #[test]
    fn test_unsigned_primitives_qualify() {
        assert_count_numeric::<u8>();
        assert_count_numeric::<u16>();
        assert_count_numeric::<u32>();
        assert_count_numeric::<u64>();
        assert_count_numeric::<usize>();
    }
}
