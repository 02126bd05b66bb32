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

//! Benchmarks comparing the two solving strategies.
//!
//! The head-to-head group makes the exponential/linear divergence visible
//! on small square instances; the standalone benchmark shows the
//! dynamic-programming solver on an instance far beyond the exhaustive
//! solver's reach.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gantry_model::grid::{CellKind, Grid};
use gantry_solver::{dp::DynProgSolver, exhaustive::ExhaustiveSolver};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_grid(rng: &mut StdRng, rows: usize, columns: usize) -> Grid {
    let mut cells = Vec::with_capacity(rows * columns);
    for _ in 0..rows * columns {
        cells.push(match rng.gen_range(0..10) {
            0..=5 => CellKind::Empty,
            6..=7 => CellKind::Crane,
            _ => CellKind::Building,
        });
    }
    if cells[0] == CellKind::Building {
        cells[0] = CellKind::Empty;
    }
    Grid::new(rows, columns, cells)
}

fn bench_head_to_head(c: &mut Criterion) {
    let mut group = c.benchmark_group("head_to_head");
    for size in [3usize, 5, 7] {
        let grid = random_grid(&mut StdRng::seed_from_u64(7), size, size);

        group.bench_with_input(BenchmarkId::new("exhaustive", size), &grid, |b, grid| {
            b.iter(|| ExhaustiveSolver::new().solve::<u32>(grid));
        });
        group.bench_with_input(BenchmarkId::new("dynprog", size), &grid, |b, grid| {
            b.iter(|| DynProgSolver::new().solve::<u32>(grid));
        });
    }
    group.finish();
}

fn bench_dynprog_large(c: &mut Criterion) {
    let grid = random_grid(&mut StdRng::seed_from_u64(11), 256, 256);
    c.bench_function("dynprog/256x256", |b| {
        b.iter(|| DynProgSolver::new().solve::<u32>(&grid));
    });
}

criterion_group!(benches, bench_head_to_head, bench_dynprog_large);
criterion_main!(benches);
