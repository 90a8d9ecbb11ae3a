// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for whole-grid displacement recomputation.
//!
//! The touch-present case is the per-frame hot path in a host UI: every
//! pointer-move event recomputes the full modifier grid.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tactile_grid_displacement::{DisplacementParams, GridSpec, compute_modifiers};

fn bench_rest_state(c: &mut Criterion) {
    let spec = GridSpec::new(20, 17, 20.0, 1.0);
    let params = DisplacementParams::for_cell_side(spec.cell_side());
    c.bench_function("grid_displacement/rest", |b| {
        b.iter(|| compute_modifiers(black_box(spec), None, black_box(&params)));
    });
}

fn bench_touch_tracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_displacement/tracking");
    for side in [10_usize, 20, 40] {
        let spec = GridSpec::new(side, side, 20.0, 1.0);
        let params = DisplacementParams::for_cell_side(spec.cell_side());
        let touch = spec.cell_center(side / 2, side / 2);
        group.bench_with_input(BenchmarkId::from_parameter(side), &spec, |b, &spec| {
            b.iter(|| {
                compute_modifiers(black_box(spec), black_box(Some(touch)), black_box(&params))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rest_state, bench_touch_tracking);
criterion_main!(benches);
