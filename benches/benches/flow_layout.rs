// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the flow layout placement pass.
//!
//! Uses a deterministic synthetic item population whose widths cycle through
//! a fixed set, approximating a tag-cloud of short and long labels.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use tactile_flow_layout::{Measured, Spacing, flow_layout};

const WIDTHS: [f64; 7] = [24.0, 61.0, 38.0, 105.0, 47.0, 82.0, 16.0];
const HEIGHTS: [f64; 3] = [18.0, 24.0, 36.0];

fn synthetic_items(count: usize) -> Vec<Measured<usize>> {
    (0..count)
        .map(|id| {
            Measured::new(
                id,
                Size::new(WIDTHS[id % WIDTHS.len()], HEIGHTS[id % HEIGHTS.len()]),
            )
        })
        .collect()
}

fn bench_flow_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow_layout");
    for count in [16_usize, 256, 4096] {
        let items = synthetic_items(count);
        group.bench_with_input(BenchmarkId::new("place", count), &items, |b, items| {
            b.iter(|| flow_layout(black_box(items), black_box(400.0), Spacing::uniform(10.0)));
        });
    }
    group.finish();
}

fn bench_narrow_container(c: &mut Criterion) {
    // One item per row: the wrap branch is taken on every placement.
    let items = synthetic_items(1024);
    c.bench_function("flow_layout/narrow_container", |b| {
        b.iter(|| flow_layout(black_box(&items), black_box(1.0), Spacing::uniform(10.0)));
    });
}

criterion_group!(benches, bench_flow_layout, bench_narrow_container);
criterion_main!(benches);
