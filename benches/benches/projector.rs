// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use tradeoff_path::{Projection, RenderFrame, Vector, accumulate, compute_viewport, project};

/// Deterministic deltas in `[-1, 1]^2`, shaped like rows placed by hand.
fn vectors(len: usize) -> Vec<Vector<usize>> {
    let mut state = 0x2545_f491_u32;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        f64::from(state) / f64::from(u32::MAX) * 2.0 - 1.0
    };
    (0..len)
        .map(|i| Vector::new(i, Vec2::new(next(), next())))
        .collect()
}

fn bench_accumulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("path/accumulate");
    for len in [8usize, 64, 512, 4_096] {
        let input = vectors(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
            b.iter(|| black_box(accumulate(input.iter().cloned())));
        });
    }
    group.finish();
}

fn bench_compute_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("path/compute_viewport");
    for len in [8usize, 64, 512, 4_096] {
        let positions = accumulate(vectors(len)).into_positions();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(len),
            &positions,
            |b, positions| {
                b.iter(|| black_box(compute_viewport(black_box(positions), 0.2)));
            },
        );
    }
    group.finish();
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("path/project");
    let path = accumulate(vectors(512));
    let viewport = path.viewport(0.2);
    let points: Vec<Point> = path.positions().iter().map(|p| p.end).collect();
    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("free_fn", |b| {
        b.iter(|| {
            for &pt in &points {
                black_box(project(pt, &viewport, 600.0, 600.0, 60.0));
            }
        });
    });

    let projection = Projection::new(viewport, RenderFrame::default());
    group.bench_function("to_view", |b| {
        b.iter(|| {
            for &pt in &points {
                black_box(projection.to_view(pt));
            }
        });
    });

    let affine = projection.transform();
    group.bench_function("affine", |b| {
        b.iter(|| {
            for &pt in &points {
                black_box(affine * pt);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_accumulate, bench_compute_viewport, bench_project);
criterion_main!(benches);
