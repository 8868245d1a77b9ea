// Copyright 2025 the Tradeoff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use tradeoff_chart::{ChartConfig, layout_placement_chart, layout_vector_chart, to_svg};
use tradeoff_decision::{Decision, RowId};

fn decision(rows: u64) -> Decision {
    let mut d = Decision::new().with_option_names("Stay", "Move");
    for i in 0..rows {
        let t = (i % 10) as f64 / 10.0;
        d = d
            .add_row("Category", "A", "B")
            .place_row(RowId(i), Point::new(t, 1.0 - t), Point::new(1.0 - t, t * 0.5));
    }
    d.activate_row(Some(RowId(0)))
}

fn bench_layout(c: &mut Criterion) {
    let config = ChartConfig::default();
    let mut group = c.benchmark_group("chart/layout");
    for rows in [4u64, 32, 256] {
        let d = decision(rows);
        group.throughput(Throughput::Elements(rows));
        group.bench_with_input(BenchmarkId::new("vector", rows), &d, |b, d| {
            b.iter(|| black_box(layout_vector_chart(d, &config)));
        });
        group.bench_with_input(BenchmarkId::new("placement", rows), &d, |b, d| {
            b.iter(|| black_box(layout_placement_chart(d, &config)));
        });
    }
    group.finish();
}

fn bench_svg(c: &mut Criterion) {
    let config = ChartConfig::default();
    let mut group = c.benchmark_group("chart/svg");
    for rows in [4u64, 32, 256] {
        let scene = layout_placement_chart(&decision(rows), &config);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &scene, |b, scene| {
            b.iter(|| black_box(to_svg(scene)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_svg);
criterion_main!(benches);
