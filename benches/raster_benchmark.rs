#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmarks for the rasterization algorithms and grid building.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rasterviz::geometry::Rect;
use rasterviz::grid::OccupancyGrid;
use rasterviz::raster::{bresenham_circle, bresenham_line, dda_line, naive_line};

fn line_rasterizer_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_rasterizers");

    for size in [100, 1_000, 10_000] {
        let (x1, y1) = (size, size * 7 / 10);

        group.bench_with_input(BenchmarkId::new("naive", size), &size, |b, _| {
            b.iter(|| naive_line(0, 0, black_box(x1), black_box(y1)).count());
        });
        group.bench_with_input(BenchmarkId::new("dda", size), &size, |b, _| {
            b.iter(|| dda_line(0, 0, black_box(x1), black_box(y1)).count());
        });
        group.bench_with_input(BenchmarkId::new("bresenham", size), &size, |b, _| {
            b.iter(|| bresenham_line(0, 0, black_box(x1), black_box(y1)).count());
        });
    }

    group.finish();
}

fn circle_rasterizer_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_rasterizer");

    for radius in [50, 500, 5_000] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            b.iter(|| bresenham_circle(0, 0, black_box(radius)).count());
        });
    }

    group.finish();
}

fn grid_build_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_build");

    for size in [100, 1_000] {
        let rect = Rect::from_endpoints(0, 0, size, size * 7 / 10);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let pixels = bresenham_line(0, 0, black_box(size), black_box(size * 7 / 10));
                OccupancyGrid::from_pixels(pixels, rect).expect("grid build should succeed")
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    line_rasterizer_benchmark,
    circle_rasterizer_benchmark,
    grid_build_benchmark
);
criterion_main!(benches);
