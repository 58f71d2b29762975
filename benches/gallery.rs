//! Benchmarks for the art gallery pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use fisk::{tricolor, triangulate, visibility_polygon, Point2, Polygon};
use std::f64::consts::PI;

/// Generates a wavy radial room, star-shaped around the origin.
fn generate_room(n: usize, seed: u64) -> Polygon<f64> {
    let mut state = seed;
    let vertices = (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * 2.0 * PI;

            // xorshift for deterministic random
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let noise = (state as f64 / u64::MAX as f64 - 0.5) * 2.0;

            let r = 10.0 + 3.0 * (5.0 * angle).sin() + noise;
            Point2::new(r * angle.cos(), r * angle.sin())
        })
        .collect();

    Polygon::new(vertices)
}

fn bench_visibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility_polygon");

    for n in [16, 64, 256] {
        let room = generate_room(n, 12345);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("vertices", n), &room, |b, room| {
            b.iter(|| visibility_polygon(black_box(room), black_box(Point2::new(0.0, 0.0))))
        });
    }

    group.finish();
}

fn bench_triangulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");

    for n in [16, 64, 256] {
        let room = generate_room(n, 12345);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("vertices", n), &room, |b, room| {
            b.iter(|| triangulate(black_box(room)))
        });
    }

    group.finish();
}

fn bench_tricolor(c: &mut Criterion) {
    let mut group = c.benchmark_group("tricolor");

    for n in [16, 64, 256] {
        let room = generate_room(n, 12345);
        let tri = triangulate(&room).unwrap();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(
            BenchmarkId::new("vertices", n),
            &tri.indices,
            |b, indices| b.iter(|| tricolor(black_box(indices), n)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_visibility, bench_triangulate, bench_tricolor);
criterion_main!(benches);
