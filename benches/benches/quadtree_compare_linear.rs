// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_quadtree::{Aabb2D, Point2D, QuadTree, dist_sq};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

const WORLD: Aabb2D<f64> = Aabb2D::new(0.0, 0.0, 2000.0, 2000.0);

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point2D<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point2D::new(x as f64 * cell, y as f64 * cell));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, max_w: f64, max_h: f64) -> Vec<Point2D<f64>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        out.push(Point2D::new(rng.next_f64() * max_w, rng.next_f64() * max_h));
    }
    out
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point2D<f64>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        // Keep whole clusters inside the world so no point is dropped.
        centers.push((
            spread + rng.next_f64() * (2000.0 - 2.0 * spread),
            spread + rng.next_f64() * (2000.0 - 2.0 * spread),
        ));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point2D::new(cx + dx, cy + dy));
        }
    }
    out
}

/// Brute-force baseline: the structure the quadtree is supposed to beat.
struct LinearScan {
    points: Vec<(Point2D<f64>, u32)>,
}

impl LinearScan {
    fn new() -> Self {
        Self { points: Vec::new() }
    }

    fn insert(&mut self, pos: Point2D<f64>, payload: u32) {
        self.points.push((pos, payload));
    }

    fn query_radius(&self, center: Point2D<f64>, radius: f64) -> usize {
        let r2 = radius * radius;
        self.points
            .iter()
            .filter(|(p, _)| dist_sq(*p, center) <= r2)
            .count()
    }

    fn nearest(&self, query: Point2D<f64>) -> Option<(Point2D<f64>, u32)> {
        let mut best: Option<(Point2D<f64>, u32, f64)> = None;
        for (p, v) in &self.points {
            let d = dist_sq(*p, query);
            if best.as_ref().is_none_or(|(_, _, bd)| d < *bd) {
                best = Some((*p, *v, d));
            }
        }
        best.map(|(p, v, _)| (p, v))
    }
}

fn bench_build_query_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_query_radius");
    for &n in &[32usize, 64, 128] {
        let points = gen_grid_points(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("quadtree_grid_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::<f64, u32>::new(WORLD),
                |mut tree| {
                    for (i, p) in points.iter().copied().enumerate() {
                        tree.insert(p, i as u32);
                    }
                    let hits = tree.query_radius(Point2D::new(300.0, 300.0), 120.0).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("linear_grid_n{}", n), |b| {
            b.iter_batched(
                LinearScan::new,
                |mut scan| {
                    for (i, p) in points.iter().copied().enumerate() {
                        scan.insert(p, i as u32);
                    }
                    let hits = scan.query_radius(Point2D::new(300.0, 300.0), 120.0);
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_heavy");
    let points = gen_random_points(8192, 2000.0, 2000.0);
    group.bench_function("quadtree_radius_x256", |b| {
        b.iter_batched(
            || {
                let mut tree = QuadTree::<f64, u32>::new(WORLD);
                for (i, p) in points.iter().copied().enumerate() {
                    tree.insert(p, i as u32);
                }
                tree
            },
            |tree| {
                let mut total = 0usize;
                for q in 0..256 {
                    let x = (q % 16) as f64 * 125.0;
                    let y = (q / 16) as f64 * 125.0;
                    total += tree.query_radius(Point2D::new(x, y), 64.0).count();
                }
                black_box(total);
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("linear_radius_x256", |b| {
        b.iter_batched(
            || {
                let mut scan = LinearScan::new();
                for (i, p) in points.iter().copied().enumerate() {
                    scan.insert(p, i as u32);
                }
                scan
            },
            |scan| {
                let mut total = 0usize;
                for q in 0..256 {
                    let x = (q % 16) as f64 * 125.0;
                    let y = (q / 16) as f64 * 125.0;
                    total += scan.query_radius(Point2D::new(x, y), 64.0);
                }
                black_box(total);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    let points = gen_random_points(8192, 2000.0, 2000.0);
    let queries = gen_random_points(256, 2000.0, 2000.0);
    group.bench_function("quadtree_nearest_x256", |b| {
        b.iter_batched(
            || {
                let mut tree = QuadTree::<f64, u32>::new(WORLD);
                for (i, p) in points.iter().copied().enumerate() {
                    tree.insert(p, i as u32);
                }
                tree
            },
            |tree| {
                for q in queries.iter().copied() {
                    black_box(tree.nearest(q));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("linear_nearest_x256", |b| {
        b.iter_batched(
            || {
                let mut scan = LinearScan::new();
                for (i, p) in points.iter().copied().enumerate() {
                    scan.insert(p, i as u32);
                }
                scan
            },
            |scan| {
                for q in queries.iter().copied() {
                    black_box(scan.nearest(q));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_clustered");
    let points = gen_clustered_points(16, 256, 128.0);
    group.bench_function("build_query_radius", |b| {
        b.iter_batched(
            || QuadTree::<f64, u32>::new(WORLD),
            |mut tree| {
                for (i, p) in points.iter().copied().enumerate() {
                    tree.insert(p, i as u32);
                }
                let hits = tree.query_radius(Point2D::new(1000.0, 1000.0), 200.0).count();
                black_box(hits);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build_query_radius,
    bench_query_heavy,
    bench_nearest,
    bench_clustered,
);
criterion_main!(benches);
