// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use canopy_quadtree::{Aabb2D, Point2D, QuadTree};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use rstar::RTree;

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

fn to_rstar_points(v: &[Point2D<f64>]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_quadtree_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_external_compare");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 10.0);
        let center = Point2D::new(300.0, 300.0);
        let radius = 120.0;
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("canopy_build_query_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::<f64, u32>::new(WORLD),
                |mut tree| {
                    for (i, p) in points.iter().copied().enumerate() {
                        tree.insert(p, i as u32);
                    }
                    let hits = tree.query_radius(center, radius).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("canopy_build_nearest_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::<f64, u32>::new(WORLD),
                |mut tree| {
                    for (i, p) in points.iter().copied().enumerate() {
                        tree.insert(p, i as u32);
                    }
                    black_box(tree.nearest(center));
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_bulk_query_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    let hits = tree
                        .locate_within_distance([center.x, center.y], radius * radius)
                        .count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_bulk_nearest_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    black_box(tree.nearest_neighbor(&[center.x, center.y]).copied());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quadtree_external_compare);
criterion_main!(benches);
