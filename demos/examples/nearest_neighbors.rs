// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives the quadtree directly: a tiny node capacity forces visible
//! subdivision, and nearest-neighbor queries walk the resulting structure.

use canopy_quadtree::{Aabb2D, Point2D, QuadTree};

fn main() {
    // Capacity 1 subdivides on the second insertion into any region.
    let bounds = Aabb2D::new(0.0, 0.0, 256.0, 256.0);
    let mut tree: QuadTree<f64, char> = QuadTree::with_node_capacity(bounds, 1);

    for (x, y, tag) in [
        (40.0, 40.0, 'a'),
        (48.0, 44.0, 'b'),
        (200.0, 60.0, 'c'),
        (60.0, 210.0, 'd'),
        (220.0, 220.0, 'e'),
        (41.0, 39.0, 'f'),
    ] {
        tree.insert(Point2D::new(x, y), tag);
    }
    println!("tree after inserts: {tree:?}");

    for (qx, qy) in [(0.0, 0.0), (50.0, 50.0), (255.0, 128.0), (128.0, 255.0)] {
        let (pos, tag) = tree.nearest(Point2D::new(qx, qy)).unwrap();
        println!("nearest to ({qx:>5.1}, {qy:>5.1}): '{tag}' at ({}, {})", pos.x, pos.y);
    }

    let crowd: Vec<_> = tree.query_radius(Point2D::new(44.0, 42.0), 8.0).collect();
    println!("within 8 of (44, 42): {crowd:?}");
}
