// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Canopy Quadtree: insert, radius query, and nearest neighbor.

use canopy_quadtree::{Aabb2D, Point2D, QuadTree};

fn main() {
    let mut tree: QuadTree<f64, u32> = QuadTree::new(Aabb2D::new(-180.0, -90.0, 180.0, 90.0));
    tree.insert(Point2D::new(2.35, 48.85), 1); // Paris
    tree.insert(Point2D::new(-0.13, 51.51), 2); // London
    tree.insert(Point2D::new(13.41, 52.52), 3); // Berlin
    tree.insert(Point2D::new(-74.01, 40.71), 4); // New York

    // Everything within 10 degrees of Brussels.
    let hits: Vec<_> = tree.query_radius(Point2D::new(4.35, 50.85), 10.0).collect();
    println!("near Brussels: {:?}", hits);

    // The closest indexed point to Amsterdam.
    let nearest = tree.nearest(Point2D::new(4.9, 52.37));
    println!("nearest to Amsterdam: {:?}", nearest);

    println!("tree: {:?}", tree);
}
