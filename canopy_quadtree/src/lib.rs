// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_quadtree --heading-base-level=0

//! Canopy Quadtree: a recursive 2D point quadtree.
//!
//! Canopy Quadtree is a small building block for proximity queries over
//! labeled points.
//!
//! - Insert points with a payload over caller-supplied world bounds.
//! - Query by radius ([`QuadTree::query_radius`]), nearest neighbor
//!   ([`QuadTree::nearest`]), or exact coordinate ([`QuadTree::contains`]).
//! - Both searches prune subtrees by squared rectangle distance.
//!
//! It is generic over the scalar type `T` (`f32`, `f64`, `i64`) and does not
//! depend on any geometry crate. Higher layers can map domain records to
//! positions and slot payloads and feed them here.
//!
//! Nodes buffer up to a configurable number of points
//! ([`DEFAULT_NODE_CAPACITY`] unless overridden) and then split once into
//! four children quartering their rectangle. Buffered points stay where they
//! were accepted; subdivision never redistributes, so interior nodes keep
//! serving hits alongside their children. All box edges are inclusive, which
//! means a point landing exactly on a split midline after subdivision is
//! kept by each adjacent child; see [`QuadTree`] for the observable effects.
//!
//! # Example
//!
//! ```rust
//! use canopy_quadtree::{Aabb2D, Point2D, QuadTree};
//!
//! // Index a handful of labeled points over longitude/latitude bounds.
//! let mut tree: QuadTree<f64, u32> = QuadTree::new(Aabb2D::new(-180.0, -90.0, 180.0, 90.0));
//! tree.insert(Point2D::new(0.0, 0.0), 1);
//! tree.insert(Point2D::new(1.0, 1.0), 2);
//! tree.insert(Point2D::new(-50.0, -50.0), 3);
//!
//! // Everything within 5 units of the origin.
//! let near: Vec<_> = tree.query_radius(Point2D::new(0.0, 0.0), 5.0).collect();
//! assert_eq!(near.len(), 2);
//!
//! // The closest point to (0.4, 0.4).
//! let (pos, payload) = tree.nearest(Point2D::new(0.4, 0.4)).unwrap();
//! assert_eq!(pos, Point2D::new(0.0, 0.0));
//! assert_eq!(payload, 1);
//! ```
//!
//! Small node capacities subdivide early, which keeps test datasets small:
//!
//! ```rust
//! use canopy_quadtree::{Aabb2D, Point2D, QuadTree};
//!
//! let bounds = Aabb2D::new(0, 0, 100, 100);
//! let mut tree: QuadTree<i64, &str> = QuadTree::with_node_capacity(bounds, 1);
//! tree.insert(Point2D::new(10, 10), "a");
//! tree.insert(Point2D::new(90, 90), "b");
//! assert!(tree.contains(Point2D::new(10, 10)));
//! assert_eq!(tree.len(), 2);
//! ```
//!
//! # Semantics worth knowing
//!
//! - Radius values are in coordinate units; the tree never converts
//!   real-world units. A negative radius yields an empty result.
//! - Inserting outside the world bounds is a silent no-op.
//! - There is no removal, no rebalancing, and no depth limit: degenerate
//!   clustering (many near-coincident points) subdivides arbitrarily deep.
//!
//! ## Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. Squared
//! distances use widened accumulators (f32→f64, i64→i128) to avoid
//! precision pitfalls.

#![no_std]

extern crate alloc;

pub mod tree;
pub mod types;

pub use tree::{DEFAULT_NODE_CAPACITY, QuadTree};
pub use types::{Aabb2D, Point2D, Scalar, dist_sq};
