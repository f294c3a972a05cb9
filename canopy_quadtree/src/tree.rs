// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core quadtree implementation: structure, insertion, searches.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::{Aabb2D, Point2D, Scalar, dist_sq};

/// Default number of points a node stores directly before further insertions
/// spill into its children.
pub const DEFAULT_NODE_CAPACITY: usize = 4;

/// A recursive 2D point quadtree over a fixed world rectangle.
///
/// Each node owns a rectangle and a small buffer of points. When a node's
/// buffer is full, the node splits once into four children that quarter its
/// rectangle at the midpoint, and later insertions are offered to every
/// child; each child re-runs its own bounds check and keeps the point only
/// when it falls inside. Points already buffered at a node are **not**
/// redistributed on subdivision, so searches inspect every node's buffer,
/// not only the leaves.
///
/// Bounds are inclusive on all four edges. A point exactly on a split
/// midline that arrives after the split is kept by more than one child;
/// [`QuadTree::len`] counts such an insertion once, while
/// [`QuadTree::query_radius`] reports each stored copy.
///
/// Points outside the world rectangle are silently dropped on insert; the
/// drop is observable afterwards through [`QuadTree::contains`].
///
/// There is no removal and no depth limit: many points crowded into a tiny
/// region subdivide as deep as needed. Degenerate inputs (thousands of
/// coincident points) therefore recurse proportionally deep.
pub struct QuadTree<T: Scalar, P: Copy + Debug> {
    root: Node<T, P>,
    node_capacity: usize,
    len: usize,
}

struct Node<T: Scalar, P: Copy + Debug> {
    bounds: Aabb2D<T>,
    points: Vec<(Point2D<T>, P)>,
    children: Option<Box<[Node<T, P>; 4]>>,
}

impl<T: Scalar, P: Copy + Debug> Node<T, P> {
    fn new(bounds: Aabb2D<T>) -> Self {
        Self {
            bounds,
            points: Vec::new(),
            children: None,
        }
    }

    fn subdivide(&mut self) {
        let [bl, br, tl, tr] = self.bounds.split_quadrants();
        self.children = Some(Box::new([
            Self::new(bl),
            Self::new(br),
            Self::new(tl),
            Self::new(tr),
        ]));
    }

    /// Returns whether the point was stored somewhere in this subtree.
    fn insert(&mut self, pos: Point2D<T>, payload: P, capacity: usize) -> bool {
        if !self.bounds.contains_point(pos.x, pos.y) {
            return false;
        }
        if self.points.len() < capacity {
            self.points.push((pos, payload));
            return true;
        }
        if self.children.is_none() {
            self.subdivide();
        }
        // Offer the point to every child rather than computing the owning
        // quadrant; each child re-runs its own bounds check. A point on a
        // midline is kept by each adjacent child.
        let mut stored = false;
        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                stored |= child.insert(pos, payload, capacity);
            }
        }
        stored
    }

    fn contains(&self, pos: Point2D<T>) -> bool {
        if self.points.iter().any(|(p, _)| *p == pos) {
            return true;
        }
        match &self.children {
            Some(children) => children.iter().any(|c| c.contains(pos)),
            None => false,
        }
    }

    fn collect_within(
        &self,
        center: Point2D<T>,
        radius_sq: T::Acc,
        out: &mut Vec<(Point2D<T>, P)>,
    ) {
        // Nothing buffered here or below can be closer than the rectangle.
        if self.bounds.dist_sq_to_point(center) > radius_sq {
            return;
        }
        for (p, payload) in &self.points {
            if dist_sq(*p, center) <= radius_sq {
                out.push((*p, *payload));
            }
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect_within(center, radius_sq, out);
            }
        }
    }

    fn nearest_into(&self, query: Point2D<T>, best: &mut Option<(Point2D<T>, P, T::Acc)>) {
        if let Some((_, _, best_d)) = best
            && self.bounds.dist_sq_to_point(query) > *best_d
        {
            return;
        }
        for (p, payload) in &self.points {
            let d = dist_sq(*p, query);
            if best.as_ref().is_none_or(|(_, _, bd)| d < *bd) {
                *best = Some((*p, *payload, d));
            }
        }
        let Some(children) = &self.children else {
            return;
        };
        // Descend into the quadrant that would hold the query first: it
        // tightens the bound fastest. The remaining children stay protected
        // by the rectangle-distance prune above.
        let home = self.bounds.quadrant_of(query);
        if let Some(h) = home {
            children[h].nearest_into(query, best);
        }
        for (i, child) in children.iter().enumerate() {
            if Some(i) != home {
                child.nearest_into(query, best);
            }
        }
    }

    fn node_count(&self) -> usize {
        1 + self
            .children
            .as_ref()
            .map_or(0, |c| c.iter().map(Self::node_count).sum())
    }

    fn depth(&self) -> usize {
        1 + self
            .children
            .as_ref()
            .map_or(0, |c| c.iter().map(Self::depth).max().unwrap_or(0))
    }
}

impl<T: Scalar, P: Copy + Debug> QuadTree<T, P> {
    /// Create a tree over `bounds` with [`DEFAULT_NODE_CAPACITY`].
    pub fn new(bounds: Aabb2D<T>) -> Self {
        Self::with_node_capacity(bounds, DEFAULT_NODE_CAPACITY)
    }

    /// Create a tree over `bounds` whose nodes buffer up to `node_capacity`
    /// points before subdividing.
    ///
    /// Small capacities force subdivision early, which keeps test datasets
    /// small.
    ///
    /// # Panics
    ///
    /// Panics if `node_capacity` is zero.
    pub fn with_node_capacity(bounds: Aabb2D<T>, node_capacity: usize) -> Self {
        assert!(node_capacity > 0, "node capacity must be positive");
        Self {
            root: Node::new(bounds),
            node_capacity,
            len: 0,
        }
    }

    /// The world rectangle supplied at construction.
    pub fn bounds(&self) -> Aabb2D<T> {
        self.root.bounds
    }

    /// Number of points a node buffers before subdividing.
    pub fn node_capacity(&self) -> usize {
        self.node_capacity
    }

    /// Number of accepted insertions.
    ///
    /// An insertion dropped for falling outside the world rectangle does not
    /// count; an insertion kept by several children (midline case) counts
    /// once.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `payload` at `pos`.
    ///
    /// A position outside the world rectangle is silently dropped. Duplicate
    /// positions are stored again; equality never deduplicates.
    pub fn insert(&mut self, pos: Point2D<T>, payload: P) {
        if self.root.insert(pos, payload, self.node_capacity) {
            self.len += 1;
        }
    }

    /// Whether any stored point compares coordinate-equal to `pos`.
    ///
    /// This is an unconditional existence search over the whole tree; it does
    /// no geometric pruning.
    pub fn contains(&self, pos: Point2D<T>) -> bool {
        self.root.contains(pos)
    }

    /// All stored points within Euclidean distance `radius` of `center`,
    /// boundary included, in a deterministic tree-visit order.
    ///
    /// `radius` is in the same units as the coordinates; the tree performs no
    /// unit conversion. A negative radius yields an empty result. A zero
    /// radius matches exactly coincident points. Subtrees whose rectangle is
    /// farther than `radius` are pruned by squared rectangle distance; every
    /// surviving node has both its own buffer and its children examined.
    pub fn query_radius(
        &self,
        center: Point2D<T>,
        radius: T,
    ) -> impl Iterator<Item = (Point2D<T>, P)> {
        let mut out = Vec::new();
        if radius >= T::zero() {
            let r = T::widen(radius);
            self.root.collect_within(center, r * r, &mut out);
        }
        out.into_iter()
    }

    /// The stored point nearest to `query`, or `None` when the tree is empty.
    ///
    /// Branch-and-bound descent: subtrees whose rectangle is already farther
    /// than the best candidate are pruned, and the quadrant containing the
    /// query is visited first. Among points at exactly equal distance, the
    /// first one reached in that visiting order wins.
    pub fn nearest(&self, query: Point2D<T>) -> Option<(Point2D<T>, P)> {
        let mut best = None;
        self.root.nearest_into(query, &mut best);
        best.map(|(p, payload, _)| (p, payload))
    }
}

impl<T: Scalar, P: Copy + Debug> Debug for QuadTree<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.root.bounds)
            .field("node_capacity", &self.node_capacity)
            .field("len", &self.len)
            .field("nodes", &self.root.node_count())
            .field("depth", &self.root.depth())
            .finish_non_exhaustive()
    }
}
