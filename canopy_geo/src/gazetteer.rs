// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core gazetteer implementation: storage, name lookups, spatial queries.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use canopy_quadtree::{Aabb2D, Point2D, QuadTree};
use kurbo::{Point, Rect};

use crate::types::{Place, WORLD};
use crate::units;

/// A spatially indexed collection of named places.
///
/// Places live in a flat vector; a [`QuadTree`] over their positions carries
/// the vector slot as payload, so spatial queries come back as slots and
/// resolve to `&Place` without cloning. Name lookups scan the vector
/// directly; the index accelerates geometry, not text.
///
/// A place whose position falls outside the gazetteer's bounds is rejected
/// at [`Gazetteer::insert`], keeping the vector and the tree in step.
pub struct Gazetteer {
    places: Vec<Place>,
    index: QuadTree<f64, usize>,
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::world()
    }
}

impl core::fmt::Debug for Gazetteer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Gazetteer")
            .field("places", &self.places.len())
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

fn rect_to_bounds(r: Rect) -> Aabb2D<f64> {
    Aabb2D::new(r.x0, r.y0, r.x1, r.y1)
}

fn to_pos(p: Point) -> Point2D<f64> {
    Point2D::new(p.x, p.y)
}

impl Gazetteer {
    /// Create an empty gazetteer indexing the given lon/lat rectangle.
    pub fn new(bounds: Rect) -> Self {
        Self {
            places: Vec::new(),
            index: QuadTree::new(rect_to_bounds(bounds)),
        }
    }

    /// Create an empty gazetteer over the full longitude/latitude range.
    pub fn world() -> Self {
        Self::new(WORLD)
    }

    /// The lon/lat rectangle supplied at construction.
    pub fn bounds(&self) -> Rect {
        let b = self.index.bounds();
        Rect::new(b.min_x, b.min_y, b.max_x, b.max_y)
    }

    /// Number of places stored.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the gazetteer holds no places.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// All stored places, in insertion order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Insert a place. Returns `false` (and stores nothing) when its
    /// position falls outside the gazetteer's bounds.
    pub fn insert(&mut self, place: Place) -> bool {
        let pos = to_pos(place.position);
        if !self.index.bounds().contains_point(pos.x, pos.y) {
            return false;
        }
        let slot = self.places.len();
        self.index.insert(pos, slot);
        self.places.push(place);
        true
    }

    /// Whether any stored place sits exactly at `position`.
    pub fn contains_position(&self, position: Point) -> bool {
        self.index.contains(to_pos(position))
    }

    /// All places whose name matches `name`, ASCII case-insensitively, in
    /// insertion order.
    pub fn find_by_name<'a, 'b>(
        &'a self,
        name: &'b str,
    ) -> impl Iterator<Item = &'a Place> + use<'a, 'b> {
        self.places
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
    }

    /// The most populous place matching `name` (ASCII case-insensitive), or
    /// `None` when nothing matches. The first match wins a population tie;
    /// places without a population count lose to any counted one.
    pub fn most_populous(&self, name: &str) -> Option<&Place> {
        self.find_by_name(name)
            .reduce(|best, p| if p.population > best.population { p } else { best })
    }

    /// All places within `radius` **degrees** of `center`, in index visit
    /// order.
    ///
    /// A place stored redundantly by the index (positions on subdivision
    /// midlines) is reported once. A negative radius yields an empty result.
    pub fn within_radius(&self, center: Point, radius: f64) -> Vec<&Place> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        for (_, slot) in self.index.query_radius(to_pos(center), radius) {
            if seen.insert(slot) {
                out.push(&self.places[slot]);
            }
        }
        out
    }

    /// All places within `miles` statute miles of `center`.
    ///
    /// Converts through [`units::miles_to_degrees`] and otherwise behaves
    /// like [`Gazetteer::within_radius`].
    pub fn within_miles(&self, center: Point, miles: f64) -> Vec<&Place> {
        self.within_radius(center, units::miles_to_degrees(miles))
    }

    /// The stored place nearest to `position`, or `None` when empty.
    pub fn nearest(&self, position: Point) -> Option<&Place> {
        self.index
            .nearest(to_pos(position))
            .map(|(_, slot)| &self.places[slot])
    }
}
