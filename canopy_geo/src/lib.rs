// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_geo --heading-base-level=0

//! Canopy Geo: a Kurbo-native gazetteer over the Canopy quadtree.
//!
//! Canopy Geo is the geographic layer for city-scale point data: named
//! places with optional populations, indexed by position for radius and
//! nearest-neighbor searches.
//!
//! - [`Place`]: a name, a lon/lat [`kurbo::Point`], an optional population.
//! - [`Gazetteer`]: insertion, case-insensitive name search, most-populous
//!   selection, and spatial queries in degrees or statute miles.
//! - [`WORLD`] and [`CONUS`]: ready-made indexing bounds.
//!
//! ## Integration with Canopy Quadtree
//!
//! The gazetteer keeps places in a flat vector and feeds their positions to
//! a [`canopy_quadtree::QuadTree`] whose payload is the vector slot. Spatial
//! queries return slots; this crate resolves them back to `&Place`. Name
//! lookups never touch the tree.
//!
//! ## Units
//!
//! The quadtree works purely in coordinate units (degrees here). This crate
//! owns the real-world conversion: [`Gazetteer::within_miles`] goes through
//! [`units::miles_to_degrees`] before querying, and nothing downstream ever
//! guesses at units. The conversion is an equirectangular approximation; see
//! [`units`] for its limits.
//!
//! # Example
//!
//! ```rust
//! use canopy_geo::{CONUS, Gazetteer, Place};
//! use kurbo::Point;
//!
//! let mut gaz = Gazetteer::new(CONUS);
//! gaz.insert(Place::new("Chicago", -87.63, 41.88).with_population(2_746_388));
//! gaz.insert(Place::new("Evanston", -87.69, 42.05).with_population(78_110));
//! gaz.insert(Place::new("St. Louis", -90.20, 38.63).with_population(301_578));
//!
//! // Neighbors within 25 miles of the Chicago loop.
//! let near = gaz.within_miles(Point::new(-87.63, 41.88), 25.0);
//! assert_eq!(near.len(), 2);
//!
//! // The closest indexed place to Springfield, Illinois.
//! let closest = gaz.nearest(Point::new(-89.65, 39.80)).unwrap();
//! assert_eq!(closest.name, "St. Louis");
//! ```
//!
//! This crate is `no_std` and uses `alloc`; enable the `libm` feature
//! instead of the default `std` for no_std builds.

#![no_std]

extern crate alloc;

pub mod gazetteer;
pub mod types;
pub mod units;

pub use gazetteer::Gazetteer;
pub use types::{CONUS, Place, WORLD};
