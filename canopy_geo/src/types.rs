// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the geographic layer: places and bounds presets.

use alloc::string::String;
use kurbo::{Point, Rect};

/// A named geographic point.
///
/// `position.x` is the longitude and `position.y` the latitude, both in
/// degrees. The name and population ride along as payload; only the position
/// participates in spatial comparisons.
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    /// Display name (not necessarily unique).
    pub name: String,
    /// Longitude/latitude in degrees (`x` = longitude, `y` = latitude).
    pub position: Point,
    /// Resident count, when the data source provides one.
    pub population: Option<u64>,
}

impl Place {
    /// Create a place from a name and longitude/latitude in degrees.
    pub fn new(name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            name: name.into(),
            position: Point::new(longitude, latitude),
            population: None,
        }
    }

    /// Attach a population count.
    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.position.x
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.position.y
    }
}

/// The full longitude/latitude range; the default indexing bounds.
pub const WORLD: Rect = Rect {
    x0: -180.0,
    y0: -90.0,
    x1: 180.0,
    y1: 90.0,
};

/// Viewport covering the contiguous United States.
pub const CONUS: Rect = Rect {
    x0: -125.0,
    y0: 24.396308,
    x1: -66.93457,
    y1: 49.384358,
};
