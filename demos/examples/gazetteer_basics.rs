// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds a small gazetteer, then runs name, radius, and nearest queries.

use canopy_geo::{CONUS, Gazetteer, Place};
use kurbo::Point;

fn main() {
    let mut gaz = Gazetteer::new(CONUS);
    gaz.insert(Place::new("Chicago", -87.63, 41.88).with_population(2_746_388));
    gaz.insert(Place::new("Evanston", -87.69, 42.05).with_population(78_110));
    gaz.insert(Place::new("Milwaukee", -87.91, 43.04).with_population(577_222));
    gaz.insert(Place::new("St. Louis", -90.20, 38.63).with_population(301_578));
    gaz.insert(Place::new("Springfield", -89.65, 39.80).with_population(114_394));
    gaz.insert(Place::new("Springfield", -93.29, 37.21).with_population(169_176));

    // Rejected: outside the contiguous U.S. viewport.
    let accepted = gaz.insert(Place::new("Honolulu", -157.86, 21.31));
    println!("Honolulu accepted: {accepted}");

    println!("springfields:");
    for p in gaz.find_by_name("springfield") {
        println!("  {} at ({:.2}, {:.2})", p.name, p.longitude(), p.latitude());
    }
    let top = gaz.most_populous("springfield").unwrap();
    println!("most populous Springfield: {:?} people", top.population);

    let loop_chicago = Point::new(-87.63, 41.88);
    println!("within 90 miles of the Chicago loop:");
    for p in gaz.within_miles(loop_chicago, 90.0) {
        println!("  {}", p.name);
    }

    let near = gaz.nearest(Point::new(-91.0, 39.0)).unwrap();
    println!("nearest to (-91, 39): {}", near.name);

    println!("gazetteer: {gaz:?}");
}
