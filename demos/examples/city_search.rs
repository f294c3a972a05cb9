// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive city search over an embedded U.S. city table.
//!
//! Type a city name to see the most populous match, its neighbors within
//! fifty miles, and the closest other city in the table. Type `q` to quit.

use std::io::{BufRead, Write};

use canopy_geo::{CONUS, Gazetteer, Place, units};

const CITIES: &[(&str, f64, f64, u64)] = &[
    ("New York", -74.006, 40.713, 8_336_817),
    ("Los Angeles", -118.243, 34.052, 3_979_576),
    ("Chicago", -87.630, 41.878, 2_693_976),
    ("Houston", -95.369, 29.760, 2_320_268),
    ("Phoenix", -112.074, 33.448, 1_680_992),
    ("Philadelphia", -75.165, 39.953, 1_584_064),
    ("San Antonio", -98.493, 29.424, 1_547_253),
    ("San Diego", -117.161, 32.716, 1_423_851),
    ("Dallas", -96.797, 32.777, 1_343_573),
    ("Columbus", -82.999, 39.961, 898_553),
    ("Seattle", -122.332, 47.606, 744_955),
    ("Denver", -104.990, 39.739, 716_492),
    ("Boston", -71.059, 42.360, 692_600),
    ("Nashville", -86.781, 36.163, 689_447),
    ("Portland", -122.676, 45.523, 654_741),
    ("Kansas City", -94.579, 39.100, 508_090),
    ("St. Louis", -90.200, 38.630, 301_578),
    ("Springfield", -93.292, 37.209, 169_176),
    ("Springfield", -72.590, 42.101, 155_929),
    ("Springfield", -89.650, 39.800, 114_394),
    ("Portland", -70.257, 43.661, 68_408),
    ("Evanston", -87.690, 42.050, 78_110),
];

fn main() {
    let mut gaz = Gazetteer::new(CONUS);
    for &(name, lon, lat, pop) in CITIES {
        gaz.insert(Place::new(name, lon, lat).with_population(pop));
    }
    println!("{} cities indexed over the contiguous U.S.", gaz.len());

    let stdin = std::io::stdin();
    loop {
        print!("Enter a city name to search (or 'q' to quit): ");
        std::io::stdout().flush().expect("flush stdout");
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).expect("read stdin") == 0 {
            break;
        }
        let query = line.trim();
        if query.eq_ignore_ascii_case("q") {
            break;
        }
        if query.is_empty() {
            continue;
        }

        let matches: Vec<_> = gaz.find_by_name(query).collect();
        if matches.is_empty() {
            println!("{query} not found in the dataset.");
            continue;
        }
        println!("{} match(es):", matches.len());
        for p in &matches {
            println!("  ({:>8.3}, {:>6.3})  pop {:>9}", p.longitude(), p.latitude(),
                p.population.unwrap_or(0));
        }

        let top = gaz.most_populous(query).expect("non-empty matches");
        println!("most populous: {} at ({:.3}, {:.3})", top.name, top.longitude(), top.latitude());

        let neighbors = gaz.within_miles(top.position, 50.0);
        println!("within 50 miles:");
        for p in neighbors.iter().filter(|p| p.position != top.position) {
            let d = units::distance_miles(top.position, p.position);
            println!("  {} ({d:.1} mi)", p.name);
        }

        // The gazetteer's nearest() would return the city itself, so scan the
        // table for the closest distinct position.
        let closest = gaz
            .places()
            .iter()
            .filter(|p| p.position != top.position)
            .min_by(|a, b| {
                let da = units::distance_miles(top.position, a.position);
                let db = units::distance_miles(top.position, b.position);
                da.total_cmp(&db)
            });
        if let Some(p) = closest {
            let d = units::distance_miles(top.position, p.position);
            println!("closest other city: {} ({d:.1} mi)", p.name);
        }
    }
}
