use crate::models::{Station, TransitMap};
use serde::Deserialize;
use std::collections::HashMap;

/// Station entry in a network seed file.
#[derive(Debug, Deserialize)]
struct SeedStation {
    name: String,
    x: f64,
    y: f64,
}

/// Line entry in a network seed file. Stations are referenced by name;
/// a missing colour falls back to the palette.
#[derive(Debug, Deserialize)]
struct SeedLine {
    name: String,
    #[serde(default)]
    colour: Option<String>,
    stations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SeedNetwork {
    stations: Vec<SeedStation>,
    lines: Vec<SeedLine>,
}

/// Parse the bundled demo network.
#[must_use]
pub fn demo_network() -> TransitMap {
    let json = include_str!("../demo-data/network.json");
    parse_network(json)
}

/// Parse a JSON network seed into a map.
///
/// Returns an empty map when the JSON does not parse. Line entries
/// resolve stations by name; names with no matching station entry are
/// dropped from the line.
#[must_use]
pub fn parse_network(json: &str) -> TransitMap {
    let Ok(seed) = serde_json::from_str::<SeedNetwork>(json) else {
        return TransitMap::new();
    };

    let mut map = TransitMap::new();
    let mut ids_by_name = HashMap::new();

    for station in seed.stations {
        let id = map.add_station(Station::new(station.x, station.y, station.name.clone()));
        ids_by_name.insert(station.name, id);
    }

    for line in seed.lines {
        let stations = line
            .stations
            .iter()
            .filter_map(|name| ids_by_name.get(name).copied())
            .collect();
        map.add_line(line.name, line.colour, stations);
    }

    map
}
