use indexmap::IndexMap;

use super::line::{self, Line, LineId};
use super::station::{Station, StationId};

/// The complete network being displayed: stations keyed by id plus the lines
/// that connect them.
///
/// Both collections preserve insertion order, which is also draw order. Lines
/// are free to reference station ids the map does not contain; lookups answer
/// `None` and rendering skips the entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitMap {
    stations: IndexMap<StationId, Station>,
    lines: Vec<Line>,
}

impl TransitMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station to the map, returning its id.
    ///
    /// Ids come from the station itself, so re-adding a clone replaces the
    /// earlier entry in place.
    pub fn add_station(&mut self, station: Station) -> StationId {
        let id = station.id();
        self.stations.insert(id, station);
        id
    }

    /// Add a line to the map, returning its id.
    ///
    /// When no colour is given the line gets the next palette colour, keyed by
    /// how many lines the map already holds.
    pub fn add_line(
        &mut self,
        name: String,
        colour: Option<String>,
        stations: Vec<StationId>,
    ) -> LineId {
        let colour = colour.unwrap_or_else(|| line::default_colour(self.lines.len()));
        let line = Line::new(name, colour, stations);
        let id = line.id();
        self.lines.push(line);
        id
    }

    /// Append a station reference to the end of a line's sequence.
    ///
    /// The station does not have to exist in the map. Returns false when the
    /// line id is unknown.
    pub fn add_station_to_line(&mut self, line: LineId, station: StationId) -> bool {
        let Some(line) = self.lines.iter_mut().find(|l| l.id() == line) else {
            return false;
        };
        line.stations.push(station);
        true
    }

    /// Move a station to a new world position, keeping its identity.
    ///
    /// Returns false when the station id is unknown.
    pub fn set_station_position(&mut self, id: StationId, x: f64, y: f64) -> bool {
        let Some(station) = self.stations.get_mut(&id) else {
            return false;
        };
        station.x = x;
        station.y = y;
        true
    }

    #[must_use]
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    #[must_use]
    pub fn contains_station(&self, id: StationId) -> bool {
        self.stations.contains_key(&id)
    }

    #[must_use]
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.iter().find(|l| l.id() == id)
    }

    /// Stations in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
