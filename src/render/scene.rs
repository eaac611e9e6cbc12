use std::collections::HashSet;

use crate::constants::BACKGROUND_COLOUR;
use crate::models::{LineId, StationId, TransitMap};
use crate::viewport::Viewport;

/// One line rendered as a single polyline stroke, in surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStroke {
    pub colour: String,
    pub width: f64,
    pub points: Vec<(f64, f64)>,
}

/// One station rendered as two concentric filled discs, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationDisc {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub border_radius: f64,
}

/// A line entry pointing at a station the map does not contain.
#[derive(Debug, Clone, PartialEq)]
pub struct DanglingRef {
    pub line: LineId,
    pub line_name: String,
    pub station: StationId,
}

/// Everything one render pass paints, fully projected into surface pixels.
///
/// Strokes always paint before stations, so lines sit beneath the discs no
/// matter what order the map was mutated in. Within each list the order is
/// the map's insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: &'static str,
    pub strokes: Vec<LineStroke>,
    pub stations: Vec<StationDisc>,
    /// Dangling references first seen this pass, in encounter order.
    pub warnings: Vec<DanglingRef>,
}

/// Project the map through the viewport into a scene.
///
/// Line entries whose station is missing are skipped without splitting the
/// stroke; the surviving stops still join into one continuous polyline.
/// Each skipped `(line, station)` pair is recorded in `warned` and reported
/// once, the first time it is seen.
pub fn build(
    map: &TransitMap,
    viewport: &Viewport,
    warned: &mut HashSet<(LineId, StationId)>,
) -> Scene {
    let stroke_width = viewport.line_stroke_width();
    let radius = viewport.station_radius();
    let border_radius = viewport.station_border_radius();

    let mut strokes = Vec::with_capacity(map.line_count());
    let mut warnings = Vec::new();

    for line in map.lines() {
        let mut points = Vec::with_capacity(line.stations.len());
        for &station_id in &line.stations {
            if let Some(station) = map.station(station_id) {
                points.push(viewport.world_to_screen(station.x, station.y));
            } else if warned.insert((line.id(), station_id)) {
                warnings.push(DanglingRef {
                    line: line.id(),
                    line_name: line.name.clone(),
                    station: station_id,
                });
            }
        }

        // One point draws nothing; don't emit degenerate strokes
        if points.len() >= 2 {
            strokes.push(LineStroke {
                colour: line.colour.clone(),
                width: stroke_width,
                points,
            });
        }
    }

    let stations = map
        .stations()
        .map(|station| {
            let (x, y) = viewport.world_to_screen(station.x, station.y);
            StationDisc {
                x,
                y,
                radius,
                border_radius,
            }
        })
        .collect();

    Scene {
        background: BACKGROUND_COLOUR,
        strokes,
        stations,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{STATION_BORDER_WIDTH, STATION_RADIUS};
    use crate::models::Station;

    fn build_once(map: &TransitMap, viewport: &Viewport) -> Scene {
        let mut warned = HashSet::new();
        build(map, viewport, &mut warned)
    }

    #[test]
    fn test_scene_carries_background_colour() {
        let scene = build_once(&TransitMap::new(), &Viewport::new(800.0, 600.0));

        assert_eq!(scene.background, BACKGROUND_COLOUR);
        assert!(scene.strokes.is_empty());
        assert!(scene.stations.is_empty());
    }

    #[test]
    fn test_stations_project_in_insertion_order() {
        let mut map = TransitMap::new();
        map.add_station(Station::new(0.0, 0.0, "A".to_string()));
        map.add_station(Station::new(100.0, 0.0, "B".to_string()));

        let scene = build_once(&map, &Viewport::new(800.0, 600.0));

        assert_eq!(scene.stations.len(), 2);
        assert_eq!((scene.stations[0].x, scene.stations[0].y), (400.0, 300.0));
        assert_eq!((scene.stations[1].x, scene.stations[1].y), (500.0, 300.0));
    }

    #[test]
    fn test_strokes_follow_line_insertion_order() {
        let mut map = TransitMap::new();
        let a = map.add_station(Station::new(0.0, 0.0, "A".to_string()));
        let b = map.add_station(Station::new(100.0, 0.0, "B".to_string()));
        map.add_line("First".to_string(), Some("#111111".to_string()), vec![a, b]);
        map.add_line("Second".to_string(), Some("#222222".to_string()), vec![b, a]);

        let scene = build_once(&map, &Viewport::new(800.0, 600.0));

        let colours: Vec<&str> = scene.strokes.iter().map(|s| s.colour.as_str()).collect();
        assert_eq!(colours, ["#111111", "#222222"]);
    }

    #[test]
    fn test_empty_and_single_station_lines_draw_nothing() {
        let mut map = TransitMap::new();
        let a = map.add_station(Station::new(0.0, 0.0, "A".to_string()));
        map.add_line("Empty".to_string(), None, Vec::new());
        map.add_line("Lonely".to_string(), None, vec![a]);

        let scene = build_once(&map, &Viewport::new(800.0, 600.0));

        assert!(scene.strokes.is_empty());
        assert!(scene.warnings.is_empty());
    }

    #[test]
    fn test_dangling_reference_is_skipped_not_split() {
        let mut map = TransitMap::new();
        let a = map.add_station(Station::new(-100.0, 0.0, "A".to_string()));
        let ghost = StationId::new();
        let b = map.add_station(Station::new(100.0, 0.0, "B".to_string()));
        map.add_line("1".to_string(), None, vec![a, ghost, b]);

        let scene = build_once(&map, &Viewport::new(800.0, 600.0));

        // Still one continuous stroke from A to B
        assert_eq!(scene.strokes.len(), 1);
        assert_eq!(scene.strokes[0].points, vec![(300.0, 300.0), (500.0, 300.0)]);
        assert_eq!(scene.warnings.len(), 1);
        assert_eq!(scene.warnings[0].station, ghost);
        assert_eq!(scene.warnings[0].line_name, "1");
    }

    #[test]
    fn test_line_of_only_dangling_refs_warns_but_draws_nothing() {
        let mut map = TransitMap::new();
        let ghost_a = StationId::new();
        let ghost_b = StationId::new();
        map.add_line("Phantom".to_string(), None, vec![ghost_a, ghost_b]);

        let scene = build_once(&map, &Viewport::new(800.0, 600.0));

        assert!(scene.strokes.is_empty());
        assert_eq!(scene.warnings.len(), 2);
    }

    #[test]
    fn test_repeat_passes_do_not_rewarn() {
        let mut map = TransitMap::new();
        let a = map.add_station(Station::new(0.0, 0.0, "A".to_string()));
        let ghost = StationId::new();
        map.add_line("1".to_string(), None, vec![a, ghost]);

        let viewport = Viewport::new(800.0, 600.0);
        let mut warned = HashSet::new();

        let first = build(&map, &viewport, &mut warned);
        assert_eq!(first.warnings.len(), 1);

        let second = build(&map, &viewport, &mut warned);
        assert!(second.warnings.is_empty());
    }

    #[test]
    fn test_new_dangling_pairs_rearm_warnings() {
        let mut map = TransitMap::new();
        let a = map.add_station(Station::new(0.0, 0.0, "A".to_string()));
        let ghost = StationId::new();
        map.add_line("1".to_string(), None, vec![a, ghost]);

        let viewport = Viewport::new(800.0, 600.0);
        let mut warned = HashSet::new();
        assert_eq!(build(&map, &viewport, &mut warned).warnings.len(), 1);

        // A line added after the first pass still reports its own ghost
        let late_ghost = StationId::new();
        map.add_line("2".to_string(), None, vec![a, late_ghost]);

        let scene = build(&map, &viewport, &mut warned);
        assert_eq!(scene.warnings.len(), 1);
        assert_eq!(scene.warnings[0].station, late_ghost);
        assert_eq!(scene.warnings[0].line_name, "2");
    }

    #[test]
    fn test_line_added_before_its_stations_strokes_once_they_exist() {
        let mut map = TransitMap::new();
        let a = Station::new(-100.0, 0.0, "A".to_string());
        let b = Station::new(100.0, 0.0, "B".to_string());
        map.add_line("1".to_string(), None, vec![a.id(), b.id()]);

        let viewport = Viewport::new(800.0, 600.0);
        let mut warned = HashSet::new();

        // Both stops dangle until the stations land on the map
        let before = build(&map, &viewport, &mut warned);
        assert!(before.strokes.is_empty());
        assert!(before.stations.is_empty());
        assert_eq!(before.warnings.len(), 2);

        map.add_station(a);
        map.add_station(b);

        let after = build(&map, &viewport, &mut warned);
        assert_eq!(after.strokes.len(), 1);
        assert_eq!(after.strokes[0].points, vec![(300.0, 300.0), (500.0, 300.0)]);
        assert_eq!(after.stations.len(), 2);
        assert!(after.warnings.is_empty());
    }

    #[test]
    fn test_same_ghost_in_two_lines_warns_per_line() {
        let mut map = TransitMap::new();
        let a = map.add_station(Station::new(0.0, 0.0, "A".to_string()));
        let ghost = StationId::new();
        map.add_line("1".to_string(), None, vec![a, ghost]);
        map.add_line("2".to_string(), None, vec![ghost, a]);

        let scene = build_once(&map, &Viewport::new(800.0, 600.0));

        assert_eq!(scene.warnings.len(), 2);
        assert_eq!(scene.warnings[0].line_name, "1");
        assert_eq!(scene.warnings[1].line_name, "2");
    }

    #[test]
    fn test_repeated_ghost_within_a_line_warns_once() {
        let mut map = TransitMap::new();
        let a = map.add_station(Station::new(0.0, 0.0, "A".to_string()));
        let ghost = StationId::new();
        map.add_line("1".to_string(), None, vec![ghost, a, ghost]);

        let scene = build_once(&map, &Viewport::new(800.0, 600.0));

        assert_eq!(scene.warnings.len(), 1);
    }

    #[test]
    fn test_sizes_scale_with_zoom() {
        let mut map = TransitMap::new();
        let a = map.add_station(Station::new(0.0, 0.0, "A".to_string()));
        let b = map.add_station(Station::new(10.0, 0.0, "B".to_string()));
        map.add_line("1".to_string(), None, vec![a, b]);

        let mut viewport = Viewport::new(800.0, 600.0);
        viewport.step_zoom(1.0); // zoom 0.9

        let scene = build_once(&map, &viewport);

        assert!((scene.strokes[0].width - STATION_RADIUS * 0.9).abs() < 1e-9);
        assert!((scene.stations[0].radius - STATION_RADIUS * 0.9).abs() < 1e-9);
        assert!(
            (scene.stations[0].border_radius
                - (STATION_RADIUS + STATION_BORDER_WIDTH * 2.0) * 0.9)
                .abs()
                < 1e-9
        );
    }
}
