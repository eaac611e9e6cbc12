mod line;
mod station;
mod transit_map;

pub use line::{Line, LineId, LINE_COLOURS};
pub use station::{Station, StationId};
pub use transit_map::TransitMap;
