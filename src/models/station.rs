use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a station.
///
/// Generated once when the station is created and never derived from its
/// coordinates, so two stations at the same position stay distinct and a
/// station keeps its identity when it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationId(Uuid);

impl StationId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named point on the map, positioned in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    id: StationId,
    pub x: f64,
    pub y: f64,
    pub name: String,
}

impl Station {
    /// Create a station with a fresh identity at the given world position.
    #[must_use]
    pub fn new(x: f64, y: f64, name: String) -> Self {
        Self {
            id: StationId::new(),
            x,
            y,
            name,
        }
    }

    #[must_use]
    pub fn id(&self) -> StationId {
        self.id
    }
}
