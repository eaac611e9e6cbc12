use std::fmt;
use uuid::Uuid;

use super::StationId;

/// Default stroke colours assigned to lines created without an explicit colour,
/// cycled by creation index.
pub const LINE_COLOURS: &[&str] = &[
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FECA57"
];

/// Opaque identifier for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(Uuid);

impl LineId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LineId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transit line: an ordered sequence of station references drawn as one
/// continuous stroke.
///
/// The sequence holds ids rather than stations, so a line may reference a
/// station the map does not (or no longer) contain. Rendering skips such
/// entries instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    id: LineId,
    pub name: String,
    pub colour: String,
    pub stations: Vec<StationId>,
}

impl Line {
    /// Create a line with a fresh identity. The colour is always concrete;
    /// callers that want a default pick one via [`default_colour`].
    #[must_use]
    pub fn new(name: String, colour: String, stations: Vec<StationId>) -> Self {
        Self {
            id: LineId::new(),
            name,
            colour,
            stations,
        }
    }

    #[must_use]
    pub fn id(&self) -> LineId {
        self.id
    }
}

/// Pick the default colour for the line at the given creation index.
#[must_use]
pub fn default_colour(index: usize) -> String {
    LINE_COLOURS[index % LINE_COLOURS.len()].to_string()
}
