/// Fill colour for the map background, painted over the whole surface each pass
pub const BACKGROUND_COLOUR: &str = "#cef0d8";

/// Fill colour of the inner station disc
pub const STATION_COLOUR: &str = "white";

/// Fill colour of the ring painted behind each station disc
pub const STATION_BORDER_COLOUR: &str = "#2b2b2b";

/// Station disc radius in world units at zoom 1.0
pub const STATION_RADIUS: f64 = 6.0;

/// Width of the station border ring in world units at zoom 1.0
pub const STATION_BORDER_WIDTH: f64 = 2.0;
