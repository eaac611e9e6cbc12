use crate::constants::{STATION_BORDER_WIDTH, STATION_RADIUS};

/// Smallest zoom factor the view can reach.
pub const MIN_ZOOM: f64 = 0.1;
/// Largest zoom factor the view can reach.
pub const MAX_ZOOM: f64 = 10.0;
/// Multiplier applied per wheel step towards the viewer (zoom in).
pub const ZOOM_IN_FACTOR: f64 = 1.1;
/// Multiplier applied per wheel step away from the viewer (zoom out).
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// Mapping between world coordinates and surface pixels.
///
/// A world point projects to the surface as
/// `(world + center + half_extent) * zoom`, where `half_extent` is half the
/// surface size on that axis. With the centre offset at `(0, 0)` and zoom at
/// `1.0`, the world origin therefore lands in the middle of the surface.
///
/// Zoom scales about the surface origin, not the cursor. The centre offset is
/// stored in world units so a drag keeps the same grip on the map at every
/// zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Horizontal centre offset in world units.
    pub center_x: f64,
    /// Vertical centre offset in world units.
    pub center_y: f64,
    /// Surface width in pixels.
    pub width: f64,
    /// Surface height in pixels.
    pub height: f64,
    // Kept private so it can never leave [MIN_ZOOM, MAX_ZOOM]
    zoom: f64,
}

impl Viewport {
    /// Create a viewport over a surface of the given pixel size, centred on
    /// the world origin at zoom 1.0.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            width,
            height,
            zoom: 1.0,
        }
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Project a world position onto the surface.
    #[must_use]
    pub fn world_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x + self.center_x + self.width / 2.0) * self.zoom,
            (y + self.center_y + self.height / 2.0) * self.zoom,
        )
    }

    /// Invert [`Self::world_to_screen`]: find the world position under a
    /// surface pixel.
    #[must_use]
    pub fn screen_to_world(&self, screen_x: f64, screen_y: f64) -> (f64, f64) {
        (
            screen_x / self.zoom - self.center_x - self.width / 2.0,
            screen_y / self.zoom - self.center_y - self.height / 2.0,
        )
    }

    /// Shift the view by a drag measured in surface pixels.
    ///
    /// The delta is divided by the zoom factor so the map point under the
    /// pointer follows it exactly, however far in or out the view is.
    pub fn pan_by_screen(&mut self, delta_x: f64, delta_y: f64) {
        self.center_x += delta_x / self.zoom;
        self.center_y += delta_y / self.zoom;
    }

    /// Apply one wheel step. Scrolling towards the viewer (negative delta)
    /// zooms in, anything else zooms out, and the result is clamped to the
    /// zoom range. The centre offset is untouched.
    pub fn step_zoom(&mut self, delta_y: f64) {
        let factor = if delta_y < 0.0 {
            ZOOM_IN_FACTOR
        } else {
            ZOOM_OUT_FACTOR
        };
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Adopt a new surface size. Centre offset and zoom are preserved; the
    /// world origin shifts with the changed half extent.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Station disc radius in pixels at the current zoom.
    #[must_use]
    pub fn station_radius(&self) -> f64 {
        STATION_RADIUS * self.zoom
    }

    /// Outer radius of the station border ring in pixels at the current zoom.
    #[must_use]
    pub fn station_border_radius(&self) -> f64 {
        (STATION_RADIUS + STATION_BORDER_WIDTH * 2.0) * self.zoom
    }

    /// Line stroke width in pixels at the current zoom.
    #[must_use]
    pub fn line_stroke_width(&self) -> f64 {
        STATION_RADIUS * self.zoom
    }
}
