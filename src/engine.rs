use std::collections::HashSet;

use crate::models::{LineId, StationId, TransitMap};
use crate::render::scene::{self, Scene};
use crate::viewport::Viewport;

/// Pointer and surface events in surface-local pixel coordinates, already
/// stripped of any host specifics. Browser mouse, touch and wheel events all
/// reduce to these before they reach the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    Wheel { delta_y: f64 },
    Resize { width: f64, height: f64 },
}

/// Interaction state and render bookkeeping for one map view.
///
/// The engine owns the viewport and a two-state drag machine: idle, or
/// dragging with the last pointer position as the anchor. Each processed
/// event reports whether the surface needs repainting, so hosts can skip
/// passes for events that changed nothing visible.
#[derive(Debug, Clone)]
pub struct MapEngine {
    viewport: Viewport,
    drag_anchor: Option<(f64, f64)>,
    warned: HashSet<(LineId, StationId)>,
}

impl MapEngine {
    /// Create an engine for a surface of the given pixel size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            drag_anchor: None,
            warned: HashSet::new(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Feed one event through the interaction machine. Returns true when the
    /// view changed and the surface should be repainted.
    ///
    /// Pointer moves without a preceding pointer down are ignored, and a
    /// wheel step during a drag zooms without disturbing the drag anchor.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.drag_anchor = Some((x, y));
                false
            }
            InputEvent::PointerMove { x, y } => {
                let Some((anchor_x, anchor_y)) = self.drag_anchor else {
                    return false;
                };
                self.viewport.pan_by_screen(x - anchor_x, y - anchor_y);
                self.drag_anchor = Some((x, y));
                true
            }
            InputEvent::PointerUp => {
                self.drag_anchor = None;
                false
            }
            InputEvent::Wheel { delta_y } => {
                self.viewport.step_zoom(delta_y);
                true
            }
            InputEvent::Resize { width, height } => {
                self.viewport.resize(width, height);
                true
            }
        }
    }

    /// Project the map through the current viewport into a paintable scene.
    ///
    /// Dangling station references surface as warnings the first time each
    /// `(line, station)` pair is seen; repeat passes stay quiet about them.
    pub fn build_scene(&mut self, map: &TransitMap) -> Scene {
        scene::build(map, &self.viewport, &mut self.warned)
    }
}
