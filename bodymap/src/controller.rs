//! Pan/zoom state machine for one mounted body map.
//!
//! Owns the [`ViewportState`] and the interaction [`Mode`]. Every operation
//! is total: zoom clamps silently into the configured bounds, and drag
//! operations outside drag mode are ignored. Mutators report whether the
//! state actually changed so the caller can skip redundant notifications.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use serde::{Deserialize, Serialize};

use crate::config::BodyMapConfig;
use crate::viewport::{Point, ViewportState};

/// What a primary click on the surface does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Clicks classify a zone or select a marker.
    #[default]
    Classify,
    /// Clicks grab the diagram and pan it.
    Drag,
}

impl Mode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classify => "classify",
            Self::Drag => "drag",
        }
    }
}

/// Viewport state plus mode and in-flight drag.
#[derive(Debug, Clone)]
pub struct ViewportController {
    state: ViewportState,
    mode: Mode,
    /// `pointer - pan` captured at drag start; `Some` while dragging.
    drag_offset: Option<Point>,
    /// Zoom bounds and step factors.
    config: BodyMapConfig,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(&BodyMapConfig::default())
    }
}

impl ViewportController {
    #[must_use]
    pub fn new(config: &BodyMapConfig) -> Self {
        let mut controller = Self {
            state: ViewportState::default(),
            mode: Mode::default(),
            drag_offset: None,
            config: *config,
        };
        controller.state.zoom = config.clamp_zoom(1.0);
        controller
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    // --- Zoom ---

    /// Multiply zoom by the step factor. Pan is kept.
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.state.zoom * self.config.zoom_step, None)
    }

    /// Divide zoom by the step factor. Pan is kept.
    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.state.zoom / self.config.zoom_step, None)
    }

    /// Wheel zoom anchored at `cursor` (surface-relative CSS pixels).
    ///
    /// Negative `delta_y` (scroll up) zooms in, positive zooms out, zero is a
    /// no-op. The content point under the cursor stays under the cursor.
    pub fn wheel(&mut self, delta_y: f64, cursor: Point) -> bool {
        let factor = if delta_y < 0.0 {
            self.config.wheel_zoom_in
        } else if delta_y > 0.0 {
            self.config.wheel_zoom_out
        } else {
            return false;
        };
        self.set_zoom(self.state.zoom * factor, Some(cursor))
    }

    fn set_zoom(&mut self, target: f64, anchor: Option<Point>) -> bool {
        let old = self.state.zoom;
        let zoom = self.config.clamp_zoom(target);
        if zoom == old || !zoom.is_finite() {
            return false;
        }
        if let Some(cursor) = anchor {
            let ratio = zoom / old;
            self.state.pan_x = cursor.x - (cursor.x - self.state.pan_x) * ratio;
            self.state.pan_y = cursor.y - (cursor.y - self.state.pan_y) * ratio;
        }
        self.state.zoom = zoom;
        tracing::debug!(zoom, pan_x = self.state.pan_x, pan_y = self.state.pan_y, "viewport zoom changed");
        true
    }

    // --- Mode & drag ---

    /// Flip between classify and drag mode. Leaving drag mode ends any drag.
    pub fn toggle_drag_mode(&mut self) -> Mode {
        self.mode = match self.mode {
            Mode::Classify => Mode::Drag,
            Mode::Drag => {
                self.drag_offset = None;
                Mode::Classify
            }
        };
        tracing::debug!(mode = ?self.mode, "viewport mode changed");
        self.mode
    }

    /// Start a drag at `pointer` (surface-relative). Ignored outside drag mode.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if self.mode != Mode::Drag {
            return false;
        }
        self.drag_offset = Some(Point::new(pointer.x - self.state.pan_x, pointer.y - self.state.pan_y));
        true
    }

    /// Move the diagram so the grabbed point follows `pointer`.
    pub fn drag(&mut self, pointer: Point) -> bool {
        let Some(offset) = self.drag_offset else {
            return false;
        };
        self.state.pan_x = pointer.x - offset.x;
        self.state.pan_y = pointer.y - offset.y;
        true
    }

    /// Finish the drag. Returns whether one was in progress.
    pub fn end_drag(&mut self) -> bool {
        self.drag_offset.take().is_some()
    }

    // --- Absolute ---

    /// Back to zoom 1 with no pan. Mode is kept.
    pub fn reset(&mut self) {
        self.state = ViewportState { zoom: self.config.clamp_zoom(1.0), pan_x: 0.0, pan_y: 0.0 };
        self.drag_offset = None;
    }

    /// Set pan directly; zoom is untouched.
    pub fn set_pan(&mut self, pan_x: f64, pan_y: f64) {
        self.state.pan_x = pan_x;
        self.state.pan_y = pan_y;
    }
}
