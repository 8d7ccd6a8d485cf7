//! Viewport state and the screen ↔ diagram coordinate transform.
//!
//! The diagram is drawn inside a surface element whose on-screen box is
//! described by [`SurfaceMetrics`]. Inside that box the content layer carries
//! `translate(pan) scale(zoom)` with a top-left origin, and the diagram image
//! fills the untransformed box. Mapping a pointer back to diagram space
//! therefore undoes the box offset, then the pan, then the zoom, and finally
//! rescales CSS pixels to intrinsic units per axis. Because the last step
//! uses the measured box, the mapping holds for any surface size or device
//! pixel ratio.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DIAGRAM_HEIGHT, DIAGRAM_WIDTH};

/// A point in screen, surface, or diagram space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Round both coordinates to the nearest whole unit.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self { x: self.x.round(), y: self.y.round() }
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Pan/zoom state of one mounted body map.
///
/// `pan_x` / `pan_y` are CSS pixels relative to the surface's top-left corner.
/// `zoom` is a scale factor (1.0 = diagram fills the surface).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self { zoom: 1.0, pan_x: 0.0, pan_y: 0.0 }
    }
}

impl ViewportState {
    /// Surface-relative point (CSS pixels) to untransformed content pixels.
    #[must_use]
    pub fn surface_to_content(&self, surface: Point) -> Point {
        Point {
            x: (surface.x - self.pan_x) / self.zoom,
            y: (surface.y - self.pan_y) / self.zoom,
        }
    }

    /// Untransformed content pixels to a surface-relative point (CSS pixels).
    #[must_use]
    pub fn content_to_surface(&self, content: Point) -> Point {
        Point {
            x: content.x * self.zoom + self.pan_x,
            y: content.y * self.zoom + self.pan_y,
        }
    }

    fn has_usable_zoom(&self) -> bool {
        self.zoom.is_finite() && self.zoom > 0.0
    }
}

/// On-screen bounding box of the untransformed render surface, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMetrics {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceMetrics {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// A surface that has not been laid out yet reports a zero or NaN size.
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Screen point to a point relative to the surface's top-left corner.
    #[must_use]
    pub fn screen_to_surface(&self, screen: Point) -> Point {
        Point { x: screen.x - self.left, y: screen.y - self.top }
    }

    /// Surface-relative point back to screen coordinates.
    #[must_use]
    pub fn surface_to_screen(&self, surface: Point) -> Point {
        Point { x: surface.x + self.left, y: surface.y + self.top }
    }

    /// Diagram units per CSS pixel along x.
    #[must_use]
    pub fn units_per_px_x(&self) -> f64 {
        DIAGRAM_WIDTH / self.width
    }

    /// Diagram units per CSS pixel along y.
    #[must_use]
    pub fn units_per_px_y(&self) -> f64 {
        DIAGRAM_HEIGHT / self.height
    }

    /// Untransformed content pixels to diagram units.
    #[must_use]
    pub fn content_to_diagram(&self, content: Point) -> Point {
        Point { x: content.x * self.units_per_px_x(), y: content.y * self.units_per_px_y() }
    }

    /// Diagram units to untransformed content pixels.
    #[must_use]
    pub fn diagram_to_content(&self, diagram: Point) -> Point {
        Point { x: diagram.x / self.units_per_px_x(), y: diagram.y / self.units_per_px_y() }
    }
}

/// `metrics` when both it and the zoom can be inverted.
pub(crate) fn usable(state: &ViewportState, metrics: Option<SurfaceMetrics>) -> Option<SurfaceMetrics> {
    metrics.filter(|m| m.is_measurable() && state.has_usable_zoom())
}

/// Map a screen point into diagram space, rounded to whole units.
///
/// Returns `None` while the surface is not measurable; callers skip the event.
#[must_use]
pub fn to_intrinsic(screen: Point, state: &ViewportState, metrics: Option<SurfaceMetrics>) -> Option<Point> {
    to_intrinsic_exact(screen, state, metrics).map(Point::rounded)
}

/// [`to_intrinsic`] without the final rounding.
#[must_use]
pub fn to_intrinsic_exact(screen: Point, state: &ViewportState, metrics: Option<SurfaceMetrics>) -> Option<Point> {
    let metrics = usable(state, metrics)?;
    let surface = metrics.screen_to_surface(screen);
    let content = state.surface_to_content(surface);
    Some(metrics.content_to_diagram(content))
}

/// Map a diagram point to the screen under the current viewport.
#[must_use]
pub fn to_screen(diagram: Point, state: &ViewportState, metrics: Option<SurfaceMetrics>) -> Option<Point> {
    let metrics = usable(state, metrics)?;
    let content = metrics.diagram_to_content(diagram);
    let surface = state.content_to_surface(content);
    Some(metrics.surface_to_screen(surface))
}

/// Diagram-space rectangle currently visible through the surface.
#[must_use]
pub fn visible_region(state: &ViewportState, metrics: Option<SurfaceMetrics>) -> Option<Rect> {
    let metrics = usable(state, metrics)?;
    let top_left = metrics.content_to_diagram(state.surface_to_content(Point::new(0.0, 0.0)));
    let bottom_right = metrics.content_to_diagram(state.surface_to_content(Point::new(metrics.width, metrics.height)));
    Some(Rect {
        x: top_left.x,
        y: top_left.y,
        width: bottom_right.x - top_left.x,
        height: bottom_right.y - top_left.y,
    })
}
