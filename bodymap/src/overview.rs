//! Overview thumbnail (minimap): projects the main viewport onto a small
//! copy of the diagram and maps thumbnail clicks back to a pan.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DIAGRAM_HEIGHT, DIAGRAM_WIDTH};
use crate::viewport::{Point, Rect, SurfaceMetrics, ViewportState, usable, visible_region};

/// Size of the overview thumbnail in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverviewProjector {
    pub width: f64,
    pub height: f64,
}

impl OverviewProjector {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Thumbnail of `width` pixels at the diagram's 1:2 aspect.
    #[must_use]
    pub fn for_width(width: f64) -> Self {
        Self { width, height: width * DIAGRAM_HEIGHT / DIAGRAM_WIDTH }
    }

    /// Diagram units per thumbnail pixel along x.
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        DIAGRAM_WIDTH / self.width
    }

    /// Diagram units per thumbnail pixel along y.
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        DIAGRAM_HEIGHT / self.height
    }

    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Whether a thumbnail-relative point lies on the thumbnail.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Thumbnail point to diagram units.
    #[must_use]
    pub fn to_diagram(&self, thumb: Point) -> Point {
        Point::new(thumb.x * self.scale_x(), thumb.y * self.scale_y())
    }

    /// Diagram point to thumbnail pixels.
    #[must_use]
    pub fn to_thumbnail(&self, diagram: Point) -> Point {
        Point::new(diagram.x / self.scale_x(), diagram.y / self.scale_y())
    }

    /// The part of the diagram visible through the main surface, in thumbnail
    /// pixels. Not clipped to the thumbnail.
    #[must_use]
    pub fn project_viewport(&self, state: &ViewportState, metrics: Option<SurfaceMetrics>) -> Option<Rect> {
        if !self.is_measurable() {
            return None;
        }
        let region = visible_region(state, metrics)?;
        Some(Rect {
            x: region.x / self.scale_x(),
            y: region.y / self.scale_y(),
            width: region.width / self.scale_x(),
            height: region.height / self.scale_y(),
        })
    }

    /// Pan that centers the main surface on the diagram point under `click`
    /// (thumbnail-relative pixels), keeping the current zoom.
    #[must_use]
    pub fn unproject(&self, click: Point, state: &ViewportState, metrics: Option<SurfaceMetrics>) -> Option<Point> {
        if !self.is_measurable() {
            return None;
        }
        let metrics = usable(state, metrics)?;
        let content = metrics.diagram_to_content(self.to_diagram(click));
        Some(Point::new(
            metrics.width / 2.0 - content.x * state.zoom,
            metrics.height / 2.0 - content.y * state.zoom,
        ))
    }
}
