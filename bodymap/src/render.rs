//! Rendering: diagram asset selection, the content-layer transform, and the
//! marker / overview overlays.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads marker and viewport state and produces pixels; it never mutates
//! application state. The diagram image itself is a DOM `<img>` inside the
//! content layer, positioned by [`content_transform_css`].
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::MARKER_RADIUS;
use crate::marker::{Located, MapMarker, WoundStatus};
use crate::overview::OverviewProjector;
use crate::viewport::{Point, Rect, SurfaceMetrics, ViewportState};
use crate::zones::BodyView;

/// Patient gender; selects the diagram artwork only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Case-insensitive parse of `male` / `female`.
    #[must_use]
    pub fn parse(gender: &str) -> Option<Self> {
        if gender.eq_ignore_ascii_case("male") {
            Some(Self::Male)
        } else if gender.eq_ignore_ascii_case("female") {
            Some(Self::Female)
        } else {
            None
        }
    }
}

/// Pending marker dash pattern, CSS pixels.
const PENDING_DASH_PX: f64 = 3.0;
/// Outline width of a marker, CSS pixels.
const MARKER_OUTLINE_PX: f64 = 2.0;
/// Dot radius on the overview thumbnail, CSS pixels.
const OVERVIEW_DOT_PX: f64 = 2.0;

const PENDING_FILL: &str = "rgba(37, 99, 235, 0.35)";
const PENDING_STROKE: &str = "#2563EB";
const OVERVIEW_FRAME: &str = "#DC2626";

/// How one marker is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub dashed: bool,
}

// =============================================================
// Pure helpers
// =============================================================

/// URL of the diagram artwork for `gender` and `view`.
#[must_use]
pub fn asset_path(gender: Gender, view: BodyView) -> String {
    format!("/assets/bodymap/{}-{}.svg", gender.as_str(), view.as_str().to_ascii_lowercase())
}

/// CSS `transform` for the content layer. Pair with `transform-origin: 0 0`.
#[must_use]
pub fn content_transform_css(state: &ViewportState) -> String {
    format!("translate({}px, {}px) scale({})", state.pan_x, state.pan_y, state.zoom)
}

/// Fill color of a saved marker by healing status.
#[must_use]
pub fn marker_color(status: WoundStatus) -> &'static str {
    match status {
        WoundStatus::Active => "#DC2626",
        WoundStatus::Healing => "#F59E0B",
        WoundStatus::Healed => "#16A34A",
        WoundStatus::Infected => "#7C3AED",
    }
}

/// Paint style for either marker kind. Pending markers are dashed.
#[must_use]
pub fn marker_style(marker: &MapMarker) -> MarkerStyle {
    match marker {
        MapMarker::Pending(_) => MarkerStyle { fill: PENDING_FILL, stroke: PENDING_STROKE, dashed: true },
        MapMarker::Saved(m) => MarkerStyle { fill: marker_color(m.status), stroke: "#FFFFFF", dashed: false },
    }
}

/// Diagram point to surface-relative CSS pixels under `state`.
#[must_use]
pub fn marker_surface_position(diagram: Point, state: &ViewportState, metrics: &SurfaceMetrics) -> Point {
    state.content_to_surface(metrics.diagram_to_content(diagram))
}

/// Marker radius in CSS pixels; markers grow with zoom like the artwork.
#[must_use]
pub fn marker_radius_px(state: &ViewportState, metrics: &SurfaceMetrics) -> f64 {
    MARKER_RADIUS * state.zoom / metrics.units_per_px_x()
}

/// `rect` clipped to the thumbnail; `None` when nothing remains.
#[must_use]
pub fn clip_to_thumbnail(rect: Rect, projector: &OverviewProjector) -> Option<Rect> {
    let x0 = rect.x.max(0.0);
    let y0 = rect.y.max(0.0);
    let x1 = (rect.x + rect.width).min(projector.width);
    let y1 = (rect.y + rect.height).min(projector.height);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(Rect { x: x0, y: y0, width: x1 - x0, height: y1 - y0 })
}

// =============================================================
// Canvas drawing
// =============================================================

/// Size the canvas backing store to `css_width` × `css_height` at `dpr` and
/// return its 2D context.
///
/// # Errors
///
/// Returns `Err` if the canvas cannot provide a 2D context.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn prepare_canvas(
    canvas: &HtmlCanvasElement,
    css_width: f64,
    css_height: f64,
    dpr: f64,
) -> Result<CanvasRenderingContext2d, JsValue> {
    let width = (css_width * dpr).round().max(0.0) as u32;
    let height = (css_height * dpr).round().max(0.0) as u32;
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("canvas context is not 2d"))
}

/// Draw markers on the overlay canvas covering the surface.
///
/// `dpr` is the device pixel ratio of the overlay's backing store.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_markers(
    ctx: &CanvasRenderingContext2d,
    markers: &[MapMarker],
    state: &ViewportState,
    metrics: &SurfaceMetrics,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, metrics.width, metrics.height);
    if !metrics.is_measurable() {
        return Ok(());
    }

    let radius = marker_radius_px(state, metrics);
    for marker in markers {
        let at = marker_surface_position(marker.location(), state, metrics);
        draw_marker(ctx, at, radius, marker_style(marker))?;
    }
    Ok(())
}

fn draw_marker(ctx: &CanvasRenderingContext2d, at: Point, radius: f64, style: MarkerStyle) -> Result<(), JsValue> {
    ctx.save();
    ctx.begin_path();
    ctx.arc(at.x, at.y, radius, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(style.fill);
    ctx.fill();

    if style.dashed {
        let dash = js_sys::Array::of2(&JsValue::from_f64(PENDING_DASH_PX), &JsValue::from_f64(PENDING_DASH_PX));
        ctx.set_line_dash(&dash)?;
    }
    ctx.set_stroke_style_str(style.stroke);
    ctx.set_line_width(MARKER_OUTLINE_PX);
    ctx.stroke();
    ctx.restore();
    Ok(())
}

/// Draw the overview overlay: marker dots plus the viewport frame.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_overview(
    ctx: &CanvasRenderingContext2d,
    projector: &OverviewProjector,
    viewport: Option<Rect>,
    markers: &[MapMarker],
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, projector.width, projector.height);
    if !projector.is_measurable() {
        return Ok(());
    }

    for marker in markers {
        let at = projector.to_thumbnail(marker.location());
        ctx.begin_path();
        ctx.arc(at.x, at.y, OVERVIEW_DOT_PX, 0.0, 2.0 * PI)?;
        ctx.set_fill_style_str(marker_style(marker).fill);
        ctx.fill();
    }

    if let Some(frame) = viewport.and_then(|r| clip_to_thumbnail(r, projector)) {
        ctx.set_stroke_style_str(OVERVIEW_FRAME);
        ctx.set_line_width(1.0);
        ctx.stroke_rect(frame.x, frame.y, frame.width, frame.height);
    }
    Ok(())
}
