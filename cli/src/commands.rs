//! Subcommand bodies. Each takes parsed arguments and returns the JSON
//! document to print, so they run without a terminal.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use bodymap::config::BodyMapConfig;
use bodymap::marker::Marker;
use bodymap::overview::OverviewProjector;
use bodymap::proximity;
use bodymap::viewport::{self, Point, SurfaceMetrics, ViewportState};
use bodymap::zones::{
    BodyView, FineClassifier, Granularity, coarse_classifier, fine_classifier, is_valid_coordinate,
};
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(#[from] bodymap::config::ConfigError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Zone of one diagram point at both granularities.
pub fn classify(config: &BodyMapConfig, point: Point, view: BodyView, granularity: Option<Granularity>) -> Value {
    let granularity = granularity.unwrap_or(config.granularity);
    let area = coarse_classifier().classify_code(point, view);
    let label = FineClassifier::with_center_band(config.center_band).label(point, view);
    let zone = match granularity {
        Granularity::Coarse => area.as_str(),
        Granularity::Fine => label,
    };
    json!({
        "x": point.x,
        "y": point.y,
        "view": view,
        "granularity": granularity,
        "zone": zone,
        "area": area,
        "label": label,
        "inDiagram": is_valid_coordinate(point.x, point.y),
    })
}

/// Region table of `view` in lookup order.
///
/// # Errors
///
/// Fails only if a region cannot be serialized.
pub fn regions(view: BodyView, granularity: Granularity) -> Result<Value, CliError> {
    let value = match granularity {
        Granularity::Coarse => serde_json::to_value(coarse_classifier().table().regions(view))?,
        Granularity::Fine => serde_json::to_value(fine_classifier().table().regions(view))?,
    };
    Ok(value)
}

/// Viewport projection for a surface: visible diagram region, overview frame
/// and, when given, the diagram point under `screen`.
///
/// # Errors
///
/// Returns [`CliError::InvalidArgument`] when the surface or zoom cannot be
/// inverted.
pub fn project(
    config: &BodyMapConfig,
    state: ViewportState,
    metrics: SurfaceMetrics,
    screen: Option<Point>,
) -> Result<Value, CliError> {
    let visible = viewport::visible_region(&state, Some(metrics))
        .ok_or_else(|| CliError::InvalidArgument("surface size and zoom must be positive".to_owned()))?;
    let projector = OverviewProjector::for_width(config.overview_width);
    let intrinsic = screen.and_then(|at| viewport::to_intrinsic(at, &state, Some(metrics)));
    Ok(json!({
        "viewport": state,
        "surface": metrics,
        "visible": visible,
        "overview": {
            "width": projector.width,
            "height": projector.height,
            "frame": projector.project_viewport(&state, Some(metrics)),
        },
        "intrinsic": intrinsic,
    }))
}

/// Markers within `radius` of `point`, nearest first.
pub fn near(config: &BodyMapConfig, markers: &[Marker], point: Point, view: Option<BodyView>, radius: Option<f64>) -> Value {
    let radius = radius.unwrap_or(config.near_radius);
    let candidates = markers.iter().filter(|m| view.is_none_or(|v| m.view == v));
    let hits: Vec<Value> = proximity::find_near(point, candidates, radius)
        .into_iter()
        .map(|hit| json!({ "id": hit.marker.id, "distance": hit.distance, "view": hit.marker.view }))
        .collect();
    tracing::debug!(count = hits.len(), radius, "proximity query");
    json!({ "radius": radius, "markers": hits })
}
