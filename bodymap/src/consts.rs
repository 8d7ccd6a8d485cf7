//! Shared numeric constants for the body-map crate.

// ── Diagram space ───────────────────────────────────────────────

/// Intrinsic width of the anatomical diagram.
pub const DIAGRAM_WIDTH: f64 = 512.0;

/// Intrinsic height of the anatomical diagram.
pub const DIAGRAM_HEIGHT: f64 = 1024.0;

/// Vertical line splitting the patient's left and right halves.
pub const CENTER_LINE_X: f64 = DIAGRAM_WIDTH / 2.0;

/// Half-width of the band around [`CENTER_LINE_X`] that the descriptive
/// classifier treats as the midline.
pub const CENTER_BAND: f64 = 20.0;

// ── Fallback bands ──────────────────────────────────────────────

/// Points above this line fall back to the head.
pub const HEAD_BAND_END_Y: f64 = 150.0;

/// Points above this line (and below the head) fall back to the torso.
pub const TORSO_BAND_END_Y: f64 = 500.0;

/// Points above this line (and below the torso) fall back to the lower limb.
pub const LIMB_BAND_END_Y: f64 = 800.0;

// ── Viewport ────────────────────────────────────────────────────

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.5;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 5.0;

/// Factor applied by the zoom-in / zoom-out commands.
pub const ZOOM_STEP: f64 = 1.2;

/// Wheel factor when scrolling up (zoom in).
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Wheel factor when scrolling down (zoom out).
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

// ── Markers & overview ──────────────────────────────────────────

/// Default proximity radius for marker hit-testing, in diagram units.
pub const NEAR_RADIUS: f64 = 30.0;

/// Radius used to draw a marker, in diagram units. Clicks inside it hit the marker.
pub const MARKER_RADIUS: f64 = 8.0;

/// How far, in CSS pixels, a press may travel before its release no longer
/// counts as a click.
pub const CLICK_SLOP_PX: f64 = 5.0;

/// Default overview thumbnail width in pixels.
pub const OVERVIEW_WIDTH: f64 = 96.0;
