//! Browser-independent widget core.
//!
//! [`BodyMapCore`] owns the markers, the viewport controller and the latest
//! surface measurement, and turns raw input into [`Action`]s for the host.
//! The browser wrapper in [`crate::web`] only measures the DOM, forwards
//! events here and executes the returned actions.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::{Deserialize, Serialize};

use crate::config::BodyMapConfig;
use crate::consts::{CLICK_SLOP_PX, MARKER_RADIUS};
use crate::controller::{Mode, ViewportController};
use crate::keys::{FocusTarget, Key, KeyCommand, Modifiers, dispatch_key};
use crate::marker::{MapMarker, Marker, MarkerId, MarkerStore, TempMarker};
use crate::overview::OverviewProjector;
use crate::proximity;
use crate::render::Gender;
use crate::viewport::{Point, Rect, SurfaceMetrics, ViewportState, to_intrinsic, to_intrinsic_exact};
use crate::zones::{AreaCode, BodyView, FineClassifier, Granularity, coarse_classifier};

/// Cursor shown over the surface in classify mode.
pub const CURSOR_CLASSIFY: &str = "crosshair";
/// Cursor shown over a marker in classify mode.
pub const CURSOR_MARKER: &str = "pointer";
/// Cursor shown in drag mode while idle.
pub const CURSOR_GRAB: &str = "grab";
/// Cursor shown while a drag is in progress.
pub const CURSOR_GRABBING: &str = "grabbing";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A zone was classified. `code` follows the configured granularity;
    /// `area` and `label` are always both resolved.
    ZoneClicked { code: &'static str, area: AreaCode, label: &'static str, x: f64, y: f64 },
    WoundClicked(MarkerId),
    WoundDoubleClicked(MarkerId),
    WoundRightClicked(MarkerId),
    /// The overview moved the main viewport.
    Navigate { pan_x: f64, pan_y: f64 },
    ViewportChanged(ViewportState),
    ModeChanged(Mode),
    /// Start listening for window `mousemove` / `mouseup`.
    AcquireDragListeners,
    /// Stop listening for window `mousemove` / `mouseup`.
    ReleaseDragListeners,
    SetCursor(String),
    RenderNeeded,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` value.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Host-controlled properties of a mounted body map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Props {
    pub gender: Gender,
    pub view: BodyView,
    pub read_only: bool,
}

/// Core widget state: all logic that doesn't depend on the DOM.
pub struct BodyMapCore {
    props: Props,
    config: BodyMapConfig,
    markers: MarkerStore,
    controller: ViewportController,
    fine: FineClassifier,
    overview: OverviewProjector,
    surface: Option<SurfaceMetrics>,
    /// Screen point of a primary press that may become a click.
    press: Option<Point>,
    overview_dragging: bool,
    cursor: &'static str,
}

impl Default for BodyMapCore {
    fn default() -> Self {
        Self::new(Props::default(), BodyMapConfig::default())
    }
}

impl BodyMapCore {
    #[must_use]
    pub fn new(props: Props, config: BodyMapConfig) -> Self {
        Self {
            props,
            controller: ViewportController::new(&config),
            fine: FineClassifier::with_center_band(config.center_band),
            overview: OverviewProjector::for_width(config.overview_width),
            config,
            markers: MarkerStore::new(),
            surface: None,
            press: None,
            overview_dragging: false,
            cursor: CURSOR_CLASSIFY,
        }
    }

    // --- Data inputs ---

    /// Replace the saved markers with a fresh snapshot.
    pub fn load_markers(&mut self, markers: Vec<Marker>) -> Vec<Action> {
        self.markers.load(markers);
        vec![Action::RenderNeeded]
    }

    /// Switch orientation. A pending marker placed on the other view is dropped.
    pub fn set_view(&mut self, view: BodyView) -> Vec<Action> {
        if self.props.view == view {
            return Vec::new();
        }
        self.props.view = view;
        if self.markers.pending().is_some_and(|m| m.view != view) {
            self.markers.discard_pending();
        }
        vec![Action::RenderNeeded]
    }

    pub fn set_gender(&mut self, gender: Gender) -> Vec<Action> {
        if self.props.gender == gender {
            return Vec::new();
        }
        self.props.gender = gender;
        vec![Action::RenderNeeded]
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.props.read_only = read_only;
    }

    /// Record the latest on-screen box of the render surface.
    pub fn set_surface(&mut self, surface: Option<SurfaceMetrics>) {
        self.surface = surface;
    }

    /// The host form saved the pending marker.
    pub fn confirm_pending(&mut self, saved: Marker) -> Vec<Action> {
        self.markers.confirm_pending(saved);
        vec![Action::RenderNeeded]
    }

    /// The host form was cancelled.
    pub fn discard_pending(&mut self) -> Vec<Action> {
        if self.markers.discard_pending().is_some() { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    // --- Viewport commands ---

    pub fn zoom_in(&mut self) -> Vec<Action> {
        let changed = self.controller.zoom_in();
        self.viewport_actions(changed)
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        let changed = self.controller.zoom_out();
        self.viewport_actions(changed)
    }

    pub fn reset_view(&mut self) -> Vec<Action> {
        let before = self.controller.state();
        let was_dragging = self.controller.is_dragging();
        self.controller.reset();
        let mut actions = Vec::new();
        if was_dragging {
            actions.push(Action::ReleaseDragListeners);
            actions.extend(self.cursor_action(CURSOR_GRAB));
        }
        actions.extend(self.viewport_actions(self.controller.state() != before));
        actions
    }

    pub fn toggle_drag_mode(&mut self) -> Vec<Action> {
        let was_dragging = self.controller.is_dragging();
        let mode = self.controller.toggle_drag_mode();
        self.press = None;
        let mut actions = vec![Action::ModeChanged(mode)];
        if was_dragging {
            actions.push(Action::ReleaseDragListeners);
        }
        let cursor = match mode {
            Mode::Classify => CURSOR_CLASSIFY,
            Mode::Drag => CURSOR_GRAB,
        };
        actions.extend(self.cursor_action(cursor));
        actions.push(Action::RenderNeeded);
        actions
    }

    fn viewport_actions(&self, changed: bool) -> Vec<Action> {
        if changed {
            vec![Action::ViewportChanged(self.controller.state()), Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    fn cursor_action(&mut self, cursor: &'static str) -> Option<Action> {
        if self.cursor == cursor {
            return None;
        }
        self.cursor = cursor;
        Some(Action::SetCursor(cursor.to_owned()))
    }

    // --- Surface input ---

    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        match self.controller.mode() {
            Mode::Drag => {
                let Some(surface) = self.surface_point(screen) else {
                    return Vec::new();
                };
                if !self.controller.begin_drag(surface) {
                    return Vec::new();
                }
                let mut actions = vec![Action::AcquireDragListeners];
                actions.extend(self.cursor_action(CURSOR_GRABBING));
                actions
            }
            Mode::Classify => {
                self.press = Some(screen);
                Vec::new()
            }
        }
    }

    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        if self.controller.is_dragging() {
            let Some(surface) = self.surface_point(screen) else {
                return Vec::new();
            };
            let changed = self.controller.drag(surface);
            return self.viewport_actions(changed);
        }
        if self.controller.mode() != Mode::Classify {
            return Vec::new();
        }
        let cursor = if self.marker_at(screen).is_some() { CURSOR_MARKER } else { CURSOR_CLASSIFY };
        self.cursor_action(cursor).into_iter().collect()
    }

    pub fn on_pointer_up(&mut self, screen: Point, button: Button) -> Vec<Action> {
        if self.controller.end_drag() {
            let mut actions = vec![Action::ReleaseDragListeners];
            actions.extend(self.cursor_action(CURSOR_GRAB));
            return actions;
        }
        let Some(pressed) = self.press.take() else {
            return Vec::new();
        };
        if button != Button::Primary || pressed.distance_to(screen) > CLICK_SLOP_PX {
            return Vec::new();
        }
        self.click(screen)
    }

    /// The pointer left the surface; a press in progress no longer clicks.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.press = None;
        Vec::new()
    }

    /// Primary click in classify mode: select a marker or classify a zone.
    fn click(&mut self, screen: Point) -> Vec<Action> {
        if self.controller.mode() != Mode::Classify {
            return Vec::new();
        }
        if let Some(id) = self.marker_at(screen) {
            return vec![Action::WoundClicked(id)];
        }
        if self.props.read_only {
            return Vec::new();
        }
        let Some(point) = to_intrinsic(screen, &self.controller.state(), self.surface) else {
            tracing::debug!("surface not measurable; click skipped");
            return Vec::new();
        };
        let view = self.props.view;
        let area = coarse_classifier().classify_code(point, view);
        let label = self.fine.label(point, view);
        let code = match self.config.granularity {
            Granularity::Coarse => area.as_str(),
            Granularity::Fine => label,
        };
        tracing::debug!(x = point.x, y = point.y, view = view.as_str(), code, "zone clicked");
        self.markers.set_pending(TempMarker::new(point, area, label, view));
        vec![Action::ZoneClicked { code, area, label, x: point.x, y: point.y }, Action::RenderNeeded]
    }

    pub fn on_double_click(&mut self, screen: Point) -> Vec<Action> {
        self.marker_at(screen).map(Action::WoundDoubleClicked).into_iter().collect()
    }

    /// Right click. A non-empty result means the host should suppress the
    /// browser context menu.
    pub fn on_context_menu(&mut self, screen: Point) -> Vec<Action> {
        self.marker_at(screen).map(Action::WoundRightClicked).into_iter().collect()
    }

    /// Wheel zoom around the pointer. `delta_y < 0` zooms in.
    pub fn on_wheel(&mut self, screen: Point, delta_y: f64) -> Vec<Action> {
        let Some(cursor) = self.surface_point(screen) else {
            return Vec::new();
        };
        let changed = self.controller.wheel(delta_y, cursor);
        self.viewport_actions(changed)
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers, focus: FocusTarget) -> Vec<Action> {
        match dispatch_key(key, modifiers, focus) {
            Some(KeyCommand::ToggleDragMode) => self.toggle_drag_mode(),
            Some(KeyCommand::ZoomIn) => self.zoom_in(),
            Some(KeyCommand::ZoomOut) => self.zoom_out(),
            Some(KeyCommand::Reset) => self.reset_view(),
            None => Vec::new(),
        }
    }

    // --- Overview input ---

    /// Press on the thumbnail (thumbnail-relative pixels).
    pub fn on_overview_pointer_down(&mut self, thumb: Point) -> Vec<Action> {
        if !self.overview.contains(thumb) {
            return Vec::new();
        }
        self.overview_dragging = true;
        self.navigate_to(thumb)
    }

    pub fn on_overview_pointer_move(&mut self, thumb: Point) -> Vec<Action> {
        if !self.overview_dragging {
            return Vec::new();
        }
        let clamped = Point::new(thumb.x.clamp(0.0, self.overview.width), thumb.y.clamp(0.0, self.overview.height));
        self.navigate_to(clamped)
    }

    pub fn on_overview_pointer_up(&mut self) -> Vec<Action> {
        self.overview_dragging = false;
        Vec::new()
    }

    fn navigate_to(&mut self, thumb: Point) -> Vec<Action> {
        let state = self.controller.state();
        let Some(pan) = self.overview.unproject(thumb, &state, self.surface) else {
            return Vec::new();
        };
        self.controller.set_pan(pan.x, pan.y);
        vec![
            Action::Navigate { pan_x: pan.x, pan_y: pan.y },
            Action::ViewportChanged(self.controller.state()),
            Action::RenderNeeded,
        ]
    }

    // --- Helpers ---

    fn surface_point(&self, screen: Point) -> Option<Point> {
        self.surface.filter(SurfaceMetrics::is_measurable).map(|m| m.screen_to_surface(screen))
    }

    /// Saved marker of the current view drawn under `screen`. Where drawn
    /// markers overlap, the nearest one within the proximity radius wins.
    fn marker_at(&self, screen: Point) -> Option<MarkerId> {
        let point = to_intrinsic_exact(screen, &self.controller.state(), self.surface)?;
        let candidates = self.markers.saved_for(self.props.view);
        proximity::find_near(point, candidates, self.config.near_radius)
            .into_iter()
            .find(|hit| hit.distance <= MARKER_RADIUS)
            .map(|hit| hit.marker.id)
    }

    // --- Queries ---

    #[must_use]
    pub fn props(&self) -> Props {
        self.props
    }

    #[must_use]
    pub fn config(&self) -> &BodyMapConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.controller.state()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    #[must_use]
    pub fn cursor(&self) -> &'static str {
        self.cursor
    }

    #[must_use]
    pub fn surface(&self) -> Option<SurfaceMetrics> {
        self.surface
    }

    #[must_use]
    pub fn markers(&self) -> &MarkerStore {
        &self.markers
    }

    #[must_use]
    pub fn pending(&self) -> Option<&TempMarker> {
        self.markers.pending()
    }

    /// Markers to draw on the current view, pending last.
    #[must_use]
    pub fn map_markers(&self) -> Vec<MapMarker> {
        self.markers.map_markers(self.props.view)
    }

    #[must_use]
    pub fn overview(&self) -> OverviewProjector {
        self.overview
    }

    /// The main viewport as a rectangle on the thumbnail.
    #[must_use]
    pub fn overview_rect(&self) -> Option<Rect> {
        self.overview.project_viewport(&self.controller.state(), self.surface)
    }
}
