//! Browser binding: wires DOM events to [`BodyMapCore`] and executes the
//! resulting [`Action`]s.
//!
//! ARCHITECTURE
//! ============
//! The host page provides four elements: the surface (untransformed box that
//! receives input), the content layer inside it (carries the pan/zoom CSS
//! transform), the diagram `<img>` inside the content layer, and a canvas
//! overlay covering the surface for markers. An optional second canvas shows
//! the overview thumbnail.
//!
//! Listener closures hold a `Weak` reference to the shared state, so dropping
//! the [`BodyMap`] releases everything. Host callbacks run after the core
//! borrow is released, so they may call back into the widget.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent,
    WheelEvent,
};

use crate::config::BodyMapConfig;
use crate::engine::{Action, BodyMapCore, Button, Props};
use crate::keys::{FocusTarget, Key, Modifiers};
use crate::listeners::{ListenerError, ListenerHost, ListenerOptions, ListenerScope, ListenerSpec};
use crate::marker::{Marker, MarkerId};
use crate::render::{self, Gender};
use crate::viewport::{Point, SurfaceMetrics};
use crate::zones::{BodyView, Granularity, classifier_for};

type Handler = Closure<dyn FnMut(Event)>;

// =============================================================
// DOM listener host
// =============================================================

/// [`ListenerHost`] over any DOM [`EventTarget`].
pub struct DomHost {
    target: EventTarget,
}

impl DomHost {
    #[must_use]
    pub fn new(target: EventTarget) -> Self {
        Self { target }
    }
}

/// A registered DOM listener; owns the closure until detached.
pub struct DomListener {
    event: &'static str,
    closure: Handler,
    capture: bool,
}

impl ListenerHost for DomHost {
    type Handler = Handler;
    type Token = DomListener;

    fn attach(&self, event: &'static str, handler: Handler, options: ListenerOptions) -> Result<DomListener, ListenerError> {
        let dom_options = AddEventListenerOptions::new();
        dom_options.set_passive(options.passive);
        dom_options.set_capture(options.capture);
        self.target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                handler.as_ref().unchecked_ref(),
                &dom_options,
            )
            .map_err(|err| ListenerError::Attach { event, message: js_message(&err) })?;
        Ok(DomListener { event, closure: handler, capture: options.capture })
    }

    // A closure dropped while it is running is freed by wasm-bindgen once the
    // invocation returns, so a mouseup handler may release its own scope.
    fn detach(&self, token: DomListener) -> Result<(), ListenerError> {
        self.target
            .remove_event_listener_with_callback_and_bool(token.event, token.closure.as_ref().unchecked_ref(), token.capture)
            .map_err(|err| ListenerError::Detach { event: token.event, message: js_message(&err) })
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// =============================================================
// Shared state
// =============================================================

#[derive(Default, Clone)]
struct Callbacks {
    zone_click: Option<js_sys::Function>,
    wound_click: Option<js_sys::Function>,
    wound_double_click: Option<js_sys::Function>,
    wound_right_click: Option<js_sys::Function>,
    navigate: Option<js_sys::Function>,
}

struct Elements {
    surface: HtmlElement,
    content: HtmlElement,
    image: Element,
    overlay: HtmlCanvasElement,
    overview: Option<HtmlCanvasElement>,
}

struct Shared {
    core: RefCell<BodyMapCore>,
    elements: Elements,
    callbacks: RefCell<Callbacks>,
    /// Keyboard, surface and overview listeners; live until unmount.
    mounted: RefCell<Vec<ListenerScope<DomHost>>>,
    /// Window `mousemove` / `mouseup` while a pan drag is in progress.
    drag: RefCell<Option<ListenerScope<DomHost>>>,
}

fn handler(shared: &Rc<Shared>, f: impl Fn(&Rc<Shared>, &Event) + 'static) -> Handler {
    let weak: Weak<Shared> = Rc::downgrade(shared);
    Closure::wrap(Box::new(move |event: Event| {
        if let Some(shared) = weak.upgrade() {
            f(&shared, &event);
        }
    }) as Box<dyn FnMut(Event)>)
}

/// Run `f` against the core with a fresh surface measurement, then apply the
/// resulting actions. Returns whether any action was produced.
fn with_core(shared: &Rc<Shared>, f: impl FnOnce(&mut BodyMapCore) -> Vec<Action>) -> bool {
    let actions = {
        let Ok(mut core) = shared.core.try_borrow_mut() else {
            tracing::warn!("body map core busy; event skipped");
            return false;
        };
        core.set_surface(measure(&shared.elements.surface));
        f(&mut core)
    };
    let handled = !actions.is_empty();
    apply(shared, actions);
    handled
}

fn measure(element: &Element) -> Option<SurfaceMetrics> {
    let rect = element.get_bounding_client_rect();
    let metrics = SurfaceMetrics::new(rect.left(), rect.top(), rect.width(), rect.height());
    metrics.is_measurable().then_some(metrics)
}

// =============================================================
// Actions
// =============================================================

fn apply(shared: &Rc<Shared>, actions: Vec<Action>) {
    let callbacks = shared.callbacks.borrow().clone();
    let mut render_needed = false;
    for action in actions {
        match action {
            Action::ZoneClicked { code, x, y, .. } => {
                invoke(callbacks.zone_click.as_ref(), "onZoneClick", &[code.into(), x.into(), y.into()]);
            }
            Action::WoundClicked(id) => invoke(callbacks.wound_click.as_ref(), "onWoundClick", &[id_value(id)]),
            Action::WoundDoubleClicked(id) => {
                invoke(callbacks.wound_double_click.as_ref(), "onWoundDoubleClick", &[id_value(id)]);
            }
            Action::WoundRightClicked(id) => {
                invoke(callbacks.wound_right_click.as_ref(), "onWoundRightClick", &[id_value(id)]);
            }
            Action::Navigate { pan_x, pan_y } => {
                invoke(callbacks.navigate.as_ref(), "onNavigate", &[pan_x.into(), pan_y.into()]);
            }
            Action::ModeChanged(mode) => set_attribute(&shared.elements.surface, "data-mode", mode.as_str()),
            Action::ViewportChanged(_) => {}
            Action::AcquireDragListeners => acquire_drag(shared),
            Action::ReleaseDragListeners => release_drag(shared),
            Action::SetCursor(cursor) => set_style(&shared.elements.surface, "cursor", &cursor),
            Action::RenderNeeded => render_needed = true,
        }
    }
    if render_needed {
        redraw(shared);
    }
}

#[allow(clippy::cast_precision_loss)]
fn id_value(id: MarkerId) -> JsValue {
    JsValue::from_f64(id as f64)
}

fn invoke(callback: Option<&js_sys::Function>, name: &'static str, args: &[JsValue]) {
    let Some(callback) = callback else {
        return;
    };
    let args: js_sys::Array = args.iter().collect();
    if let Err(err) = callback.apply(&JsValue::NULL, &args) {
        tracing::warn!(callback = name, error = %js_message(&err), "host callback threw");
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        tracing::warn!(property, error = %js_message(&err), "style update failed");
    }
}

fn set_attribute(element: &Element, name: &str, value: &str) {
    if element.get_attribute(name).as_deref() == Some(value) {
        return;
    }
    if let Err(err) = element.set_attribute(name, value) {
        tracing::warn!(name, error = %js_message(&err), "attribute update failed");
    }
}

fn acquire_drag(shared: &Rc<Shared>) {
    let Ok(mut slot) = shared.drag.try_borrow_mut() else {
        tracing::warn!("drag scope busy; listeners not acquired");
        return;
    };
    if slot.as_ref().is_some_and(|scope| !scope.is_empty()) {
        return;
    }
    let Some(window) = web_sys::window() else {
        tracing::warn!("no window; drag listeners not acquired");
        return;
    };
    let mut scope = ListenerScope::new("drag", DomHost::new(window.into()));
    let specs = [
        ListenerSpec::new("mousemove", handler(shared, on_drag_move), ListenerOptions::default()),
        ListenerSpec::new("mouseup", handler(shared, on_drag_up), ListenerOptions::default()),
    ];
    if let Err(err) = scope.attach_all(specs) {
        tracing::warn!(error = %err, "drag listeners not acquired");
        return;
    }
    *slot = Some(scope);
}

fn release_drag(shared: &Rc<Shared>) {
    let Ok(mut slot) = shared.drag.try_borrow_mut() else {
        tracing::warn!("drag scope busy; listeners not released");
        return;
    };
    if let Some(mut scope) = slot.take() {
        scope.release();
    }
}

// =============================================================
// Rendering
// =============================================================

fn redraw(shared: &Rc<Shared>) {
    let Ok(core) = shared.core.try_borrow() else {
        tracing::warn!("body map core busy; render skipped");
        return;
    };
    let elements = &shared.elements;
    let state = core.viewport();
    let props = core.props();
    set_style(&elements.content, "transform", &render::content_transform_css(&state));
    set_style(&elements.content, "transform-origin", "0 0");
    set_attribute(&elements.image, "src", &render::asset_path(props.gender, props.view));

    let markers = core.map_markers();
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());

    if let Some(metrics) = core.surface() {
        let drawn = render::prepare_canvas(&elements.overlay, metrics.width, metrics.height, dpr)
            .and_then(|ctx| render::draw_markers(&ctx, &markers, &state, &metrics, dpr));
        if let Err(err) = drawn {
            tracing::warn!(error = %js_message(&err), "marker render failed");
        }
    }

    if let Some(overview) = &elements.overview {
        let projector = core.overview();
        let drawn = render::prepare_canvas(overview, projector.width, projector.height, dpr)
            .and_then(|ctx| render::draw_overview(&ctx, &projector, core.overview_rect(), &markers, dpr));
        if let Err(err) = drawn {
            tracing::warn!(error = %js_message(&err), "overview render failed");
        }
    }
}

// =============================================================
// Event handlers
// =============================================================

fn client_point(mouse: &MouseEvent) -> Point {
    Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()))
}

fn focus_target() -> FocusTarget {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .map_or(FocusTarget::Page, |el| {
            let editable = el.dyn_ref::<HtmlElement>().is_some_and(HtmlElement::is_content_editable);
            FocusTarget::from_element(&el.tag_name(), editable)
        })
}

fn on_key_down(shared: &Rc<Shared>, event: &Event) {
    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
        return;
    };
    let key = Key::new(key_event.key());
    let modifiers = Modifiers {
        shift: key_event.shift_key(),
        ctrl: key_event.ctrl_key(),
        alt: key_event.alt_key(),
        meta: key_event.meta_key(),
    };
    let focus = focus_target();
    if with_core(shared, |core| core.on_key_down(&key, modifiers, focus)) {
        event.prevent_default();
    }
}

fn on_surface_down(shared: &Rc<Shared>, event: &Event) {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        let button = Button::from_dom(mouse.button());
        with_core(shared, |core| core.on_pointer_down(client_point(mouse), button));
    }
}

/// Whether the window drag listeners are attached. When they are not, the
/// surface listeners carry the drag themselves.
fn window_owns_drag(shared: &Shared) -> bool {
    shared.drag.try_borrow().is_ok_and(|slot| slot.as_ref().is_some_and(|scope| !scope.is_empty()))
}

fn on_surface_move(shared: &Rc<Shared>, event: &Event) {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        let delegated = window_owns_drag(shared);
        with_core(shared, |core| {
            if delegated && core.is_dragging() { Vec::new() } else { core.on_pointer_move(client_point(mouse)) }
        });
    }
}

fn on_surface_up(shared: &Rc<Shared>, event: &Event) {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        let button = Button::from_dom(mouse.button());
        let delegated = window_owns_drag(shared);
        with_core(shared, |core| {
            if delegated && core.is_dragging() { Vec::new() } else { core.on_pointer_up(client_point(mouse), button) }
        });
    }
}

fn on_surface_leave(shared: &Rc<Shared>, _event: &Event) {
    with_core(shared, BodyMapCore::on_pointer_leave);
}

fn on_drag_move(shared: &Rc<Shared>, event: &Event) {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        with_core(shared, |core| core.on_pointer_move(client_point(mouse)));
    }
}

fn on_drag_up(shared: &Rc<Shared>, event: &Event) {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        let button = Button::from_dom(mouse.button());
        with_core(shared, |core| core.on_pointer_up(client_point(mouse), button));
    }
}

fn on_double_click(shared: &Rc<Shared>, event: &Event) {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        with_core(shared, |core| core.on_double_click(client_point(mouse)));
    }
}

fn on_context_menu(shared: &Rc<Shared>, event: &Event) {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        if with_core(shared, |core| core.on_context_menu(client_point(mouse))) {
            event.prevent_default();
        }
    }
}

fn on_wheel(shared: &Rc<Shared>, event: &Event) {
    if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
        event.prevent_default();
        let screen = Point::new(f64::from(wheel.client_x()), f64::from(wheel.client_y()));
        with_core(shared, |core| core.on_wheel(screen, wheel.delta_y()));
    }
}

/// Client point to thumbnail pixels, correcting for CSS scaling of the canvas.
fn thumbnail_point(shared: &Shared, overview: &HtmlCanvasElement, mouse: &MouseEvent) -> Option<Point> {
    let rect = measure(overview)?;
    let Ok(core) = shared.core.try_borrow() else {
        return None;
    };
    let projector = core.overview();
    let client = client_point(mouse);
    Some(Point::new(
        (client.x - rect.left) * projector.width / rect.width,
        (client.y - rect.top) * projector.height / rect.height,
    ))
}

fn on_overview_down(shared: &Rc<Shared>, event: &Event) {
    let (Some(mouse), Some(overview)) = (event.dyn_ref::<MouseEvent>(), shared.elements.overview.as_ref()) else {
        return;
    };
    if let Some(thumb) = thumbnail_point(shared, overview, mouse) {
        event.prevent_default();
        with_core(shared, |core| core.on_overview_pointer_down(thumb));
    }
}

fn on_overview_move(shared: &Rc<Shared>, event: &Event) {
    let (Some(mouse), Some(overview)) = (event.dyn_ref::<MouseEvent>(), shared.elements.overview.as_ref()) else {
        return;
    };
    if let Some(thumb) = thumbnail_point(shared, overview, mouse) {
        with_core(shared, |core| core.on_overview_pointer_move(thumb));
    }
}

fn on_overview_up(shared: &Rc<Shared>, _event: &Event) {
    with_core(shared, BodyMapCore::on_overview_pointer_up);
}

// =============================================================
// Mount
// =============================================================

fn mount(shared: &Rc<Shared>) -> Result<(), ListenerError> {
    let passive = ListenerOptions { passive: true, capture: false };
    let active = ListenerOptions::default();
    let mut scopes = Vec::new();

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let mut keys = ListenerScope::new("keyboard", DomHost::new(document.into()));
        keys.attach_all([ListenerSpec::new("keydown", handler(shared, on_key_down), active)])?;
        scopes.push(keys);
    }

    let mut surface = ListenerScope::new("surface", DomHost::new(shared.elements.surface.clone().into()));
    surface.attach_all([
        ListenerSpec::new("mousedown", handler(shared, on_surface_down), active),
        ListenerSpec::new("mousemove", handler(shared, on_surface_move), passive),
        ListenerSpec::new("mouseup", handler(shared, on_surface_up), passive),
        ListenerSpec::new("mouseleave", handler(shared, on_surface_leave), passive),
        ListenerSpec::new("dblclick", handler(shared, on_double_click), passive),
        ListenerSpec::new("contextmenu", handler(shared, on_context_menu), active),
        ListenerSpec::new("wheel", handler(shared, on_wheel), active),
    ])?;
    scopes.push(surface);

    if let Some(overview) = &shared.elements.overview {
        let mut thumb = ListenerScope::new("overview", DomHost::new(overview.clone().into()));
        thumb.attach_all([
            ListenerSpec::new("mousedown", handler(shared, on_overview_down), active),
            ListenerSpec::new("mousemove", handler(shared, on_overview_move), passive),
            ListenerSpec::new("mouseup", handler(shared, on_overview_up), passive),
            ListenerSpec::new("mouseleave", handler(shared, on_overview_up), passive),
        ])?;
        scopes.push(thumb);
    }

    *shared.mounted.borrow_mut() = scopes;
    Ok(())
}

// =============================================================
// Exported widget
// =============================================================

/// A mounted body map. Dropping it (or calling `destroy`) removes every
/// listener it registered.
#[wasm_bindgen]
pub struct BodyMap {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl BodyMap {
    /// Mount on the given elements. `props_json` and `config_json` are JSON
    /// objects; missing fields, or an empty string, take the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error string for malformed props, an invalid config, or a
    /// listener that could not be attached.
    #[wasm_bindgen(constructor)]
    pub fn new(
        surface: HtmlElement,
        content: HtmlElement,
        image: Element,
        overlay: HtmlCanvasElement,
        overview: Option<HtmlCanvasElement>,
        props_json: &str,
        config_json: &str,
    ) -> Result<BodyMap, JsValue> {
        let props: Props = if props_json.trim().is_empty() {
            Props::default()
        } else {
            serde_json::from_str(props_json).map_err(js_error)?
        };
        let config = if config_json.trim().is_empty() {
            BodyMapConfig::default()
        } else {
            BodyMapConfig::from_json(config_json).map_err(js_error)?
        };
        let shared = Rc::new(Shared {
            core: RefCell::new(BodyMapCore::new(props, config)),
            elements: Elements { surface, content, image, overlay, overview },
            callbacks: RefCell::new(Callbacks::default()),
            mounted: RefCell::new(Vec::new()),
            drag: RefCell::new(None),
        });
        mount(&shared).map_err(js_error)?;
        tracing::debug!(view = props.view.as_str(), read_only = props.read_only, "body map mounted");
        let map = BodyMap { shared };
        map.refresh();
        Ok(map)
    }

    // --- Callbacks ---

    #[wasm_bindgen(js_name = setOnZoneClick)]
    pub fn set_on_zone_click(&self, callback: Option<js_sys::Function>) {
        self.shared.callbacks.borrow_mut().zone_click = callback;
    }

    #[wasm_bindgen(js_name = setOnWoundClick)]
    pub fn set_on_wound_click(&self, callback: Option<js_sys::Function>) {
        self.shared.callbacks.borrow_mut().wound_click = callback;
    }

    #[wasm_bindgen(js_name = setOnWoundDoubleClick)]
    pub fn set_on_wound_double_click(&self, callback: Option<js_sys::Function>) {
        self.shared.callbacks.borrow_mut().wound_double_click = callback;
    }

    #[wasm_bindgen(js_name = setOnWoundRightClick)]
    pub fn set_on_wound_right_click(&self, callback: Option<js_sys::Function>) {
        self.shared.callbacks.borrow_mut().wound_right_click = callback;
    }

    #[wasm_bindgen(js_name = setOnNavigate)]
    pub fn set_on_navigate(&self, callback: Option<js_sys::Function>) {
        self.shared.callbacks.borrow_mut().navigate = callback;
    }

    // --- Props & data ---

    /// Replace saved markers from a JSON array of wound records.
    ///
    /// # Errors
    ///
    /// Returns an error string if the JSON does not describe markers.
    #[wasm_bindgen(js_name = setMarkers)]
    pub fn set_markers(&self, markers_json: &str) -> Result<(), JsValue> {
        let markers: Vec<Marker> = serde_json::from_str(markers_json).map_err(js_error)?;
        with_core(&self.shared, |core| core.load_markers(markers));
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error string for anything but `FRONT` / `BACK`.
    #[wasm_bindgen(js_name = setView)]
    pub fn set_view(&self, view: &str) -> Result<(), JsValue> {
        let view = BodyView::parse(view).ok_or_else(|| JsValue::from_str("view must be FRONT or BACK"))?;
        with_core(&self.shared, |core| core.set_view(view));
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error string for anything but `male` / `female`.
    #[wasm_bindgen(js_name = setGender)]
    pub fn set_gender(&self, gender: &str) -> Result<(), JsValue> {
        let gender = Gender::parse(gender).ok_or_else(|| JsValue::from_str("gender must be male or female"))?;
        with_core(&self.shared, |core| core.set_gender(gender));
        Ok(())
    }

    #[wasm_bindgen(js_name = setReadOnly)]
    pub fn set_read_only(&self, read_only: bool) {
        with_core(&self.shared, |core| {
            core.set_read_only(read_only);
            Vec::new()
        });
    }

    /// The host form saved the pending marker; `marker_json` is the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error string if the JSON is not a marker.
    #[wasm_bindgen(js_name = confirmPending)]
    pub fn confirm_pending(&self, marker_json: &str) -> Result<(), JsValue> {
        let marker: Marker = serde_json::from_str(marker_json).map_err(js_error)?;
        with_core(&self.shared, |core| core.confirm_pending(marker));
        Ok(())
    }

    #[wasm_bindgen(js_name = discardPending)]
    pub fn discard_pending(&self) {
        with_core(&self.shared, BodyMapCore::discard_pending);
    }

    // --- Viewport controls ---

    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&self) {
        with_core(&self.shared, BodyMapCore::zoom_in);
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&self) {
        with_core(&self.shared, BodyMapCore::zoom_out);
    }

    pub fn reset(&self) {
        with_core(&self.shared, BodyMapCore::reset_view);
    }

    #[wasm_bindgen(js_name = toggleDragMode)]
    pub fn toggle_drag_mode(&self) {
        with_core(&self.shared, BodyMapCore::toggle_drag_mode);
    }

    /// Re-measure the surface and redraw, e.g. after a layout change.
    pub fn refresh(&self) {
        with_core(&self.shared, |_| vec![Action::RenderNeeded]);
    }

    // --- Queries ---

    /// Current `{ zoom, pan_x, pan_y }` as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    pub fn viewport(&self) -> Result<String, JsValue> {
        let state = self.shared.core.try_borrow().map_err(js_error)?.viewport();
        serde_json::to_string(&state).map_err(js_error)
    }

    /// The pending marker as JSON, if any.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    pub fn pending(&self) -> Result<Option<String>, JsValue> {
        let core = self.shared.core.try_borrow().map_err(js_error)?;
        core.pending().map(serde_json::to_string).transpose().map_err(js_error)
    }

    /// Remove every listener. The widget is inert afterwards.
    pub fn destroy(&self) {
        release_drag(&self.shared);
        let scopes = std::mem::take(&mut *self.shared.mounted.borrow_mut());
        let released: usize = scopes.into_iter().map(|mut scope| scope.release()).sum();
        tracing::debug!(released, "body map unmounted");
    }
}

/// Classify a diagram point without mounting a widget.
///
/// # Errors
///
/// Returns an error string for an unknown view or granularity.
#[wasm_bindgen(js_name = classifyZone)]
pub fn classify_zone(x: f64, y: f64, view: &str, granularity: &str) -> Result<String, JsValue> {
    let view = BodyView::parse(view).ok_or_else(|| JsValue::from_str("view must be FRONT or BACK"))?;
    let granularity =
        Granularity::parse(granularity).ok_or_else(|| JsValue::from_str("granularity must be fine or coarse"))?;
    Ok(classifier_for(granularity).classify(Point::new(x, y), view).to_owned())
}
