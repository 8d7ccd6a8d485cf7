use super::*;

fn press(name: &str) -> Option<KeyCommand> {
    dispatch_key(&Key::new(name), Modifiers::default(), FocusTarget::Page)
}

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
    assert!(!m.is_shortcut());
}

#[test]
fn shift_alone_is_not_a_shortcut() {
    let m = Modifiers { shift: true, ..Default::default() };
    assert!(!m.is_shortcut());
}

#[test]
fn ctrl_alt_meta_are_shortcuts() {
    assert!(Modifiers { ctrl: true, ..Default::default() }.is_shortcut());
    assert!(Modifiers { alt: true, ..Default::default() }.is_shortcut());
    assert!(Modifiers { meta: true, ..Default::default() }.is_shortcut());
}

// =============================================================
// FocusTarget
// =============================================================

#[test]
fn form_controls_are_editable() {
    for tag in ["INPUT", "TEXTAREA", "SELECT", "input", "textarea", "Select"] {
        assert_eq!(FocusTarget::from_element(tag, false), FocusTarget::Editable, "{tag}");
    }
}

#[test]
fn contenteditable_is_editable() {
    assert_eq!(FocusTarget::from_element("DIV", true), FocusTarget::Editable);
}

#[test]
fn other_elements_are_page() {
    assert_eq!(FocusTarget::from_element("BODY", false), FocusTarget::Page);
    assert_eq!(FocusTarget::from_element("BUTTON", false), FocusTarget::Page);
    assert_eq!(FocusTarget::default(), FocusTarget::Page);
}

// =============================================================
// dispatch_key
// =============================================================

#[test]
fn d_toggles_drag_in_either_case() {
    assert_eq!(press("d"), Some(KeyCommand::ToggleDragMode));
    assert_eq!(press("D"), Some(KeyCommand::ToggleDragMode));
}

#[test]
fn plus_and_equals_zoom_in() {
    assert_eq!(press("+"), Some(KeyCommand::ZoomIn));
    assert_eq!(press("="), Some(KeyCommand::ZoomIn));
}

#[test]
fn minus_and_underscore_zoom_out() {
    assert_eq!(press("-"), Some(KeyCommand::ZoomOut));
    assert_eq!(press("_"), Some(KeyCommand::ZoomOut));
}

#[test]
fn zero_resets() {
    assert_eq!(press("0"), Some(KeyCommand::Reset));
}

#[test]
fn unbound_keys_are_ignored() {
    for name in ["a", "Escape", "Enter", "1", "ArrowUp", " "] {
        assert_eq!(press(name), None, "{name}");
    }
}

#[test]
fn editable_focus_suppresses_every_binding() {
    for name in ["d", "+", "-", "0"] {
        assert_eq!(dispatch_key(&Key::new(name), Modifiers::default(), FocusTarget::Editable), None);
    }
}

#[test]
fn browser_shortcuts_pass_through() {
    let ctrl = Modifiers { ctrl: true, ..Default::default() };
    let meta = Modifiers { meta: true, ..Default::default() };
    let alt = Modifiers { alt: true, ..Default::default() };
    assert_eq!(dispatch_key(&Key::new("+"), ctrl, FocusTarget::Page), None);
    assert_eq!(dispatch_key(&Key::new("0"), meta, FocusTarget::Page), None);
    assert_eq!(dispatch_key(&Key::new("d"), alt, FocusTarget::Page), None);
}

#[test]
fn shifted_plus_still_zooms() {
    let shift = Modifiers { shift: true, ..Default::default() };
    assert_eq!(dispatch_key(&Key::new("+"), shift, FocusTarget::Page), Some(KeyCommand::ZoomIn));
    assert_eq!(dispatch_key(&Key::new("_"), shift, FocusTarget::Page), Some(KeyCommand::ZoomOut));
}
