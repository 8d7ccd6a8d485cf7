//! Keyboard shortcuts for the viewport.
//!
//! The body map listens on the whole document so shortcuts work without the
//! surface holding focus. [`dispatch_key`] therefore filters out keystrokes
//! meant for form controls and browser shortcuts before mapping the key to a
//! [`KeyCommand`].

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// A keyboard key as reported by the browser's `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl, Alt or Meta held: the keystroke belongs to the browser.
    #[must_use]
    pub fn is_shortcut(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Where keyboard focus sits when a key arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// Body, the surface, or any non-editable element.
    #[default]
    Page,
    /// A text input, textarea, select, or contenteditable element.
    Editable,
}

impl FocusTarget {
    /// Classify the focused element from its tag name and `isContentEditable`.
    #[must_use]
    pub fn from_element(tag_name: &str, content_editable: bool) -> Self {
        let editable_tag = ["INPUT", "TEXTAREA", "SELECT"]
            .iter()
            .any(|t| tag_name.eq_ignore_ascii_case(t));
        if editable_tag || content_editable { Self::Editable } else { Self::Page }
    }
}

/// Viewport command bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    ToggleDragMode,
    ZoomIn,
    ZoomOut,
    Reset,
}

/// Map a keystroke to a viewport command.
///
/// Returns `None` for unbound keys, while an editable control has focus, and
/// while Ctrl/Alt/Meta is held. Shift is allowed since `+` and `_` need it on
/// most layouts.
#[must_use]
pub fn dispatch_key(key: &Key, modifiers: Modifiers, focus: FocusTarget) -> Option<KeyCommand> {
    if focus == FocusTarget::Editable || modifiers.is_shortcut() {
        return None;
    }
    match key.0.as_str() {
        "d" | "D" => Some(KeyCommand::ToggleDragMode),
        "+" | "=" => Some(KeyCommand::ZoomIn),
        "-" | "_" => Some(KeyCommand::ZoomOut),
        "0" => Some(KeyCommand::Reset),
        _ => None,
    }
}
