//! Gesture-to-action dispatch
//!
//! Mouse button numbers and key symbols both collapse into one
//! [`CopyAction`]; the widget handlers only translate events and run it.

use gdk4::{Key, ModifierType};

/// What a completed input gesture does with the composed emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyAction {
    /// Overwrite the clipboard and close the picker menu (left click, plain Enter)
    ReplaceAndClose,
    /// Overwrite the clipboard, keep the menu open (middle click, Ctrl+Enter)
    ReplaceAndStay,
    /// Append to the current clipboard text, keep the menu open (right click, Shift+Enter)
    AppendAndStay,
}

/// Map a GDK mouse button number to its action. Buttons beyond the first
/// three propagate unhandled.
pub fn action_for_mouse_button(button: u32) -> Option<CopyAction> {
    match button {
        gdk4::BUTTON_PRIMARY => Some(CopyAction::ReplaceAndClose),
        gdk4::BUTTON_MIDDLE => Some(CopyAction::ReplaceAndStay),
        gdk4::BUTTON_SECONDARY => Some(CopyAction::AppendAndStay),
        _ => None,
    }
}

/// Map a key press to its action. Only Enter and the numpad Enter activate;
/// Shift selects append-and-stay, Ctrl replace-and-stay.
pub fn action_for_key(key: Key, modifiers: ModifierType) -> Option<CopyAction> {
    if !matches!(key, Key::Return | Key::KP_Enter) {
        return None;
    }
    if modifiers.contains(ModifierType::SHIFT_MASK) {
        Some(CopyAction::AppendAndStay)
    } else if modifiers.contains(ModifierType::CONTROL_MASK) {
        Some(CopyAction::ReplaceAndStay)
    } else {
        Some(CopyAction::ReplaceAndClose)
    }
}
