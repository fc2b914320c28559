//! Category label collaborator
//!
//! Each category row owns one shared label; hovering a button swaps it to
//! the emoji's name, leaving restores the category name.

/// The category a button belongs to, as seen from the button: a name and
/// the shared hover label.
pub struct CategoryHandle {
    label: gtk4::Label,
    name: String,
}

impl CategoryHandle {
    pub fn new(label: gtk4::Label, name: impl Into<String>) -> Self {
        Self {
            label,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Show the hovered emoji's name in the shared label.
    pub fn show_emoji_name(&self, name: &str) {
        self.label.set_text(name);
    }

    /// Put the category name back.
    pub fn restore(&self) {
        self.label.set_text(&self.name);
    }
}
