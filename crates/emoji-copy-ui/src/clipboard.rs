//! Clipboard seam
//!
//! Buttons talk to the clipboard through [`ClipboardProvider`] so the
//! copy behaviors stay testable without a display. The production
//! implementation wraps a [`gdk4::Clipboard`].

use gtk4::gio;
use gtk4::prelude::*;

/// Callback invoked with the clipboard's current text, if any.
pub type ReadTextCallback = Box<dyn FnOnce(Option<String>) + 'static>;

/// Text clipboard as the buttons see it. Reads are asynchronous; a
/// read-then-write append is therefore not atomic with respect to external
/// writers, which is acceptable for a user gesture.
pub trait ClipboardProvider {
    /// Overwrite the clipboard with `text`.
    fn set_text(&self, text: &str);
    /// Fetch the current clipboard text and hand it to `callback`.
    fn read_text(&self, callback: ReadTextCallback);
}

/// System clipboard of a GDK display.
pub struct DisplayClipboard {
    clipboard: gdk4::Clipboard,
}

impl DisplayClipboard {
    pub fn new(display: &gdk4::Display) -> Self {
        Self {
            clipboard: display.clipboard(),
        }
    }

    /// Clipboard of the display a realized widget sits on.
    pub fn for_widget(widget: &impl IsA<gtk4::Widget>) -> Self {
        Self {
            clipboard: widget.clipboard(),
        }
    }
}

impl ClipboardProvider for DisplayClipboard {
    fn set_text(&self, text: &str) {
        self.clipboard.set_text(text);
    }

    fn read_text(&self, callback: ReadTextCallback) {
        self.clipboard
            .read_text_async(None::<&gio::Cancellable>, move |result| match result {
                Ok(text) => callback(text.map(|t| t.to_string())),
                Err(err) => {
                    tracing::warn!("Failed to read clipboard text: {}", err);
                    callback(None);
                }
            });
    }
}
