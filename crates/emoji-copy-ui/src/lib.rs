//! # emoji-copy UI
//!
//! The GTK4 widget layer of the emoji-copy picker: one [`EmojiButton`] per
//! emoji in the grid. A click or Enter press composes the tone/gender
//! variant of the glyph, writes it to the system clipboard, and optionally
//! fires a deferred Shift+Insert chord so the previously focused application
//! pastes it right away.
//!
//! The picker surface itself (popover, category grid, search index) is the
//! host's job; it hands every button a shared [`PickerContext`] carrying the
//! settings, the clipboard, the input injector, and the menu/search hooks.
//!
//! ```text
//! ┌ picker popover ─────────────────────────┐
//! │ [🔍 search...]                          │
//! │ ┌────┬────┬────┬────┬────┐              │
//! │ │ 😀 │ 😁 │ 😂 │ 🤣 │ 😅 │  EmojiButton │
//! │ └────┴────┴────┴────┴────┘  grid        │
//! │  Smileys & people           hover label │
//! └─────────────────────────────────────────┘
//! ```

pub mod action;
pub mod button;
pub mod category;
pub mod clipboard;
pub mod context;
pub mod paste;

pub use action::CopyAction;
pub use button::EmojiButton;
pub use category::CategoryHandle;
pub use clipboard::{ClipboardProvider, DisplayClipboard};
pub use context::{MenuHandle, PickerContext, SearchFeedback};
pub use paste::{ChordKey, EnigoInjector, InjectError, InputInjector, KeyState, PasteTrigger};
