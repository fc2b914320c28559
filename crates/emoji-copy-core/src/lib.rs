//! # emoji-copy core
//!
//! GUI-free building blocks for the emoji-copy picker: keyword-driven
//! variant traits, skin-tone/gender composition, and the persisted picker
//! settings. The GTK widget layer lives in `emoji-copy-ui`.

pub mod error;
pub mod settings;
pub mod variant;

pub use error::{CoreError, Result};
pub use settings::PickerSettings;
pub use variant::{compose_variant, EmojiTraits, Gender, SkinTone};
