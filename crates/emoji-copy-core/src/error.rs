//! Error types for emoji-copy core

use thiserror::Error;

/// Result type for emoji-copy core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings extraction failed
    #[error("Settings error: {0}")]
    Settings(#[from] figment::Error),

    /// Settings serialization failed
    #[error("Settings serialization error: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
