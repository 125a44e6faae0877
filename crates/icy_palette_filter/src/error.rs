//! Unified error types for icy_palette_filter

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for palette and filter operations
#[derive(Debug, Error)]
pub enum PaletteError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file '{path}': {message}")]
    ReadFile { path: PathBuf, message: String },

    #[error("Failed to write file '{path}': {message}")]
    WriteFile { path: PathBuf, message: String },

    // === Palette Errors ===
    #[error("Invalid hex color: {value}")]
    InvalidHexColor { value: String },

    #[error("Invalid palette format: {message}")]
    InvalidPaletteFormat { message: String },

    #[error("Unsupported palette format: expected {expected}")]
    UnsupportedPaletteFormat { expected: String },

    #[error("Palette index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    // === Configuration Errors ===
    #[error("Invalid filter configuration: {message}")]
    InvalidConfig { message: String },

    // === External Errors ===
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Parse int error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

/// Result type alias for icy_palette_filter operations
pub type Result<T> = std::result::Result<T, PaletteError>;

// === Convenience constructors ===
impl PaletteError {
    /// Create an invalid palette format error
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidPaletteFormat { message: msg.into() }
    }

    /// Create a read file error
    pub fn read_file(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::ReadFile {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a write file error
    pub fn write_file(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::WriteFile {
            path: path.into(),
            message: msg.into(),
        }
    }
}

impl From<toml::de::Error> for PaletteError {
    fn from(err: toml::de::Error) -> Self {
        PaletteError::InvalidConfig { message: err.to_string() }
    }
}

impl From<toml::ser::Error> for PaletteError {
    fn from(err: toml::ser::Error) -> Self {
        PaletteError::InvalidConfig { message: err.to_string() }
    }
}
