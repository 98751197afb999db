//! Error types for the brand_palette library

use thiserror::Error;

/// Result type alias for brand_palette operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for color extraction and palette derivation
///
/// Extraction itself is total and never returns an error; the variants
/// here cover malformed caller input (hex strings, buffer geometry) and
/// configuration handling.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Hex color string is not of the form `#RRGGBB` / `RRGGBB`
    #[error("Invalid hex color {value:?}: {reason}")]
    InvalidColorFormat { value: String, reason: String },

    /// Pixel buffer length does not match the declared dimensions
    #[error("Buffer size mismatch: {width}x{height} RGBA needs {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Invalid configuration parameter
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PaletteError {
    /// Create an invalid-hex error with context
    pub fn invalid_color(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
