//! Error types for encoding and rendering

use thiserror::Error;

/// Result type alias for render operations
pub type Result<T, E = RenderError> = std::result::Result<T, E>;

/// Errors produced while turning a digit string into a module sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Input is empty or contains something other than ASCII digits.
    /// `found` is `None` for an empty input.
    #[error("Invalid characters in barcode at position {position}: {found:?}")]
    InvalidCharacters { position: usize, found: Option<char> },

    /// Input length is neither 12 (UPC-A) nor 13 (EAN-13)
    #[error("Invalid barcode length {0}: expected 12 or 13 digits")]
    InvalidLength(usize),

    /// The supplied check digit does not match the weighted checksum
    #[error("Checksum mismatch: expected check digit {expected}, found {found}")]
    ChecksumMismatch { expected: u8, found: u8 },
}

/// Errors produced while rasterizing a module sequence
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A rendering parameter is non-positive, non-finite, or yields an unusable image size
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The digits could not be encoded
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Errors produced while loading a render configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration JSON could not be parsed
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A color string is not `#RRGGBB` or `#RRGGBBAA`
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}
