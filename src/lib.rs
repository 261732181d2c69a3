//! EAN-13 Barcode Renderer
//!
//! Encodes 12-digit UPC-A or 13-digit EAN-13 strings into their 95-module
//! bar/space pattern and rasterizes that pattern into a pixel image with a
//! configurable module scale, height and colors.
//!
//! # Features
//!
//! - **Strict encoding**: the check digit is always validated, never derived
//! - **Exact geometry**: columns tile the image with no gaps at any scale
//! - **Pluggable surfaces**: draw into any [`rendering::Canvas`] or the built-in RGBA image
//!
//! # Example
//!
//! ```
//! use ean13render::{RenderConfig, Rgba};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RenderConfig {
//!     scale: 2.0,
//!     height: 50.0,
//!     background_color: Rgba::WHITE,
//!     ..Default::default()
//! };
//!
//! let image = ean13render::render_barcode("4006381333931", &config)?;
//! assert_eq!(image.width, 190);
//! assert_eq!(image.height, 50);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod encoder;
pub mod error;
pub mod renderer;
pub mod rendering;

pub use encoder::{append_check_digit, encode, Module, ModuleKind, ModuleSequence};
pub use error::{ConfigError, EncodeError, RenderError, Result};
pub use renderer::BarcodeRenderer;
pub use rendering::{render, BarcodeImage};

/// An 8-bit RGBA color
///
/// Serialized as a `#RRGGBBAA` hex string. Parsing also accepts `#RRGGBB`
/// (opaque), and the leading `#` is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let hex_str = s.strip_prefix('#').unwrap_or(s);
        let invalid = || ConfigError::InvalidColor(s.to_string());
        if !matches!(hex_str.len(), 6 | 8) {
            return Err(invalid());
        }
        let bytes = hex::decode(hex_str).map_err(|_| invalid())?;
        let a = bytes.get(3).copied().unwrap_or(255);
        Ok(Rgba::new(bytes[0], bytes[1], bytes[2], a))
    }
}

impl TryFrom<String> for Rgba {
    type Error = ConfigError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_string()
    }
}

/// Rendering parameters
///
/// A snapshot of these values is read for each render. The defaults follow
/// the usual barcode conventions:
/// - one pixel per module
/// - opaque black bars on a transparent background
/// - `height` of `0.0`, meaning unset; it must be given before rendering
///
/// # Examples
///
/// ```
/// let cfg = ean13render::RenderConfig::from_json_str(r##"{"height": 30, "bar_color": "#112233"}"##).unwrap();
/// assert_eq!(cfg.scale, 1.0);
/// assert_eq!(cfg.bar_color, ean13render::Rgba::new(0x11, 0x22, 0x33, 0xff));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Pixels per module. Below `1.0` some runs vanish and neighbours merge,
    /// giving a lossy image that will not scan.
    pub scale: f64,
    /// Image height in pixels
    pub height: f64,
    /// Color of the bars
    pub bar_color: Rgba,
    /// Color of the spaces between bars
    pub background_color: Rgba,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            height: 0.0,
            bar_color: Rgba::BLACK,
            background_color: Rgba::TRANSPARENT,
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(json: &str) -> std::result::Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> std::result::Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that `scale` and `height` are finite and positive
    pub fn validate(&self) -> Result<()> {
        rendering::layout::check_positive("scale", self.scale)?;
        rendering::layout::check_positive("height", self.height)
    }
}

/// Encode `digits` and render them with `config`.
///
/// Encoder errors are returned unchanged inside [`RenderError::Encode`].
pub fn render_barcode(digits: &str, config: &RenderConfig) -> Result<BarcodeImage> {
    config.validate()?;
    let sequence = encode(digits)?;
    render(&sequence, config)
}
