//! Stateful barcode renderer
//!
//! `BarcodeRenderer` accumulates the digits and render settings, then
//! produces an image on request. [`BarcodeRenderer::prepare`] precomputes the
//! encoder output and pixel layout so a later [`BarcodeRenderer::barcode_image`]
//! with unchanged inputs skips that work. Any change to the digits, scale or
//! height drops the prepared layout; color changes keep it.
//!
//! # Example
//!
//! ```
//! use ean13render::{BarcodeRenderer, Rgba};
//!
//! let mut renderer = BarcodeRenderer::new();
//! renderer.set_barcode("4006381333931");
//! renderer.set_scale(2.0);
//! renderer.set_height(40.0);
//! renderer.set_background_color(Some(Rgba::WHITE));
//! renderer.prepare().unwrap();
//!
//! let image = renderer.barcode_image().unwrap();
//! assert_eq!((image.width, image.height), (190, 40));
//! ```

use crate::encoder;
use crate::error::Result;
use crate::rendering::{self, layout, BarcodeImage, LayoutCache, LayoutKey, PreparedLayout};
use crate::{RenderConfig, Rgba};

#[derive(Debug, Clone, Default)]
pub struct BarcodeRenderer {
    barcode: Option<String>,
    config: RenderConfig,
    cache: LayoutCache,
}

impl BarcodeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn barcode(&self) -> Option<&str> {
        self.barcode.as_deref()
    }

    pub fn set_barcode(&mut self, barcode: impl Into<String>) {
        let barcode = barcode.into();
        if self.barcode.as_deref() != Some(barcode.as_str()) {
            if let Err(e) = encoder::parse_code(&barcode) {
                log::warn!("barcode {barcode:?} will not render: {e}");
            }
            self.barcode = Some(barcode);
            self.cache.invalidate();
        }
    }

    pub fn clear_barcode(&mut self) {
        if self.barcode.take().is_some() {
            self.cache.invalidate();
        }
    }

    pub fn bar_color(&self) -> Rgba {
        self.config.bar_color
    }

    /// `None` restores the default (opaque black)
    pub fn set_bar_color(&mut self, color: Option<Rgba>) {
        self.config.bar_color = color.unwrap_or(Rgba::BLACK);
    }

    pub fn background_color(&self) -> Rgba {
        self.config.background_color
    }

    /// `None` restores the default (transparent)
    pub fn set_background_color(&mut self, color: Option<Rgba>) {
        self.config.background_color = color.unwrap_or(Rgba::TRANSPARENT);
    }

    pub fn scale(&self) -> f64 {
        self.config.scale
    }

    /// Pixels per module. Invalid values are stored and reported at render time.
    pub fn set_scale(&mut self, scale: f64) {
        if let Err(e) = layout::check_positive("scale", scale) {
            log::warn!("{e}");
        }
        if self.config.scale.to_bits() != scale.to_bits() {
            self.config.scale = scale;
            self.cache.invalidate();
        }
    }

    pub fn height(&self) -> f64 {
        self.config.height
    }

    /// Image height in pixels. Invalid values are stored and reported at render time.
    pub fn set_height(&mut self, height: f64) {
        if let Err(e) = layout::check_positive("height", height) {
            log::warn!("{e}");
        }
        if self.config.height.to_bits() != height.to_bits() {
            self.config.height = height;
            self.cache.invalidate();
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn is_prepared(&self) -> bool {
        self.cache.get(&self.key()).is_some()
    }

    /// Encode and lay out the current inputs ahead of [`Self::barcode_image`]
    pub fn prepare(&mut self) -> Result<()> {
        let key = self.key();
        if self.cache.get(&key).is_some() {
            return Ok(());
        }
        let prepared = self.compute()?;
        self.cache.insert(key, prepared);
        Ok(())
    }

    /// Render the current barcode, using the prepared layout when it matches
    pub fn barcode_image(&self) -> Result<BarcodeImage> {
        self.config.validate()?;
        let draw = |p: &PreparedLayout| {
            rendering::draw_layout(&p.layout, &self.config, BarcodeImage::new)
        };
        match self.cache.get(&self.key()) {
            Some(prepared) => {
                log::trace!("layout cache hit for {}", prepared.sequence);
                Ok(draw(prepared))
            }
            None => {
                log::trace!("layout cache miss");
                Ok(draw(&self.compute()?))
            }
        }
    }

    fn key(&self) -> LayoutKey {
        LayoutKey::new(
            self.barcode.as_deref().unwrap_or_default(),
            self.config.scale,
            self.config.height,
        )
    }

    fn compute(&self) -> Result<PreparedLayout> {
        let sequence = encoder::encode(self.barcode.as_deref().unwrap_or_default())?;
        let layout = layout::layout_sequence(&sequence, self.config.scale, self.config.height)?;
        Ok(PreparedLayout { sequence, layout })
    }
}
