//! Barcode rendering: module sequence to raster image
//!
//! Rendering runs in three steps: `layout` maps modules to pixel columns,
//! `paint` assigns colors, and `raster` fills the columns on a [`Canvas`].

pub mod cache;
pub mod layout;
pub mod paint;
pub mod raster;

pub use cache::{LayoutCache, LayoutKey, PreparedLayout};
pub use layout::{BarLayout, Rect, MAX_IMAGE_BYTES, MAX_IMAGE_DIMENSION};
pub use paint::PaintCommand;
pub use raster::{BarcodeImage, Canvas};

use crate::encoder::ModuleSequence;
use crate::error::Result;
use crate::RenderConfig;

/// Render `sequence` into a new [`BarcodeImage`]
pub fn render(sequence: &ModuleSequence, config: &RenderConfig) -> Result<BarcodeImage> {
    render_with(sequence, config, BarcodeImage::new)
}

/// Render `sequence` into a surface created by `make_canvas(width, height)`.
///
/// Parameters are validated before the surface is created, so no surface is
/// produced for an invalid configuration.
pub fn render_with<C, F>(
    sequence: &ModuleSequence,
    config: &RenderConfig,
    make_canvas: F,
) -> Result<C>
where
    C: Canvas,
    F: FnOnce(u32, u32) -> C,
{
    config.validate()?;
    let layout = layout::layout_sequence(sequence, config.scale, config.height)?;
    Ok(draw_layout(&layout, config, make_canvas))
}

/// Rasterize an already computed layout
pub(crate) fn draw_layout<C, F>(layout: &BarLayout, config: &RenderConfig, make_canvas: F) -> C
where
    C: Canvas,
    F: FnOnce(u32, u32) -> C,
{
    log::debug!(
        "rendering {}x{} barcode ({} columns)",
        layout.width,
        layout.height,
        layout.columns.len()
    );
    let commands = paint::paint_layout(layout, config.bar_color, config.background_color);
    let mut canvas = make_canvas(layout.width, layout.height);
    raster::rasterize(&commands, &mut canvas);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::error::RenderError;
    use crate::Rgba;

    fn config(scale: f64, height: f64) -> RenderConfig {
        RenderConfig {
            scale,
            height,
            ..Default::default()
        }
    }

    #[test]
    fn render_paints_bars_black_and_spaces_transparent() {
        let seq = encode("4006381333931").unwrap();
        let img = render(&seq, &config(3.0, 8.0)).unwrap();
        assert_eq!((img.width, img.height), (285, 8));
        let bits = seq.to_bit_string();
        for (module, bit) in bits.chars().enumerate() {
            let expected = if bit == '1' { Rgba::BLACK } else { Rgba::TRANSPARENT };
            for dx in 0..3 {
                let x = module as u32 * 3 + dx;
                assert_eq!(img.pixel(x, 0), Some(expected), "x={x}");
                assert_eq!(img.pixel(x, 7), Some(expected), "x={x}");
            }
        }
    }

    #[test]
    fn render_is_deterministic() {
        let seq = encode("5901234123457").unwrap();
        let cfg = RenderConfig {
            bar_color: Rgba::new(10, 20, 30, 255),
            background_color: Rgba::WHITE,
            ..config(1.7, 12.0)
        };
        assert_eq!(render(&seq, &cfg).unwrap(), render(&seq, &cfg).unwrap());
    }

    #[test]
    fn invalid_parameters_never_create_a_canvas() {
        let seq = encode("4006381333931").unwrap();
        let mut created = false;
        let res = render_with(&seq, &config(-1.0, 10.0), |w, h| {
            created = true;
            BarcodeImage::new(w, h)
        });
        assert!(matches!(res, Err(RenderError::InvalidParameter { name: "scale", .. })));
        assert!(!created);
    }

    #[test]
    fn render_with_custom_canvas() {
        struct Recorder {
            size: (u32, u32),
            fills: Vec<(u32, u32, Rgba)>,
        }
        impl Canvas for Recorder {
            fn dimensions(&self) -> (u32, u32) {
                self.size
            }
            fn fill_rect(&mut self, x: u32, _y: u32, width: u32, _height: u32, rgba: Rgba) {
                self.fills.push((x, width, rgba));
            }
        }

        let seq = encode("4006381333931").unwrap();
        let rec = render_with(&seq, &config(1.0, 4.0), |w, h| Recorder {
            size: (w, h),
            fills: Vec::new(),
        })
        .unwrap();
        assert_eq!(rec.dimensions(), (95, 4));
        assert_eq!(rec.fills.len(), 59);
        assert_eq!(rec.fills[0], (0, 1, Rgba::BLACK));
        assert_eq!(rec.fills.last(), Some(&(94, 1, Rgba::BLACK)));
    }
}
