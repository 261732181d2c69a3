/// Pixel geometry for a module sequence

use crate::encoder::{ModuleKind, ModuleSequence};
use crate::error::{RenderError, Result};

/// Largest width or height, in pixels, a rendered barcode may have
pub const MAX_IMAGE_DIMENSION: u32 = 32_768;

/// Largest RGBA8 buffer, in bytes, a rendered barcode may need
pub const MAX_IMAGE_BYTES: u64 = 256 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A full-height pixel column covering one bar or space run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub rect: Rect,
    pub kind: ModuleKind,
}

/// Image size plus the columns that tile it, left to right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarLayout {
    pub width: u32,
    pub height: u32,
    pub columns: Vec<Column>,
}

impl BarLayout {
    pub fn bars(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.kind == ModuleKind::Bar)
    }
}

/// Reject non-finite or non-positive values
pub fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RenderError::InvalidParameter { name, value })
    }
}

fn pixel_extent(name: &'static str, value: f64, extent: f64) -> Result<u32> {
    let px = extent.round();
    if px < 1.0 || px > f64::from(MAX_IMAGE_DIMENSION) {
        return Err(RenderError::InvalidParameter { name, value });
    }
    Ok(px as u32)
}

/// Compute the column layout for `sequence` at `scale` pixels per module.
///
/// Column edges are rounded from module offsets, so columns never drift and
/// always tile `[0, width)` exactly.
///
/// Below one pixel per module, runs that round to zero width are dropped and
/// neighbouring runs of the same kind merge. Such an image is lossy and will
/// not scan; use `scale >= 1.0` for anything meant to be read.
///
/// Fails with `InvalidParameter` if either side rounds to zero, exceeds
/// [`MAX_IMAGE_DIMENSION`], or the RGBA8 buffer would exceed [`MAX_IMAGE_BYTES`].
pub fn layout_sequence(sequence: &ModuleSequence, scale: f64, height: f64) -> Result<BarLayout> {
    check_positive("scale", scale)?;
    check_positive("height", height)?;

    let width = pixel_extent("scale", scale, f64::from(sequence.total_width()) * scale)?;
    let height_px = pixel_extent("height", height, height)?;
    let bytes = u64::from(width) * u64::from(height_px) * 4;
    if bytes > MAX_IMAGE_BYTES {
        return Err(RenderError::InvalidParameter {
            name: "image_bytes",
            value: bytes as f64,
        });
    }

    let edge = |module: u32| (f64::from(module) * scale).round() as u32;
    let columns = sequence
        .with_offsets()
        .filter_map(|(offset, m)| {
            let x0 = edge(offset);
            let x1 = edge(offset + u32::from(m.width));
            (x1 > x0).then_some(Column {
                rect: Rect {
                    x: x0,
                    y: 0,
                    width: x1 - x0,
                    height: height_px,
                },
                kind: m.kind,
            })
        })
        .collect();

    Ok(BarLayout {
        width,
        height: height_px,
        columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    fn sample() -> ModuleSequence {
        encode("4006381333931").unwrap()
    }

    #[test]
    fn unit_scale_maps_one_module_to_one_pixel() {
        let layout = layout_sequence(&sample(), 1.0, 20.0).unwrap();
        assert_eq!(layout.width, 95);
        assert_eq!(layout.height, 20);
        assert_eq!(layout.columns.len(), 59);
        assert_eq!(
            layout.columns[0].rect,
            Rect {
                x: 0,
                y: 0,
                width: 1,
                height: 20
            }
        );
        assert_eq!(layout.bars().count(), 30);
    }

    #[test]
    fn columns_tile_the_image_at_fractional_scale() {
        for scale in [0.5, 1.3, 2.0, 2.75, 3.1] {
            let layout = layout_sequence(&sample(), scale, 10.0).unwrap();
            let mut x = 0;
            for c in &layout.columns {
                assert_eq!(c.rect.x, x, "scale {scale}");
                x += c.rect.width;
            }
            assert_eq!(x, layout.width, "scale {scale}");
            assert_eq!(layout.width, (95.0 * scale).round() as u32);
        }
    }

    #[test]
    fn rejects_non_positive_and_non_finite_parameters() {
        let seq = sample();
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                layout_sequence(&seq, scale, 10.0),
                Err(RenderError::InvalidParameter { name: "scale", .. })
            ));
        }
        for height in [0.0, -3.0, f64::NAN] {
            assert!(matches!(
                layout_sequence(&seq, 1.0, height),
                Err(RenderError::InvalidParameter { name: "height", .. })
            ));
        }
    }

    #[test]
    fn rejects_sizes_that_round_to_nothing_or_overflow() {
        let seq = sample();
        assert!(layout_sequence(&seq, 0.001, 10.0).is_err());
        assert!(layout_sequence(&seq, 1.0, 0.2).is_err());
        assert!(layout_sequence(&seq, 1000.0, 10.0).is_err());
    }

    #[test]
    fn rejects_sizes_within_each_axis_but_over_the_byte_limit() {
        let seq = sample();
        // 32680 x 32768 passes both axis checks but needs about 4 GiB
        assert!(matches!(
            layout_sequence(&seq, 344.0, 32768.0),
            Err(RenderError::InvalidParameter { name: "image_bytes", .. })
        ));
        let big = layout_sequence(&seq, 100.0, 1000.0).unwrap();
        assert_eq!((big.width, big.height), (9500, 1000));
    }

    #[test]
    fn sub_pixel_scale_drops_runs() {
        let layout = layout_sequence(&sample(), 0.5, 10.0).unwrap();
        assert!(layout.columns.len() < sample().modules().len());
        let merged = layout
            .columns
            .windows(2)
            .filter(|w| w[0].kind == w[1].kind)
            .count();
        assert!(merged > 0);
    }
}
