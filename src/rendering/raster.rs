/// Rasterizer: executes paint commands against a pixel surface

use sha2::{Digest, Sha256};

use crate::rendering::paint::PaintCommand;
use crate::Rgba;

/// A 2D raster surface that can be filled with solid rectangles.
///
/// Host environments implement this for their own image types; the crate
/// ships [`BarcodeImage`] as a plain RGBA8 implementation.
pub trait Canvas {
    /// Width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Replace every pixel in the rectangle with `rgba`, clipped to the surface
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, rgba: Rgba);
}

/// Row-major RGBA8 image, 4 bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl BarcodeImage {
    /// A fully transparent image
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let p = &self.pixels[i..i + 4];
        Some(Rgba::new(p[0], p[1], p[2], p[3]))
    }

    /// Hex SHA-256 over the dimensions and pixel data
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width.to_be_bytes());
        hasher.update(self.height.to_be_bytes());
        hasher.update(&self.pixels);
        hex::encode(hasher.finalize())
    }
}

impl Canvas for BarcodeImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, rgba: Rgba) {
        let x1 = x.saturating_add(width).min(self.width) as usize;
        let y1 = y.saturating_add(height).min(self.height) as usize;
        let (x0, y0) = (x as usize, y as usize);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let px = [rgba.r, rgba.g, rgba.b, rgba.a];
        let stride = self.width as usize * 4;
        for row in y0..y1 {
            let start = row * stride + x0 * 4;
            let end = row * stride + x1 * 4;
            for chunk in self.pixels[start..end].chunks_exact_mut(4) {
                chunk.copy_from_slice(&px);
            }
        }
    }
}

pub fn rasterize<C: Canvas>(commands: &[PaintCommand], canvas: &mut C) {
    for cmd in commands {
        match *cmd {
            PaintCommand::SolidRect {
                x,
                y,
                width,
                height,
                rgba,
            } => canvas.fill_rect(x, y, width, height, rgba),
        }
    }
}
