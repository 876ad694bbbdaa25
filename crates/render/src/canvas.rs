//! Raster canvas with source-over blending.
//!
//! Pixels are stored as f64 RGB triples in [0, 1] so that hundreds of
//! low-alpha fade passes accumulate without 8-bit quantization washing the
//! trails out. Conversion to RGBA8 happens once, at snapshot time.

use glam::DVec2;

use flowfield_core::color::{hsb_to_srgb, Hsb, Srgb};
use flowfield_core::error::FlowError;
use flowfield_core::renderer::Renderer;

/// Fixed-size RGB raster surface. Starts black.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Canvas {
    /// Creates a black canvas of the given dimensions.
    ///
    /// Returns `FlowError::InvalidDimensions` if either dimension is zero or
    /// the pixel count overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, FlowError> {
        if width == 0 || height == 0 {
            return Err(FlowError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(FlowError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the row-major RGB data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns the color at pixel (x, y), or `None` out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Srgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = 3 * (y * self.width + x);
        Some(Srgb {
            r: self.data[idx],
            g: self.data[idx + 1],
            b: self.data[idx + 2],
        })
    }

    /// Source-over blend of `src` onto the channel at `idx` with opacity `a`.
    fn blend(&mut self, idx: usize, src: f64, a: f64) {
        self.data[idx] += (src - self.data[idx]) * a;
    }
}

impl Renderer for Canvas {
    fn fill_background(&mut self, color: Srgb, alpha: f64) {
        let a = alpha.clamp(0.0, 1.0);
        if a == 0.0 {
            return;
        }
        for px in self.data.chunks_exact_mut(3) {
            px[0] += (color.r - px[0]) * a;
            px[1] += (color.g - px[1]) * a;
            px[2] += (color.b - px[2]) * a;
        }
    }

    fn draw_point(&mut self, pos: DVec2, color: Hsb, alpha: f64) {
        let x = pos.x.floor();
        let y = pos.y.floor();
        if x < 0.0 || y < 0.0 || x >= self.width as f64 || y >= self.height as f64 {
            return;
        }
        let a = alpha.clamp(0.0, 1.0);
        let src = hsb_to_srgb(color);
        let idx = 3 * (y as usize * self.width + x as usize);
        self.blend(idx, src.r, a);
        self.blend(idx + 1, src.g, a);
        self.blend(idx + 2, src.b, a);
    }
}
