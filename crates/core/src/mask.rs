//! Mask filter: a raster stencil restricting where particles may draw.
//!
//! The raster is canvas-sized RGBA8, prepared once at startup (the asset
//! loader scales the source image into the central region) and read-only
//! afterwards. A point is visible where the pixel under it is both
//! non-black and non-transparent past a fixed threshold.

use crate::error::FlowError;

/// Brightness/alpha threshold (out of 255) a pixel must exceed to count as
/// visible. Filters sensor noise and near-black fringes in mask assets.
const VISIBILITY_THRESHOLD: f64 = 10.0;

/// Canvas-sized RGBA8 stencil with per-pixel visibility lookup.
#[derive(Debug, Clone)]
pub struct MaskFilter {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

impl MaskFilter {
    /// Wraps a raw RGBA8 buffer of `width * height` pixels.
    ///
    /// Returns `FlowError::InvalidDimensions` for zero dimensions and
    /// `FlowError::BufferSizeMismatch` when the buffer length is not
    /// `width * height * 4`.
    pub fn from_rgba(width: usize, height: usize, rgba: Vec<u8>) -> Result<Self, FlowError> {
        if width == 0 || height == 0 {
            return Err(FlowError::InvalidDimensions);
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(FlowError::InvalidDimensions)?;
        if rgba.len() != expected {
            return Err(FlowError::BufferSizeMismatch {
                expected,
                got: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Raster width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel under canvas position (x, y) admits drawing.
    ///
    /// The position floors to an integer pixel. Out-of-raster positions are
    /// not visible. In-raster pixels are visible when the RGB average and
    /// the alpha channel both exceed the threshold of 10/255.
    pub fn is_visible(&self, x: f64, y: f64) -> bool {
        let xi = x.floor();
        let yi = y.floor();
        if xi < 0.0 || yi < 0.0 || xi >= self.width as f64 || yi >= self.height as f64 {
            return false;
        }
        let idx = 4 * (yi as usize * self.width + xi as usize);
        let [r, g, b, a] = [
            self.rgba[idx],
            self.rgba[idx + 1],
            self.rgba[idx + 2],
            self.rgba[idx + 3],
        ];
        let brightness = (r as f64 + g as f64 + b as f64) / 3.0;
        brightness > VISIBILITY_THRESHOLD && a as f64 > VISIBILITY_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 mask with one pixel of the given RGBA at (0, 0), rest transparent.
    fn mask_with_pixel(rgba: [u8; 4]) -> MaskFilter {
        let mut buf = vec![0u8; 2 * 2 * 4];
        buf[..4].copy_from_slice(&rgba);
        MaskFilter::from_rgba(2, 2, buf).unwrap()
    }

    // -- Construction --

    #[test]
    fn from_rgba_accepts_matching_buffer() {
        let mask = MaskFilter::from_rgba(4, 3, vec![0; 48]).unwrap();
        assert_eq!(mask.width(), 4);
        assert_eq!(mask.height(), 3);
    }

    #[test]
    fn from_rgba_rejects_zero_dimensions() {
        assert!(matches!(
            MaskFilter::from_rgba(0, 3, vec![]),
            Err(FlowError::InvalidDimensions)
        ));
        assert!(matches!(
            MaskFilter::from_rgba(3, 0, vec![]),
            Err(FlowError::InvalidDimensions)
        ));
    }

    #[test]
    fn from_rgba_rejects_wrong_buffer_length() {
        let result = MaskFilter::from_rgba(2, 2, vec![0; 15]);
        assert!(matches!(
            result,
            Err(FlowError::BufferSizeMismatch {
                expected: 16,
                got: 15
            })
        ));
    }

    // -- Visibility policy --

    #[test]
    fn opaque_black_is_not_visible() {
        let mask = mask_with_pixel([0, 0, 0, 255]);
        assert!(!mask.is_visible(0.0, 0.0));
    }

    #[test]
    fn opaque_gray_is_visible() {
        let mask = mask_with_pixel([200, 200, 200, 255]);
        assert!(mask.is_visible(0.0, 0.0));
    }

    #[test]
    fn transparent_gray_is_not_visible() {
        let mask = mask_with_pixel([200, 200, 200, 0]);
        assert!(!mask.is_visible(0.0, 0.0));
    }

    #[test]
    fn brightness_exactly_at_threshold_is_not_visible() {
        // Average of (10, 10, 10) is exactly 10; the test is strict.
        let mask = mask_with_pixel([10, 10, 10, 255]);
        assert!(!mask.is_visible(0.0, 0.0));
    }

    #[test]
    fn brightness_just_over_threshold_is_visible() {
        // Average of (11, 11, 11) is 11.
        let mask = mask_with_pixel([11, 11, 11, 255]);
        assert!(mask.is_visible(0.0, 0.0));
    }

    #[test]
    fn alpha_exactly_at_threshold_is_not_visible() {
        let mask = mask_with_pixel([200, 200, 200, 10]);
        assert!(!mask.is_visible(0.0, 0.0));
    }

    #[test]
    fn out_of_raster_positions_are_not_visible() {
        let mask = mask_with_pixel([255, 255, 255, 255]);
        assert!(!mask.is_visible(-0.5, 0.0));
        assert!(!mask.is_visible(0.0, -0.5));
        assert!(!mask.is_visible(2.0, 0.0));
        assert!(!mask.is_visible(0.0, 2.0));
    }

    #[test]
    fn fractional_position_floors_to_pixel() {
        let mask = mask_with_pixel([255, 255, 255, 255]);
        assert!(mask.is_visible(0.9, 0.9));
        assert!(!mask.is_visible(1.1, 0.9));
    }
}
