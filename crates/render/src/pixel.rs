//! Pure conversion from the f64 canvas to an RGBA8 pixel buffer.
//!
//! Always available (no feature gate) so callers that bring their own
//! encoder can share the same conversion as the PNG snapshot path.

use crate::canvas::Canvas;

/// Converts the canvas to an RGBA8 buffer of `width * height * 4` bytes.
///
/// Channels are clamped to [0, 1], quantized with rounding, and alpha is
/// always 255.
pub fn canvas_to_rgba(canvas: &Canvas) -> Vec<u8> {
    canvas
        .data()
        .chunks_exact(3)
        .flat_map(|px| {
            let r = (px[0].clamp(0.0, 1.0) * 255.0).round() as u8;
            let g = (px[1].clamp(0.0, 1.0) * 255.0).round() as u8;
            let b = (px[2].clamp(0.0, 1.0) * 255.0).round() as u8;
            [r, g, b, 255u8]
        })
        .collect()
}
