//! PNG export of the canvas.
//!
//! Feature-gated behind `png` (default on) so the rest of the crate stays
//! free of the `image` dependency when only the pixel conversion is needed.

use std::path::Path;

use flowfield_core::error::FlowError;

use crate::canvas::Canvas;
use crate::pixel::canvas_to_rgba;

/// Writes the canvas to a PNG file.
///
/// Returns `FlowError::InvalidDimensions` if the canvas dimensions overflow
/// `u32`, or `FlowError::Io` on encode/write failure.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), FlowError> {
    let rgba = canvas_to_rgba(canvas);
    let w = u32::try_from(canvas.width()).map_err(|_| FlowError::InvalidDimensions)?;
    let h = u32::try_from(canvas.height()).map_err(|_| FlowError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| FlowError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| FlowError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowfield_core::color::Hsb;
    use flowfield_core::renderer::Renderer;
    use glam::DVec2;

    #[test]
    fn write_png_round_trip() {
        let mut canvas = Canvas::new(16, 16).unwrap();
        canvas.draw_point(DVec2::new(8.0, 8.0), Hsb::new(0.0, 0.0, 255.0), 1.0);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        write_png(&canvas, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 16);
        assert_eq!(img.get_pixel(8, 8).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn write_png_to_bad_path_reports_io_error() {
        let canvas = Canvas::new(4, 4).unwrap();
        let result = write_png(&canvas, Path::new("/nonexistent-dir/frame.png"));
        assert!(matches!(result, Err(FlowError::Io(_))));
    }
}
