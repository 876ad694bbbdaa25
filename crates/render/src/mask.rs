//! Mask asset loading: image file to canvas-sized [`MaskFilter`].
//!
//! The source image is scaled into the central 80% x 80% region of a
//! transparent canvas-sized raster; the 10% border all around stays
//! transparent and therefore invisible. Loading happens once at startup and
//! failure is fatal to the caller: the simulation assumes a ready mask
//! before the first masked tick.

use std::path::Path;

use image::imageops::{self, FilterType};

use flowfield_core::error::FlowError;
use flowfield_core::mask::MaskFilter;

/// Fraction of each canvas dimension the scaled mask occupies, centered.
const MASK_REGION: f64 = 0.8;

/// Loads an image file and scales it into the central region of a
/// `width` x `height` mask raster.
///
/// Returns `FlowError::Io` when the file cannot be read or decoded, and
/// `FlowError::InvalidDimensions` when the canvas is too small to hold a
/// non-empty mask region.
pub fn load_mask(path: &Path, width: usize, height: usize) -> Result<MaskFilter, FlowError> {
    let img = image::open(path)
        .map_err(|e| FlowError::Io(format!("failed to load mask {}: {e}", path.display())))?
        .to_rgba8();
    scale_into_center(&img, width, height)
}

/// Scales an RGBA image into the central [`MASK_REGION`] of a canvas-sized
/// raster and wraps it in a [`MaskFilter`].
pub fn scale_into_center(
    img: &image::RgbaImage,
    width: usize,
    height: usize,
) -> Result<MaskFilter, FlowError> {
    let region_w = (width as f64 * MASK_REGION) as u32;
    let region_h = (height as f64 * MASK_REGION) as u32;
    if region_w == 0 || region_h == 0 {
        return Err(FlowError::InvalidDimensions);
    }
    let scaled = imageops::resize(img, region_w, region_h, FilterType::Triangle);

    let margin = (1.0 - MASK_REGION) / 2.0;
    let x0 = (width as f64 * margin) as usize;
    let y0 = (height as f64 * margin) as usize;

    let mut rgba = vec![0u8; width * height * 4];
    for (x, y, px) in scaled.enumerate_pixels() {
        let cx = x0 + x as usize;
        let cy = y0 + y as usize;
        if cx < width && cy < height {
            let idx = 4 * (cy * width + cx);
            rgba[idx..idx + 4].copy_from_slice(&px.0);
        }
    }
    MaskFilter::from_rgba(width, height, rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_white(width: u32, height: u32) -> image::RgbaImage {
        image::RgbaImage::from_pixel(width, height, image::Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn center_of_white_mask_is_visible() {
        let mask = scale_into_center(&solid_white(40, 40), 100, 100).unwrap();
        assert!(mask.is_visible(50.0, 50.0));
    }

    #[test]
    fn border_outside_region_is_invisible() {
        let mask = scale_into_center(&solid_white(40, 40), 100, 100).unwrap();
        // the outer 10% margin stays transparent
        assert!(!mask.is_visible(2.0, 2.0));
        assert!(!mask.is_visible(97.0, 97.0));
        assert!(!mask.is_visible(50.0, 5.0));
    }

    #[test]
    fn region_edges_follow_the_80_percent_rule() {
        let mask = scale_into_center(&solid_white(10, 10), 100, 100).unwrap();
        assert!(mask.is_visible(10.0, 50.0), "left edge of region");
        assert!(mask.is_visible(89.0, 50.0), "right edge of region");
        assert!(!mask.is_visible(9.0, 50.0), "just outside the region");
        assert!(!mask.is_visible(90.0, 50.0), "just outside the region");
    }

    #[test]
    fn raster_matches_canvas_dimensions() {
        let mask = scale_into_center(&solid_white(7, 13), 64, 48).unwrap();
        assert_eq!(mask.width(), 64);
        assert_eq!(mask.height(), 48);
    }

    #[test]
    fn too_small_canvas_is_rejected() {
        let result = scale_into_center(&solid_white(4, 4), 1, 1);
        assert!(matches!(result, Err(FlowError::InvalidDimensions)));
    }

    #[test]
    fn load_mask_missing_file_reports_io_error() {
        let result = load_mask(Path::new("/nonexistent/mask.png"), 100, 100);
        assert!(matches!(result, Err(FlowError::Io(_))));
    }

    #[test]
    fn load_mask_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");
        solid_white(20, 20).save(&path).unwrap();

        let mask = load_mask(&path, 200, 200).unwrap();
        assert!(mask.is_visible(100.0, 100.0));
        assert!(!mask.is_visible(5.0, 5.0));
    }
}
