//! Drawing seam between the simulation and the raster surface.
//!
//! The simulation only fades the background and plots points; everything
//! else about the surface (pixel format, export) belongs to the
//! implementation. The trait is object-safe so the particle pass can take
//! `&mut dyn Renderer`.

use glam::DVec2;

use crate::color::{Hsb, Srgb};

/// A raster surface the particle system draws onto.
pub trait Renderer {
    /// Blends a full-surface rect of `color` at `alpha` in [0, 1] over the
    /// current contents. Called once per frame to fade trails.
    fn fill_background(&mut self, color: Srgb, alpha: f64);

    /// Plots a single point at a canvas position with `alpha` in [0, 1].
    /// Positions outside the surface are ignored.
    fn draw_point(&mut self, pos: DVec2, color: Hsb, alpha: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records calls to verify trait object safety and call forwarding.
    #[derive(Default)]
    struct RecordingRenderer {
        fills: usize,
        points: Vec<DVec2>,
    }

    impl Renderer for RecordingRenderer {
        fn fill_background(&mut self, _color: Srgb, _alpha: f64) {
            self.fills += 1;
        }

        fn draw_point(&mut self, pos: DVec2, _color: Hsb, _alpha: f64) {
            self.points.push(pos);
        }
    }

    #[test]
    fn renderer_is_object_safe() {
        let mut recorder = RecordingRenderer::default();
        let renderer: &mut dyn Renderer = &mut recorder;
        renderer.fill_background(Srgb::BLACK, 0.1);
        renderer.draw_point(DVec2::new(3.0, 4.0), Hsb::new(0.0, 255.0, 255.0), 0.4);
        assert_eq!(recorder.fills, 1);
        assert_eq!(recorder.points, vec![DVec2::new(3.0, 4.0)]);
    }
}
