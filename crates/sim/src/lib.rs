#![deny(unsafe_code)]
//! Frame-driven flow-field simulation.
//!
//! [`FlowSim`] ties the core pieces together into the per-frame loop: fade
//! the canvas toward black, regenerate the flow field from the current
//! parameter snapshot, advance the animation depth, then run every particle
//! through the field. One tick is atomic; the only state carried between
//! ticks is the z offset and the particle population.

use flowfield_core::error::FlowError;
use flowfield_core::field::{FlowField, Z_STEP};
use flowfield_core::mask::MaskFilter;
use flowfield_core::params::Parameters;
use flowfield_core::prng::Xorshift64;
use flowfield_core::renderer::Renderer;
use flowfield_core::system::ParticleSystem;
use flowfield_core::Srgb;

/// The complete simulation: field, particles, and the running z offset.
///
/// Canvas size, cell size, and population are fixed at construction. Every
/// knob that may change between frames arrives through the [`Parameters`]
/// snapshot passed to [`tick`](FlowSim::tick).
pub struct FlowSim {
    field: FlowField,
    system: ParticleSystem,
    z: f64,
    frame: u64,
}

impl FlowSim {
    /// Builds a simulation over a `width` x `height` canvas.
    ///
    /// `cell_size` fixes the flow-field resolution, `population` the particle
    /// count, and `placement_seed` the deterministic initial placement.
    pub fn new(
        width: f64,
        height: f64,
        cell_size: f64,
        population: usize,
        placement_seed: u64,
    ) -> Result<Self, FlowError> {
        let field = FlowField::new(width, height, cell_size)?;
        let mut rng = Xorshift64::new(placement_seed);
        let system = ParticleSystem::new(population, width, height, &mut rng)?;
        Ok(Self {
            field,
            system,
            z: 0.0,
            frame: 0,
        })
    }

    /// Runs one frame.
    ///
    /// Reads the parameter snapshot once, fades the surface by
    /// `trail_fade / 255`, rebuilds the field at the current z, advances z by
    /// [`Z_STEP`], and advances every particle. Masking applies only when the
    /// snapshot enables it *and* a mask raster was supplied; readiness of the
    /// raster is the caller's startup precondition, not checked here.
    pub fn tick(
        &mut self,
        params: &Parameters,
        mask: Option<&MaskFilter>,
        renderer: &mut dyn Renderer,
    ) {
        renderer.fill_background(Srgb::BLACK, params.trail_fade / 255.0);

        self.field.regenerate(params, self.z);
        self.z += Z_STEP;

        let mask = if params.mask_enabled { mask } else { None };
        self.system.tick(&self.field, mask, renderer);
        self.frame += 1;
    }

    /// Current animation depth.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Number of completed ticks.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// The flow field as of the last tick.
    pub fn field(&self) -> &FlowField {
        &self.field
    }

    /// The particle population.
    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowfield_core::color::Hsb;
    use glam::DVec2;

    /// Records the frame structure: one background fill, then points.
    #[derive(Default)]
    struct RecordingRenderer {
        fills: Vec<f64>,
        points: usize,
    }

    impl Renderer for RecordingRenderer {
        fn fill_background(&mut self, _color: Srgb, alpha: f64) {
            self.fills.push(alpha);
        }

        fn draw_point(&mut self, _pos: DVec2, _color: Hsb, _alpha: f64) {
            self.points += 1;
        }
    }

    fn opaque_black_mask(width: usize, height: usize) -> MaskFilter {
        let mut rgba = vec![0u8; width * height * 4];
        for px in rgba.chunks_exact_mut(4) {
            px[3] = 255;
        }
        MaskFilter::from_rgba(width, height, rgba).unwrap()
    }

    #[test]
    fn new_builds_grid_and_population() {
        let sim = FlowSim::new(1000.0, 1000.0, 20.0, 1000, 42).unwrap();
        assert_eq!(sim.field().cols(), 50);
        assert_eq!(sim.field().rows(), 50);
        assert_eq!(sim.system().len(), 1000);
        assert_eq!(sim.frame(), 0);
        assert_eq!(sim.z(), 0.0);
    }

    #[test]
    fn new_propagates_invalid_dimensions() {
        assert!(FlowSim::new(10.0, 10.0, 20.0, 100, 42).is_err());
        assert!(FlowSim::new(1000.0, 1000.0, 0.0, 100, 42).is_err());
    }

    #[test]
    fn tick_fades_then_draws_every_particle() {
        let mut sim = FlowSim::new(200.0, 200.0, 20.0, 64, 42).unwrap();
        let mut renderer = RecordingRenderer::default();
        sim.tick(&Parameters::default(), None, &mut renderer);
        assert_eq!(renderer.fills, vec![20.0 / 255.0]);
        assert_eq!(renderer.points, 64);
    }

    #[test]
    fn z_advances_by_fixed_step_each_tick() {
        let mut sim = FlowSim::new(200.0, 200.0, 20.0, 8, 42).unwrap();
        let mut renderer = RecordingRenderer::default();
        for i in 1..=10u64 {
            sim.tick(&Parameters::default(), None, &mut renderer);
            assert!((sim.z() - i as f64 * Z_STEP).abs() < 1e-12);
            assert_eq!(sim.frame(), i);
        }
    }

    #[test]
    fn mask_toggle_off_ignores_supplied_mask() {
        let mask = opaque_black_mask(200, 200);
        let params = Parameters {
            mask_enabled: false,
            ..Parameters::default()
        };
        let mut sim = FlowSim::new(200.0, 200.0, 20.0, 32, 42).unwrap();
        let mut renderer = RecordingRenderer::default();
        sim.tick(&params, Some(&mask), &mut renderer);
        assert_eq!(renderer.points, 32, "disabled mask must not suppress draws");
    }

    #[test]
    fn mask_toggle_on_applies_supplied_mask() {
        let mask = opaque_black_mask(200, 200);
        let mut sim = FlowSim::new(200.0, 200.0, 20.0, 32, 42).unwrap();
        let mut renderer = RecordingRenderer::default();
        sim.tick(&Parameters::default(), Some(&mask), &mut renderer);
        assert_eq!(renderer.points, 0, "opaque black mask must suppress draws");
    }

    #[test]
    fn mask_enabled_without_raster_draws_unmasked() {
        let mut sim = FlowSim::new(200.0, 200.0, 20.0, 32, 42).unwrap();
        let mut renderer = RecordingRenderer::default();
        sim.tick(&Parameters::default(), None, &mut renderer);
        assert_eq!(renderer.points, 32);
    }

    #[test]
    fn identical_seeds_and_params_evolve_identically() {
        let mut a = FlowSim::new(200.0, 200.0, 20.0, 100, 9).unwrap();
        let mut b = FlowSim::new(200.0, 200.0, 20.0, 100, 9).unwrap();
        let params = Parameters {
            noise_seed: 42,
            amplitude: 2.0,
            ..Parameters::default()
        };
        let mut renderer = RecordingRenderer::default();
        for _ in 0..30 {
            a.tick(&params, None, &mut renderer);
            b.tick(&params, None, &mut renderer);
        }
        for (pa, pb) in a.system().particles().iter().zip(b.system().particles()) {
            assert_eq!(pa.pos().x.to_bits(), pb.pos().x.to_bits());
            assert_eq!(pa.pos().y.to_bits(), pb.pos().y.to_bits());
            assert_eq!(pa.hue(), pb.hue());
        }
    }

    #[test]
    fn parameter_changes_between_ticks_take_effect() {
        let mut sim = FlowSim::new(200.0, 200.0, 20.0, 8, 42).unwrap();
        let mut renderer = RecordingRenderer::default();

        sim.tick(&Parameters::default(), None, &mut renderer);
        let loose = Parameters {
            trail_fade: 255.0,
            amplitude: 5.0,
            ..Parameters::default()
        };
        sim.tick(&loose, None, &mut renderer);

        assert_eq!(renderer.fills, vec![20.0 / 255.0, 1.0]);
        for v in sim.field().vectors() {
            assert!((v.length() - 5.0).abs() < 1e-9);
        }
    }
}
