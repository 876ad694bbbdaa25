//! Coherent-noise sampling for flow-field generation.
//!
//! Wraps `noise::Perlin` behind a normalized [0, 1] sampling interface.
//! Deterministic: the same (seed, x, y, z) always yields the same sample.

use noise::{NoiseFn, Perlin};

/// 3-D coherent-noise sampler normalized to [0, 1].
///
/// The third coordinate is the animation axis: advancing `z` slightly each
/// frame evolves the field smoothly over time.
pub struct NoiseField {
    noise: Perlin,
}

impl NoiseField {
    /// Creates a sampler for the given seed.
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
        }
    }

    /// Samples the noise at (x, y, z), mapped from the generator's roughly
    /// [-1, 1] output into [0, 1].
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        ((self.noise.get([x, y, z]) + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}
