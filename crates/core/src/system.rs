//! The particle system: a fixed population advanced in a fixed order.
//!
//! Particles are created once and never destroyed; each tick runs `follow`,
//! `update`, `edges`, `show` on every particle sequentially. Particles do
//! not interact, and the fixed iteration order keeps hue cycling and draw
//! order deterministic.

use crate::error::FlowError;
use crate::field::FlowField;
use crate::mask::MaskFilter;
use crate::particle::Particle;
use crate::prng::Xorshift64;
use crate::renderer::Renderer;

/// Fixed-size collection of particles over a canvas.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleSystem {
    /// Spawns `population` particles over a `width` x `height` canvas using
    /// the given PRNG for placement.
    ///
    /// Returns `FlowError::InvalidDimensions` unless both dimensions are
    /// positive and finite.
    pub fn new(
        population: usize,
        width: f64,
        height: f64,
        rng: &mut Xorshift64,
    ) -> Result<Self, FlowError> {
        if !(width > 0.0) || !(height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(FlowError::InvalidDimensions);
        }
        let particles = (0..population)
            .map(|_| Particle::spawn(rng, width, height))
            .collect();
        Ok(Self {
            particles,
            width,
            height,
        })
    }

    /// Number of particles. Constant for the lifetime of the system.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Read-only access to the particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advances every particle one frame: steer from the field, integrate,
    /// wrap at the edges, then draw through the mask.
    pub fn tick(
        &mut self,
        field: &FlowField,
        mask: Option<&MaskFilter>,
        renderer: &mut dyn Renderer,
    ) {
        for particle in &mut self.particles {
            particle.follow(field);
            particle.update();
            particle.edges(self.width, self.height);
            particle.show(mask, renderer);
        }
    }
}
