//! A single flow-field particle: position, velocity, acceleration, and a
//! cycling hue.
//!
//! Each frame a particle samples the grid cell under it (`follow`),
//! integrates motion with a speed cap (`update`), wraps toroidally at the
//! canvas edges (`edges`), and draws itself if the mask admits its position
//! (`show`). The hue advances every frame whether or not the particle was
//! drawn, so color cycling never stalls inside masked regions.

use glam::DVec2;

use crate::color::Hsb;
use crate::field::FlowField;
use crate::mask::MaskFilter;
use crate::prng::Xorshift64;
use crate::renderer::Renderer;

/// Velocity magnitude cap in canvas units per frame.
pub const MAX_SPEED: f64 = 2.0;

/// Per-point draw opacity (100 out of 255).
pub const POINT_ALPHA: f64 = 100.0 / 255.0;

/// Fraction of the canvas, centered, in which particles spawn.
const SPAWN_REGION: f64 = 0.6;

/// A moving point steered by the flow field.
#[derive(Debug, Clone)]
pub struct Particle {
    pos: DVec2,
    vel: DVec2,
    acc: DVec2,
    hue: u8,
}

impl Particle {
    /// Creates a particle at rest with the given position and hue.
    pub fn new(pos: DVec2, hue: u8) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            acc: DVec2::ZERO,
            hue,
        }
    }

    /// Spawns a particle at a random position inside the central 60% of the
    /// canvas with a random starting hue.
    pub fn spawn(rng: &mut Xorshift64, width: f64, height: f64) -> Self {
        let margin = (1.0 - SPAWN_REGION) / 2.0;
        let pos = DVec2::new(
            rng.next_range(width * margin, width * (1.0 - margin)),
            rng.next_range(height * margin, height * (1.0 - margin)),
        );
        let hue = rng.next_range(0.0, 255.0) as u8;
        Self::new(pos, hue)
    }

    /// Current position.
    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    /// Current velocity.
    pub fn vel(&self) -> DVec2 {
        self.vel
    }

    /// Current hue in [0, 255].
    pub fn hue(&self) -> u8 {
        self.hue
    }

    /// Adds a force to the acceleration accumulator.
    pub fn apply_force(&mut self, force: DVec2) {
        self.acc += force;
    }

    /// Applies the flow vector of the grid cell under the particle.
    ///
    /// Positions outside the grid's coverage receive no force; that is the
    /// defined policy, not an error.
    pub fn follow(&mut self, field: &FlowField) {
        if let Some(force) = field.vector_at(self.pos) {
            self.apply_force(force);
        }
    }

    /// Integrates one frame of motion: velocity gains the accumulated
    /// acceleration, is capped at [`MAX_SPEED`], moves the position, and the
    /// accumulator resets to zero — only after the integration.
    pub fn update(&mut self) {
        self.vel = (self.vel + self.acc).clamp_length_max(MAX_SPEED);
        self.pos += self.vel;
        self.acc = DVec2::ZERO;
    }

    /// Wraps the position toroidally into [0, width) x [0, height).
    pub fn edges(&mut self, width: f64, height: f64) {
        self.pos.x = wrap(self.pos.x, width);
        self.pos.y = wrap(self.pos.y, height);
    }

    /// Draws the particle if visible, then advances the hue.
    ///
    /// With a mask present, visibility is the mask's call; without one the
    /// particle always draws. The hue advances by 1 mod 256 in either case.
    pub fn show(&mut self, mask: Option<&MaskFilter>, renderer: &mut dyn Renderer) {
        let visible = match mask {
            Some(m) => m.is_visible(self.pos.x, self.pos.y),
            None => true,
        };
        if visible {
            let color = Hsb::new(self.hue as f64, 255.0, 255.0);
            renderer.draw_point(self.pos, color, POINT_ALPHA);
        }
        self.hue = self.hue.wrapping_add(1);
    }
}

/// Toroidal wrap of `v` into [0, max).
fn wrap(v: f64, max: f64) -> f64 {
    let w = v.rem_euclid(max);
    // rem_euclid can round up to exactly `max` for tiny negative inputs
    if w >= max {
        0.0
    } else {
        w
    }
}
