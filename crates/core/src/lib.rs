#![deny(unsafe_code)]
//! Core types for the flowfield particle renderer.
//!
//! Provides the noise-driven vector grid ([`FlowField`]), the coherent-noise
//! sampler ([`NoiseField`]), the [`Particle`]/[`ParticleSystem`] pair, the
//! [`MaskFilter`] visibility stencil, the [`Parameters`] snapshot, HSB color
//! conversion, the `Xorshift64` PRNG, and the [`Renderer`] drawing seam.

pub mod color;
pub mod error;
pub mod field;
pub mod field_source;
pub mod mask;
pub mod params;
pub mod particle;
pub mod prng;
pub mod renderer;
pub mod system;

pub use color::{Hsb, Srgb};
pub use error::FlowError;
pub use field::FlowField;
pub use field_source::NoiseField;
pub use mask::MaskFilter;
pub use params::Parameters;
pub use particle::Particle;
pub use prng::Xorshift64;
pub use renderer::Renderer;
pub use system::ParticleSystem;
