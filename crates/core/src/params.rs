//! The per-frame parameter snapshot and JSON extraction helpers.
//!
//! A [`Parameters`] value captures every live-adjustable knob for one tick.
//! Whoever owns the knobs (CLI flags, a UI panel) builds a fresh snapshot
//! each frame; the simulation only ever reads it. All numeric values are
//! clamped to their documented ranges on construction, so downstream code
//! never range-checks.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Default canvas fade per frame (out of 255).
const DEFAULT_TRAIL_FADE: f64 = 20.0;
/// Default coherent-noise seed.
const DEFAULT_NOISE_SEED: u32 = 0;
/// Default noise period in grid cells.
const DEFAULT_NOISE_PERIOD: f64 = 10.0;
/// Default grid vector magnitude.
const DEFAULT_AMPLITUDE: f64 = 1.0;
/// Default noise reshaping exponent.
const DEFAULT_EXPONENT: f64 = 1.0;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or
/// the wrong type. Accepts JSON integers as well as floats.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `u32` from `params[name]`, returning `default` if missing,
/// negative, fractional, or out of `u32` range.
pub fn param_u32(params: &Value, name: &str, default: u32) -> u32 {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}

/// Extracts a `bool` from `params[name]`, returning `default` if missing or
/// the wrong type.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

/// Live-adjustable knobs, read fresh each frame.
///
/// Ranges: `trail_fade` 0–255, `noise_seed` 0–10000, `noise_period` 1–100,
/// `amplitude` 0.1–5, `exponent` 0.5–5. Construct via [`Parameters::default`],
/// [`Parameters::from_json`], or any means followed by
/// [`Parameters::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Opacity of the black fade rect drawn before each frame, out of 255.
    pub trail_fade: f64,
    /// Seed for the coherent-noise generator.
    pub noise_seed: u32,
    /// Noise period: cells per noise unit. Higher values give smoother flow.
    pub noise_period: f64,
    /// Magnitude assigned to every grid vector.
    pub amplitude: f64,
    /// Exponent applied to the raw noise sample before the angle mapping.
    pub exponent: f64,
    /// Quantize flow angles to the 8 compass directions.
    pub geometric_snap: bool,
    /// Restrict particle drawing to the mask stencil.
    pub mask_enabled: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            trail_fade: DEFAULT_TRAIL_FADE,
            noise_seed: DEFAULT_NOISE_SEED,
            noise_period: DEFAULT_NOISE_PERIOD,
            amplitude: DEFAULT_AMPLITUDE,
            exponent: DEFAULT_EXPONENT,
            geometric_snap: false,
            mask_enabled: true,
        }
    }
}

impl Parameters {
    /// Extracts a snapshot from a JSON object, falling back to defaults for
    /// missing keys and clamping every numeric value to its range.
    pub fn from_json(params: &Value) -> Self {
        Self {
            trail_fade: param_f64(params, "trail_fade", DEFAULT_TRAIL_FADE),
            noise_seed: param_u32(params, "noise_seed", DEFAULT_NOISE_SEED),
            noise_period: param_f64(params, "noise_period", DEFAULT_NOISE_PERIOD),
            amplitude: param_f64(params, "amplitude", DEFAULT_AMPLITUDE),
            exponent: param_f64(params, "exponent", DEFAULT_EXPONENT),
            geometric_snap: param_bool(params, "geometric_snap", false),
            mask_enabled: param_bool(params, "mask_enabled", true),
        }
        .clamped()
    }

    /// Returns a copy with every numeric knob clamped to its range.
    pub fn clamped(mut self) -> Self {
        self.trail_fade = self.trail_fade.clamp(0.0, 255.0);
        self.noise_seed = self.noise_seed.min(10_000);
        self.noise_period = self.noise_period.clamp(1.0, 100.0);
        self.amplitude = self.amplitude.clamp(0.1, 5.0);
        self.exponent = self.exponent.clamp(0.5, 5.0);
        self
    }

    /// Current values as a JSON object.
    pub fn to_json(&self) -> Value {
        json!({
            "trail_fade": self.trail_fade,
            "noise_seed": self.noise_seed,
            "noise_period": self.noise_period,
            "amplitude": self.amplitude,
            "exponent": self.exponent,
            "geometric_snap": self.geometric_snap,
            "mask_enabled": self.mask_enabled,
        })
    }

    /// Schema describing every knob: type, range, step, and default.
    pub fn schema() -> Value {
        json!({
            "trail_fade": {
                "type": "number",
                "default": DEFAULT_TRAIL_FADE,
                "min": 0.0,
                "max": 255.0,
                "step": 1.0,
                "description": "Opacity of the per-frame black fade, out of 255"
            },
            "noise_seed": {
                "type": "integer",
                "default": DEFAULT_NOISE_SEED,
                "min": 0,
                "max": 10000,
                "step": 1,
                "description": "Seed for the coherent-noise generator"
            },
            "noise_period": {
                "type": "number",
                "default": DEFAULT_NOISE_PERIOD,
                "min": 1.0,
                "max": 100.0,
                "step": 1.0,
                "description": "Grid cells per noise unit; higher is smoother"
            },
            "amplitude": {
                "type": "number",
                "default": DEFAULT_AMPLITUDE,
                "min": 0.1,
                "max": 5.0,
                "step": 0.1,
                "description": "Magnitude of every flow vector"
            },
            "exponent": {
                "type": "number",
                "default": DEFAULT_EXPONENT,
                "min": 0.5,
                "max": 5.0,
                "step": 0.1,
                "description": "Exponent reshaping the noise distribution"
            },
            "geometric_snap": {
                "type": "boolean",
                "default": false,
                "description": "Quantize flow angles to 8 compass directions"
            },
            "mask_enabled": {
                "type": "boolean",
                "default": true,
                "description": "Restrict drawing to the mask stencil"
            }
        })
    }
}
