//! HSB color on a 0–255 scale and conversion to sRGB.
//!
//! The drawing surface works in hue/saturation/brightness with every channel
//! on a 0–255 scale, matching the particle hue cycle over [0, 255]. All
//! conversions are pure functions using `f64` throughout.

/// Hue/saturation/brightness color with all channels in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub h: f64,
    pub s: f64,
    pub b: f64,
}

impl Hsb {
    /// Creates an HSB color, clamping each channel to [0, 255].
    pub fn new(h: f64, s: f64, b: f64) -> Self {
        Self {
            h: h.clamp(0.0, 255.0),
            s: s.clamp(0.0, 255.0),
            b: b.clamp(0.0, 255.0),
        }
    }
}

/// sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    pub const BLACK: Srgb = Srgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
}

/// Converts an HSB color (0–255 channels) to sRGB (0–1 components).
///
/// Hue 0 and hue 255 both map to red; the wheel wraps at the channel maximum
/// so a cycling hue never jumps.
pub fn hsb_to_srgb(c: Hsb) -> Srgb {
    let s = c.s / 255.0;
    let v = c.b / 255.0;
    let h6 = (c.h / 255.0).rem_euclid(1.0) * 6.0;
    let sector = (h6.floor() as usize) % 6;
    let f = h6 - h6.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Srgb { r, g, b }
}
