//! The flow field: a fixed grid of direction vectors steering particles.
//!
//! One vector per cell, row-major, recomputed in place every frame from
//! coherent noise. Grid dimensions are fixed when the field is created; the
//! vectors are a pure function of (cell, z, parameters), so regenerating
//! with identical inputs yields bit-identical results.

use std::f64::consts::PI;

use glam::DVec2;

use crate::error::FlowError;
use crate::field_source::NoiseField;
use crate::params::Parameters;

/// Per-frame increment of the z (animation) axis.
pub const Z_STEP: f64 = 0.003;

/// Full rotations mapped across the noise range. Four turns instead of one
/// makes the field visibly more turbulent.
const ANGLE_TURNS: f64 = 4.0;

/// Quantization step for geometric snap: 8 compass directions.
const SNAP_STEP: f64 = PI / 4.0;

/// Grid of flow vectors covering the canvas at a fixed cell size.
#[derive(Debug, Clone)]
pub struct FlowField {
    cols: usize,
    rows: usize,
    cell_size: f64,
    vectors: Vec<DVec2>,
}

impl FlowField {
    /// Creates a zeroed field covering a `width` x `height` canvas with the
    /// given cell size: `cols = floor(width / cell_size)`,
    /// `rows = floor(height / cell_size)`.
    ///
    /// Returns `FlowError::InvalidDimensions` if the cell size is not
    /// positive or either grid dimension comes out zero.
    pub fn new(width: f64, height: f64, cell_size: f64) -> Result<Self, FlowError> {
        if !(cell_size > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(FlowError::InvalidDimensions);
        }
        let cols = (width / cell_size).floor() as usize;
        let rows = (height / cell_size).floor() as usize;
        if cols == 0 || rows == 0 {
            return Err(FlowError::InvalidDimensions);
        }
        let len = cols
            .checked_mul(rows)
            .ok_or(FlowError::InvalidDimensions)?;
        Ok(Self {
            cols,
            rows,
            cell_size,
            vectors: vec![DVec2::ZERO; len],
        })
    }

    /// Grid width in cells.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid height in cells.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Edge length of one grid cell in canvas units.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Read-only access to the row-major vector data.
    pub fn vectors(&self) -> &[DVec2] {
        &self.vectors
    }

    /// Returns the vector at grid cell (col, row), or `None` out of bounds.
    pub fn get(&self, col: usize, row: usize) -> Option<DVec2> {
        if col < self.cols && row < self.rows {
            Some(self.vectors[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns the vector of the cell under a canvas position, or `None`
    /// when the position falls outside the grid's coverage.
    pub fn vector_at(&self, pos: DVec2) -> Option<DVec2> {
        let col = (pos.x / self.cell_size).floor();
        let row = (pos.y / self.cell_size).floor();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        self.get(col as usize, row as usize)
    }

    /// Recomputes every cell from coherent noise at depth `z`.
    ///
    /// Per cell: sample normalized noise at `(col * inc, row * inc, z)` with
    /// `inc = 1 / noise_period`, reshape by `exponent`, map to an angle over
    /// four full turns, optionally snap to the nearest of the 8 compass
    /// directions, and scale the resulting unit vector to `amplitude`.
    ///
    /// Pure with respect to its inputs: the same `(params, z)` produce a
    /// bit-identical grid. The caller advances `z` by [`Z_STEP`] between
    /// frames.
    pub fn regenerate(&mut self, params: &Parameters, z: f64) {
        let noise = NoiseField::new(params.noise_seed);
        let inc = 1.0 / params.noise_period;
        for row in 0..self.rows {
            let yoff = row as f64 * inc;
            for col in 0..self.cols {
                let xoff = col as f64 * inc;
                let n = noise.sample(xoff, yoff, z).powf(params.exponent);
                let mut angle = n * 2.0 * PI * ANGLE_TURNS;
                if params.geometric_snap {
                    angle = (angle / SNAP_STEP).round() * SNAP_STEP;
                }
                self.vectors[row * self.cols + col] =
                    DVec2::from_angle(angle) * params.amplitude;
            }
        }
    }
}
