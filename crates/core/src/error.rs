//! Error types for the flowfield core.

use thiserror::Error;

/// Errors produced by flowfield operations.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Width, height, or cell size was too small to produce a non-empty grid
    /// or canvas.
    #[error("invalid dimensions: width, height, and cell size must yield a non-empty surface")]
    InvalidDimensions,

    /// A raw pixel buffer had the wrong length for the declared dimensions.
    #[error("buffer size mismatch: expected {expected} bytes, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },

    /// An I/O failure while loading a mask asset or writing a snapshot.
    #[error("io error: {0}")]
    Io(String),
}
