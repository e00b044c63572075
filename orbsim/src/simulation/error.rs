//! Error type shared by every simulation operation
//!
//! All failures are raised synchronously by the call that detects them.
//! The computations are deterministic, so callers should not retry.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrbitError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrbitError {
    /// A raw position vector did not have exactly two components
    #[error("expected a {expected}-component vector, got {found} components")]
    Dimension { expected: usize, found: usize },

    /// Two series that must be co-indexed have different lengths
    #[error("series length mismatch: {left} vs {right}")]
    ShapeMismatch { left: usize, right: usize },

    #[error("invalid orbit: {0}")]
    InvalidOrbit(String),

    /// Zero (or non-finite) separation between two point masses
    #[error("gravitational force is singular at zero separation")]
    Singularity,

    #[error("step count must be at least 1, got {0}")]
    InvalidStepCount(usize),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unknown body: {0}")]
    UnknownBody(String),
}
