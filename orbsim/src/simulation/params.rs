//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the process-wide, read-only settings:
//! - gravitational constant `G`,
//! - fixed integration step size `h0`
//!
//! Built once, never mutated, passed by reference into every operation.

use crate::simulation::error::{OrbitError, Result};

/// Gravitational constant in m^3 kg^-1 s^-2
pub const G_SI: f64 = 6.6743e-11;

/// One hour, the default fixed step for planetary runs
pub const HOUR: f64 = 3600.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    G: f64, // gravitational constant
    h0: f64, // step size
}

#[allow(non_snake_case)]
impl Parameters {
    /// Both values must be finite and strictly positive
    pub fn new(G: f64, h0: f64) -> Result<Self> {
        if !(G.is_finite() && G > 0.0) {
            return Err(OrbitError::InvalidParameter(format!("G must be positive, got {G}")));
        }
        if !(h0.is_finite() && h0 > 0.0) {
            return Err(OrbitError::InvalidParameter(format!("h0 must be positive, got {h0}")));
        }
        Ok(Self { G, h0 })
    }

    /// SI gravitational constant with a one hour step
    pub fn solar() -> Self {
        Self { G: G_SI, h0: HOUR }
    }

    pub fn G(&self) -> f64 {
        self.G
    }

    pub fn h0(&self) -> f64 {
        self.h0
    }
}
