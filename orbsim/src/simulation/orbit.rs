//! Initial conditions derived from orbital elements

use std::f64::consts::PI;

use crate::simulation::error::{OrbitError, Result};

/// Tangential speed at perihelion from aphelion `ra`, perihelion `rp` and
/// orbital period `period`:
///
/// v0 = pi * (ra + rp) * sqrt(ra * rp) / (rp * period)
///
/// This is the ellipse area pi*a*b swept once per period, divided by rp/2.
pub fn perihelion_speed(ra: f64, rp: f64, period: f64) -> Result<f64> {
    if !(rp.is_finite() && rp > 0.0) {
        return Err(OrbitError::InvalidOrbit(format!("perihelion must be positive, got {rp}")));
    }
    if !(period.is_finite() && period > 0.0) {
        return Err(OrbitError::InvalidOrbit(format!("period must be positive, got {period}")));
    }
    if !ra.is_finite() || ra < rp {
        return Err(OrbitError::InvalidOrbit(format!(
            "aphelion {ra} is smaller than perihelion {rp}"
        )));
    }

    Ok(PI * (ra + rp) * (ra * rp).sqrt() / (rp * period))
}
