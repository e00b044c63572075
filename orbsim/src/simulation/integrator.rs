//! Fixed-step time integrator for a planet around a fixed central mass
//!
//! Second-order central difference (Störmer–Verlet) on positions only:
//! x_{l+1} = 2 x_l - x_{l-1} + a(x_l) h^2
//! The central body stays at the origin; only the planet feels the force.

use tracing::debug;

use crate::simulation::error::{OrbitError, Result};
use crate::simulation::forces::gravitational_force;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Trajectory};

/// Integrate `steps` fixed steps of size `params.h0()` starting at
/// perihelion `(perihelion, 0)` moving with tangential speed `v0` along +y.
///
/// Returns `steps + 1` positions. `steps == 0` is rejected; `steps == 1`
/// returns the start point and the seeded second point.
pub fn verlet_integrator(
    params: &Parameters,
    perihelion: f64,
    body_mass: f64,
    central_mass: f64,
    v0: f64,
    steps: usize,
) -> Result<Trajectory> {
    if steps < 1 {
        return Err(OrbitError::InvalidStepCount(steps));
    }
    if !(perihelion.is_finite() && perihelion > 0.0) {
        return Err(OrbitError::InvalidOrbit(format!("perihelion must be positive, got {perihelion}")));
    }
    if !(body_mass.is_finite() && body_mass > 0.0) {
        return Err(OrbitError::InvalidOrbit(format!("body mass must be positive, got {body_mass}")));
    }
    if !(central_mass.is_finite() && central_mass > 0.0) {
        return Err(OrbitError::InvalidOrbit(format!("central mass must be positive, got {central_mass}")));
    }
    if !v0.is_finite() {
        return Err(OrbitError::InvalidOrbit(format!("initial speed must be finite, got {v0}")));
    }

    let h = params.h0();
    let h2 = h * h;
    let origin = NVec2::zeros();

    // Pre-sized buffer, owned here until it is handed back read-only.
    // Step counts too large to allocate are rejected rather than aborting.
    let len = steps.checked_add(1).ok_or(OrbitError::InvalidStepCount(steps))?;
    let mut x: Vec<NVec2> = Vec::new();
    x.try_reserve_exact(len).map_err(|_| OrbitError::InvalidStepCount(steps))?;

    // x_0: at perihelion on the +x axis
    x.push(NVec2::new(perihelion, 0.0));

    // x_1: Taylor seed x_0 + v0 h + 1/2 a_0 h^2 with a_0 = -GM/rp^2 along x
    let a0 = params.G() * central_mass / (perihelion * perihelion);
    x.push(NVec2::new(perihelion - 0.5 * a0 * h2, v0 * h));

    for l in 1..steps {
        let a = gravitational_force(params, body_mass, central_mass, &x[l], &origin)? / body_mass;
        let next = 2.0 * x[l] - x[l - 1] + a * h2;
        x.push(next);
    }

    debug!(steps, h, perihelion, v0, "integrated trajectory");

    Ok(Trajectory::from_positions(x))
}
