use std::time::Instant;

use crate::simulation::analysis::{accelerations_about_origin, perturbed_accelerations};
use crate::simulation::error::Result;
use crate::simulation::integrator::verlet_integrator;
use crate::simulation::orbit::perihelion_speed;
use crate::simulation::params::Parameters;

// Earth-like orbit around a solar mass, SI units
const SUN_MASS: f64 = 1.9884e30;
const EARTH_MASS: f64 = 5.9722e24;
const EARTH_P: f64 = 1.4710e11;
const EARTH_A: f64 = 1.5210e11;
const EARTH_O: f64 = 3.1558e7;
const JUPITER_MASS: f64 = 1.8981e27;
const JUPITER_P: f64 = 7.4060e11;
const JUPITER_A: f64 = 8.1636e11;
const JUPITER_O: f64 = 3.7434e8;

/// Time the integrator over increasing step counts
/// Paste output directly into a spreadsheet to graph
pub fn bench_integrator() -> Result<()> {
    let params = Parameters::solar();
    let v0 = perihelion_speed(EARTH_A, EARTH_P, EARTH_O)?;

    println!("steps,integrate_ms");

    for steps in [1_000, 10_000, 100_000, 1_000_000] {
        // Warm up
        verlet_integrator(&params, EARTH_P, EARTH_MASS, SUN_MASS, v0, steps)?;

        let t0 = Instant::now();
        let trajectory = verlet_integrator(&params, EARTH_P, EARTH_MASS, SUN_MASS, v0, steps)?;
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6}", trajectory.len() - 1, ms);
    }
    Ok(())
}

/// Time the two-body and perturbed acceleration passes over the same trajectories
pub fn bench_analysis() -> Result<()> {
    let params = Parameters::solar();
    let v_earth = perihelion_speed(EARTH_A, EARTH_P, EARTH_O)?;
    let v_jupiter = perihelion_speed(JUPITER_A, JUPITER_P, JUPITER_O)?;

    println!("steps,two_body_ms,perturbed_ms");

    for steps in [1_000, 10_000, 100_000] {
        let earth = verlet_integrator(&params, EARTH_P, EARTH_MASS, SUN_MASS, v_earth, steps)?;
        let jupiter = verlet_integrator(&params, JUPITER_P, JUPITER_MASS, SUN_MASS, v_jupiter, steps)?;

        let t0 = Instant::now();
        accelerations_about_origin(&params, EARTH_MASS, SUN_MASS, &earth)?;
        let two_body_ms = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        perturbed_accelerations(&params, EARTH_MASS, SUN_MASS, JUPITER_MASS, &earth, &jupiter)?;
        let perturbed_ms = t1.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6},{:.6}", steps, two_body_ms, perturbed_ms);
    }
    Ok(())
}
