//! Acceleration and perturbation diagnostics over integrated trajectories
//!
//! All operations require co-indexed inputs of equal length and fail with
//! `ShapeMismatch` otherwise; nothing is silently truncated or padded.

use crate::simulation::error::Result;
use crate::simulation::forces::{AccelSet, FixedSource, MovingSource};
use crate::simulation::params::Parameters;
use crate::simulation::states::{ensure_same_shape, NVec2, Series, Trajectory};

/// Acceleration of a body of mass `acting_mass` moving along `acted` due to
/// a source of mass `source_mass` moving along `source`, sample by sample:
/// `a_i = F(acting, source, acted_i, source_i) / acting`
pub fn accelerations(
    params: &Parameters,
    acting_mass: f64,
    source_mass: f64,
    acted: &Trajectory,
    source: &Trajectory,
) -> Result<Series> {
    ensure_same_shape(acted, source)?;
    AccelSet::new()
        .with(MovingSource {
            mass: source_mass,
            path: source,
        })
        .accumulate_accels(params, acting_mass, acted)
}

/// [`accelerations`] with the source pinned at the origin for every sample
pub fn accelerations_about_origin(
    params: &Parameters,
    acting_mass: f64,
    source_mass: f64,
    acted: &Trajectory,
) -> Result<Series> {
    let origin = Series::origin(acted.len());
    accelerations(params, acting_mass, source_mass, acted, &origin)
}

/// Pointwise `a - b`
pub fn differences(a: &Series, b: &Series) -> Result<Series> {
    ensure_same_shape(a, b)?;
    Ok(Series::from_positions(
        a.iter().zip(b.iter()).map(|(p, q)| p - q).collect(),
    ))
}

/// Total acceleration of a body under the fixed central mass plus a
/// perturbing body, by superposing the two pairwise terms
pub fn perturbed_accelerations(
    params: &Parameters,
    body_mass: f64,
    central_mass: f64,
    perturber_mass: f64,
    body: &Trajectory,
    perturber: &Trajectory,
) -> Result<Series> {
    ensure_same_shape(body, perturber)?;
    AccelSet::new()
        .with(FixedSource {
            mass: central_mass,
            at: NVec2::zeros(),
        })
        .with(MovingSource {
            mass: perturber_mass,
            path: perturber,
        })
        .accumulate_accels(params, body_mass, body)
}

/// Position of `body` relative to `perturber` at matching time indices.
/// The perturber's trajectory is cut to the body's length, so it must be
/// at least as long.
pub fn perturbation_displacement(body: &Trajectory, perturber: &Trajectory) -> Result<Series> {
    let perturber = perturber.truncated(body.len())?;
    differences(body, &perturber)
}

/// Shape of an integrated orbit: radius extremes and how far the last
/// sample lands from the first
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSummary {
    pub min_radius: f64,
    pub max_radius: f64,
    pub closure_error: f64,
}

impl OrbitSummary {
    pub fn from_trajectory(trajectory: &Trajectory) -> Option<Self> {
        let first = trajectory.first()?;
        let last = trajectory.last()?;
        let (min_radius, max_radius) = trajectory
            .iter()
            .map(|p| p.norm())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| (lo.min(r), hi.max(r)));

        Some(Self {
            min_radius,
            max_radius,
            closure_error: (last - first).norm(),
        })
    }
}
