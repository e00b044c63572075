//! Force / acceleration contributors for the orbit engine
//!
//! Defines the pairwise Newtonian force law and the `Acceleration` terms
//! that are superposed to get the total acceleration of a body along a
//! trajectory (central mass plus an optional perturber)

use crate::simulation::error::{OrbitError, Result};
use crate::simulation::params::Parameters;
use crate::simulation::states::{vec2_from_slice, NVec2, Series, Trajectory};

/// Newtonian gravitational force on body 1 (mass `m1` at `r1`) due to
/// body 2 (mass `m2` at `r2`):
///
/// F = -G * m1 * m2 * (r1 - r2) / |r1 - r2|^3
///
/// The result points from `r1` toward `r2`. No softening: coincident
/// positions fail with [`OrbitError::Singularity`].
pub fn gravitational_force(params: &Parameters, m1: f64, m2: f64, r1: &NVec2, r2: &NVec2) -> Result<NVec2> {
    // r is the displacement from the source to the acted-on body
    let r = r1 - r2;
    let r2_len = r.norm_squared();
    if r2_len == 0.0 || !r2_len.is_finite() {
        return Err(OrbitError::Singularity);
    }

    // 1 / |r|^3
    let inv_r = r2_len.sqrt().recip();
    let inv_r3 = inv_r * inv_r * inv_r;

    Ok(-params.G() * m1 * m2 * inv_r3 * r)
}

/// [`gravitational_force`] for raw component slices, each of which must be 2D
pub fn gravitational_force_from_components(
    params: &Parameters,
    m1: f64,
    m2: f64,
    r1: &[f64],
    r2: &[f64],
) -> Result<NVec2> {
    let r1 = vec2_from_slice(r1)?;
    let r2 = vec2_from_slice(r2)?;
    gravitational_force(params, m1, m2, &r1, &r2)
}

/// A source of acceleration on a body moving along a trajectory.
/// Implementations return the acceleration at sample `i`, where the
/// acted-on body of mass `acting_mass` sits at `position`.
pub trait Acceleration {
    fn acceleration(&self, params: &Parameters, acting_mass: f64, i: usize, position: &NVec2) -> Result<NVec2>;

    /// Length the acted-on trajectory must have, if the term is sampled
    fn required_len(&self) -> Option<usize> {
        None
    }
}

/// Point mass that never moves (the central star at the origin)
pub struct FixedSource {
    pub mass: f64,
    pub at: NVec2,
}

impl Acceleration for FixedSource {
    fn acceleration(&self, params: &Parameters, acting_mass: f64, _i: usize, position: &NVec2) -> Result<NVec2> {
        Ok(gravitational_force(params, acting_mass, self.mass, position, &self.at)? / acting_mass)
    }
}

/// Point mass following its own co-indexed trajectory
pub struct MovingSource<'a> {
    pub mass: f64,
    pub path: &'a Series,
}

impl Acceleration for MovingSource<'_> {
    fn acceleration(&self, params: &Parameters, acting_mass: f64, i: usize, position: &NVec2) -> Result<NVec2> {
        let at = self.path.get(i).ok_or(OrbitError::ShapeMismatch {
            left: i + 1,
            right: self.path.len(),
        })?;
        Ok(gravitational_force(params, acting_mass, self.mass, position, at)? / acting_mass)
    }

    fn required_len(&self) -> Option<usize> {
        Some(self.path.len())
    }
}

/// Collection of acceleration terms whose contributions are summed
/// (pairwise superposition, not a self-consistent N-body solve)
pub struct AccelSet<'a> {
    terms: Vec<Box<dyn Acceleration + Send + Sync + 'a>>,
}

impl Default for AccelSet<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> AccelSet<'a> {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'a,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total acceleration at every sample of `trajectory`.
    /// Fails before computing anything if a sampled term has another length.
    pub fn accumulate_accels(&self, params: &Parameters, acting_mass: f64, trajectory: &Trajectory) -> Result<Series> {
        for term in &self.terms {
            match term.required_len() {
                Some(len) if len != trajectory.len() => {
                    return Err(OrbitError::ShapeMismatch {
                        left: trajectory.len(),
                        right: len,
                    });
                }
                _ => {}
            }
        }

        let mut out = vec![NVec2::zeros(); trajectory.len()];
        for (i, (a, x)) in out.iter_mut().zip(trajectory.iter()).enumerate() {
            for term in &self.terms {
                *a += term.acceleration(params, acting_mass, i, x)?;
            }
        }
        Ok(Series::from_positions(out))
    }
}
