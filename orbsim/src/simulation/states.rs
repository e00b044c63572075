//! Core state types for the orbit simulation.
//!
//! - `NVec2`: planar position / force / acceleration vector
//! - `Series` (alias `Trajectory`): one `NVec2` per time sample, read-only once built
//! - `TimeAxis`: the timestamps matching a trajectory
//! - `Body`: orbital elements of one planet, as loaded from a scenario

use nalgebra::Vector2;

use crate::simulation::error::{OrbitError, Result};

pub type NVec2 = Vector2<f64>;

/// Build an `NVec2` from raw components, which must be exactly two
pub fn vec2_from_slice(components: &[f64]) -> Result<NVec2> {
    match components {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(OrbitError::Dimension {
            expected: 2,
            found: components.len(),
        }),
    }
}

/// Ordered, fixed-length sequence of 2D vectors, one per time sample
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    points: Vec<NVec2>,
}

/// Positions of one body, index 0..=steps
pub type Trajectory = Series;

impl Series {
    pub fn from_positions(points: Vec<NVec2>) -> Self {
        Self { points }
    }

    /// Every row must hold exactly two components
    pub fn from_components(rows: &[Vec<f64>]) -> Result<Self> {
        let points = rows
            .iter()
            .map(|row| vec2_from_slice(row))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { points })
    }

    /// Zero-vector series: a source pinned at the origin for `len` samples
    pub fn origin(len: usize) -> Self {
        Self {
            points: vec![NVec2::zeros(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&NVec2> {
        self.points.get(i)
    }

    pub fn first(&self) -> Option<&NVec2> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NVec2> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[NVec2] {
        &self.points
    }

    /// Per-sample magnitude (|r| for positions, |a| for accelerations)
    pub fn norms(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.norm()).collect()
    }

    /// Plain `[x, y]` rows for export
    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x, p.y]).collect()
    }

    /// The first `len` samples. Never pads: asking for more than exists fails.
    pub fn truncated(&self, len: usize) -> Result<Self> {
        if len > self.points.len() {
            return Err(OrbitError::ShapeMismatch {
                left: len,
                right: self.points.len(),
            });
        }
        Ok(Self {
            points: self.points[..len].to_vec(),
        })
    }

    /// Elementwise sum of two co-indexed series
    pub fn checked_add(&self, other: &Series) -> Result<Self> {
        ensure_same_shape(self, other)?;
        let points = self
            .points
            .iter()
            .zip(other.points.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self { points })
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a NVec2;
    type IntoIter = std::slice::Iter<'a, NVec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

pub(crate) fn ensure_same_shape(a: &Series, b: &Series) -> Result<()> {
    if a.len() != b.len() {
        return Err(OrbitError::ShapeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Sample timestamps in seconds, `times[i] = i * h0`
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    times: Vec<f64>,
}

impl TimeAxis {
    pub(crate) fn from_times(times: Vec<f64>) -> Self {
        Self { times }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<f64> {
        self.times.get(i).copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.times.last().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.times
    }
}

/// Orbital elements of one planet around the central mass
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub mass: f64, // kg
    pub perihelion: f64, // m
    pub aphelion: f64, // m
    pub period: f64, // s
}

impl Body {
    /// Steps needed to cover one nominal period: ceil(period / h0)
    pub fn steps_per_period(&self, h0: f64) -> Result<usize> {
        self.steps_over(1.0, h0)
    }

    /// Steps needed to cover `periods` nominal periods, at least one.
    /// Horizons that do not fit a step count fail instead of saturating.
    pub fn steps_over(&self, periods: f64, h0: f64) -> Result<usize> {
        let steps = (self.period * periods / h0).ceil();
        // usize::MAX as f64 rounds up, so `<` keeps `steps + 1` representable
        if !(steps.is_finite() && steps >= 0.0 && steps < usize::MAX as f64) {
            return Err(OrbitError::InvalidParameter(format!(
                "{} periods of {} at h0 = {h0} is not a usable step count",
                periods, self.name
            )));
        }
        Ok((steps as usize).max(1))
    }
}
