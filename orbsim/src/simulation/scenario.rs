//! Build and run fully-initialized orbit scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - numerical parameters (`Parameters`)
//! - the central mass at the origin
//! - the planets (`Body`) with their orbital elements
//! - the run horizon and the optional perturber
//!
//! `Scenario::run` integrates every body independently and derives the
//! acceleration and perturbation diagnostics handed to visualization.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::analysis::{accelerations_about_origin, differences, perturbed_accelerations, OrbitSummary};
use crate::simulation::error::{OrbitError, Result};
use crate::simulation::integrator::verlet_integrator;
use crate::simulation::orbit::perihelion_speed;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Series, TimeAxis, Trajectory};
use crate::simulation::time_axis::time_axis;

/// How many steps each body is integrated for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Multiples of each body's own period
    Periods(f64),
    /// Same fixed step count for every body
    Steps(usize),
}

impl Horizon {
    pub fn steps_for(&self, body: &Body, params: &Parameters) -> Result<usize> {
        match *self {
            Horizon::Steps(n) => Ok(n),
            Horizon::Periods(p) => body.steps_over(p, params.h0()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub central_name: String,
    pub central_mass: f64,
    pub bodies: Vec<Body>,
    pub horizon: Horizon,
    pub perturber: Option<usize>, // index into `bodies`
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let parameters = Parameters::new(cfg.parameters.G, cfg.parameters.h0)?;

        let central_mass = cfg.central.mass;
        if !(central_mass.is_finite() && central_mass > 0.0) {
            return Err(OrbitError::InvalidParameter(format!(
                "central mass must be positive, got {central_mass}"
            )));
        }

        // Bodies: map `BodyConfig` -> runtime `Body`
        let bodies: Vec<Body> = cfg
            .bodies
            .into_iter()
            .map(|bc: BodyConfig| Body {
                name: bc.name,
                mass: bc.mass,
                perihelion: bc.perihelion,
                aphelion: bc.aphelion,
                period: bc.period,
            })
            .collect();

        let horizon = match (cfg.run.steps, cfg.run.periods) {
            (Some(0), _) => return Err(OrbitError::InvalidStepCount(0)),
            (Some(n), _) => Horizon::Steps(n),
            (None, Some(p)) if !(p.is_finite() && p > 0.0) => {
                return Err(OrbitError::InvalidParameter(format!("periods must be positive, got {p}")));
            }
            (None, Some(p)) => Horizon::Periods(p),
            (None, None) => Horizon::Periods(1.0),
        };

        let perturber = match cfg.run.perturber {
            Some(name) => Some(
                bodies
                    .iter()
                    .position(|b| b.name == name)
                    .ok_or(OrbitError::UnknownBody(name))?,
            ),
            None => None,
        };

        info!(
            central = %cfg.central.name,
            bodies = bodies.len(),
            h0 = parameters.h0(),
            "built scenario"
        );

        Ok(Self {
            parameters,
            central_name: cfg.central.name,
            central_mass,
            bodies,
            horizon,
            perturber,
        })
    }

    /// Integrate one body and derive its two-body diagnostics
    pub fn run_body(&self, body: &Body) -> Result<BodyRun> {
        let steps = self.horizon.steps_for(body, &self.parameters)?;
        let v0 = perihelion_speed(body.aphelion, body.perihelion, body.period)?;
        let trajectory = verlet_integrator(&self.parameters, body.perihelion, body.mass, self.central_mass, v0, steps)?;
        let times = time_axis(&self.parameters, steps);
        let accelerations = accelerations_about_origin(&self.parameters, body.mass, self.central_mass, &trajectory)?;

        info!(body = %body.name, steps, v0, "integrated body");

        Ok(BodyRun {
            name: body.name.clone(),
            steps,
            v0,
            trajectory,
            times,
            accelerations,
        })
    }

    /// Integrate every body, then compare each against the perturber if one is set.
    /// Bodies are independent, so they run in parallel. A body that fails only
    /// loses its own outputs; the error is recorded next to the other runs.
    pub fn run(&self) -> ScenarioRun {
        let outcomes: Vec<Result<BodyRun>> = self.bodies.par_iter().map(|b| self.run_body(b)).collect();

        let mut runs = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for (i, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(run) => runs.push((i, run)),
                Err(error) => {
                    warn!(body = %self.bodies[i].name, %error, "body run failed");
                    failures.push(RunFailure {
                        body: self.bodies[i].name.clone(),
                        perturber: None,
                        error,
                    });
                }
            }
        }

        let perturbations = match self.perturber {
            Some(p) => self.perturbations(&runs, p, &mut failures),
            None => Vec::new(),
        };

        ScenarioRun {
            bodies: runs.into_iter().map(|(_, run)| run).collect(),
            perturbations,
            failures,
        }
    }

    fn perturbations(
        &self,
        runs: &[(usize, BodyRun)],
        p: usize,
        failures: &mut Vec<RunFailure>,
    ) -> Vec<PerturbationRun> {
        let Some(source_body) = self.bodies.get(p) else {
            failures.push(RunFailure {
                body: format!("#{p}"),
                perturber: None,
                error: OrbitError::UnknownBody(format!("perturber index {p} of {}", self.bodies.len())),
            });
            return Vec::new();
        };
        // Its own failure is already recorded
        let Some((_, source)) = runs.iter().find(|(i, _)| *i == p) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        for (i, run) in runs.iter().filter(|(i, _)| *i != p) {
            match self.compare(&self.bodies[*i], run, source_body, source) {
                Ok(cmp) => out.push(cmp),
                Err(error) => {
                    warn!(body = %run.name, perturber = %source.name, %error, "perturbation analysis failed");
                    failures.push(RunFailure {
                        body: run.name.clone(),
                        perturber: Some(source.name.clone()),
                        error,
                    });
                }
            }
        }
        out
    }

    /// Compare one body against the perturber over the samples both runs
    /// cover. The longer run is cut explicitly to the common prefix.
    fn compare(&self, body: &Body, run: &BodyRun, source_body: &Body, source: &BodyRun) -> Result<PerturbationRun> {
        let samples = run.trajectory.len().min(source.trajectory.len());
        let trajectory = run.trajectory.truncated(samples)?;
        let unperturbed = run.accelerations.truncated(samples)?;
        let path = source.trajectory.truncated(samples)?;

        let perturbed = perturbed_accelerations(
            &self.parameters,
            body.mass,
            self.central_mass,
            source_body.mass,
            &trajectory,
            &path,
        )?;
        let acceleration_shift = differences(&perturbed, &unperturbed)?;
        let displacement = differences(&trajectory, &path)?;

        info!(
            body = %run.name,
            perturber = %source.name,
            samples,
            max_shift = acceleration_shift.norms().into_iter().fold(0.0, f64::max),
            "perturbation analysed"
        );

        Ok(PerturbationRun {
            body: run.name.clone(),
            perturber: source.name.clone(),
            samples,
            perturbed_accelerations: perturbed,
            acceleration_shift,
            displacement,
        })
    }
}

/// Everything computed for one body
#[derive(Debug, Clone)]
pub struct BodyRun {
    pub name: String,
    pub steps: usize,
    pub v0: f64,
    pub trajectory: Trajectory,
    pub times: TimeAxis,
    pub accelerations: Series, // toward the central mass only
}

/// One body compared against the perturber at matching time indices
#[derive(Debug, Clone)]
pub struct PerturbationRun {
    pub body: String,
    pub perturber: String,
    pub samples: usize, // common prefix of both runs
    pub perturbed_accelerations: Series, // central + perturber
    pub acceleration_shift: Series, // perturbed - unperturbed
    pub displacement: Series, // body - perturber positions
}

/// A body run or a single comparison that could not be completed
#[derive(Debug, Clone, PartialEq)]
pub struct RunFailure {
    pub body: String,
    pub perturber: Option<String>, // set when only the comparison failed
    pub error: OrbitError,
}

#[derive(Debug, Clone)]
pub struct ScenarioRun {
    pub bodies: Vec<BodyRun>,
    pub perturbations: Vec<PerturbationRun>,
    pub failures: Vec<RunFailure>,
}

// =========================================================================================
// Export: plain numeric sequences for the visualization side
// =========================================================================================

#[derive(Debug, Serialize)]
pub struct BodyReport {
    pub name: String,
    pub steps: usize,
    pub v0: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub closure_error: f64,
    pub times: Vec<f64>,
    pub positions: Vec<[f64; 2]>,
    pub accelerations: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize)]
pub struct PerturbationReport {
    pub body: String,
    pub perturber: String,
    pub samples: usize,
    pub perturbed_accelerations: Vec<[f64; 2]>,
    pub acceleration_shift: Vec<[f64; 2]>,
    pub displacement: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize)]
pub struct FailureReport {
    pub body: String,
    pub perturber: Option<String>,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    pub central: String,
    pub h0: f64,
    pub bodies: Vec<BodyReport>,
    pub perturbations: Vec<PerturbationReport>,
    pub failures: Vec<FailureReport>,
}

impl ScenarioRun {
    pub fn to_report(&self, scenario: &Scenario) -> ScenarioReport {
        let bodies = self
            .bodies
            .iter()
            .map(|b| {
                // a run always holds at least two samples
                let summary = OrbitSummary::from_trajectory(&b.trajectory).unwrap_or(OrbitSummary {
                    min_radius: 0.0,
                    max_radius: 0.0,
                    closure_error: 0.0,
                });
                BodyReport {
                    name: b.name.clone(),
                    steps: b.steps,
                    v0: b.v0,
                    min_radius: summary.min_radius,
                    max_radius: summary.max_radius,
                    closure_error: summary.closure_error,
                    times: b.times.as_slice().to_vec(),
                    positions: b.trajectory.to_pairs(),
                    accelerations: b.accelerations.to_pairs(),
                }
            })
            .collect();

        let perturbations = self
            .perturbations
            .iter()
            .map(|p| PerturbationReport {
                body: p.body.clone(),
                perturber: p.perturber.clone(),
                samples: p.samples,
                perturbed_accelerations: p.perturbed_accelerations.to_pairs(),
                acceleration_shift: p.acceleration_shift.to_pairs(),
                displacement: p.displacement.to_pairs(),
            })
            .collect();

        let failures = self
            .failures
            .iter()
            .map(|f| FailureReport {
                body: f.body.clone(),
                perturber: f.perturber.clone(),
                error: f.error.to_string(),
            })
            .collect();

        ScenarioReport {
            central: scenario.central_name.clone(),
            h0: scenario.parameters.h0(),
            bodies,
            perturbations,
            failures,
        }
    }
}
