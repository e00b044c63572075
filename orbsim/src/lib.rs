pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::error::{OrbitError, Result};
pub use simulation::states::{vec2_from_slice, Body, NVec2, Series, TimeAxis, Trajectory};
pub use simulation::params::Parameters;
pub use simulation::forces::{gravitational_force, gravitational_force_from_components, AccelSet, Acceleration, FixedSource, MovingSource};
pub use simulation::orbit::perihelion_speed;
pub use simulation::integrator::verlet_integrator;
pub use simulation::time_axis::time_axis;
pub use simulation::analysis::{
    accelerations, accelerations_about_origin, differences, perturbation_displacement, perturbed_accelerations, OrbitSummary,
};
pub use simulation::scenario::{Horizon, RunFailure, Scenario, ScenarioReport, ScenarioRun};

pub use configuration::config::{BodyConfig, CentralConfig, ParametersConfig, RunConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_analysis, bench_integrator};
