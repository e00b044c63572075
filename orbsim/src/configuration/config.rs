//! Configuration types for loading orbit scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – gravitational constant and fixed step size
//! - [`CentralConfig`]    – the star every body orbits (fixed at the origin)
//! - [`BodyConfig`]       – orbital elements for each planet
//! - [`RunConfig`]        – horizon and optional perturber for the analysis
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   G: 6.6743e-11        # m^3 kg^-1 s^-2
//!   h0: 3600.0           # fixed step size in seconds
//!
//! central:
//!   name: Sun
//!   mass: 1.9884e30
//!
//! bodies:
//!   - name: Earth
//!     mass: 5.9722e24
//!     perihelion: 1.4710e11
//!     aphelion: 1.5210e11
//!     period: 3.1558e7
//!
//! run:
//!   periods: 1.0         # horizon, in periods of each body
//!   steps: ~             # fixed step count for every body, overrides periods
//!   perturber: Jupiter   # optional perturbation analysis source
//! ```
//!
//! `Scenario::build_scenario` validates this into runtime types.

use std::io::Read;

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64,  // gravitational constant
    pub h0: f64, // time step size
}

/// The central mass, pinned at the origin
#[derive(Deserialize, Debug, Clone)]
pub struct CentralConfig {
    pub name: String,
    pub mass: f64,
}

/// Orbital elements of a single planet
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64,       // kg
    pub perihelion: f64, // m
    pub aphelion: f64,   // m
    pub period: f64,     // s
}

/// How long to integrate and what to compare
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RunConfig {
    #[serde(default)]
    pub periods: Option<f64>,
    #[serde(default)]
    pub steps: Option<usize>,
    #[serde(default)]
    pub perturber: Option<String>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub central: CentralConfig,
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub run: RunConfig,
}

impl ScenarioConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}
