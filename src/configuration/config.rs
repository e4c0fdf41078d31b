//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`]   – duration, step size and physical constants
//! - [`InitialStateConfig`] – release state of the swinging mass
//! - [`ScenarioConfig`]     – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   t_end: 12.5             # total simulation time
//!   h0: 0.01                # fixed step size
//!   mu: 1.1185              # mass ratio M / m
//!   G: 9.80665              # optional, gravitational acceleration
//!   r_max: 7.0              # optional, radial domain limit
//!
//! initial:                  # optional, defaults to (1, pi/2, 0, 0)
//!   r: 1.0
//!   theta: 1.5707963267948966
//!   v_r: 0.0
//!   v_theta: 0.0
//! ```
//!
//! The scenario builder then validates this configuration and maps it into
//! the runtime [`Scenario`](crate::simulation::scenario::Scenario).

use std::f64::consts::FRAC_PI_2;

use serde::Deserialize;

use crate::simulation::params::{DEFAULT_H0, DEFAULT_MU, DEFAULT_R_MAX, DEFAULT_T_END, STANDARD_GRAVITY};

/// Numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    #[serde(default = "default_t_end")]
    pub t_end: f64, // time end
    #[serde(default = "default_h0")]
    pub h0: f64, // time step size
    #[serde(default = "default_mu")]
    pub mu: f64, // mass ratio
    #[serde(default = "default_g")]
    pub G: f64, // gravitational acceleration
    #[serde(default = "default_r_max")]
    pub r_max: f64, // string length limit
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            t_end: DEFAULT_T_END,
            h0: DEFAULT_H0,
            mu: DEFAULT_MU,
            G: STANDARD_GRAVITY,
            r_max: DEFAULT_R_MAX,
        }
    }
}

/// Initial `(r, theta, v_r, v_theta)` of the swinging mass
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct InitialStateConfig {
    pub r: f64,
    pub theta: f64,
    #[serde(default)]
    pub v_r: f64,
    #[serde(default)]
    pub v_theta: f64,
}

impl Default for InitialStateConfig {
    fn default() -> Self {
        Self {
            r: 1.0,
            theta: FRAC_PI_2,
            v_r: 0.0,
            v_theta: 0.0,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    #[serde(default)]
    pub initial: InitialStateConfig, // Release state
}

fn default_t_end() -> f64 {
    DEFAULT_T_END
}

fn default_h0() -> f64 {
    DEFAULT_H0
}

fn default_mu() -> f64 {
    DEFAULT_MU
}

fn default_g() -> f64 {
    STANDARD_GRAVITY
}

fn default_r_max() -> f64 {
    DEFAULT_R_MAX
}
