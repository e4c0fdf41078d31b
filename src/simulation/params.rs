//! Numerical and physical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - duration and fixed step size,
//! - mass ratio `mu` and gravitational constant `G`,
//! - the radial domain limit `r_max` used by the boundary check

use std::f64::consts::FRAC_PI_2;

use super::states::{state, State};

pub const DEFAULT_MU: f64 = 1.1185;
pub const DEFAULT_T_END: f64 = 12.5;
pub const DEFAULT_H0: f64 = 0.01;
pub const STANDARD_GRAVITY: f64 = 9.80665;
pub const DEFAULT_R_MAX: f64 = 7.0;

/// Released from rest with the string horizontal at unit length
pub fn default_initial_state() -> State {
    state(1.0, FRAC_PI_2, 0.0, 0.0)
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub t_end: f64, // duration
    pub h0: f64, // step size
    pub mu: f64, // mass ratio (counterweight / swinging mass)
    pub G: f64, // gravitational acceleration
    pub r_max: f64, // upper radial limit, r >= r_max halts the run
}

impl Default for Parameters {
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

impl Parameters {
    /// Number of fixed steps covering `[0, t_end)`, zero for a non-positive duration
    pub fn steps(&self) -> usize {
        if self.t_end <= 0.0 || self.h0 <= 0.0 {
            return 0;
        }
        (self.t_end / self.h0).ceil() as usize
    }
}
