//! Core state types for the Swinging Atwood's Machine.
//!
//! A state is the 4-vector `(r, theta, v_r, v_theta)`:
//! - `r`        radial length of the swinging side of the string
//! - `theta`    angle of the swinging mass from the downward vertical
//! - `v_r`      radial velocity
//! - `v_theta`  angular velocity
//!
//! `Trajectory` holds the fixed-size buffer the integrator writes into.

use nalgebra::{Vector2, Vector4};
pub type NVec2 = Vector2<f64>;
pub type NVec4 = Vector4<f64>;

/// Physical state `(r, theta, v_r, v_theta)`
pub type State = NVec4;

pub const R: usize = 0;
pub const THETA: usize = 1;
pub const V_R: usize = 2;
pub const V_THETA: usize = 3;

/// Build a state from its named components
pub fn state(r: f64, theta: f64, v_r: f64, v_theta: f64) -> State {
    State::new(r, theta, v_r, v_theta)
}

/// How an integration run ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Termination {
    /// Every step in the buffer was taken
    Completed,
    /// `r` left `(0, r_max)` after the update at `step`; `r` is the offending value
    DomainExit { step: usize, r: f64 },
}

/// Output of one integration run.
///
/// `samples` always has the length requested by the caller. Entry `i` is the
/// state *before* step `i` was applied, so the last populated entry trails the
/// last computed update by one step. Entries past `recorded` stay zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub samples: Vec<State>, // zero-initialised buffer of length N
    pub dt: f64, // step size used to fill it
    pub recorded: usize, // number of populated entries
    pub termination: Termination,
}

impl Trajectory {
    /// Zero-filled buffer for `n` steps
    pub fn zeroed(n: usize, dt: f64) -> Self {
        Self {
            samples: vec![State::zeros(); n],
            dt,
            recorded: 0,
            termination: Termination::Completed,
        }
    }

    /// Buffer length N (populated or not)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The populated prefix
    pub fn recorded_states(&self) -> &[State] {
        &self.samples[..self.recorded]
    }

    /// Time stamp of sample `i`
    pub fn time_at(&self, i: usize) -> f64 {
        i as f64 * self.dt
    }

    pub fn exited_domain(&self) -> bool {
        matches!(self.termination, Termination::DomainExit { .. })
    }
}
