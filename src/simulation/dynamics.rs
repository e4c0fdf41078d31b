//! Equations of motion for the Swinging Atwood's Machine
//!
//! Defines the `Derivative` trait the integrator is driven by, and the
//! `SwingingAtwood` right-hand side together with its conserved energy

use super::states::{State, R, THETA, V_R, V_THETA};

/// Trait for right-hand sides `ds/dt = f(s)` of an autonomous 4-state system.
/// Implementations must be pure: the same state always yields the same derivative
pub trait Derivative {
    fn derivative(&self, s: &State) -> State;
}

/// Swinging Atwood's Machine with mass ratio `mu` under gravity `G`.
///
/// With `M` the counterweight and `m` the swinging mass (`mu = M / m`):
///
/// ```text
/// (1 + mu) r''  = r theta'^2 + G (cos(theta) - mu)
///        theta'' = -(2 r' theta' + G sin(theta)) / r
/// ```
///
/// `r` must be non-zero wherever the derivative is evaluated.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct SwingingAtwood {
    pub mu: f64, // mass ratio
    pub G: f64, // gravitational acceleration
}

impl Derivative for SwingingAtwood {
    fn derivative(&self, s: &State) -> State {
        let r = s[R];
        let theta = s[THETA];
        let v_r = s[V_R];
        let v_theta = s[V_THETA];

        let a_r = (r * v_theta.powi(2) + self.G * (theta.cos() - self.mu)) / (1.0 + self.mu);
        let a_theta = -(2.0 * v_r * v_theta + self.G * theta.sin()) / r;

        State::new(v_r, v_theta, a_r, a_theta)
    }
}

impl SwingingAtwood {
    /// Mechanical energy per unit swinging mass.
    ///
    /// Kinetic: `0.5 (1 + mu) v_r^2 + 0.5 r^2 v_theta^2`.
    /// Potential: `G r (mu - cos(theta))`, zero with the string fully retracted
    pub fn energy(&self, s: &State) -> f64 {
        let r = s[R];
        let kinetic = 0.5 * (1.0 + self.mu) * s[V_R] * s[V_R] + 0.5 * r * r * s[V_THETA] * s[V_THETA];
        let potential = self.G * r * (self.mu - s[THETA].cos());
        kinetic + potential
    }
}
