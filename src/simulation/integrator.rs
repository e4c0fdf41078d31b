//! Fixed-step RK4 time integrator for the Swinging Atwood's Machine
//!
//! Provides a single classical Runge-Kutta step and the driver loop that
//! fills a `Trajectory` buffer, halting when `r` leaves `(0, r_max)`.
//! There is no error estimate and no step-size control: accuracy is set
//! entirely by the caller's `dt`.

use log::{debug, trace};

use super::dynamics::Derivative;
use super::error::{SimError, SimResult};
use super::states::{State, Termination, Trajectory, R};

/// Advance `s` by one classical RK4 step of size `dt`.
/// Uses four derivative evaluations and returns the updated state
pub fn rk4_step<F>(s: &State, dt: f64, f: &F) -> State
where
    F: Derivative + ?Sized,
{
    // Slopes scaled by dt, each sampled from the previous one
    let k1 = dt * f.derivative(s);
    let k2 = dt * f.derivative(&(s + 0.5 * k1));
    let k3 = dt * f.derivative(&(s + 0.5 * k2));
    let k4 = dt * f.derivative(&(s + k3));

    // Weighted average: s_n+1 = s_n + (k1 + 2 k2 + 2 k3 + k4) / 6
    s + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
}

/// Fill `traj.samples` by stepping `init` forward with step `traj.dt`.
///
/// Each iteration stores the current state *before* updating it, then checks
/// the updated state. A non-finite component is an error; `r <= 0` or
/// `r >= r_max` ends the run normally with `Termination::DomainExit`.
/// The derivative is therefore never evaluated at a state the check rejected,
/// and entries after the exit step keep their zero fill.
pub fn rk4_integrator<F>(traj: &mut Trajectory, init: State, r_max: f64, f: &F) -> SimResult<()>
where
    F: Derivative + ?Sized,
{
    let dt = traj.dt;
    let n = traj.samples.len();
    traj.recorded = 0;
    traj.termination = Termination::Completed;

    let mut s = init;
    for i in 0..n {
        // Record pre-step state
        traj.samples[i] = s;
        traj.recorded = i + 1;

        s = rk4_step(&s, dt, f);

        if s.iter().any(|c| !c.is_finite()) {
            return Err(SimError::NonFinite { step: i, state: s });
        }

        let r = s[R];
        if r <= 0.0 || r >= r_max {
            debug!("domain exit after step {i}: r = {r:.6}");
            traj.termination = Termination::DomainExit { step: i, r };
            break;
        }
    }

    trace!("rk4_integrator: {} of {} samples recorded", traj.recorded, n);
    Ok(())
}
