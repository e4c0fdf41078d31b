//! Entry points that allocate a trajectory and run the integrator
//!
//! `simulate` is the plain `(mu, duration)` form with the standard step,
//! gravity and release state; `simulate_with` takes explicit `Parameters`

use log::info;

use super::dynamics::SwingingAtwood;
use super::error::SimResult;
use super::integrator::rk4_integrator;
use super::params::{default_initial_state, Parameters};
use super::states::{State, Termination, Trajectory};

/// Run the default release scenario for mass ratio `mu` over `duration`
/// with `dt = 0.01`, `G = 9.80665` and `r_max = 7`
pub fn simulate(mu: f64, duration: f64) -> SimResult<Trajectory> {
    let params = Parameters {
        t_end: duration,
        mu,
        ..Parameters::default()
    };
    simulate_with(&params, default_initial_state())
}

/// Allocate a zeroed buffer of `params.steps()` states and integrate `init` into it
pub fn simulate_with(params: &Parameters, init: State) -> SimResult<Trajectory> {
    let mut traj = Trajectory::zeroed(params.steps(), params.h0);
    if traj.is_empty() {
        return Ok(traj);
    }

    let eom = SwingingAtwood {
        mu: params.mu,
        G: params.G,
    };
    rk4_integrator(&mut traj, init, params.r_max, &eom)?;

    match traj.termination {
        Termination::Completed => info!("simulate: mu = {}, {} steps completed", params.mu, traj.len()),
        Termination::DomainExit { step, r } => info!(
            "simulate: mu = {}, left domain at t = {:.2} (r = {r:.4}), {} of {} samples",
            params.mu,
            traj.time_at(step + 1),
            traj.recorded,
            traj.len()
        ),
    }

    Ok(traj)
}
