//! Build a validated simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical and physical parameters (`Parameters`)
//! - the release state (`State`)
//!
//! The integrator itself does not check its preconditions, so this is where
//! a bad configuration gets rejected

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::simulate_with;
use crate::simulation::error::{SimError, SimResult};
use crate::simulation::params::Parameters;
use crate::simulation::states::{state, State, Trajectory, R};

/// Fully-initialized scenario: parameters plus the initial state at t = 0
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub parameters: Parameters,
    pub initial: State,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            mu: p_cfg.mu,
            G: p_cfg.G,
            r_max: p_cfg.r_max,
        };

        // Initial state from InitialStateConfig
        let i_cfg = cfg.initial;
        let initial = state(i_cfg.r, i_cfg.theta, i_cfg.v_r, i_cfg.v_theta);

        let scenario = Self { parameters, initial };
        scenario.validate()?;
        Ok(scenario)
    }

    /// Reject parameters the equations of motion or the step loop cannot handle
    pub fn validate(&self) -> SimResult<()> {
        let p = &self.parameters;

        let finite = [p.t_end, p.h0, p.mu, p.G, p.r_max];
        if finite.iter().chain(self.initial.iter()).any(|v| !v.is_finite()) {
            return Err(SimError::InvalidParameter("all values must be finite".to_string()));
        }
        // 1 + mu appears as a divisor in the radial equation
        if p.mu <= -1.0 {
            return Err(SimError::InvalidParameter(format!("mu must be > -1, got {}", p.mu)));
        }
        if p.h0 <= 0.0 {
            return Err(SimError::InvalidParameter(format!("h0 must be > 0, got {}", p.h0)));
        }
        if p.r_max <= 0.0 {
            return Err(SimError::InvalidParameter(format!("r_max must be > 0, got {}", p.r_max)));
        }
        let r0 = self.initial[R];
        if r0 <= 0.0 || r0 >= p.r_max {
            return Err(SimError::InvalidParameter(format!(
                "initial r must lie in (0, {}), got {}",
                p.r_max, r0
            )));
        }
        Ok(())
    }

    pub fn run(&self) -> SimResult<Trajectory> {
        simulate_with(&self.parameters, self.initial)
    }
}
