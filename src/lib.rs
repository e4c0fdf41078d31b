pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{state, State, NVec2, NVec4, Trajectory, Termination, R, THETA, V_R, V_THETA};
pub use simulation::dynamics::{Derivative, SwingingAtwood};
pub use simulation::integrator::{rk4_step, rk4_integrator};
pub use simulation::engine::{simulate, simulate_with};
pub use simulation::params::{Parameters, default_initial_state};
pub use simulation::scenario::Scenario;
pub use simulation::error::{SimError, SimResult};

pub use configuration::config::{ParametersConfig, InitialStateConfig, ScenarioConfig};

pub use visualization::projection::{to_cartesian, project_path, write_trajectory_csv};

pub use benchmark::benchmark::{BenchReport, bench_simulate, bench_step_curve};
