//! Hand-off from trajectories to an external renderer
//!
//! The pivot sits at the origin with `y` pointing up, so a mass hanging
//! straight down (`theta = 0`) lands on the negative `y` axis:
//! `x = r sin(theta)`, `y = -r cos(theta)`.

use std::io::{self, Write};

use crate::simulation::states::{NVec2, State, Trajectory, R, THETA, V_R, V_THETA};

/// Cartesian position of the swinging mass relative to the pivot
pub fn to_cartesian(s: &State) -> NVec2 {
    let r = s[R];
    let theta = s[THETA];
    NVec2::new(r * theta.sin(), -r * theta.cos())
}

/// Path of the swinging mass over the populated part of the trajectory
pub fn project_path(traj: &Trajectory) -> Vec<NVec2> {
    traj.recorded_states().iter().map(to_cartesian).collect()
}

/// Write one CSV row per populated sample: `t,r,theta,v_r,v_theta,x,y`
pub fn write_trajectory_csv<W: Write>(traj: &Trajectory, mut out: W) -> io::Result<()> {
    writeln!(out, "t,r,theta,v_r,v_theta,x,y")?;

    for (i, s) in traj.recorded_states().iter().enumerate() {
        let p = to_cartesian(s);
        writeln!(
            out,
            "{:.6},{:.9},{:.9},{:.9},{:.9},{:.9},{:.9}",
            traj.time_at(i),
            s[R],
            s[THETA],
            s[V_R],
            s[V_THETA],
            p.x,
            p.y
        )?;
    }

    out.flush()
}
