use std::time::Instant;

use crate::simulation::engine::simulate_with;
use crate::simulation::error::SimResult;
use crate::simulation::params::Parameters;
use crate::simulation::states::State;

/// Timing summary for repeated full runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchReport {
    pub iterations: usize,
    pub total_s: f64, // wall time of all timed runs
    pub mean_s: f64, // wall time per run
}

/// Time `iterations` independent calls of `simulate_with` and report the mean.
/// One untimed warm-up run comes first
pub fn bench_simulate(params: &Parameters, init: State, iterations: usize) -> SimResult<BenchReport> {
    // Warm up
    simulate_with(params, init)?;

    let t0 = Instant::now();
    for _ in 0..iterations {
        simulate_with(params, init)?;
    }
    let total_s = t0.elapsed().as_secs_f64();

    let mean_s = if iterations > 0 { total_s / iterations as f64 } else { 0.0 };

    Ok(BenchReport {
        iterations,
        total_s,
        mean_s,
    })
}

/// Mean run time over a range of step sizes, halving `h0` each row
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve(params: &Parameters, init: State) -> SimResult<()> {
    println!("h0,steps,mean_ms");

    let mut h0 = 0.04;
    for _ in 0..8 {
        let p = Parameters { h0, ..params.clone() };

        // Small step sizes: only a few runs to avoid long waits
        let iterations = if h0 >= 0.005 { 50 } else { 5 };
        let report = bench_simulate(&p, init, iterations)?;

        println!("{:.6},{},{:.6}", h0, p.steps(), report.mean_s * 1000.0);
        h0 *= 0.5;
    }

    Ok(())
}
