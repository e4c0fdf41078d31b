use satwood::{ScenarioConfig, Scenario};
use satwood::{bench_simulate, bench_step_curve, write_trajectory_csv};

use clap::Parser;
use anyhow::{Context, Result};
use log::info;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Write the trajectory as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Time this many runs and print the mean
    #[arg(long)]
    bench: Option<usize>,

    /// Print mean run time against step size
    #[arg(long)]
    bench_curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    let traj = scenario.run()?;
    info!(
        "{} of {} samples recorded, domain exit: {}",
        traj.recorded,
        traj.len(),
        traj.exited_domain()
    );

    if let Some(path) = &args.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_trajectory_csv(&traj, BufWriter::new(file))?;
        info!("trajectory written to {}", path.display());
    }

    if let Some(iterations) = args.bench {
        let report = bench_simulate(&scenario.parameters, scenario.initial, iterations)?;
        println!("Average time per iteration is {:.6e} s ({} iterations)", report.mean_s, report.iterations);
    }

    if args.bench_curve {
        bench_step_curve(&scenario.parameters, scenario.initial)?;
    }

    Ok(())
}
