use orbsim::{bench_analysis, bench_integrator};
use orbsim::{OrbitSummary, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Write the full report (trajectories, times, accelerations) as YAML
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run the timing harness instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg = ScenarioConfig::from_reader(reader).with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_integrator()?;
        bench_analysis()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;
    let run = scenario.run();

    match args.output {
        Some(path) => {
            let writer = BufWriter::new(File::create(&path).with_context(|| format!("creating {}", path.display()))?);
            serde_yaml::to_writer(writer, &run.to_report(&scenario))?;
            info!(path = %path.display(), "wrote report");
        }
        None => {
            for body in &run.bodies {
                if let Some(s) = OrbitSummary::from_trajectory(&body.trajectory) {
                    println!(
                        "{:<10} steps = {:>8}  v0 = {:>10.2} m/s  r = [{:.4e}, {:.4e}] m  closure = {:.4e} m",
                        body.name, body.steps, body.v0, s.min_radius, s.max_radius, s.closure_error
                    );
                }
            }
            for p in &run.perturbations {
                let max_shift = p.acceleration_shift.norms().into_iter().fold(0.0, f64::max);
                println!(
                    "{:<10} max acceleration shift from {} over {} samples = {:.4e} m/s^2",
                    p.body, p.perturber, p.samples, max_shift
                );
            }
            for f in &run.failures {
                match &f.perturber {
                    Some(perturber) => println!("{:<10} vs {} failed: {}", f.body, perturber, f.error),
                    None => println!("{:<10} failed: {}", f.body, f.error),
                }
            }
        }
    }

    Ok(())
}
