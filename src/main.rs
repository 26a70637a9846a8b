use solsim::{csv_store, Scenario, ScenarioConfig};
use solsim::{DisplayOptions, Frame};
use solsim::{bench_energy_drift, bench_force_modes};
use clap::Parser;
use anyhow::{Context, Result};

use std::path::PathBuf;

/// Headless driver: builds a scenario, runs ticks and reports frames
#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML; the default solar system is used when omitted
    #[arg(short, long)]
    file_name: Option<PathBuf>,

    /// Load bodies from a CSV file instead of the scenario's bodies
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Save the final state to this CSV file
    #[arg(short, long)]
    save: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(short = 'n', long, default_value_t = 365)]
    ticks: u64,

    /// Override the scenario timestep (years per tick)
    #[arg(short, long)]
    timestep: Option<f64>,

    /// Print a frame every N ticks (0 = only the final frame)
    #[arg(short, long, default_value_t = 0)]
    report_every: u64,

    #[arg(long)]
    labels: bool,

    #[arg(long)]
    traces: bool,

    #[arg(long)]
    lines_to_sun: bool,

    /// Run the benchmarks and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let cfg = match &args.file_name {
        Some(path) => ScenarioConfig::from_yaml_file(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => ScenarioConfig::default(),
    };

    let mut scenario = Scenario::build_scenario(cfg)?;

    if let Some(path) = &args.load {
        let bodies = csv_store::load(path)
            .with_context(|| format!("failed to load bodies from {}", path.display()))?;
        scenario.load_bodies(bodies);
    }

    if let Some(timestep) = args.timestep {
        scenario.simulator.set_timestep(timestep)?;
        scenario.parameters.timestep = timestep;
    }

    Ok(scenario)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_force_modes();
        bench_energy_drift();
        return Ok(());
    }

    let mut scenario = load_scenario(&args)?;
    let opts = DisplayOptions {
        traces: args.traces,
        labels: args.labels,
        lines_to_sun: args.lines_to_sun,
    };

    for _ in 0..args.ticks {
        let Scenario {
            simulator, system, ..
        } = &mut scenario;

        simulator
            .run_tick(system)
            .with_context(|| format!("tick {} failed", system.tick + 1))?;

        if args.report_every > 0 && system.tick % args.report_every == 0 {
            print!("{}", Frame::capture(system, &opts));
        }
    }

    print!("{}", Frame::capture(&scenario.system, &opts));

    if let Some(path) = &args.save {
        let written = csv_store::save(path, &scenario.system)?;
        log::info!("final state written to {}", written.display());
    }

    Ok(())
}
