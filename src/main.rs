use plife::{ScenarioConfig, Simulation};
use plife::{run_simulation, run_viewer, DrawTally, TickLimit};
use plife::{bench_step, bench_step_curve};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under scenarios/
    #[arg(short, default_value = "classic.yaml")]
    file_name: String,

    /// Run without a window for a fixed number of ticks
    #[arg(long)]
    headless: bool,

    /// Number of ticks to run with --headless
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Time one tick across population sizes and exit
    #[arg(long)]
    bench: bool,

    /// Print a CSV timing curve and exit
    #[arg(long)]
    bench_curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }
    if args.bench_curve {
        bench_step_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut sim = Simulation::from_config(scenario_cfg)?;

    if args.headless {
        let mut sink = DrawTally::default();
        let mut stop = TickLimit::new(args.ticks);
        run_simulation(&mut sim, &mut sink, &mut stop);
        log::info!(
            "headless run finished: {} ticks, {} draw requests",
            args.ticks,
            sink.calls()
        );
    } else {
        run_viewer(sim);
    }

    Ok(())
}
