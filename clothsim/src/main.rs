use clothsim::{ScenarioConfig, Scenario};
use clothsim::run_headless;
use clothsim::{bench_update_force, bench_integration};

use clap::Parser;
use anyhow::{Context, Result};
use log::info;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Override `engine.frames`
    #[arg(long)]
    frames: Option<usize>,

    /// Write the final cloth state as YAML
    #[arg(long)]
    dump: Option<PathBuf>,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let scenario_cfg = ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_update_force()?;
        bench_integration()?;
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(frames) = args.frames {
        scenario_cfg.engine.frames = frames;
    }

    let mut scenario = Scenario::build_scenario(scenario_cfg)?;
    let report = run_headless(&mut scenario)?;
    info!("final max distance from origin: {:.4}", report.max_distance);

    if let Some(path) = args.dump {
        let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        serde_yaml::to_writer(BufWriter::new(file), &scenario.cloth.snapshot())?;
        info!("wrote cloth state to {}", path.display());
    }

    Ok(())
}
