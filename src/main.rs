use lagsim::{SessionConfig, Scenario};
use lagsim::run_3d;
use lagsim::{bench_lagrange_curve, bench_derivative_curve};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Print interpolation timing curves instead of opening the viewer
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<SessionConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let session_cfg: SessionConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    log::debug!("{:?}", session_cfg);

    Ok(session_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_lagrange_curve()?;
        bench_derivative_curve()?;
        return Ok(());
    }

    let session_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(session_cfg)?;
    log::info!("loaded scenario {}", args.file_name);

    run_3d(scenario.into_session());

    Ok(())
}
