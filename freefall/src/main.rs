use freefall::{progress_line, refine, summary_line};
use freefall::{Scenario, ScenarioConfig, SystemClock, Throughput};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status reported after every completed run
const EXIT_STATUS: u8 = 1;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`; the built-in planet is used when omitted
    #[arg(short, long)]
    file_name: Option<String>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    // stdout carries the results, diagnostics go to stderr
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    }
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let args = Args::parse();

    let scenario_cfg = match args.file_name.as_deref() {
        Some(file_name) => load_scenario_from_yaml(file_name)?,
        None => ScenarioConfig::default(),
    };
    scenario_cfg.validate().context("invalid scenario")?;
    tracing::debug!(?scenario_cfg, "scenario loaded");

    let scenario = Scenario::build_scenario(scenario_cfg);
    let clock = SystemClock::new();

    let outcome = refine(&scenario.parameters, &scenario.refinement, &clock, |record| {
        println!("{}", progress_line(record));
    });

    let throughput = Throughput::new(scenario.population, outcome.final_run.result.fall_time);
    println!("{}", summary_line(&throughput));

    Ok(ExitCode::from(EXIT_STATUS))
}
