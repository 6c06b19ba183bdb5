//! XenoSignal diagnostics agent.
//!
//! Drives a platform adapter from a simulated probe source and prints the
//! full five-operation query surface as one JSON object per probe round.
//! Used for local development and for demoing the normalization pipeline
//! without real radio hardware.

mod config;
mod sim;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use xenosignal_adapters::android::AndroidAdapter;
use xenosignal_adapters::dispatch::{Query, SignalQueryHandler, dispatch};
use xenosignal_adapters::ios::IosAdapter;

use config::{AgentConfig, AgentConfigInput, Platform};
use sim::{SimulatedAndroidSource, SimulatedIosSource};

/// XenoSignal diagnostics agent.
#[derive(Parser, Debug)]
#[command(name = "xenosignal-agent", about = "Simulated network signal diagnostics")]
struct Cli {
    /// Platform adapter to simulate.
    #[arg(long, value_enum)]
    platform: Option<Platform>,

    /// Seconds between probe rounds.
    #[arg(long)]
    interval_s: Option<u64>,

    /// Number of probe rounds (default: run until interrupted).
    #[arg(long)]
    count: Option<u32>,

    /// Run a single probe round and exit.
    #[arg(long, default_value_t = false)]
    once: bool,

    /// Optional TOML config file. CLI flags override it.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let cfg = load_config(&cli)?;

    tracing::info!(
        platform = ?cfg.platform,
        interval_s = cfg.interval.as_secs(),
        "xenosignal-agent starting"
    );

    match cfg.platform {
        Platform::Android => run(&AndroidAdapter::new(SimulatedAndroidSource), &cfg),
        Platform::Ios => run(&IosAdapter::new(SimulatedIosSource), &cfg),
    }
}

/// Merge the config file (if any) with CLI overrides.
fn load_config(cli: &Cli) -> anyhow::Result<AgentConfig> {
    let input = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            AgentConfigInput::parse(&text).map_err(anyhow::Error::msg)?
        }
        None => AgentConfigInput::default(),
    };
    let mut cfg = input.resolve().map_err(anyhow::Error::msg)?;

    if let Some(platform) = cli.platform {
        cfg.platform = platform;
    }
    if let Some(interval_s) = cli.interval_s {
        cfg.interval = std::time::Duration::from_secs(interval_s);
    }
    if let Some(count) = cli.count {
        cfg.count = Some(count);
    }
    if cli.once {
        cfg.count = Some(1);
    }
    Ok(cfg)
}

/// Probe loop: dispatch all five queries each round, print one JSON object
/// per round.
fn run<H: SignalQueryHandler>(handler: &H, cfg: &AgentConfig) -> anyhow::Result<()> {
    let mut round: u32 = 0;
    loop {
        round += 1;
        let snapshot = probe_round(handler)?;
        println!("{snapshot}");

        if let Some(count) = cfg.count
            && round >= count
        {
            tracing::info!(rounds = round, "probe run complete");
            return Ok(());
        }
        std::thread::sleep(cfg.interval);
    }
}

/// One full pass over the query surface, keyed by wire name.
fn probe_round<H: SignalQueryHandler>(handler: &H) -> anyhow::Result<String> {
    let mut out = serde_json::Map::new();
    for query in Query::ALL {
        let response = dispatch(handler, query.wire_name())?;
        out.insert(query.wire_name().to_owned(), serde_json::to_value(&response)?);
    }
    Ok(serde_json::Value::Object(out).to_string())
}
