//! arbmm replay driver - Entry Point
//!
//! Reads tick snapshots as JSON lines and writes the strategy's order set
//! for each tick. Logs go to stderr.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use arbmm_bot::{replay, AppConfig};
use arbmm_telemetry::Metrics;

/// Arbitrage-aware market making replay driver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via ARBMM_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// Tick snapshots as JSON lines; `-` reads stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Order sets as JSON lines; stdout when omitted
    #[arg(short, long)]
    output: Option<String>,

    /// Dump Prometheus metrics to stderr after the replay
    #[arg(long)]
    metrics: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    arbmm_telemetry::init_logging()?;

    info!("Starting arbmm-bot v{}", env!("CARGO_PKG_VERSION"));

    // Determine config path: CLI arg > ARBMM_CONFIG env var > default
    let config_path = args
        .config
        .or_else(|| std::env::var("ARBMM_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    info!(config_path = %config_path, "Loading configuration");
    let config = AppConfig::from_file(&config_path)?;
    let mut strategy = config.build_strategy()?;
    info!(strategy = strategy.name(), "Strategy ready");

    let input: Box<dyn io::BufRead> = if args.input == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("Failed to open input {}", args.input))?;
        Box::new(BufReader::new(file))
    };

    let output: Box<dyn io::Write> = match &args.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Failed to create output {path}"))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    replay(strategy.as_mut(), input, output)?;

    if args.metrics {
        eprint!("{}", Metrics::gather_text()?);
    }

    Ok(())
}
