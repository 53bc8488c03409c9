//! Headless replay of scripted input against the input sender.
//!
//! Loads a scenario (world layout plus an input timeline), feeds it through
//! `InputSender` and prints every action, move and slot update it produced.
//! Run with: `cargo run -p input-replay -- crates/replay/scenarios/basic.ron`

mod output;
mod runner;
mod scenario;
mod world;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use input_content::{ActionRegistry, ClassRegistry};
use input_core::InputConfig;
use tracing_subscriber::EnvFilter;

use output::OutputFormat;
use scenario::Scenario;

/// Replay scripted input and show what would be sent upstream
#[derive(Parser)]
#[command(name = "input-replay")]
#[command(about = "Replay scripted input against the input sender", long_about = None)]
#[command(version)]
struct Cli {
    /// Scenario file (RON)
    #[arg(value_name = "SCENARIO")]
    scenario: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// Action catalog to use instead of the bundled one
    #[arg(long, value_name = "FILE")]
    actions: Option<PathBuf>,

    /// Character classes to use instead of the bundled ones
    #[arg(long, value_name = "FILE")]
    classes: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Load .env file if it exists (for INPUT_* tuning and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let actions = match &cli.actions {
        Some(path) => ActionRegistry::from_file(path),
        None => ActionRegistry::load(),
    }
    .context("Failed to load action catalog")?;
    let classes = match &cli.classes {
        Some(path) => ClassRegistry::from_file(path),
        None => ClassRegistry::load(),
    }
    .context("Failed to load character classes")?;

    let scenario = Scenario::from_file(&cli.scenario)?;
    let config = InputConfig::from_env();
    tracing::debug!(?config, "input configuration");

    let report = runner::run(&scenario, &actions, &classes, config)?;
    output::print(&report, &actions, cli.format)
}
