//! # Main Entry Point
//!
//! Loads the configuration, sets up logging and runs the demo bot on the console.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;

use philobot::application::history::JsonlRecorder;
use philobot::application::logging;
use philobot::domain::config::{BotConfig, DEFAULT_CONFIG_PATH};
use philobot::infrastructure::timer::TokioTimers;
use philobot::interface::{bot, repl};

#[derive(Parser, Debug)]
#[command(version, about = "Console chat bot with confidence-arbitrated responders")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Override the fallback threshold
    #[arg(short, long)]
    threshold: Option<f32>,

    /// Append the conversation as JSON lines to this file
    #[arg(long)]
    history: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let mut config = BotConfig::load(&args.config)
        .with_context(|| format!("Failed to load {}", args.config))?;
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if args.history.is_some() {
        config.history.path = args.history;
    }

    // 2. Logging Setup
    let _guard = logging::init(&config.logging)?;
    tracing::info!("Starting {} (threshold {})", config.name, config.threshold);

    // 3. Assemble the bot
    let (timers, mut alarms) = TokioTimers::new();
    let mut builder = bot::assemble(&config)?.effects(timers);
    if let Some(path) = &config.history.path {
        match JsonlRecorder::open(path) {
            Ok(recorder) => {
                tracing::info!("Recording history to {}", recorder.path().display());
                builder = builder.recorder(recorder);
            }
            Err(e) => tracing::warn!("History disabled: {:#}", e),
        }
    }
    let mut dispatcher = builder.build()?;
    let opening = bot::opening(&config, &dispatcher)?;

    // 4. Console loop
    repl::run(
        &mut dispatcher,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        &mut alarms,
        opening,
    )
    .await
}
