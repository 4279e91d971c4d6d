use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use labyrinth_agent::ai::{Agent, PathFinder, RandomAgent, TurnPolicy};
use labyrinth_agent::config::AppConfig;
use labyrinth_agent::protocol::{self, Parser as TurnParser};

/// Play the labyrinth game over stdin/stdout.
#[derive(Parser)]
#[command(name = "labyrinth_agent", about = "Sliding-tile labyrinth agent")]
struct Cli {
    /// Agent to play with: greedy or random
    #[arg(long, default_value = "greedy")]
    agent: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "labyrinth.toml")]
    config: PathBuf,

    /// Seed for tie-breaks and anti-stall overrides
    #[arg(long)]
    seed: Option<u64>,

    /// Override board size
    #[arg(long)]
    size: Option<usize>,
}

fn main() -> Result<()> {
    // stdout belongs to the referee
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(seed) = cli.seed {
        config.policy.seed = Some(seed);
    }
    if let Some(size) = cli.size {
        config.board_size = size;
    }
    config.validate().context("validating configuration")?;

    let mut agent: Box<dyn Agent> = match cli.agent.as_str() {
        "greedy" => Box::new(TurnPolicy::new(
            config.policy.clone(),
            PathFinder::from_config(&config.search),
        )),
        "random" => Box::new(match config.policy.seed {
            Some(seed) => RandomAgent::with_seed(seed),
            None => RandomAgent::new(),
        }),
        other => bail!("unknown agent '{}' (expected 'greedy' or 'random')", other),
    };
    tracing::info!(agent = agent.name(), size = config.board_size, "starting");

    let stdin = io::stdin();
    let mut parser = TurnParser::new(stdin.lock());
    let mut stdout = io::stdout();
    let turns = protocol::play(&mut parser, &mut stdout, agent.as_mut(), config.board_size)
        .context("reading turn from referee")?;

    tracing::info!(turns, "input closed");
    Ok(())
}
