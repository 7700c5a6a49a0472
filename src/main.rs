use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::{Board, Coordinate, GameConfig};
use grid_snake::logging;
use grid_snake::modes::HumanMode;
use tracing::{Level, info};

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a square grid, in your terminal")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid edge length in cells
    #[arg(long)]
    grid_size: Option<u32>,

    /// Snake start column (defaults to the grid centre)
    #[arg(long, requires = "start_y")]
    start_x: Option<u32>,

    /// Snake start row (defaults to the grid centre)
    #[arg(long, requires = "start_x")]
    start_y: Option<u32>,

    /// Milliseconds between game ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for a reproducible food sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Maximum log level written to the log file
    #[arg(long, default_value = "info")]
    log_level: Level,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let (Some(x), Some(y)) = (self.start_x, self.start_y) {
            config.start_position = Some(Coordinate::new(x, y));
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref(), cli.log_level)?;

    let config = cli.game_config()?;
    info!(?config, seed = ?cli.seed, "starting game");

    let mut human_mode = match cli.seed {
        Some(seed) => {
            let board = Board::seeded(config.grid_size, config.start_position(), seed);
            HumanMode::with_board(config, board)?
        }
        None => HumanMode::new(config)?,
    };
    human_mode.run().await?;

    Ok(())
}
