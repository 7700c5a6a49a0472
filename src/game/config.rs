use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use super::snake::Coordinate;

/// Edge length used when none is configured
pub const DEFAULT_GRID_SIZE: u32 = 20;

/// Milliseconds between game ticks when none is configured
pub const DEFAULT_TICK_MS: u64 = 100;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edge length of the square grid
    pub grid_size: u32,
    /// Where the snake starts; the grid centre when unset
    pub start_position: Option<Coordinate>,
    /// Delay between game ticks in milliseconds
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            start_position: None,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(grid_size: u32) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Starting cell for the snake
    pub fn start_position(&self) -> Coordinate {
        self.start_position
            .unwrap_or_else(|| default_start_position(self.grid_size))
    }

    /// Check the configuration describes a playable board
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_size >= 2,
            "grid size must be at least 2, got {}",
            self.grid_size
        );
        let start = self.start_position();
        ensure!(
            start.is_within(self.grid_size),
            "start position ({}, {}) is outside a {}x{} grid",
            start.x,
            start.y,
            self.grid_size,
            self.grid_size
        );
        ensure!(self.tick_ms > 0, "tick interval must be positive");
        Ok(())
    }
}

/// Cell just up and left of the grid centre
pub fn default_start_position(grid_size: u32) -> Coordinate {
    let centre = (grid_size / 2).saturating_sub(1);
    Coordinate::new(centre, centre)
}
