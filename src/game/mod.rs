//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A host drives it with `Board::set_direction` and one `Board::update` per tick.

pub mod board;
pub mod config;
pub mod heading;
pub mod snake;

// Re-export commonly used types
pub use board::{Board, CollisionType, TickOutcome};
pub use config::{DEFAULT_GRID_SIZE, DEFAULT_TICK_MS, GameConfig, default_start_position};
pub use heading::Heading;
pub use snake::{Coordinate, Snake};
