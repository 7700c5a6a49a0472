//! Grid Snake - a single-player Snake game on a square grid
//!
//! This library provides:
//! - Core game logic (game module): board, snake, food and collision rules
//! - Terminal front end (input, render, modes) built on ratatui
//! - Session statistics (metrics) and log setup (logging)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
