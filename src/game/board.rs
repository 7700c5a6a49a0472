use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::{
    config::GameConfig,
    heading::Heading,
    snake::{Coordinate, Snake},
};

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// What a single tick did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No heading has been chosen yet, nothing moved
    Idle,
    /// The snake slid forward one cell
    Moved,
    /// The snake ate the food and grew
    Ate,
    /// The next cell was a wall or the snake itself; nothing moved
    Collided(CollisionType),
    /// Eating would leave no free cell for food; nothing moved
    Filled,
}

impl TickOutcome {
    /// Whether the game goes on after this tick
    pub fn is_alive(self) -> bool {
        matches!(self, TickOutcome::Idle | TickOutcome::Moved | TickOutcome::Ate)
    }
}

/// The game board: grid bounds, food and the snake living on it
#[derive(Debug, Clone)]
pub struct Board<R = StdRng> {
    grid_size: u32,
    food: Coordinate,
    initial_snake_position: Coordinate,
    snake: Snake,
    rng: R,
}

impl Board<StdRng> {
    /// Create a board with an entropy-seeded random source
    pub fn new(grid_size: u32, start: Coordinate) -> Self {
        Self::with_rng(grid_size, start, StdRng::from_entropy())
    }

    /// Create a board whose food sequence is fixed by `seed`
    pub fn seeded(grid_size: u32, start: Coordinate, seed: u64) -> Self {
        Self::with_rng(grid_size, start, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Board<R> {
    /// Create a board with a caller-supplied random source.
    ///
    /// # Panics
    ///
    /// Panics if `grid_size < 2` or `start` lies outside the grid.
    pub fn with_rng(grid_size: u32, start: Coordinate, rng: R) -> Self {
        assert!(grid_size >= 2, "grid size must be at least 2");
        assert!(
            start.is_within(grid_size),
            "start position must lie inside the grid"
        );

        let mut board = Self {
            grid_size,
            food: start,
            initial_snake_position: start,
            snake: Snake::new(start),
            rng,
        };
        board.spawn_food();
        board
    }

    /// Validate `config` and build a board from it
    pub fn from_config(config: &GameConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_rng(config.grid_size, config.start_position(), rng))
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn food(&self) -> Coordinate {
        self.food
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn initial_snake_position(&self) -> Coordinate {
        self.initial_snake_position
    }

    pub fn heading(&self) -> Option<Heading> {
        self.snake.heading()
    }

    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    fn cell_count(&self) -> u64 {
        u64::from(self.grid_size) * u64::from(self.grid_size)
    }

    /// Cells not covered by the snake (the food cell counts as free)
    pub fn free_cells(&self) -> u64 {
        self.cell_count() - self.snake.len() as u64
    }

    /// Whether the snake covers every cell of the grid
    pub fn is_filled(&self) -> bool {
        self.free_cells() == 0
    }

    /// Check whether entering `cell` would end the game
    pub fn will_collide(&self, cell: Coordinate) -> bool {
        self.collision_at(cell).is_some()
    }

    /// Classify the collision entering `cell` would cause, if any
    pub fn collision_at(&self, cell: Coordinate) -> Option<CollisionType> {
        // Cells stepped off the top or left edge have wrapped to huge values
        if !cell.is_within(self.grid_size) {
            return Some(CollisionType::Wall);
        }
        if self.snake.occupies(cell) {
            return Some(CollisionType::SelfCollision);
        }
        None
    }

    /// Move the food to a uniformly random cell not covered by the snake.
    ///
    /// Rejection sampling: never returns while the snake fills the grid,
    /// which `step` prevents by ending the game on the filling move.
    pub fn spawn_food(&mut self) {
        loop {
            let cell = Coordinate::new(
                self.rng.gen_range(0..self.grid_size),
                self.rng.gen_range(0..self.grid_size),
            );

            if !self.will_collide(cell) {
                debug!(x = cell.x, y = cell.y, "food spawned");
                self.food = cell;
                return;
            }
        }
    }

    /// Change heading unless it would reverse a snake longer than one cell.
    ///
    /// Returns whether the new heading was accepted.
    pub fn set_direction(&mut self, heading: Heading) -> bool {
        if self.snake.len() > 1 {
            if let Some(current) = self.snake.heading() {
                if current.is_opposite(heading) {
                    trace!(?current, requested = ?heading, "reversal rejected");
                    return false;
                }
            }
        }

        self.snake.set_heading(heading);
        true
    }

    /// Advance the game by one tick, reporting what happened
    pub fn step(&mut self) -> TickOutcome {
        let Some(next) = self.snake.next_head_location() else {
            return TickOutcome::Idle;
        };

        if let Some(collision) = self.collision_at(next) {
            debug!(?collision, score = self.score(), "snake collided");
            return TickOutcome::Collided(collision);
        }

        let grew = next == self.food;
        if grew && self.free_cells() <= 1 {
            info!(score = self.score(), "snake filled the grid");
            return TickOutcome::Filled;
        }

        self.snake.advance(grew);

        if grew {
            self.spawn_food();
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }

    /// Advance the game by one tick; false means game over
    pub fn update(&mut self) -> bool {
        self.step().is_alive()
    }

    /// Start a fresh game with a one-cell snake at the initial position
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.initial_snake_position);
        self.spawn_food();
        info!(grid_size = self.grid_size, "board reset");
    }
}
