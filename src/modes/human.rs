use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use crate::game::{Board, GameConfig, Heading, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Presentation state layered over the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a steering key; the board is not ticked
    Paused,
    Running,
    /// The last tick ended the game; the board keeps its final state
    GameOver(TickOutcome),
}

/// One launch of the game: the board plus everything the host layers on it
pub struct PlaySession {
    board: Board,
    metrics: GameMetrics,
    phase: Phase,
    tick_interval: Duration,
    should_quit: bool,
}

impl PlaySession {
    pub fn new(board: Board, tick_interval: Duration) -> Self {
        Self {
            board,
            metrics: GameMetrics::new(),
            phase: Phase::Paused,
            tick_interval,
            should_quit: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Steer(heading) => self.steer(heading),
            KeyAction::TogglePause => match self.phase {
                Phase::Running => self.phase = Phase::Paused,
                Phase::Paused if self.board.heading().is_some() => self.phase = Phase::Running,
                _ => {}
            },
            KeyAction::Restart => self.restart(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn steer(&mut self, heading: Heading) {
        if matches!(self.phase, Phase::GameOver(_)) {
            self.restart();
        }
        self.board.set_direction(heading);
        self.phase = Phase::Running;
    }

    fn restart(&mut self) {
        self.board.reset();
        self.metrics.on_game_start();
        self.phase = Phase::Paused;
    }

    /// Advance the board if the game is running
    pub fn tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }

        let outcome = self.board.step();
        if outcome.is_alive() {
            self.metrics.on_tick(self.tick_interval);
        } else {
            let score = self.board.score();
            self.metrics.on_game_over(score);
            info!(?outcome, score, high_score = self.metrics.high_score, "game over");
            self.phase = Phase::GameOver(outcome);
        }
    }
}

pub struct HumanMode {
    session: PlaySession,
    renderer: Renderer,
    input_handler: InputHandler,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate().context("Invalid game configuration")?;
        let board = Board::new(config.grid_size, config.start_position());
        Self::with_board(config, board)
    }

    /// Use a prepared board, e.g. one with a seeded food sequence
    pub fn with_board(config: GameConfig, board: Board) -> Result<Self> {
        config.validate().context("Invalid game configuration")?;
        Ok(Self {
            session: PlaySession::new(board, Duration::from_millis(config.tick_ms)),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            grid_size = self.session.board().grid_size(),
            tick_ms = self.session.tick_interval().as_millis() as u64,
            "session started"
        );

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        info!(
            games_played = self.session.metrics().games_played,
            high_score = self.session.metrics().high_score,
            "session ended"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.session.tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Render at 30 FPS
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => break,
                    }
                }

                _ = tick_timer.tick() => {
                    self.session.tick();
                }

                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.session);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.session.apply(KeyAction::Quit);
                }
            }

            if self.session.should_quit() {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.session.apply(action);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
