use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Board, CollisionType, Coordinate, TickOutcome};
use crate::metrics::GameMetrics;
use crate::modes::human::{Phase, PlaySession};

/// Terminal columns used per grid cell
const CELL_WIDTH: u16 = 2;

const GAME_OVER_WIDTH: u16 = 40;
const GAME_OVER_HEIGHT: u16 = 11;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, session: &PlaySession) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(session.board(), session.metrics(), session.phase());
        frame.render_widget(stats, chunks[0]);

        let (width, height) = board_extent(session.board().grid_size());

        match session.phase() {
            Phase::GameOver(outcome) => {
                let area = centered_area(
                    chunks[1],
                    width.max(GAME_OVER_WIDTH),
                    height.max(GAME_OVER_HEIGHT),
                );
                let game_over = self.render_game_over(session.board(), session.metrics(), outcome);
                frame.render_widget(Clear, area);
                frame.render_widget(game_over, area);
            }
            phase => {
                let area = centered_area(chunks[1], width, height);
                let grid = self.render_grid(session.board(), phase == Phase::Paused);
                frame.render_widget(grid, area);
            }
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, board: &Board, paused: bool) -> Paragraph<'_> {
        let snake = board.snake();
        let head = snake.head();
        let mut lines = Vec::with_capacity(board.grid_size() as usize);

        for y in 0..board.grid_size() {
            let mut spans = Vec::with_capacity(board.grid_size() as usize);

            for x in 0..board.grid_size() {
                let cell = Coordinate::new(x, y);

                let span = if cell == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snake.occupies(cell) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if cell == board.food() {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled("· ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        let title = if paused { " Snake (paused) " } else { " Snake " };

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(if paused { Color::Yellow } else { Color::White }))
                .title(title),
        )
    }

    fn render_stats(&self, board: &Board, metrics: &GameMetrics, phase: Phase) -> Paragraph<'_> {
        let state = match phase {
            Phase::Paused => "PAUSED",
            Phase::Running => "RUNNING",
            Phase::GameOver(_) => "GAME OVER",
        };

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                board.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled(state, Style::default().fg(Color::Cyan)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(
        &self,
        board: &Board,
        metrics: &GameMetrics,
        outcome: TickOutcome,
    ) -> Paragraph<'_> {
        let reason = match outcome {
            TickOutcome::Collided(CollisionType::Wall) => "You hit the wall",
            TickOutcome::Collided(CollisionType::SelfCollision) => "You ran into yourself",
            TickOutcome::Filled => "The board is full!",
            _ => "",
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(Span::styled(reason, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    board.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Games: ", Style::default().fg(Color::Yellow)),
                Span::styled(metrics.games_played.to_string(), Style::default().fg(Color::White)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Yellow)),
            Span::raw(" to pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal size of a bordered `grid_size` grid
fn board_extent(grid_size: u32) -> (u16, u16) {
    let cells = u16::try_from(grid_size).unwrap_or(u16::MAX);
    (
        cells.saturating_mul(CELL_WIDTH).saturating_add(2),
        cells.saturating_add(2),
    )
}

/// Rectangle of the given size centred in `area` and clipped to it
fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Heading;
    use crate::input::KeyAction;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Duration;

    fn rendered_text(session: &PlaySession) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, session))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_paused_board() {
        let session = PlaySession::new(
            Board::seeded(10, Coordinate::new(4, 4), 3),
            Duration::from_millis(100),
        );
        let text = rendered_text(&session);

        assert!(text.contains("PAUSED"));
        assert!(text.contains("Score: 0"));
        assert!(text.contains("■"));
        assert!(text.contains("●"));
    }

    #[test]
    fn test_renders_game_over_reason() {
        let mut session = PlaySession::new(
            Board::seeded(5, Coordinate::new(4, 2), 3),
            Duration::from_millis(100),
        );
        session.apply(KeyAction::Steer(Heading::East));
        session.tick();
        let text = rendered_text(&session);

        assert!(text.contains("GAME OVER"));
        assert!(text.contains("You hit the wall"));
    }

    #[test]
    fn test_board_area_is_centred() {
        let area = Rect::new(0, 3, 80, 30);
        let (width, height) = board_extent(10);
        let board = centered_area(area, width, height);

        assert_eq!(board.width, 22);
        assert_eq!(board.height, 12);
        assert_eq!(board.x, 29);
        assert_eq!(board.y, 3 + 9);
    }

    #[test]
    fn test_board_area_clipped_to_terminal() {
        let area = Rect::new(0, 0, 20, 10);
        let (width, height) = board_extent(40);
        let board = centered_area(area, width, height);

        assert_eq!(board, area);
    }
}
