use std::time::Duration;

/// Per-launch statistics shown alongside the board
///
/// Play time only accumulates while the game is running, so pausing freezes
/// the clock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameMetrics {
    pub play_time: Duration,
    pub ticks: u64,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one running game tick lasting `tick`
    pub fn on_tick(&mut self, tick: Duration) {
        self.ticks += 1;
        self.play_time += tick;
    }

    pub fn on_game_start(&mut self) {
        self.play_time = Duration::ZERO;
        self.ticks = 0;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.play_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}
