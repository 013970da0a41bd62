use std::time::{Duration, Instant};

use crate::game::Phase;

/// Per-process play statistics. Nothing here outlives the process.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_score: u32,
    pub games_played: u32,
    running: bool,
    last_phase: Option<Phase>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: 0,
            games_played: 0,
            running: false,
            last_phase: None,
        }
    }

    /// Advance the game clock while a game is in progress
    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    /// Feed the phase seen after a tick; starts and stops the clock on
    /// phase changes
    pub fn observe(&mut self, phase: Phase, score: u32) {
        if self.last_phase == Some(phase) {
            return;
        }
        match phase {
            Phase::Playing => self.on_game_start(),
            Phase::GameOver => self.on_game_over(score),
            Phase::MainMenu => self.running = false,
            Phase::Countdown => {
                self.running = false;
                self.elapsed_time = Duration::ZERO;
            }
            Phase::Dying => self.update(),
        }
        self.last_phase = Some(phase);
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.running = true;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.running = false;
        self.games_played += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
