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
use tokio::time::interval;
use tracing::{debug, info};

use crate::game::{GameConfig, InputEvent, Session, Signal};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Renderer, Scene};

/// Keyboard-driven play in the terminal
pub struct HumanMode {
    session: Session,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    /// Events collected since the last tick
    pending: Vec<InputEvent>,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let session = match seed {
            Some(seed) => Session::with_seed(config, seed),
            None => Session::new(config),
        }
        .context("Failed to create game session")?;

        Ok(Self {
            session,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            pending: Vec::new(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let config = self.session.config();
        let tick_interval = Duration::from_micros(1_000_000 / u64::from(config.tick_rate_hz));
        let mut tick_timer = interval(tick_interval);

        let render_interval = Duration::from_millis(config.frame_interval_ms);
        let mut render_timer = interval(render_interval);

        info!(?tick_interval, ?render_interval, "Game loop started");

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.tick()?;
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let scene = Scene::project(&self.session);
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &scene, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            best_score = self.metrics.best_score,
            games_played = self.metrics.games_played,
            "Game loop finished"
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            if let KeyAction::Game(input) = self.input_handler.handle_key_event(key) {
                debug!(?input, "Key input");
                self.pending.push(input);
            }
        }
    }

    /// Feed the collected input to the session and advance it one tick
    fn tick(&mut self) -> Result<()> {
        let signal = self
            .session
            .update(&self.pending)
            .context("Game update failed")?;
        self.pending.clear();

        self.metrics
            .observe(self.session.phase(), self.session.score());

        if signal == Signal::Quit {
            self.should_quit = true;
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn mode() -> HumanMode {
        HumanMode::new(GameConfig::default(), Some(11)).unwrap()
    }

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert_eq!(mode.session.phase(), Phase::MainMenu);
        assert_eq!(mode.session.score(), 0);
        assert!(mode.pending.is_empty());
    }

    #[test]
    fn test_refuses_unusable_tick_rate() {
        let config = GameConfig {
            tick_rate_hz: 2_000_000,
            ..GameConfig::default()
        };
        assert!(HumanMode::new(config, Some(1)).is_err());
    }

    #[test]
    fn test_only_presses_are_queued() {
        let mut mode = mode();

        mode.handle_event(key(KeyCode::Char(' '), KeyEventKind::Release));
        assert!(mode.pending.is_empty());

        mode.handle_event(key(KeyCode::Char(' '), KeyEventKind::Press));
        mode.handle_event(key(KeyCode::Char('x'), KeyEventKind::Press));
        assert_eq!(mode.pending, vec![InputEvent::Start]);
    }

    #[test]
    fn test_tick_consumes_pending_input() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Enter, KeyEventKind::Press));

        mode.tick().unwrap();

        assert!(mode.pending.is_empty());
        assert_eq!(mode.session.phase(), Phase::Countdown);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_quit_key_stops_loop() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Char('q'), KeyEventKind::Press));

        mode.tick().unwrap();

        assert!(mode.should_quit);
    }
}
