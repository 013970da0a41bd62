//! The phased game session.
//!
//! A session is advanced by calling [`Session::update`] once per fixed tick
//! with the input events collected since the previous tick. Which rules run
//! depends on the current [`Phase`]:
//!
//! - `MainMenu`: a decorative snake wanders around the board
//! - `Countdown`: everything is frozen while a 3-2-1 counter runs
//! - `Playing`: the player steers, eats and speeds up
//! - `Dying`: the snake turns into bones one segment at a time
//! - `GameOver`: waits for a restart or a return to the menu

use rand::Rng;
use tracing::{debug, info, trace};

use super::{
    action::{Direction, InputEvent},
    config::GameConfig,
    engine::{self, MovementEngine, StepChecks, StepOutcome},
    error::{GameError, Result},
    grid::Grid,
    state::{Body, Food},
    title,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    MainMenu,
    Countdown,
    Playing,
    Dying,
    GameOver,
}

/// What the run loop should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Quit,
}

pub struct Session {
    config: GameConfig,
    engine: MovementEngine,
    banner: Vec<Body>,
    phase: Phase,

    body: Body,
    food: Food,
    direction: Direction,
    score: u32,

    ticks: u32,
    ticks_per_move: u32,

    countdown: i32,
    countdown_ticks: u32,

    skeleton_ticks: u32,

    tongue_out: bool,
    tongue_ticks: u32,
}

impl Session {
    /// Start a session on the main menu
    pub fn new(config: GameConfig) -> Result<Self> {
        let grid = Grid::new(config.grid_width, config.grid_height);
        Self::with_engine(config, MovementEngine::new(grid))
    }

    /// Same as [`Session::new`] with reproducible randomness
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        let grid = Grid::new(config.grid_width, config.grid_height);
        Self::with_engine(config, MovementEngine::with_seed(grid, seed))
    }

    fn with_engine(config: GameConfig, mut engine: MovementEngine) -> Result<Self> {
        config
            .validate()
            .map_err(|reason| GameError::InvalidConfig { reason })?;

        let grid = *engine.grid();
        let banner = title::banner(&grid)?;
        let body = Body::spawn(grid.center());
        let food = engine.place_food(&body)?;

        let mut session = Self {
            ticks_per_move: config.initial_ticks_per_move,
            countdown: config.countdown_from,
            config,
            engine,
            banner,
            phase: Phase::MainMenu,
            body,
            food,
            direction: Direction::Up,
            score: 0,
            ticks: 0,
            countdown_ticks: 0,
            skeleton_ticks: 0,
            tongue_out: false,
            tongue_ticks: 0,
        };
        session.enter(Phase::MainMenu)?;
        Ok(session)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// The "SNAKE" title snakes
    pub fn banner(&self) -> &[Body] {
        &self.banner
    }

    /// Heading the player snake will take on its next move
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks_per_move(&self) -> u32 {
        self.ticks_per_move
    }

    /// Current countdown number; 0 means "GO!"
    pub fn countdown(&self) -> i32 {
        self.countdown
    }

    pub fn tongue_out(&self) -> bool {
        self.tongue_out
    }

    /// Run one tick
    pub fn update(&mut self, events: &[InputEvent]) -> Result<Signal> {
        if events.contains(&InputEvent::Quit) {
            info!(phase = ?self.phase, score = self.score, "Quit requested");
            return Ok(Signal::Quit);
        }

        match self.phase {
            Phase::MainMenu => self.update_main_menu(events)?,
            Phase::Countdown => self.update_countdown()?,
            Phase::Playing => self.update_playing(events)?,
            Phase::Dying => self.update_dying()?,
            Phase::GameOver => self.update_game_over(events)?,
        }

        Ok(Signal::Continue)
    }

    fn update_main_menu(&mut self, events: &[InputEvent]) -> Result<()> {
        if events.contains(&InputEvent::Start) {
            return self.enter(Phase::Countdown);
        }

        self.ticks += 1;
        if self.ticks >= self.ticks_per_move {
            self.ticks = 0;
            let direction = self.body.head().facing.wander(self.engine.rng());
            trace!(?direction, "Menu snake step");
            self.engine.step(
                &mut self.body,
                &mut self.food,
                &mut self.score,
                direction,
                StepChecks::NONE,
            )?;
        }

        self.flick_tongue();
        Ok(())
    }

    fn update_countdown(&mut self) -> Result<()> {
        self.countdown_ticks += 1;
        if self.countdown_ticks >= self.config.countdown_ticks_per_step {
            self.countdown -= 1;
            self.countdown_ticks = 0;
        }

        if self.countdown < 0 {
            self.enter(Phase::Playing)?;
        }
        Ok(())
    }

    fn update_playing(&mut self, events: &[InputEvent]) -> Result<()> {
        for event in events {
            if let InputEvent::Turn(requested) = *event {
                if engine::accept_turn(self.body.head().facing, requested) {
                    self.direction = requested;
                }
            }
        }

        self.ticks += 1;
        if self.ticks >= self.ticks_per_move {
            self.ticks = 0;
            let outcome = match self.engine.step(
                &mut self.body,
                &mut self.food,
                &mut self.score,
                self.direction,
                StepChecks::ALL,
            ) {
                // Nowhere left to put food: the snake covers the board
                Err(GameError::NoFreeCell { .. }) => {
                    info!(score = self.score, "Board filled");
                    return self.enter(Phase::Dying);
                }
                other => other?,
            };

            match outcome {
                StepOutcome::Died => return self.enter(Phase::Dying),
                StepOutcome::Moved { ate_food } => {
                    if ate_food {
                        debug!(score = self.score, "Ate a cupcake");
                    }
                    self.ticks_per_move = engine::ticks_per_move(self.score);
                }
            }
        }

        self.flick_tongue();
        Ok(())
    }

    fn update_dying(&mut self) -> Result<()> {
        self.skeleton_ticks += 1;
        if self.skeleton_ticks >= self.config.skeleton_ticks_per_segment {
            self.skeleton_ticks = 0;
            self.body.mark_next_skeleton();
            if self.body.is_fully_skeletal() {
                self.enter(Phase::GameOver)?;
            }
        }
        Ok(())
    }

    fn update_game_over(&mut self, events: &[InputEvent]) -> Result<()> {
        for event in events {
            match event {
                InputEvent::Start => return self.enter(Phase::Countdown),
                InputEvent::ToMenu => return self.enter(Phase::MainMenu),
                _ => {}
            }
        }
        Ok(())
    }

    fn enter(&mut self, phase: Phase) -> Result<()> {
        match phase {
            Phase::MainMenu => {
                self.reset()?;

                // Give the menu snake a head start
                let extra = self
                    .engine
                    .rng()
                    .gen_range(0..self.config.menu_pregrowth_max.max(1));
                for _ in 0..extra {
                    let direction = self.body.head().facing.wander(self.engine.rng());
                    self.body.advance(self.engine.grid(), direction);
                }
                self.ticks_per_move = self.config.menu_ticks_per_move;
            }
            Phase::Countdown => self.reset()?,
            Phase::Dying => self.tongue_out = false,
            Phase::Playing | Phase::GameOver => {}
        }

        info!(from = ?self.phase, to = ?phase, score = self.score, "Phase change");
        self.phase = phase;
        Ok(())
    }

    /// Fresh snake and food, score and speed back to the start
    fn reset(&mut self) -> Result<()> {
        self.body = Body::spawn(self.engine.grid().center());
        self.food = self.engine.place_food(&self.body)?;
        self.direction = Direction::Up;
        self.score = 0;
        self.ticks = 0;
        self.ticks_per_move = self.config.initial_ticks_per_move;
        self.countdown = self.config.countdown_from;
        self.countdown_ticks = 0;
        self.skeleton_ticks = 0;
        self.tongue_out = false;
        self.tongue_ticks = 0;
        Ok(())
    }

    fn flick_tongue(&mut self) {
        self.tongue_ticks += 1;
        if self.tongue_ticks >= self.config.tongue_ticks {
            self.tongue_ticks = 0;
            self.tongue_out = if self.tongue_out {
                false
            } else {
                let chance = self.config.tongue_chance.clamp(0.0, 1.0);
                self.engine.rng().gen_bool(chance)
            };
        }
    }
}
