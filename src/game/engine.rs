use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use super::{
    action::Direction,
    error::{GameError, Result},
    grid::Grid,
    state::{Body, Food, Position},
};

/// Random probes tried before scanning the board for a free cell
const FOOD_SAMPLE_ATTEMPTS: usize = 64;

/// Ticks per move at score 0
const SLOWEST_TICKS_PER_MOVE: u32 = 40;
/// Ticks per move never drop below this
const FASTEST_TICKS_PER_MOVE: u32 = 7;

/// Which rules apply to a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepChecks {
    pub death: bool,
    pub food: bool,
}

impl StepChecks {
    /// Free roaming, used by the decorative snakes
    pub const NONE: StepChecks = StepChecks {
        death: false,
        food: false,
    };
    /// A real game
    pub const ALL: StepChecks = StepChecks {
        death: true,
        food: true,
    };
}

/// Result of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The head would have bitten the body; nothing moved
    Died,
    /// The snake moved one cell
    Moved { ate_food: bool },
}

/// Ticks between two moves for a given score
pub fn ticks_per_move(score: u32) -> u32 {
    SLOWEST_TICKS_PER_MOVE
        .saturating_sub(score)
        .max(FASTEST_TICKS_PER_MOVE)
}

/// A player may only turn by 90 degrees relative to where the head points
pub fn accept_turn(facing: Direction, requested: Direction) -> bool {
    facing.is_perpendicular(requested)
}

/// The engine that moves bodies around a board
pub struct MovementEngine {
    grid: Grid,
    rng: StdRng,
}

impl MovementEngine {
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(grid, StdRng::from_entropy())
    }

    /// Deterministic engine, for replays and tests
    pub fn with_seed(grid: Grid, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: Grid, rng: StdRng) -> Self {
        Self { grid, rng }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Move body one cell in direction.
    ///
    /// With death checks on, a move into the body is refused before anything
    /// changes. With food checks on, landing on the food scores a point,
    /// schedules growth for the next step and puts new food somewhere free.
    pub fn step(
        &mut self,
        body: &mut Body,
        food: &mut Food,
        score: &mut u32,
        direction: Direction,
        checks: StepChecks,
    ) -> Result<StepOutcome> {
        if checks.death && body.check_self_collision(&self.grid, direction) {
            debug!(?direction, length = body.len(), "Snake bit itself");
            return Ok(StepOutcome::Died);
        }

        if body.pending_growth {
            body.advance(&self.grid, direction);
            body.pending_growth = false;
        } else {
            body.remove_tail()?;
            body.advance(&self.grid, direction);
        }

        let mut ate_food = false;
        if checks.food && body.check_food_eaten(food) {
            *score += 1;
            body.pending_growth = true;
            *food = self.place_food(body)?;
            ate_food = true;
        }

        Ok(StepOutcome::Moved { ate_food })
    }

    /// Spawn food at a random cell not covered by body
    pub fn place_food(&mut self, body: &Body) -> Result<Food> {
        place_food(&self.grid, body, &mut self.rng)
    }
}

/// Spawn food at a random empty position.
///
/// Random probing is fast on a mostly empty board; once it keeps hitting the
/// snake the free cells are enumerated instead.
pub fn place_food<R: Rng + ?Sized>(grid: &Grid, body: &Body, rng: &mut R) -> Result<Food> {
    for _ in 0..FOOD_SAMPLE_ATTEMPTS {
        let pos = Position::new(rng.gen_range(0..grid.width), rng.gen_range(0..grid.height));
        if !body.occupies(pos) {
            debug!(x = pos.x, y = pos.y, "Placed food");
            return Ok(Food { pos });
        }
    }

    warn!(
        length = body.len(),
        cells = grid.cell_count(),
        "Food sampling kept hitting the snake, scanning for free cells"
    );
    grid.cells()
        .filter(|pos| !body.occupies(*pos))
        .choose(rng)
        .map(|pos| Food { pos })
        .ok_or(GameError::NoFreeCell {
            width: grid.width,
            height: grid.height,
        })
}
