//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A front end feeds a [`Session`] input events once per tick and reads it back
//! (usually through [`crate::render::Scene`]) to draw frames.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod session;
pub mod state;
pub mod tile;
pub mod title;

// Re-export commonly used types
pub use action::{Direction, InputEvent};
pub use config::GameConfig;
pub use engine::{MovementEngine, StepChecks, StepOutcome, accept_turn, place_food, ticks_per_move};
pub use error::{GameError, Result};
pub use grid::Grid;
pub use session::{Phase, Session, Signal};
pub use state::{Body, Food, Position, Segment};
pub use tile::{Rotation, Tile, TileType};
