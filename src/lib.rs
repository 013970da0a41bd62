//! Tile Snake - single-player snake on a wrapping tile board
//!
//! This library provides:
//! - Core game logic: grid, snake body, movement and the phased session (game module)
//! - Scene projection and TUI rendering (render module)
//! - Keyboard mapping (input module)
//! - Per-process play statistics (metrics module)
//! - The interactive terminal run loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
