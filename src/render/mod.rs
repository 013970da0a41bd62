//! Turning a session into pictures.
//!
//! [`projection`] reduces a session to a plain [`Scene`] of tiles, and
//! [`renderer`] draws scenes into a ratatui frame.

pub mod projection;
pub mod renderer;

pub use projection::{CALORIES_PER_POINT, Overlay, Scene, SegmentView};
pub use renderer::Renderer;
