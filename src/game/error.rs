use thiserror::Error;

/// Invariant violations raised by the game core.
///
/// Collisions and eating are regular outcomes and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The body was asked to do something its current shape cannot support
    #[error("invalid body state: cannot remove the tail of a body of length {length}")]
    InvalidState { length: usize },

    /// The configuration cannot make a playable session
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Every cell of the board is covered by the snake
    #[error("no free cell left on a {width}x{height} board")]
    NoFreeCell { width: i32, height: i32 },
}

pub type Result<T> = std::result::Result<T, GameError>;
