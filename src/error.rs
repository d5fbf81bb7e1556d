//! Errors raised by the game session.
//!
//! An illegal placement is not an error: [`crate::game::Game::play`] reports
//! it as `Ok(false)`. These variants cover requests that should never have
//! been issued in the current state.

/// Errors that can occur while driving a [`crate::game::Game`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Coordinate outside the 8x8 board.
    #[error("square ({row}, {col}) is outside the board")]
    OutOfRange { row: i32, col: i32 },

    /// The game already ended.
    #[error("game is already over")]
    GameOver,

    /// The current player still has a legal move, or neither side can move.
    #[error("pass is only allowed when the current player has no legal move")]
    PassNotAllowed,
}
