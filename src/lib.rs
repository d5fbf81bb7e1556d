//! Othello (Reversi) rules engine.
//!
//! [`Board`] is the engine itself: grid, legality, flipping and terminal
//! detection. [`Game`] drives the turn cycle on top of it, and [`wasm`]
//! exposes a session to a browser front-end.

pub mod board;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::{BOARD_SIZE, Board, Grid, NUM_SQUARES};
pub use error::GameError;
pub use game::Game;
pub use types::{Cell, GameResult, GameState, Player, Position};
