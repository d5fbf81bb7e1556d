use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::BOARD_SIZE;

/// One of the two players.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    /// Black always moves first.
    #[default]
    Black,
    White,
}

impl Player {
    /// Wire value used by [`GameState`] and [`GameResult`]: 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::Black => "black",
            Player::White => "white",
        })
    }
}

/// Contents of a single square.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Converts to `0=empty, 1=black, 2=white`.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }

    /// The player owning a disc on this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major square index (0..=63).
    pub fn index(self) -> u8 {
        self.row * BOARD_SIZE as u8 + self.col
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row as u8, col as u8)
    }
}

/// Algebraic notation: column letter then 1-based row, so (2,3) is "d3".
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'a' + self.col) as char;
        write!(f, "{}{}", col, self.row + 1)
    }
}

/// Public game state handed to the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Row-major, 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the previous action was a pass.
    /// - `false` after a normal move or a reset.
    pub is_pass: bool,
    /// Contract:
    /// - Normal move: list of flipped positions (0..=63).
    /// - Pass or reset: empty list.
    pub flipped: Vec<u8>,
    pub legal_moves: Vec<Position>,
}

/// Final score. `winner` is 0 on a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_toggles_player() {
        assert_eq!(!Player::Black, Player::White);
        assert_eq!(!!Player::Black, Player::Black);
    }

    #[test]
    fn position_uses_algebraic_notation() {
        assert_eq!(Position::new(2, 3).to_string(), "d3");
        assert_eq!(Position::new(7, 7).to_string(), "h8");
        assert_eq!(Position::new(5, 4).index(), 44);
    }

    #[test]
    fn cell_codes_match_wire_format() {
        assert_eq!(Cell::Empty.code(), 0);
        assert_eq!(Cell::from(Player::Black).code(), Player::Black.code());
        assert_eq!(Cell::from(Player::White).code(), Player::White.code());
        assert_eq!(Cell::White.owner(), Some(Player::White));
        assert_eq!(Cell::Empty.owner(), None);
    }
}
