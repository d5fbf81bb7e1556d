use tracing::{debug, info};

use crate::board::Board;
use crate::error::GameError;
use crate::types::{GameResult, GameState, Player, Position};

/// A game session: the board plus the turn cycle around it.
///
/// Placement hands the turn over automatically, passing is only accepted
/// when the current player is stuck and the opponent is not, and the game
/// ends as soon as neither side can move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    is_game_over: bool,
    is_pass: bool,
    flipped: Vec<u8>,
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Starts a session from an arbitrary position.
    pub fn from_board(board: Board) -> Self {
        Self {
            is_game_over: board.is_game_over(),
            board,
            is_pass: false,
            flipped: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
        debug!("game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Whether the previous action was a pass.
    pub fn is_pass(&self) -> bool {
        self.is_pass
    }

    /// Row-major indices flipped by the previous placement.
    pub fn flipped(&self) -> &[u8] {
        &self.flipped
    }

    /// Plays the current player's disc at `(row, col)`.
    ///
    /// Returns `Ok(false)` for an illegal placement, in which case nothing
    /// changes. On success the turn passes to the opponent.
    pub fn play(&mut self, row: i32, col: i32) -> Result<bool, GameError> {
        if !Board::is_valid_position(row, col) {
            return Err(GameError::OutOfRange { row, col });
        }
        if self.is_game_over {
            return Err(GameError::GameOver);
        }

        let player = self.board.current_player();
        let Some(flips) = self.board.place_disc_with_flips(row as usize, col as usize) else {
            debug!(%player, row, col, "rejected illegal move");
            return Ok(false);
        };

        let mut flipped: Vec<u8> = flips.iter().map(|pos| pos.index()).collect();
        flipped.sort_unstable();
        debug!(
            %player,
            square = %Position::from((row as usize, col as usize)),
            flipped = flipped.len(),
            "placed disc"
        );

        self.is_pass = false;
        self.flipped = flipped;
        self.board.switch_player();
        self.check_game_over();

        Ok(true)
    }

    /// True when the current player has no legal move but the opponent does.
    pub fn can_pass(&self) -> bool {
        let player = self.board.current_player();
        self.board.get_valid_moves(player).is_empty()
            && !self.board.get_valid_moves(!player).is_empty()
    }

    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if !self.can_pass() {
            return Err(GameError::PassNotAllowed);
        }

        debug!(player = %self.board.current_player(), "passed");
        self.is_pass = true;
        self.flipped.clear();
        self.board.switch_player();
        self.check_game_over();

        Ok(())
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.get_valid_moves(self.board.current_player())
    }

    pub fn winner(&self) -> Option<Player> {
        self.board.get_winner()
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count_discs();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.board.current_player().code(),
            black_count,
            white_count,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
            legal_moves: self.legal_moves(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count_discs();
        GameResult {
            winner: self.board.get_winner().map_or(0, Player::code),
            black_count,
            white_count,
        }
    }

    fn check_game_over(&mut self) {
        if self.board.is_game_over() {
            self.is_game_over = true;
            let (black, white) = self.board.count_discs();
            info!(black, white, winner = ?self.board.get_winner(), "game over");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
