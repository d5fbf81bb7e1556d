use std::fmt;

use crate::types::{Cell, Player, Position};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// The rules engine: an 8x8 grid plus the player to move.
///
/// Coordinates passed to [`Board::get_flippable_discs`], [`Board::is_valid_move`]
/// and [`Board::place_disc`] must satisfy [`Board::is_valid_position`].
/// Out-of-range coordinates panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
    current_player: Player,
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white, black to move.
    pub fn new() -> Self {
        let mut board = Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            current_player: Player::Black,
        };
        board.reset();
        board
    }

    /// Builds a board from an arbitrary grid. No legality checks are made.
    pub fn from_cells(cells: Grid, current_player: Player) -> Self {
        Self {
            cells,
            current_player,
        }
    }

    /// Restores the starting position.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        let center = BOARD_SIZE / 2;
        self.cells[center - 1][center - 1] = Cell::White;
        self.cells[center - 1][center] = Cell::Black;
        self.cells[center][center - 1] = Cell::Black;
        self.cells[center][center] = Cell::White;
        self.current_player = Player::Black;
    }

    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert_in_bounds(row, col);
        self.cells[row][col]
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_valid_position(row: i32, col: i32) -> bool {
        in_bounds(row, col)
    }

    /// Returns every disc that `player` would flip by playing at `(row, col)`.
    ///
    /// Empty when the square is occupied or nothing is bracketed. Each entry
    /// appears once; callers must not rely on the order.
    pub fn get_flippable_discs(&self, row: usize, col: usize, player: Player) -> Vec<Position> {
        assert_in_bounds(row, col);
        if self.cells[row][col] != Cell::Empty {
            return Vec::new();
        }

        let me = Cell::from(player);
        let opp = Cell::from(!player);
        let mut flips = Vec::new();

        for (dr, dc) in DIRECTIONS {
            let mut r = row as i32 + dr;
            let mut c = col as i32 + dc;
            let mut line = Vec::new();

            while in_bounds(r, c) {
                let square = self.cells[r as usize][c as usize];
                if square == opp {
                    line.push(Position::new(r as u8, c as u8));
                } else if square == me {
                    flips.append(&mut line);
                    break;
                } else {
                    break;
                }

                r += dr;
                c += dc;
            }
        }

        flips
    }

    pub fn is_valid_move(&self, row: usize, col: usize, player: Player) -> bool {
        !self.get_flippable_discs(row, col, player).is_empty()
    }

    /// Legal moves for `player`, in row-major order.
    pub fn get_valid_moves(&self, player: Player) -> Vec<Position> {
        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.is_valid_move(row, col, player) {
                    moves.push(Position::from((row, col)));
                }
            }
        }
        moves
    }

    /// Places a disc for the current player and flips captured discs.
    /// Returns `false` and leaves the board untouched when the move is illegal.
    ///
    /// The turn is not handed over; call [`Board::switch_player`] afterwards.
    pub fn place_disc(&mut self, row: usize, col: usize) -> bool {
        self.place_disc_with_flips(row, col).is_some()
    }

    /// Like [`Board::place_disc`], but hands back the flipped discs.
    pub fn place_disc_with_flips(&mut self, row: usize, col: usize) -> Option<Vec<Position>> {
        let flips = self.get_flippable_discs(row, col, self.current_player);
        if flips.is_empty() {
            return None;
        }

        let me = Cell::from(self.current_player);
        self.cells[row][col] = me;
        for pos in &flips {
            self.cells[pos.row as usize][pos.col as usize] = me;
        }

        Some(flips)
    }

    pub fn switch_player(&mut self) {
        self.current_player = !self.current_player;
    }

    /// Returns `(black_count, white_count)`.
    pub fn count_discs(&self) -> (u8, u8) {
        let mut black = 0;
        let mut white = 0;
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::Black => black += 1,
                Cell::White => white += 1,
                Cell::Empty => {}
            }
        }
        (black, white)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count_discs();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// True once neither side can move. Empty squares may remain.
    pub fn is_game_over(&self) -> bool {
        self.get_valid_moves(Player::Black).is_empty()
            && self.get_valid_moves(Player::White).is_empty()
    }

    /// The side with more discs, `None` on a tie. Does not check whether the
    /// game has actually ended.
    pub fn get_winner(&self) -> Option<Player> {
        let (black_count, white_count) = self.count_discs();
        if black_count > white_count {
            Some(Player::Black)
        } else if white_count > black_count {
            Some(Player::White)
        } else {
            None
        }
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (slot, cell) in board.iter_mut().zip(self.cells.iter().flatten()) {
            *slot = cell.code();
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("  a b c d e f g h\n")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{}", row + 1)?;
            for cell in cells {
                let c = match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'X',
                    Cell::White => 'O',
                };
                write!(f, " {c}")?;
            }
            f.write_str("\n")?;
        }
        writeln!(f, "{} to move", self.current_player)
    }
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

fn assert_in_bounds(row: usize, col: usize) {
    assert!(
        row < BOARD_SIZE && col < BOARD_SIZE,
        "square ({row}, {col}) is outside the {BOARD_SIZE}x{BOARD_SIZE} board"
    );
}
