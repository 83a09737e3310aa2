use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReversiError;

/// Side length of the playing area.
pub const BOARD_SIZE: usize = 8;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Black <-> White
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }

    /// Integer code used by the save format: 1=Black, 2=White.
    pub fn code(self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }
}

impl Default for Player {
    /// Black moves first.
    fn default() -> Self {
        Player::Black
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Player {
    type Err = ReversiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Black" => Ok(Player::Black),
            "White" => Ok(Player::White),
            other => Err(ReversiError::InvalidPlayer(other.to_string())),
        }
    }
}

/// Value shown for an in-bounds cell.
///
/// `LegalMove` is only produced for display; saved positions and board
/// comparisons use the value modulo 3, which folds it back to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cell {
    Empty = 0,
    Black = 1,
    White = 2,
    LegalMove = 3,
}

impl Cell {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decodes a saved integer, folding a stray `3` back to `Empty`.
    pub fn from_code(value: i64) -> Result<Self, ReversiError> {
        if !(0..=3).contains(&value) {
            return Err(ReversiError::InvalidCell(value));
        }
        Ok(match value % 3 {
            1 => Cell::Black,
            2 => Cell::White,
            _ => Cell::Empty,
        })
    }

    pub fn normalized(self) -> Self {
        match self {
            Cell::LegalMove => Cell::Empty,
            other => other,
        }
    }

    /// Character drawn for the cell by the board UI.
    pub fn glyph(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Black => "⚫️",
            Cell::White => "⚪️",
            Cell::LegalMove => "・",
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

/// A board coordinate, 0-based within the 8x8 playing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Index into the bordered board, or `None` when off the playing area.
    pub fn index(self) -> Option<usize> {
        if self.row as usize >= BOARD_SIZE || self.col as usize >= BOARD_SIZE {
            return None;
        }
        Some(crate::board::index_of(self.col as usize + 1, self.row as usize + 1))
    }

    /// Inverse of [`Position::index`]; border indices map to `None`.
    pub fn from_index(index: usize) -> Option<Self> {
        let (x, y) = crate::board::coords_of(index)?;
        Some(Self {
            row: (y - 1) as u8,
            col: (x - 1) as u8,
        })
    }
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// `None` on a draw.
    pub winner: Option<Player>,
    pub black_count: u8,
    pub white_count: u8,
}

impl GameResult {
    pub fn from_counts(black_count: u8, white_count: u8) -> Self {
        let winner = if black_count > white_count {
            Some(Player::Black)
        } else if white_count > black_count {
            Some(Player::White)
        } else {
            None
        };
        Self {
            winner,
            black_count,
            white_count,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            None => f.write_str("Draw"),
            Some(Player::Black) => write!(
                f,
                "Black wins ({} > {})",
                self.black_count, self.white_count
            ),
            Some(Player::White) => write!(
                f,
                "White wins ({} > {})",
                self.white_count, self.black_count
            ),
        }
    }
}

/// Where a session stands in the turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The side to move has at least one legal cell.
    InProgress,
    /// The side to move has no legal cell but the opponent does.
    ForcedPass,
    /// Neither side can move. Terminal until `reset` or `load`.
    GameOver(GameResult),
}

/// Snapshot of a session handed to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// 64 display codes in row-major order, legal cells marked with 3.
    pub board: Vec<u8>,
    pub current_player: Player,
    pub black_count: u8,
    pub white_count: u8,
    pub message: String,
    pub pass_enabled: bool,
    pub is_game_over: bool,
    /// Row-major positions (0..=63) flipped by the last move.
    pub flipped: Vec<u8>,
}
