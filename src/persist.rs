//! Text form of a saved position.
//!
//! ```text
//! player = "Black"
//! board = [
//!   [0, 0, 0, 0, 0, 0, 0, 0],
//!   ...
//! ]
//! ```
//!
//! Rows run top to bottom, columns left to right, `0=Empty, 1=Black, 2=White`.

use std::fmt::Write;

use serde::Deserialize;

use crate::board::Board;
use crate::error::{Result, ReversiError};
use crate::types::{BOARD_SIZE, Cell, Player};

/// Shape of the save file as read by `toml`.
#[derive(Debug, Deserialize)]
struct SavedGame {
    player: String,
    board: Vec<Vec<i64>>,
}

/// Player to move plus the disks on the board; everything a save file holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPosition {
    pub player: Player,
    pub board: Board,
}

impl SavedPosition {
    pub fn new(player: Player, board: Board) -> Self {
        Self { player, board }
    }

    pub fn to_toml(&self) -> String {
        let mut out = format!("player = \"{}\"\nboard = [\n", self.player.name());
        for row in self.board.rows() {
            let codes: Vec<String> = row.iter().map(|cell| cell.code().to_string()).collect();
            // Writing into a String cannot fail.
            let _ = writeln!(out, "  [{}],", codes.join(", "));
        }
        out.push(']');
        out
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let saved: SavedGame = toml::from_str(text)?;
        let player = saved.player.parse::<Player>()?;

        let shape_ok = saved.board.len() == BOARD_SIZE
            && saved.board.iter().all(|row| row.len() == BOARD_SIZE);
        if !shape_ok {
            return Err(ReversiError::InvalidBoardShape {
                rows: saved.board.len(),
                cols: saved.board.iter().map(Vec::len).collect(),
            });
        }

        let mut rows = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (target, source) in rows.iter_mut().zip(&saved.board) {
            for (cell, &value) in target.iter_mut().zip(source) {
                *cell = Cell::from_code(value)?;
            }
        }

        Ok(Self {
            player,
            board: Board::from_rows(&rows),
        })
    }
}
