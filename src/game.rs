use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::board::{Board, LegalMoves};
use crate::error::Result;
use crate::persist::SavedPosition;
use crate::types::{BOARD_SIZE, Cell, GameResult, GameState, Player, Position, Status};

/// Default save file, relative to the working directory.
pub const SAVE_FILE: &str = "reversi.toml";

/// One game, owned by whoever drives it (a UI, a test, a binding).
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    player: Player,
    legal: LegalMoves,
    status: Status,
    message: String,
    flipped: Vec<usize>,
    save_path: PathBuf,
}

impl GameSession {
    /// Standard opening, Black to move.
    pub fn new() -> Self {
        Self::from_position(SavedPosition::new(Player::Black, Board::new()))
    }

    /// Starts from an arbitrary position and judges it immediately, so a
    /// position where the side to move is stuck comes up as a forced pass
    /// or a finished game.
    pub fn from_position(position: SavedPosition) -> Self {
        let mut session = Self {
            board: position.board,
            player: position.player,
            legal: LegalMoves::default(),
            status: Status::InProgress,
            message: String::new(),
            flipped: Vec::new(),
            save_path: PathBuf::from(SAVE_FILE),
        };
        session.refresh();
        session
    }

    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    pub fn reset(&mut self) {
        debug!("resetting to the opening position");
        self.restore(SavedPosition::new(Player::Black, Board::new()));
    }

    /// Attempts to place the current player's disk at a bordered board index.
    /// Returns `false`, changing nothing, when the cell is not a legal move.
    pub fn click(&mut self, index: usize) -> bool {
        if !self.legal.contains(index) {
            trace!("ignoring click on {index}: not a legal cell for {}", self.player);
            return false;
        }

        let flipped = self.board.place(index, self.player);
        if flipped.is_empty() {
            return false;
        }

        self.flipped = flipped;
        self.player = self.player.opponent();
        self.refresh();
        true
    }

    pub fn click_at(&mut self, position: Position) -> bool {
        position.index().is_some_and(|index| self.click(index))
    }

    /// Hands the turn to the opponent. Only allowed while a pass is forced.
    pub fn pass(&mut self) -> bool {
        if self.status != Status::ForcedPass {
            return false;
        }
        self.flipped.clear();
        self.player = self.player.opponent();
        self.refresh();
        true
    }

    /// Evaluates the current position without changing it.
    ///
    /// The side to move plays on while it has a legal cell; when it has none
    /// but the opponent does, it must pass; when neither can move, or the
    /// board is full, the game is over.
    pub fn judge(&self) -> Status {
        if !self.board.is_full() {
            if self.board.legal_moves(self.player).any() {
                return Status::InProgress;
            }
            if self.board.legal_moves(self.player.opponent()).any() {
                return Status::ForcedPass;
            }
        }
        let (black_count, white_count) = self.board.count();
        Status::GameOver(GameResult::from_counts(black_count, white_count))
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn legal_moves(&self) -> LegalMoves {
        self.legal
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn pass_enabled(&self) -> bool {
        self.status == Status::ForcedPass
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, Status::GameOver(_))
    }

    /// Returns `(black_count, white_count)`.
    pub fn counts(&self) -> (u8, u8) {
        self.board.count()
    }

    /// Indices flipped by the last move; empty after a pass, reset or load.
    pub fn last_flipped(&self) -> &[usize] {
        &self.flipped
    }

    /// Display value of a cell, with legal cells for the side to move marked.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        let cell = self.board.get(index)?;
        if self.legal.contains(index) {
            Some(Cell::LegalMove)
        } else {
            Some(cell)
        }
    }

    pub fn snapshot(&self) -> GameState {
        let board = crate::board::playable_indices()
            .map(|index| self.cell(index).map_or(0, Cell::code))
            .collect();
        let flipped = self
            .flipped
            .iter()
            .filter_map(|&index| Position::from_index(index))
            .map(|pos| pos.row * BOARD_SIZE as u8 + pos.col)
            .collect();
        let (black_count, white_count) = self.board.count();
        GameState {
            board,
            current_player: self.player,
            black_count,
            white_count,
            message: self.message.clone(),
            pass_enabled: self.pass_enabled(),
            is_game_over: self.is_game_over(),
            flipped,
        }
    }

    pub fn position(&self) -> SavedPosition {
        SavedPosition::new(self.player, self.board.clone())
    }

    pub fn to_toml(&self) -> String {
        self.position().to_toml()
    }

    /// Replaces the session with a saved position. On error the session is
    /// left as it was.
    pub fn from_toml(&mut self, text: &str) -> Result<()> {
        let position = SavedPosition::from_toml(text)?;
        self.restore(position);
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&self.save_path)
    }

    pub fn load(&mut self) -> Result<()> {
        let path = self.save_path.clone();
        self.load_from(path)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("saving game to {}", path.display());
        fs::write(path, self.to_toml())?;
        Ok(())
    }

    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("loading game from {}", path.display());
        let text = fs::read_to_string(path)?;
        self.from_toml(&text)
    }

    fn restore(&mut self, position: SavedPosition) {
        self.board = position.board;
        self.player = position.player;
        self.flipped.clear();
        self.refresh();
    }

    /// Recomputes the legal overlay, status and message after any change.
    fn refresh(&mut self) {
        self.legal = self.board.legal_moves(self.player);
        self.status = self.judge();
        self.message = match self.status {
            Status::GameOver(result) => {
                debug!("game over: {result}");
                result.to_string()
            }
            _ => format!("{}'s turn", self.player),
        };
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
