use thiserror::Error;

/// Failures while restoring or persisting a position.
///
/// Gameplay itself never fails: rejected clicks and passes report `false`.
#[derive(Debug, Error)]
pub enum ReversiError {
    #[error("invalid player name: {0:?}")]
    InvalidPlayer(String),

    #[error("board must be 8 rows of 8 cells, found {rows} rows (row lengths {cols:?})")]
    InvalidBoardShape { rows: usize, cols: Vec<usize> },

    #[error("invalid cell value: {0}")]
    InvalidCell(i64),

    #[error("malformed save file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ReversiError> = std::result::Result<T, E>;
