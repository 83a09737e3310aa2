use std::path::PathBuf;

use reversi::board::{BOARD_WIDTH, index_of};
use reversi::types::{Cell, Player, Position, Status};
use reversi::{GameSession, ReversiError};

const BEFORE: &str = "\
player = \"Black\"
board = [
  [0, 0, 0, 0, 0, 0, 0, 0],
  [0, 0, 0, 0, 0, 0, 0, 0],
  [0, 0, 0, 0, 0, 0, 0, 0],
  [0, 0, 0, 2, 1, 0, 0, 0],
  [0, 0, 0, 1, 2, 0, 0, 0],
  [0, 0, 0, 0, 0, 0, 0, 0],
  [0, 0, 0, 0, 0, 0, 0, 0],
  [0, 0, 0, 0, 0, 0, 0, 0],
]";

fn temp_save_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("reversi-{}-{name}.toml", std::process::id()))
}

#[test]
fn place_disk_matches_saved_scenario() {
    let after = BEFORE.replacen("[0, 0, 0, 2, 1, 0, 0, 0]", "[0, 0, 1, 1, 1, 0, 0, 0]", 1);
    let mut game = GameSession::new();
    game.from_toml(BEFORE).unwrap();
    let mut position = game.position();

    let flipped = position.board.place(3 + 4 * BOARD_WIDTH, Player::Black);

    assert_eq!(flipped, vec![4 + 4 * BOARD_WIDTH]);
    assert_eq!(position.to_toml(), after);
}

#[test]
fn click_on_saved_scenario_hands_turn_to_white() {
    let mut game = GameSession::new();
    game.from_toml(BEFORE).unwrap();

    assert!(game.click(3 + 4 * BOARD_WIDTH));

    assert_eq!(game.player(), Player::White);
    assert_eq!(game.counts(), (4, 1));
    assert!(game.to_toml().contains("[0, 0, 1, 1, 1, 0, 0, 0]"));
    assert!(game.to_toml().starts_with("player = \"White\""));
}

#[test]
fn opening_has_four_legal_cells_next_to_the_center() {
    let mut game = GameSession::new();
    game.click_at(Position::new(2, 3));
    game.reset();

    let legal: Vec<Position> = game
        .legal_moves()
        .iter()
        .filter_map(Position::from_index)
        .collect();
    assert_eq!(
        legal,
        vec![
            Position::new(2, 3),
            Position::new(3, 2),
            Position::new(4, 5),
            Position::new(5, 4),
        ]
    );
    for pos in legal {
        assert_eq!(game.cell(pos.index().unwrap()), Some(Cell::LegalMove));
    }
}

#[test]
fn legal_markers_never_reach_the_save_text() {
    let game = GameSession::new();
    assert!(!game.to_toml().contains('3'));
}

#[test]
fn save_and_load_restore_the_position() {
    let path = temp_save_path("roundtrip");
    let mut game = GameSession::new().with_save_path(&path);
    assert!(game.click_at(Position::new(2, 3)));
    assert!(game.click_at(Position::new(2, 2)));
    game.save().unwrap();

    let mut restored = GameSession::new().with_save_path(&path);
    restored.load().unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(restored.player(), game.player());
    assert_eq!(restored.board(), game.board());
    assert_eq!(restored.legal_moves(), game.legal_moves());
    assert_eq!(restored.message(), "Black's turn");
    assert!(restored.last_flipped().is_empty());
}

#[test]
fn loading_a_missing_file_is_an_io_error() {
    let mut game = GameSession::new();
    let err = game.load_from(temp_save_path("missing")).unwrap_err();
    assert!(matches!(err, ReversiError::Io(_)));
    assert_eq!(game.board(), &reversi::board::Board::new());
}

#[test]
fn loading_a_finished_position_reports_the_result() {
    let path = temp_save_path("finished");
    let mut text = String::from("player = \"White\"\nboard = [\n");
    for y in 0..8 {
        let row = if y < 5 { "1, 1, 1, 1, 1, 1, 1, 1" } else { "2, 2, 2, 2, 2, 2, 2, 2" };
        text.push_str(&format!("  [{row}],\n"));
    }
    text.push(']');
    std::fs::write(&path, text).unwrap();

    let mut game = GameSession::new();
    game.load_from(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(game.status(), Status::GameOver(_)));
    assert_eq!(game.message(), "Black wins (40 > 24)");
    assert!(!game.pass_enabled());
}

#[test]
fn loading_a_stuck_position_forces_a_pass() {
    let text = "\
player = \"White\"
board = [
  [1, 1, 1, 0, 0, 0, 0, 0],
  [0, 0, 0, 0, 0, 0, 0, 0],
  [0, 0, 0, 0, 0, 0, 0, 0],
  [0, 0, 0, 0, 0, 0, 0, 0],
  [0, 0, 0, 0, 0, 0, 0, 0],
  [0, 0, 0, 0, 0, 0, 0, 0],
  [0, 0, 0, 0, 0, 0, 0, 0],
  [1, 2, 0, 0, 0, 0, 0, 0],
]";
    let mut game = GameSession::new();
    game.from_toml(text).unwrap();

    assert_eq!(game.status(), Status::ForcedPass);
    assert!(!game.click(index_of(3, 8)));
    assert!(game.pass());
    assert_eq!(game.player(), Player::Black);
    assert!(game.legal_moves().contains(index_of(3, 8)));
}
