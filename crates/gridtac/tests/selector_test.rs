//! Tests for difficulty-gated move selection.

use gridtac::{
    Board, BoardParityTurns, ConfigErrorKind, DepthBudget, Difficulty, Move, MoveSelector,
    SearchLimits, is_terminal, select,
};
use strum::IntoEnumIterator;

fn selector() -> MoveSelector {
    MoveSelector::new(SearchLimits::default())
}

#[test]
fn test_select_never_picks_occupied_square() {
    for text in ["X../.O./...", "XOX/.O./X..", "X.../.O../..X./O...", "XX./OO./..."] {
        for difficulty in Difficulty::iter() {
            let mut board: Board = text.parse().unwrap();
            let (remaining, size) = (board.empty_count(), board.size());
            let selection = selector().select(&mut board, difficulty, remaining, size);
            let pos = selection.position().expect("board has empty squares");
            assert!(board.is_empty(pos), "{text} on {difficulty} picked {pos}");
        }
    }
}

#[test]
fn test_select_leaves_board_unchanged() {
    for text in [".../.../...", "X../.O./...", "X.O./..../.XO./...."] {
        for difficulty in Difficulty::iter() {
            let mut board: Board = text.parse().unwrap();
            let before = board.clone();
            let (remaining, size) = (board.empty_count(), board.size());
            selector().select(&mut board, difficulty, remaining, size);
            assert_eq!(board, before, "{text} on {difficulty}");
        }
    }
}

#[test]
fn test_empty_board_hard_picks_corner_or_center() {
    let mut board = Board::new(3);
    let selection = selector().select(&mut board, Difficulty::Hard, 9, 3);
    assert_eq!(*selection.budget(), DepthBudget::Unbounded);
    let pos = selection.position().expect("empty board has moves");
    assert!(pos.is_corner(3) || pos.is_center(3), "picked {pos}");
}

#[test]
fn test_four_by_four_easy_stays_within_two_plies() {
    let mut board = Board::new(4);
    let selection = selector().select(&mut board, Difficulty::Easy, 16, 4);
    assert_eq!(*selection.budget(), DepthBudget::Limited(2));
    assert!(*selection.stats().deepest_ply() <= 2);
    assert!(selection.position().is_some());
}

#[test]
fn test_four_by_four_hard_is_capped_like_easy() {
    let mut board: Board = "X.../..../..O./....".parse().unwrap();
    let selection = selector().select(&mut board, Difficulty::Hard, 14, 4);
    assert_eq!(*selection.budget(), DepthBudget::Limited(2));
    assert!(*selection.stats().deepest_ply() <= 2);
}

#[test]
fn test_unknown_difficulty_is_config_error() {
    let mut board: Board = "X../.../...".parse().unwrap();
    let before = board.clone();
    let err = select(&mut board, "nightmare", 8, 3).unwrap_err();
    assert_eq!(err.kind, ConfigErrorKind::UnknownDifficulty("nightmare".to_string()));
    assert_eq!(board, before);
}

#[test]
fn test_text_difficulty_is_case_insensitive() {
    let mut board = Board::new(3);
    let pos = select(&mut board, "Easy", 9, 3).unwrap();
    assert!(pos.is_some());
}

#[test]
fn test_selection_serializes() {
    let mut board: Board = "XX./OO./...".parse().unwrap();
    let selection = selector().select(&mut board, Difficulty::Easy, 4, 3);
    let json = serde_json::to_value(selection).unwrap();
    assert_eq!(json["position"]["row"], 0);
    assert_eq!(json["position"]["col"], 2);
    assert_eq!(json["score"], 1);
    assert!(json["stats"]["nodes"].as_u64().unwrap() > 0);
}

#[test]
fn test_self_play_runs_to_terminal() {
    let turns = BoardParityTurns;
    for size in [3, 4] {
        let mut board = Board::new(size);
        while !is_terminal(&board) {
            let remaining = board.empty_count();
            let pos = selector()
                .select(&mut board, Difficulty::Easy, remaining, size)
                .position()
                .expect("non-terminal board has moves");
            let marker = turns.computer_marker(size, remaining);
            board.apply(Move::new(marker, pos)).unwrap();
        }
        assert!(is_terminal(&board));
    }
}
