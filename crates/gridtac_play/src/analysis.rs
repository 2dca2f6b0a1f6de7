//! One-shot evaluation of a board given on the command line.

use derive_getters::Getters;
use gridtac::{
    Board, DepthBudget, Difficulty, GameStatus, MoveSelector, Position, Score, SearchLimits,
    SearchStats, evaluate,
};
use serde::Serialize;
use tracing::{info, instrument};

/// Status of a board and the move the computer would pick on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Report {
    /// Board in row-major text form.
    board: String,
    /// Terminal status of the board as given.
    status: GameStatus,
    /// Difficulty the move was selected with.
    difficulty: Difficulty,
    /// Remaining-move count handed to the selector.
    remaining: usize,
    /// Budget each candidate was searched with.
    budget: DepthBudget,
    /// Chosen square, absent on a terminal board.
    best_move: Option<Position>,
    /// Search score of the chosen square.
    score: Option<Score>,
    /// Work done by the search.
    stats: SearchStats,
}

/// Evaluates `board` and, unless it is terminal, selects a move on it.
///
/// `remaining` defaults to the board's empty-square count.
#[instrument(skip(board, limits), fields(board = %board.encode()))]
pub fn analyze(
    board: &Board,
    difficulty: Difficulty,
    remaining: Option<usize>,
    limits: SearchLimits,
) -> Report {
    let status = evaluate(board);
    let remaining = remaining.unwrap_or_else(|| board.empty_count());
    let selector = MoveSelector::new(limits);

    let (budget, best_move, score, stats) = if status.is_terminal() {
        (
            selector.depth_budget(difficulty, board.size()),
            None,
            None,
            SearchStats::default(),
        )
    } else {
        let mut scratch = board.clone();
        let selection = selector.select(&mut scratch, difficulty, remaining, board.size());
        (
            *selection.budget(),
            *selection.position(),
            *selection.score(),
            *selection.stats(),
        )
    };

    info!(%status, ?best_move, "Analysis complete");
    Report {
        board: board.encode(),
        status,
        difficulty,
        remaining,
        budget,
        best_move,
        score,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtac::Player;

    #[test]
    fn test_open_board_report() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let report = analyze(&board, Difficulty::Easy, Some(4), SearchLimits::default());
        assert_eq!(*report.status(), GameStatus::InProgress);
        assert_eq!(*report.best_move(), Some(Position::new(0, 2)));
        assert_eq!(*report.score(), Some(1));
        assert_eq!(*report.budget(), DepthBudget::Limited(2));
    }

    #[test]
    fn test_remaining_defaults_to_empty_count() {
        let board: Board = "X../.O./...".parse().unwrap();
        let report = analyze(&board, Difficulty::Hard, None, SearchLimits::default());
        assert_eq!(*report.remaining(), 7);
        assert_eq!(*report.budget(), DepthBudget::Unbounded);
        assert!(report.best_move().is_some());
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let report = analyze(&board, Difficulty::Easy, None, SearchLimits::default());
        assert_eq!(*report.status(), GameStatus::Won(Player::X));
        assert_eq!(*report.best_move(), None);
        assert_eq!(*report.stats().nodes(), 0);
    }

    #[test]
    fn test_report_json() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let report = analyze(&board, Difficulty::Easy, Some(4), SearchLimits::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["board"], "XX./OO./...");
        assert_eq!(json["difficulty"], "easy");
        assert_eq!(json["best_move"]["col"], 2);
    }
}
