//! Win detection on N×N boards.

use super::super::{Board, Player, Position, Square};

/// Checks if there is a winner on the board.
///
/// Rows are scanned first, then columns, then the two diagonals. Within a
/// row or column X is tested before O; across the diagonals X is tested on
/// both before O. The first complete line decides.
pub fn check_winner(board: &Board) -> Option<Player> {
    let n = board.size();
    if n == 0 {
        return None;
    }

    for row in 0..n {
        if let Some(player) = line_owner(board, (0..n).map(move |col| Position::new(row, col))) {
            return Some(player);
        }
    }

    for col in 0..n {
        if let Some(player) = line_owner(board, (0..n).map(move |row| Position::new(row, col))) {
            return Some(player);
        }
    }

    let main = (0..n).map(|i| Position::new(i, i));
    let anti = (0..n).map(move |i| Position::new(i, n - 1 - i));
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| completes(board, main.clone(), player) || completes(board, anti.clone(), player))
}

fn line_owner(board: &Board, line: impl Iterator<Item = Position> + Clone) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| completes(board, line.clone(), player))
}

fn completes(board: &Board, mut line: impl Iterator<Item = Position>, player: Player) -> bool {
    line.all(|pos| board.get(pos) == Some(Square::Occupied(player)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new(3)), None);
    }

    #[test]
    fn test_winner_row() {
        let board: Board = "..../OOOO/X.X./X...".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = ".X./OX./OX.".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_diagonals() {
        let main: Board = "X../OX./O.X".parse().unwrap();
        assert_eq!(check_winner(&main), Some(Player::X));

        let anti: Board = "X..O/X.O./.O../O...".parse().unwrap();
        assert_eq!(check_winner(&anti), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_single_cell_board() {
        let board: Board = "O".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }
}
