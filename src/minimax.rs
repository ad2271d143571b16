//! Exhaustive minimax search for the automated opponent.
//!
//! The 3x3 game tree is tiny (at most 9 plies, well under 9! leaves), so
//! the search runs to terminal states every time with no pruning and no
//! heuristic evaluation. This is what makes the opponent unbeatable: it
//! never loses, wins whenever the other player errs, and draws against
//! optimal play.

use crate::position::Position;
use crate::rules::{check_winner, is_terminal};
use crate::types::{Board, Player};
use tracing::instrument;

/// Picks the best move for `mark` on the given board.
///
/// Leaf scores are +1 if `mark` wins, -1 if the opponent wins, and 0 on
/// a draw. Positions are explored in ascending index order and only a
/// strictly better score replaces the current choice, so among equally
/// good moves the lowest index is returned (stable tie-break).
///
/// Returns `None` only when the board is already terminal.
#[instrument(skip(board))]
pub fn best_move(board: &Board, mark: Player) -> Option<Position> {
    if is_terminal(board) {
        return None;
    }
    let (_, choice) = search(board, mark, mark);
    choice
}

/// Recursive search. `to_move` places the next mark; `maximizing` is the
/// mark whose outcome is being scored.
fn search(board: &Board, to_move: Player, maximizing: Player) -> (i32, Option<Position>) {
    if let Some(winner) = check_winner(board) {
        let score = if winner == maximizing { 1 } else { -1 };
        return (score, None);
    }
    if board.is_full() {
        return (0, None);
    }

    let mut best_score = if to_move == maximizing {
        i32::MIN
    } else {
        i32::MAX
    };
    let mut best_pos = None;

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let next = board.with_move(pos, to_move);
        let (score, _) = search(&next, to_move.opponent(), maximizing);
        let better = if to_move == maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if better {
            best_score = score;
            best_pos = Some(pos);
        }
    }

    (best_score, best_pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn board_from(marks: [Option<Player>; 9]) -> Board {
        let mut board = Board::new();
        for (i, mark) in marks.iter().enumerate() {
            if let Some(player) = mark {
                board.set(Position::from_index(i).unwrap(), Square::Occupied(*player));
            }
        }
        board
    }

    #[test]
    fn test_terminal_board_yields_no_move() {
        let won = board_from([
            Some(Player::X),
            Some(Player::X),
            Some(Player::X),
            Some(Player::O),
            Some(Player::O),
            None,
            None,
            None,
            None,
        ]);
        assert_eq!(best_move(&won, Player::O), None);
    }

    #[test]
    fn test_blocks_immediate_threat() {
        // X threatens the top row; O must answer at index 2.
        let board = board_from([
            Some(Player::X),
            Some(Player::X),
            None,
            None,
            Some(Player::O),
            None,
            None,
            None,
            None,
        ]);
        assert_eq!(best_move(&board, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_takes_immediate_win() {
        // O can complete the middle row at index 5; winning beats blocking.
        let board = board_from([
            Some(Player::X),
            Some(Player::X),
            None,
            Some(Player::O),
            Some(Player::O),
            None,
            Some(Player::X),
            None,
            None,
        ]);
        assert_eq!(best_move(&board, Player::O), Some(Position::MiddleRight));
    }

    #[test]
    fn test_empty_game_is_drawn() {
        // Optimal play on both sides from the empty board never produces
        // a winner.
        let mut board = Board::new();
        let mut to_move = Player::X;
        while let Some(pos) = best_move(&board, to_move) {
            board = board.with_move(pos, to_move);
            to_move = to_move.opponent();
        }
        assert!(crate::rules::is_draw(&board));
    }

    #[test]
    fn test_tie_break_is_lowest_index() {
        // From the empty board every X move scores 0, so the stable
        // tie-break must pick index 0.
        assert_eq!(best_move(&Board::new(), Player::X), Some(Position::TopLeft));
    }

    #[test]
    fn test_never_loses_to_greedy_opponent() {
        // The greedy player always takes the lowest-index empty square.
        // Minimax as O must not lose regardless.
        let mut board = Board::new();
        let mut to_move = Player::X;
        while !is_terminal(&board) {
            let pos = match to_move {
                Player::X => Position::valid_moves(&board)[0],
                Player::O => best_move(&board, Player::O).unwrap(),
            };
            board = board.with_move(pos, to_move);
            to_move = to_move.opponent();
        }
        assert_ne!(check_winner(&board), Some(Player::X));
    }
}
