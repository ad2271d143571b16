//! Integration tests for the automated opponent's perfect-play guarantee.

use perfect_tictactoe::{
    best_move, check_winner, is_terminal, Board, Game, GameStatus, Player, Position, Square,
};

/// Plays a full game where X follows `human` and O plays minimax.
/// Returns the final board.
fn play_against_minimax(mut human: impl FnMut(&Board) -> Position) -> Board {
    let mut board = Board::new();
    let mut to_move = Player::X;
    while !is_terminal(&board) {
        let pos = match to_move {
            Player::X => human(&board),
            Player::O => best_move(&board, Player::O).expect("non-terminal board has a move"),
        };
        assert!(board.is_empty(pos), "policy produced an occupied square");
        board = board.with_move(pos, to_move);
        to_move = to_move.opponent();
    }
    board
}

#[test]
fn test_minimax_vs_minimax_draws() {
    let board = play_against_minimax(|b| best_move(b, Player::X).unwrap());
    assert!(board.is_full());
    assert_eq!(check_winner(&board), None);
}

#[test]
fn test_never_loses_against_any_opening() {
    // Every first move for X, then X keeps taking the lowest empty square.
    for opening in Position::ALL {
        let mut first = true;
        let board = play_against_minimax(|b| {
            if first {
                first = false;
                opening
            } else {
                Position::valid_moves(b)[0]
            }
        });
        assert_ne!(
            check_winner(&board),
            Some(Player::X),
            "minimax lost after opening {opening}"
        );
    }
}

#[test]
fn test_never_loses_against_highest_square_policy() {
    for opening in Position::ALL {
        let mut first = true;
        let board = play_against_minimax(|b| {
            if first {
                first = false;
                opening
            } else {
                *Position::valid_moves(b).last().unwrap()
            }
        });
        assert_ne!(check_winner(&board), Some(Player::X));
    }
}

#[test]
fn test_punishes_blunder() {
    // X opens corner, O centers, X threatens the top row, O blocks at 2
    // and thereby threatens the 2-4-6 diagonal. X ignores it; O wins.
    let board = {
        let mut moves = [Position::TopLeft, Position::TopCenter, Position::MiddleLeft].into_iter();
        play_against_minimax(move |_| moves.next().expect("game should end within three X moves"))
    };
    assert_eq!(check_winner(&board), Some(Player::O));
}

#[test]
fn test_forced_block_scenario() {
    // X X . / . O . / . . . with O to move: only index 2 avoids the loss.
    let board = Board::new()
        .with_move(Position::TopLeft, Player::X)
        .with_move(Position::TopCenter, Player::X)
        .with_move(Position::Center, Player::O);
    assert_eq!(best_move(&board, Player::O), Some(Position::TopRight));
}

#[test]
fn test_full_game_through_engine_reaches_draw_or_ai_win() {
    // Drive the engine itself: the human keeps clicking the lowest
    // empty square until the game ends.
    let mut game = Game::new();
    game.set_vs_ai(true);
    while game.status() == GameStatus::InProgress {
        let pos = Position::valid_moves(game.board())[0];
        game.play(pos).unwrap();
    }
    match game.status() {
        GameStatus::Won(player) => assert_eq!(player, Player::O),
        GameStatus::Draw => {}
        GameStatus::InProgress => unreachable!(),
    }
    // Every square the opponent filled is an O.
    let o_count = game
        .board()
        .squares()
        .iter()
        .filter(|s| **s == Square::Occupied(Player::O))
        .count();
    assert!(o_count >= 3);
}
