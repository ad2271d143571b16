//! Pure tic-tac-toe game logic with time travel and a perfect-play opponent.
//!
//! The crate has no UI of its own: a presentation layer drives it through
//! three events (cell clicked, history entry selected, AI mode toggled)
//! and redraws from the [`GameView`] snapshot.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation - win, draw, terminal detection
//! - **Minimax**: exhaustive search that makes the opponent unbeatable
//! - **Engine**: board-snapshot history, cursor, move legality, and
//!   synchronous opponent orchestration
//! - **View**: render snapshot for frontends
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Game, GameStatus, Position};
//!
//! let mut game = Game::new();
//! game.set_vs_ai(true);
//! game.play(Position::Center).expect("empty board accepts any move");
//!
//! // The opponent has already answered; it is the human's turn again.
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.status(), GameStatus::InProgress);
//!
//! // Time travel: rewind to the game start.
//! game.jump_to(0);
//! assert_eq!(game.view().status, "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod minimax;
mod position;
mod rules;
mod types;
mod view;

pub use engine::{Game, MoveError};
pub use minimax::best_move;
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full, is_terminal};
pub use types::{Board, GameStatus, Player, Square};
pub use view::GameView;
