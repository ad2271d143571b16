//! Board evaluation rules: win, draw, and terminal detection.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use crate::types::Board;

/// Checks if the game has concluded (win or draw).
pub fn is_terminal(board: &Board) -> bool {
    check_winner(board).is_some() || is_draw(board)
}
