//! View model for the presentation layer.
//!
//! The core exposes everything a frontend needs to redraw: the rendered
//! cells, the status line, one label per history entry, and the mode
//! flag. The frontend feeds events back through [`Game::play`],
//! [`Game::jump_to`], and [`Game::set_vs_ai`].

use crate::engine::Game;
use crate::types::{GameStatus, Square};
use serde::Serialize;

/// Render snapshot of a [`Game`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// One rendered mark per cell: `""`, `"X"`, or `"O"`.
    pub cells: [&'static str; 9],
    /// Status line for display.
    pub status: String,
    /// One label per history entry, in order.
    pub history: Vec<String>,
    /// Currently displayed history entry.
    pub cursor: usize,
    /// Whether the automated opponent is enabled.
    pub vs_ai: bool,
}

impl GameView {
    /// Builds the snapshot for the game's current state.
    pub fn new(game: &Game) -> Self {
        let mut cells = [""; 9];
        for (cell, square) in cells.iter_mut().zip(game.board().squares()) {
            *cell = match square {
                Square::Empty => "",
                Square::Occupied(player) => player.mark(),
            };
        }

        let status = match game.status() {
            GameStatus::Won(winner) => format!("Winner: {winner}"),
            GameStatus::Draw => "Draw!".to_string(),
            GameStatus::InProgress => format!("Next player: {}", game.to_move()),
        };

        let history = (0..game.history().len())
            .map(|entry| {
                if entry == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{entry}")
                }
            })
            .collect();

        Self {
            cells,
            status,
            history,
            cursor: game.cursor(),
            vs_ai: game.vs_ai(),
        }
    }
}

impl Game {
    /// Returns the render snapshot for the current state.
    pub fn view(&self) -> GameView {
        GameView::new(self)
    }
}
