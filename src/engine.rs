//! Game engine: move history, time travel, and turn orchestration.

use crate::minimax::best_move;
use crate::position::Position;
use crate::rules::{check_winner, is_draw, is_terminal};
use crate::types::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error that can occur when attempting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already decided.
    #[display("Game is already over")]
    GameOver,

    /// It is the automated opponent's turn; human input is blocked.
    #[display("It's the opponent's turn")]
    OpponentTurn,
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe game engine with full move history.
///
/// The engine owns an append-only history of board snapshots and a
/// cursor into it. The cursor selects the displayed board; its parity
/// determines whose turn it is (X on even, O on odd). Committing a move
/// from a rewound cursor discards the abandoned future first, the
/// standard undo/redo branch-discard model.
///
/// When play-against-AI mode is on, the opponent always plays O and
/// answers synchronously inside the operation that handed it the turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Board snapshots; entry 0 is always the empty board.
    history: Vec<Board>,
    /// Index of the displayed board.
    cursor: usize,
    /// Whether the automated opponent plays O.
    vs_ai: bool,
}

impl Game {
    /// Creates a new two-human game with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
            vs_ai: false,
        }
    }

    /// Returns the currently displayed board.
    pub fn board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Returns the full history of board snapshots.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the cursor into the history.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true if the automated opponent is enabled.
    pub fn vs_ai(&self) -> bool {
        self.vs_ai
    }

    /// Returns the player to move, derived from cursor parity.
    pub fn to_move(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns true if the automated opponent should move next.
    pub fn is_ai_turn(&self) -> bool {
        self.vs_ai && self.to_move() == Player::O
    }

    /// Returns the game status of the displayed board.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = check_winner(self.board()) {
            GameStatus::Won(winner)
        } else if is_draw(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Plays the current player's mark at the given position.
    ///
    /// This is the engine-side handler for a cell click. The move is
    /// rejected if the game is already decided, the square is occupied,
    /// or it is the automated opponent's turn. On success the new board
    /// is committed and, if the turn passed to the opponent, its answer
    /// is committed as well before this returns.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] describing why the move did not register.
    /// No state changes on rejection.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.is_ai_turn() {
            return Err(MoveError::OpponentTurn);
        }
        let next = self.attempt(pos, self.to_move())?;
        self.commit(next);
        self.run_opponent();
        Ok(())
    }

    /// Builds the board that results from `player` marking `pos`, without
    /// touching any state.
    fn attempt(&self, pos: Position, player: Player) -> Result<Board, MoveError> {
        let board = self.board();
        if check_winner(board).is_some() {
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        Ok(board.with_move(pos, player))
    }

    /// Jumps the cursor to an existing history entry (time travel).
    ///
    /// History is not modified. If the jump lands on an opponent-turn
    /// state with AI mode on, the opponent immediately commits its
    /// answer, truncating the jumped-past future.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. The presentation layer offers
    /// one entry per history snapshot and must never produce an invalid
    /// index.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        assert!(
            index < self.history.len(),
            "history index {index} out of range (len {})",
            self.history.len()
        );
        self.cursor = index;
        debug!(cursor = self.cursor, "jumped");
        self.run_opponent();
    }

    /// Enables or disables the automated opponent.
    ///
    /// Toggling the mode starts a fresh game: the history resets to the
    /// single empty board and the cursor to 0, even mid-game.
    #[instrument(skip(self))]
    pub fn set_vs_ai(&mut self, enabled: bool) {
        self.vs_ai = enabled;
        self.history = vec![Board::new()];
        self.cursor = 0;
        debug!(vs_ai = enabled, "mode changed, game reset");
        self.run_opponent();
    }

    /// Replays a move list from a fresh two-human game.
    ///
    /// Useful for restoring a position or driving tests. Stops at the
    /// first illegal move and returns its error.
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for pos in moves {
            game.play(*pos)?;
        }
        Ok(game)
    }

    /// Appends a board to the history, discarding any abandoned future.
    fn commit(&mut self, next: Board) {
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;
        debug!(cursor = self.cursor, board = %self.board(), "committed");
    }

    /// Runs the opponent check after a state change: if it is the AI's
    /// turn and the game is not over, commit its move. Runs at most once
    /// per state change; the answer hands the turn back to the human.
    fn run_opponent(&mut self) {
        if !self.is_ai_turn() || is_terminal(self.board()) {
            return;
        }
        if let Some(pos) = best_move(self.board(), Player::O) {
            debug!(position = %pos, "opponent move");
            let next = self.board().with_move(pos, Player::O);
            self.commit(next);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
