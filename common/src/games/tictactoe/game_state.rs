use std::fmt;

use super::board::{Board, CELL_COUNT};
use super::observer::MoveObserver;
use super::score::ScoreTally;
use super::types::{GameStatus, IllegalMove, Mark, Move};
use super::win_detector::evaluate;

/// A single live game plus the session score tally.
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Move>,
    scores: ScoreTally,
    observers: Vec<Box<dyn MoveObserver>>,
}

impl fmt::Debug for TicTacToeGameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicTacToeGameState")
            .field("board", &self.board)
            .field("current_mark", &self.current_mark)
            .field("status", &self.status)
            .field("last_move", &self.last_move)
            .field("scores", &self.scores)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            scores: ScoreTally::new(),
            observers: Vec::new(),
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn MoveObserver>) {
        self.observers.push(observer);
    }

    /// Places `mark` at `index`. Refused moves leave the state unchanged.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<GameStatus, IllegalMove> {
        if self.status.is_over() {
            return Err(IllegalMove::GameOver);
        }

        if index >= CELL_COUNT {
            return Err(IllegalMove::OutOfRange(index));
        }

        if mark != self.current_mark {
            return Err(IllegalMove::WrongTurn {
                expected: self.current_mark,
                actual: mark,
            });
        }

        if !self.board.is_cell_empty(index) {
            return Err(IllegalMove::CellOccupied(index));
        }

        self.board.set(index, mark);
        let applied = Move::new(index, mark);
        self.last_move = Some(applied);
        self.status = evaluate(&self.board);

        match self.status {
            GameStatus::InProgress => self.switch_turn(),
            GameStatus::Won { by, .. } => self.scores.record_win(by),
            GameStatus::Drawn => {}
        }

        let status = self.status;
        for observer in &mut self.observers {
            observer.on_move(applied, status);
        }

        Ok(status)
    }

    /// Clears the board for a new game. The score tally is kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;

        for observer in &mut self.observers {
            observer.on_reset();
        }
    }

    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    pub fn current_turn(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scores(&self) -> &ScoreTally {
        &self.scores
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }
}
