use std::fmt;

use serde::{Deserialize, Serialize};

/// Contents of a single cell. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    #[serde(skip)]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '_',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol.to_ascii_uppercase() {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            '_' | '.' | ' ' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Three cell indices that win when they hold the same mark.
pub type Line = [usize; 3];

pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { by: Mark, line: Line },
    Drawn,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { by, .. } => Some(*by),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub index: usize,
    pub mark: Mark,
}

impl Move {
    pub fn new(index: usize, mark: Mark) -> Self {
        Self { index, mark }
    }
}

/// Why a move was refused. The game state is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("cell index {0} is out of range (expected 0..=8)")]
    OutOfRange(usize),
    #[error("cell {0} is already marked")]
    CellOccupied(usize),
    #[error("it is {expected}'s turn, not {actual}'s")]
    WrongTurn { expected: Mark, actual: Mark },
    #[error("game is already over")]
    GameOver,
}
