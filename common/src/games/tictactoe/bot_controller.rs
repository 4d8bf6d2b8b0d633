use std::fmt;
use std::str::FromStr;

use crate::games::SessionRng;
use super::board::{Board, CENTER, CORNERS, EDGES};
use super::game_state::TicTacToeGameState;
use super::types::Mark;
use super::win_detector::{check_win, check_win_at, evaluate};

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotStrategy {
    /// Exhaustive minimax. Never loses.
    Optimal,
    /// Win, block, center, corner, edge. Beatable.
    Heuristic,
}

impl FromStr for BotStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "optimal" | "unbeatable" => Ok(BotStrategy::Optimal),
            "heuristic" | "smart" => Ok(BotStrategy::Heuristic),
            other => Err(format!("Unknown bot strategy: {}", other)),
        }
    }
}

impl fmt::Display for BotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotStrategy::Optimal => write!(f, "optimal"),
            BotStrategy::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Snapshot handed to the engine: the board and the mark the bot plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_mark: state.current_turn(),
        }
    }
}

/// Returns the cell to play, or `None` when the position has no move left.
pub fn calculate_move(
    strategy: BotStrategy,
    input: BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    if evaluate(&input.board).is_over() {
        return None;
    }
    match strategy {
        BotStrategy::Optimal => calculate_minimax_move(&input),
        BotStrategy::Heuristic => calculate_heuristic_move(&input, rng),
    }
}

pub fn recommend_move(
    board: &Board,
    mark: Mark,
    strategy: BotStrategy,
    rng: &mut SessionRng,
) -> Option<usize> {
    calculate_move(
        strategy,
        BotInput {
            board: *board,
            current_mark: mark,
        },
        rng,
    )
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let bot_mark = input.current_mark;
    let opponent_mark = bot_mark.opponent()?;
    let available_moves = input.board.available_moves();

    if available_moves.is_empty() {
        return None;
    }

    if input.board.is_empty() {
        return Some(CENTER);
    }

    let mut board = input.board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        board.set(index, bot_mark);
        let score = minimax(&mut board, 0, false, bot_mark, opponent_mark);
        board.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == bot_mark {
            WIN_SCORE - depth
        } else {
            -WIN_SCORE + depth
        };
    }

    let moves = board.available_moves();
    if moves.is_empty() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            board.set(index, bot_mark);
            let eval = minimax(board, depth + 1, false, bot_mark, opponent_mark);
            board.set(index, Mark::Empty);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            board.set(index, opponent_mark);
            let eval = minimax(board, depth + 1, true, bot_mark, opponent_mark);
            board.set(index, Mark::Empty);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

pub fn calculate_heuristic_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let bot_mark = input.current_mark;
    let opponent_mark = bot_mark.opponent()?;
    let available_moves = input.board.available_moves();

    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board;

    if let Some(index) = find_winning_move(&mut board, bot_mark, &available_moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(&mut board, opponent_mark, &available_moves) {
        return Some(index);
    }

    if board.is_cell_empty(CENTER) {
        return Some(CENTER);
    }

    pick_open(&board, &CORNERS, rng).or_else(|| pick_open(&board, &EDGES, rng))
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        board.set(index, mark);
        let winner = check_win_at(board, index);
        board.set(index, Mark::Empty);

        if winner == Some(mark) {
            return Some(index);
        }
    }
    None
}

fn pick_open(board: &Board, candidates: &[usize], rng: &mut SessionRng) -> Option<usize> {
    let open: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&index| board.is_cell_empty(index))
        .collect();
    rng.choose(&open)
}
