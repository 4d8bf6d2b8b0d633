use super::board::Board;
use super::types::{GameStatus, LINES, Line, Mark};

pub fn check_win_with_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.iter().find_map(|&line| line_owner(board, line).map(|mark| (mark, line)))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

/// Only inspects the lines passing through `index`; enough after a single placement.
pub fn check_win_at(board: &Board, index: usize) -> Option<Mark> {
    LINES
        .iter()
        .filter(|line| line.contains(&index))
        .find_map(|&line| line_owner(board, line))
}

pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((by, line)) = check_win_with_line(board) {
        return GameStatus::Won { by, line };
    }
    if board.is_full() {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}

fn line_owner(board: &Board, [a, b, c]: Line) -> Option<Mark> {
    let mark = board.get(a)?;
    if mark != Mark::Empty && board.get(b) == Some(mark) && board.get(c) == Some(mark) {
        Some(mark)
    } else {
        None
    }
}
