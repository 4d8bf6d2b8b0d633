use tictactoe_common::games::tictactoe::{
    Board, GameStatus, Line, Mark, ScoreTally, TicTacToeGameState,
};

pub const HELP: &str = "\
Commands:
  1-9        place your mark (cells numbered left to right, top to bottom)
  r          start a new board
  s          reset the score tally and start a new board
  {...}      paste a message received from your peer (peer mode)
  h          show this help
  q          quit";

pub fn render(game: &TicTacToeGameState) -> String {
    let status = game.status();
    format!(
        "\n{}\n\n{}\n{}",
        render_board(game.board(), status.winning_line()),
        status_line(status, game.current_turn()),
        score_line(game.scores())
    )
}

/// Empty cells show the number to type; winning cells are bracketed.
pub fn render_board(board: &Board, highlight: Option<Line>) -> String {
    let cell_text = |index: usize| -> String {
        let mark = board.get(index).unwrap_or_default();
        let symbol = match mark {
            Mark::Empty => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
            _ => mark.symbol(),
        };
        if highlight.is_some_and(|line| line.contains(&index)) {
            format!("[{}]", symbol)
        } else {
            format!(" {} ", symbol)
        }
    };

    (0..3)
        .map(|row| {
            (0..3)
                .map(|col| cell_text(row * 3 + col))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

pub fn status_line(status: GameStatus, turn: Mark) -> String {
    match status {
        GameStatus::InProgress => format!("{} to move", turn),
        GameStatus::Won { by, .. } => format!("{} wins!", by),
        GameStatus::Drawn => "Draw".to_string(),
    }
}

pub fn score_line(scores: &ScoreTally) -> String {
    format!("Score  X: {}  O: {}", scores.get(Mark::X), scores.get(Mark::O))
}
