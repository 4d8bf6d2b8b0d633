mod board;
mod bot_controller;
mod game_state;
mod observer;
mod peer_message;
mod score;
mod types;
mod win_detector;

pub use board::{Board, BoardParseError, CELL_COUNT, CENTER, CORNERS, EDGES};
pub use bot_controller::{
    BotInput, BotStrategy, calculate_heuristic_move, calculate_minimax_move, calculate_move,
    recommend_move,
};
pub use game_state::TicTacToeGameState;
pub use observer::MoveObserver;
pub use peer_message::{PeerEvent, PeerMessage, PeerMessageError, apply_peer_message};
pub use score::ScoreTally;
pub use types::{GameStatus, IllegalMove, LINES, Line, Mark, Move};
pub use win_detector::{check_win, check_win_at, check_win_with_line, evaluate};
