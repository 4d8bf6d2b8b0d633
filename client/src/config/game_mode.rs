use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tictactoe_common::games::tictactoe::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum GameMode {
    /// Two players sharing this terminal.
    Local,
    /// Play against the computer.
    #[default]
    Cpu,
    /// Play a remote peer; moves are relayed by hand as JSON lines.
    Peer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum PlayerSide {
    #[default]
    X,
    O,
}

impl From<PlayerSide> for Mark {
    fn from(side: PlayerSide) -> Self {
        match side {
            PlayerSide::X => Mark::X,
            PlayerSide::O => Mark::O,
        }
    }
}
