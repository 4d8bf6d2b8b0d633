//! Messages exchanged with a remote player over whatever channel the
//! collaborator has set up. Only the decoding and validation live here.
//!
//! Wire shape, one JSON object per message:
//! `{"type":"move","pos":4,"player":"X"}` or `{"type":"reset"}`.

use serde::{Deserialize, Serialize};

use crate::log;
use super::game_state::TicTacToeGameState;
use super::types::{GameStatus, IllegalMove, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PeerMessage {
    Move { pos: i64, player: Mark },
    Reset,
}

#[derive(Debug, thiserror::Error)]
pub enum PeerMessageError {
    #[error("malformed peer message: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("peer position {0} is not a cell index")]
    InvalidPosition(i64),
    #[error("peer tried to move for {actual}, but plays {expected}")]
    NotPeerSide { expected: Mark, actual: Mark },
    #[error("illegal peer move: {0}")]
    Illegal(#[from] IllegalMove),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerEvent {
    Moved { index: usize, status: GameStatus },
    Reset,
}

impl PeerMessage {
    pub fn for_move(index: usize, player: Mark) -> Self {
        PeerMessage::Move {
            pos: index as i64,
            player,
        }
    }

    pub fn decode(text: &str) -> Result<Self, PeerMessageError> {
        Ok(serde_json::from_str(text.trim())?)
    }

    pub fn encode(&self) -> Result<String, PeerMessageError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Applies the message with the same legality rules as a local move.
    /// With `peer_mark` set, moves for the other side are refused.
    pub fn apply(
        &self,
        game: &mut TicTacToeGameState,
        peer_mark: Option<Mark>,
    ) -> Result<PeerEvent, PeerMessageError> {
        match *self {
            PeerMessage::Move { pos, player } => {
                if let Some(expected) = peer_mark
                    && expected != player
                {
                    return Err(PeerMessageError::NotPeerSide {
                        expected,
                        actual: player,
                    });
                }
                let index =
                    usize::try_from(pos).map_err(|_| PeerMessageError::InvalidPosition(pos))?;
                let status = game.apply_move(index, player)?;
                Ok(PeerEvent::Moved { index, status })
            }
            PeerMessage::Reset => {
                game.reset();
                Ok(PeerEvent::Reset)
            }
        }
    }
}

/// Decodes and applies one peer message. Anything malformed or illegal is
/// dropped without touching the game.
pub fn apply_peer_message(
    game: &mut TicTacToeGameState,
    text: &str,
    peer_mark: Option<Mark>,
) -> Option<PeerEvent> {
    let result = PeerMessage::decode(text).and_then(|message| message.apply(game, peer_mark));
    match result {
        Ok(event) => Some(event),
        Err(e) => {
            log!("Discarding peer message {:?}: {}", text, e);
            None
        }
    }
}
