use super::types::{GameStatus, Move};

/// Notified after the game state accepts a move or is reset.
///
/// Collaborators use this to mirror moves elsewhere (logs, a peer relay)
/// without the core knowing about them.
pub trait MoveObserver: Send {
    fn on_move(&mut self, applied: Move, status: GameStatus);

    fn on_reset(&mut self) {}
}
