use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    BotInput, BotStrategy, GameStatus, IllegalMove, Mark, Move, MoveObserver, PeerEvent,
    PeerMessage, TicTacToeGameState, apply_peer_message, calculate_move,
};
use tictactoe_common::log;

use crate::config::{Config, GameMode};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("{0}")]
    Illegal(#[from] IllegalMove),
    #[error("Wait for the computer to move")]
    ComputerTurn,
    #[error("Waiting for the peer's move; paste their message")]
    WaitingForPeer,
    #[error("Peer messages are only accepted in peer mode")]
    NotPeerMode,
    #[error("Could not encode peer message: {0}")]
    Encode(String),
}

/// The automated side: its mark, strategy and private randomness.
#[derive(Debug)]
pub struct CpuPlayer {
    mark: Mark,
    strategy: BotStrategy,
    rng: SessionRng,
}

impl CpuPlayer {
    pub fn new(mark: Mark, strategy: BotStrategy, rng: SessionRng) -> Self {
        Self {
            mark,
            strategy,
            rng,
        }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn choose_move(&mut self, input: BotInput) -> Option<usize> {
        calculate_move(self.strategy, input, &mut self.rng)
    }
}

struct MoveLogObserver;

impl MoveObserver for MoveLogObserver {
    fn on_move(&mut self, applied: Move, status: GameStatus) {
        log!("{} took cell {} ({:?})", applied.mark, applied.index, status);
    }

    fn on_reset(&mut self) {
        log!("Board reset");
    }
}

/// One terminal play session: the game plus who controls each side.
#[derive(Debug)]
pub struct Session {
    game: TicTacToeGameState,
    mode: GameMode,
    cpu: Option<CpuPlayer>,
    local_side: Mark,
}

impl Session {
    pub fn new(mode: GameMode, cpu: Option<CpuPlayer>, local_side: Mark) -> Self {
        let mut game = TicTacToeGameState::new();
        game.add_observer(Box::new(MoveLogObserver));
        Self {
            game,
            mode,
            cpu,
            local_side,
        }
    }

    pub fn from_config(config: &Config, mut rng: SessionRng) -> Self {
        match config.mode {
            GameMode::Local => Self::new(GameMode::Local, None, Mark::X),
            GameMode::Cpu => {
                let cpu_mark = config.cpu.side.resolve(&mut rng);
                let human_mark = cpu_mark.opponent().unwrap_or(Mark::X);
                let cpu = CpuPlayer::new(cpu_mark, config.cpu.difficulty.into(), rng);
                Self::new(GameMode::Cpu, Some(cpu), human_mark)
            }
            GameMode::Peer => Self::new(GameMode::Peer, None, config.peer_side.into()),
        }
    }

    pub fn game(&self) -> &TicTacToeGameState {
        &self.game
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The side typed moves are played for; `None` in local mode where both are.
    pub fn local_side(&self) -> Option<Mark> {
        match self.mode {
            GameMode::Local => None,
            GameMode::Cpu | GameMode::Peer => Some(self.local_side),
        }
    }

    pub fn cpu_mark(&self) -> Option<Mark> {
        self.cpu.as_ref().map(CpuPlayer::mark)
    }

    pub fn is_cpu_turn(&self) -> bool {
        !self.game.status().is_over() && self.cpu_mark() == Some(self.game.current_turn())
    }

    /// Lends the computer player out, e.g. to a blocking task; hand it back
    /// with `restore_cpu`.
    pub fn take_cpu(&mut self) -> Option<CpuPlayer> {
        self.cpu.take()
    }

    pub fn restore_cpu(&mut self, cpu: CpuPlayer) {
        self.cpu = Some(cpu);
    }

    /// Places the computer's own mark; a move out of turn comes back as
    /// `WrongTurn`.
    pub fn apply_cpu_move(
        &mut self,
        index: usize,
        mark: Mark,
    ) -> Result<GameStatus, SessionError> {
        Ok(self.game.apply_move(index, mark)?)
    }

    /// Plays a typed move. In peer mode returns the message to relay.
    pub fn place(&mut self, index: usize) -> Result<Option<String>, SessionError> {
        let turn = self.game.current_turn();
        if !self.game.status().is_over() {
            match self.mode {
                GameMode::Cpu if self.cpu_mark() == Some(turn) => {
                    return Err(SessionError::ComputerTurn);
                }
                GameMode::Peer if turn != self.local_side => {
                    return Err(SessionError::WaitingForPeer);
                }
                _ => {}
            }
        }

        self.game.apply_move(index, turn)?;

        if self.mode != GameMode::Peer {
            return Ok(None);
        }
        let message = PeerMessage::for_move(index, turn)
            .encode()
            .map_err(|e| SessionError::Encode(e.to_string()))?;
        Ok(Some(message))
    }

    /// Clears the board. In peer mode returns the reset message to relay.
    pub fn restart(&mut self) -> Result<Option<String>, SessionError> {
        self.game.reset();
        if self.mode != GameMode::Peer {
            return Ok(None);
        }
        let message = PeerMessage::Reset
            .encode()
            .map_err(|e| SessionError::Encode(e.to_string()))?;
        Ok(Some(message))
    }

    /// Zeroes the tally and clears the board. In peer mode returns the reset
    /// message to relay.
    pub fn reset_all(&mut self) -> Result<Option<String>, SessionError> {
        self.game.reset_scores();
        self.restart()
    }

    /// Applies a pasted peer message. `Ok(None)` when it was discarded.
    pub fn receive_peer(&mut self, text: &str) -> Result<Option<PeerEvent>, SessionError> {
        if self.mode != GameMode::Peer {
            return Err(SessionError::NotPeerMode);
        }
        let peer_mark = self.local_side.opponent();
        Ok(apply_peer_message(&mut self.game, text, peer_mark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CpuConfig, CpuDifficulty, CpuSide, PlayerSide};

    fn cpu_session(side: CpuSide) -> Session {
        let config = Config {
            mode: GameMode::Cpu,
            cpu: CpuConfig {
                side,
                difficulty: CpuDifficulty::Unbeatable,
                move_delay_ms: 0,
            },
            peer_side: PlayerSide::X,
        };
        Session::from_config(&config, SessionRng::new(5))
    }

    fn peer_session(side: PlayerSide) -> Session {
        let config = Config {
            mode: GameMode::Peer,
            peer_side: side,
            ..Config::default()
        };
        Session::from_config(&config, SessionRng::new(5))
    }

    fn play_cpu(session: &mut Session) -> usize {
        let mut cpu = session.take_cpu().unwrap();
        let index = cpu.choose_move(BotInput::from_game_state(session.game())).unwrap();
        let mark = cpu.mark();
        session.restore_cpu(cpu);
        session.apply_cpu_move(index, mark).unwrap();
        index
    }

    #[test]
    fn test_local_mode_plays_both_sides() {
        let mut session = Session::from_config(
            &Config {
                mode: GameMode::Local,
                ..Config::default()
            },
            SessionRng::new(1),
        );
        assert_eq!(session.local_side(), None);
        assert_eq!(session.place(0), Ok(None));
        assert_eq!(session.place(4), Ok(None));
        assert_eq!(session.game().board().get(4), Some(Mark::O));
        assert!(!session.is_cpu_turn());
    }

    #[test]
    fn test_cpu_as_x_moves_first_in_center() {
        let mut session = cpu_session(CpuSide::X);
        assert_eq!(session.local_side(), Some(Mark::O));
        assert!(session.is_cpu_turn());
        assert_eq!(session.place(0), Err(SessionError::ComputerTurn));
        assert_eq!(play_cpu(&mut session), 4);
        assert!(!session.is_cpu_turn());
    }

    #[test]
    fn test_cpu_replies_after_human() {
        let mut session = cpu_session(CpuSide::O);
        assert!(!session.is_cpu_turn());
        session.place(0).unwrap();
        assert!(session.is_cpu_turn());
        assert_eq!(play_cpu(&mut session), 4);
    }

    #[test]
    fn test_human_cannot_beat_unbeatable_cpu_with_row_attack() {
        let mut session = cpu_session(CpuSide::O);
        for index in [0, 1, 2, 3, 5, 6, 7, 8] {
            if session.game().status().is_over() {
                break;
            }
            if session.place(index).is_ok() && session.is_cpu_turn() {
                play_cpu(&mut session);
            }
        }
        assert_ne!(session.game().status().winner(), Some(Mark::X));
    }

    #[test]
    fn test_occupied_cell_error() {
        let mut session = cpu_session(CpuSide::O);
        session.place(0).unwrap();
        play_cpu(&mut session);
        assert_eq!(
            session.place(0),
            Err(SessionError::Illegal(IllegalMove::CellOccupied(0)))
        );
    }

    #[test]
    fn test_peer_mode_relays_local_moves() {
        let mut session = peer_session(PlayerSide::X);
        let outgoing = session.place(4).unwrap();
        assert_eq!(
            outgoing.as_deref(),
            Some(r#"{"type":"move","pos":4,"player":"X"}"#)
        );
        assert_eq!(session.place(0), Err(SessionError::WaitingForPeer));
    }

    #[test]
    fn test_peer_mode_accepts_only_peer_side() {
        let mut session = peer_session(PlayerSide::O);
        assert_eq!(
            session.receive_peer(r#"{"type":"move","pos":0,"player":"O"}"#),
            Ok(None)
        );
        let event = session
            .receive_peer(r#"{"type":"move","pos":0,"player":"X"}"#)
            .unwrap();
        assert!(matches!(event, Some(PeerEvent::Moved { index: 0, .. })));
        assert_eq!(session.receive_peer("garbage"), Ok(None));
        assert_eq!(session.game().current_turn(), Mark::O);
    }

    #[test]
    fn test_peer_restart_emits_reset() {
        let mut session = peer_session(PlayerSide::X);
        session.place(4).unwrap();
        assert_eq!(
            session.restart().unwrap().as_deref(),
            Some(r#"{"type":"reset"}"#)
        );
        assert!(session.game().board().is_empty());
    }

    #[test]
    fn test_peer_messages_rejected_outside_peer_mode() {
        let mut session = cpu_session(CpuSide::O);
        assert_eq!(
            session.receive_peer(r#"{"type":"reset"}"#),
            Err(SessionError::NotPeerMode)
        );
    }

    #[test]
    fn test_reset_all_clears_scores_and_board() {
        let mut session = Session::from_config(
            &Config {
                mode: GameMode::Local,
                ..Config::default()
            },
            SessionRng::new(1),
        );
        for index in [0, 3, 1, 4, 2] {
            session.place(index).unwrap();
        }
        assert_eq!(session.game().scores().get(Mark::X), 1);
        session.restart().unwrap();
        assert_eq!(session.game().scores().get(Mark::X), 1);
        session.place(4).unwrap();
        assert_eq!(session.reset_all(), Ok(None));
        assert_eq!(session.game().scores().get(Mark::X), 0);
        assert!(session.game().board().is_empty());
        assert_eq!(session.game().current_turn(), Mark::X);
    }

    #[test]
    fn test_peer_reset_all_emits_reset() {
        let mut session = peer_session(PlayerSide::X);
        session.place(4).unwrap();
        assert_eq!(
            session.reset_all().unwrap().as_deref(),
            Some(r#"{"type":"reset"}"#)
        );
        assert!(session.game().board().is_empty());
        assert_eq!(session.game().scores().get(Mark::X), 0);
    }

    #[test]
    fn test_cpu_move_out_of_turn_is_rejected() {
        let mut session = cpu_session(CpuSide::O);
        let cpu_mark = session.cpu_mark().unwrap();
        assert_eq!(
            session.apply_cpu_move(4, cpu_mark),
            Err(SessionError::Illegal(IllegalMove::WrongTurn {
                expected: Mark::X,
                actual: Mark::O,
            }))
        );
        assert!(session.game().board().is_empty());
    }
}
