use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{BotStrategy, Mark};

pub const MAX_MOVE_DELAY_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum CpuSide {
    X,
    #[default]
    O,
    /// Coin flip at the start of the session.
    Auto,
}

impl CpuSide {
    pub fn resolve(self, rng: &mut SessionRng) -> Mark {
        match self {
            CpuSide::X => Mark::X,
            CpuSide::O => Mark::O,
            CpuSide::Auto => {
                if rng.random_bool() {
                    Mark::X
                } else {
                    Mark::O
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum CpuDifficulty {
    #[default]
    Unbeatable,
    Smart,
}

impl From<CpuDifficulty> for BotStrategy {
    fn from(difficulty: CpuDifficulty) -> Self {
        match difficulty {
            CpuDifficulty::Unbeatable => BotStrategy::Optimal,
            CpuDifficulty::Smart => BotStrategy::Heuristic,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct CpuConfig {
    pub side: CpuSide,
    pub difficulty: CpuDifficulty,
    /// Pause before the computer answers, so its move is noticeable.
    pub move_delay_ms: u64,
}

impl Validate for CpuConfig {
    fn validate(&self) -> Result<(), String> {
        if self.move_delay_ms > MAX_MOVE_DELAY_MS {
            return Err(format!(
                "move_delay_ms must not exceed {} (got {})",
                MAX_MOVE_DELAY_MS, self.move_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            side: CpuSide::O,
            difficulty: CpuDifficulty::Unbeatable,
            move_delay_ms: 220,
        }
    }
}
