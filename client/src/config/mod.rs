mod config;
mod cpu_config;
mod game_mode;

pub use config::{Config, get_config_manager};
pub use cpu_config::{CpuConfig, CpuDifficulty, CpuSide};
pub use game_mode::{GameMode, PlayerSide};
