mod command;
mod config;
mod render;
mod runner;
mod session;

use std::time::Duration;

use clap::Parser;
use tictactoe_common::config::Validate;
use tictactoe_common::games::SessionRng;
use tictactoe_common::{log, logger};

use config::{Config, CpuDifficulty, CpuSide, GameMode, PlayerSide, get_config_manager};
use session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "tictactoe",
    about = "Tic-tac-toe against a friend, the computer, or a remote peer"
)]
struct Args {
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    #[arg(long, value_enum)]
    cpu_side: Option<CpuSide>,

    #[arg(long, value_enum)]
    difficulty: Option<CpuDifficulty>,

    /// Pause before the computer answers, in milliseconds.
    #[arg(long)]
    move_delay_ms: Option<u64>,

    /// Side played from this terminal in peer mode.
    #[arg(long, value_enum)]
    peer_side: Option<PlayerSide>,

    /// Fixed seed for reproducible computer play.
    #[arg(long)]
    seed: Option<u64>,

    /// Persist the effective settings to the config file.
    #[arg(long)]
    save_config: bool,

    /// Log diagnostics to stderr.
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(side) = self.cpu_side {
            config.cpu.side = side;
        }
        if let Some(difficulty) = self.difficulty {
            config.cpu.difficulty = difficulty;
        }
        if let Some(delay) = self.move_delay_ms {
            config.cpu.move_delay_ms = delay;
        }
        if let Some(side) = self.peer_side {
            config.peer_side = side;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager();
    let mut config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Ignoring config file: {}", e);
            Config::default()
        }
    };
    args.apply_overrides(&mut config);
    config.validate()?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved config");
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting {:?} session with seed {}", config.mode, rng.seed());

    let session = Session::from_config(&config, rng);
    runner::run(session, Duration::from_millis(config.cpu.move_delay_ms)).await
}
