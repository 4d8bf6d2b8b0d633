use serde::{Deserialize, Serialize};
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

use super::{CpuConfig, GameMode, PlayerSide};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager()
-> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub mode: GameMode,
    pub cpu: CpuConfig,
    #[serde(default)]
    pub peer_side: PlayerSide,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.cpu.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CpuDifficulty, CpuSide};
    use tictactoe_common::config::{ConfigContentProvider, ConfigError, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            mode: GameMode::Peer,
            cpu: CpuConfig {
                side: CpuSide::Auto,
                difficulty: CpuDifficulty::Smart,
                move_delay_ms: 0,
            },
            peer_side: PlayerSide::O,
        };
        let file_path = get_temp_file_path();
        let manager = ConfigManager::new(
            FileContentConfigProvider::new(file_path.clone()),
            YamlConfigSerializer::new(),
        );

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh: ConfigManager<_, Config> = ConfigManager::new(
            FileContentConfigProvider::new(file_path.clone()),
            YamlConfigSerializer::new(),
        );
        assert_eq!(fresh.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager: ConfigManager<_, Config> = ConfigManager::new(
            FileContentConfigProvider::new("this_file_does_not_exist.yaml"),
            YamlConfigSerializer::new(),
        );
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_hand_written_yaml() {
        let yaml = "mode: Local\ncpu:\n  side: X\n  difficulty: Smart\n  move_delay_ms: 100\n";
        let config: Config = YamlConfigSerializer::new().deserialize(yaml).unwrap();
        assert_eq!(config.mode, GameMode::Local);
        assert_eq!(config.cpu.side, CpuSide::X);
        assert_eq!(config.cpu.difficulty, CpuDifficulty::Smart);
        assert_eq!(config.peer_side, PlayerSide::X);
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content(
                "mode: Cpu\ncpu:\n  side: O\n  difficulty: Unbeatable\n  move_delay_ms: 999999\n",
            )
            .unwrap();
        let manager: ConfigManager<_, Config> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));
        let _ = std::fs::remove_file(file_path);
    }
}
